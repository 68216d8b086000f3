use std::{iter::FromIterator, iter::Rev, slice};

use log::trace;

use crate::{Error, Result};

////////////////////////////////////////////////////////////////////////////////

const DEFAULT_CAPACITY: usize = 8;

/// Array-backed LIFO stack.
///
/// Pushing onto a full stack doubles its capacity; popping or peeking an
/// empty one is an [`Error::Underflow`].
#[derive(Clone, Debug, Default)]
pub struct Stack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_underflow(&self) -> bool {
        self.is_empty()
    }

    /// `true` when the next push has to grow the stack.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn is_overflow(&self) -> bool {
        self.is_full()
    }

    pub fn push(&mut self, item: T) {
        if self.is_full() {
            self.grow();
        }
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::Underflow)
    }

    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::Underflow)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Swaps elements pairwise from both ends towards the center.
    pub fn reverse(&mut self) {
        if self.items.len() < 2 {
            return;
        }
        let (mut i, mut j) = (0, self.items.len() - 1);
        while i < j {
            self.items.swap(i, j);
            i += 1;
            j -= 1;
        }
    }

    /// Items from top to bottom, in the order `pop` would return them.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    /// Puts `item` under every element already on the stack.
    pub fn insert_at_bottom(&mut self, item: T) {
        match self.pop() {
            Ok(top) => {
                self.insert_at_bottom(item);
                self.push(top);
            }
            Err(_) => self.push(item),
        }
    }

    /// Reverses the stack using only push and pop, through recursion.
    pub fn reverse_recursive(&mut self) {
        if self.len() < 2 {
            return;
        }
        if let Ok(top) = self.pop() {
            self.reverse_recursive();
            self.insert_at_bottom(top);
        }
    }

    /// Removes the element at bottom-based index `(len - 1) / 2`.
    pub fn delete_middle(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Underflow);
        }

        let middle = (self.len() - 1) / 2;
        let mut above = Vec::with_capacity(self.len() - middle - 1);
        while self.len() > middle + 1 {
            above.push(self.pop()?);
        }
        let removed = self.pop()?;
        while let Some(item) = above.pop() {
            self.push(item);
        }
        Ok(removed)
    }

    /// Removes the element at a bottom-based `index`.
    pub fn delete_at(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Gives back memory when less than three quarters of the capacity is used.
    pub fn trim_excess(&mut self) {
        let threshold = self.capacity * 3 / 4;
        if self.items.len() >= threshold {
            return;
        }
        self.items.shrink_to_fit();
        self.capacity = self.items.len();
    }

    fn grow(&mut self) {
        let capacity = match self.capacity {
            0 => DEFAULT_CAPACITY,
            n => n * 2,
        };
        self.items.reserve_exact(capacity - self.items.len());
        trace!("stack grows from {} to {}", self.capacity, capacity);
        self.capacity = capacity;
    }
}

impl<T: PartialEq> Stack<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: Clone> Stack<T> {
    /// Copies the items in the order `pop` would return them.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

////////////////////////////////////////////////////////////////////////////////

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl From<&str> for Stack<char> {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_by_doubling() {
        let mut stack = Stack::new();
        assert_eq!(stack.capacity(), 0);
        assert!(stack.is_full());

        stack.push(1);
        assert_eq!(stack.capacity(), DEFAULT_CAPACITY);
        stack.extend(2..=8);
        assert!(stack.is_full());
        stack.push(9);
        assert_eq!(stack.capacity(), DEFAULT_CAPACITY * 2);
        assert!(stack.items.capacity() >= stack.capacity());
    }

    #[test]
    fn trim_excess_shrinks_capacity() {
        let mut stack = Stack::with_capacity(16);
        stack.extend(0..4);
        stack.trim_excess();
        assert_eq!(stack.capacity(), 4);
        assert!(stack.is_full());

        stack.extend(4..7);
        assert_eq!(stack.capacity(), 8);
        stack.trim_excess();
        assert_eq!(stack.capacity(), 8);
    }
}
