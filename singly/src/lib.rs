#![forbid(unsafe_code)]

//! Singly linked list with head/tail tracking, cycle detection, in-place
//! reversal and merge sort.
//!
//! Nodes are kept in a generational arena owned by the list. The `next`
//! relation between nodes is a [`NodeId`] handle, so a cycle set up for
//! testing is just a handle that points backwards and never owns anything.

mod cycle;
mod iter;
mod sort;

pub use iter::Iter;

use log::debug;
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

new_key_type! {
    /// Handle to a node of a [`SinglyLinkedList`].
    ///
    /// A handle to a removed node never resolves again, even if its slot
    /// is reused.
    pub struct NodeId;
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("the singly linked list is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////

struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self { value, next: None }
    }

    fn invalidate(&mut self) {
        self.next = None;
    }
}

////////////////////////////////////////////////////////////////////////////////

pub struct SinglyLinkedList<T> {
    nodes: SlotMap<NodeId, Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn with_value(value: T) -> Self {
        let mut list = Self::new();
        list.add_last(value);
        list
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0 && self.head.is_none() && self.tail.is_none()
    }

    pub fn head(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    pub fn tail(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].value)
    }

    pub fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail_id(&self) -> Option<NodeId> {
        self.tail
    }

    /// Returns the value stored in `id`, or `None` if the node was removed.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    /// Returns the successor of `id`. For the tail of a cyclic list this is
    /// the node the cycle returns to.
    pub fn next_id(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.next)
    }

    /// Returns the handle of the node at a zero-based `index`.
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        if index == self.len - 1 {
            return self.tail;
        }
        self.ids().nth(index)
    }

    pub fn element_at(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|id| &self.nodes[id].value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn add_first(&mut self, value: T) {
        let id = self.nodes.insert(Node::new(value));
        match self.head {
            Some(head) => self.nodes[id].next = Some(head),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    pub fn add_last(&mut self, value: T) {
        let id = self.nodes.insert(Node::new(value));
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    pub fn add_after_head(&mut self, value: T) -> Result<()> {
        let head = self.head.ok_or(Error::Empty)?;
        self.insert_after(head, value);
        Ok(())
    }

    pub fn remove_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::Empty)?;
        self.unlink_head(head).ok_or(Error::Empty)
    }

    pub fn remove_last(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::Empty)?;
        if self.len == 1 {
            return self.unlink_head(tail).ok_or(Error::Empty);
        }

        let previous = self.ids().nth(self.len - 2).ok_or(Error::Empty)?;
        self.nodes[previous].next = None;
        self.tail = Some(previous);
        self.len -= 1;
        self.discard(tail).ok_or(Error::Empty)
    }

    /// Drops every node, clearing each `next` link on the way.
    pub fn clear(&mut self) {
        for node in self.nodes.values_mut() {
            node.invalidate();
        }
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Reverses the links in place. The old head becomes a properly
    /// terminated tail even if the list was closed into a cycle.
    pub fn reverse(&mut self) {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return;
        };

        let mut previous = None;
        let mut current = Some(head);
        for _ in 0..self.len {
            let Some(id) = current else {
                break;
            };
            current = self.nodes[id].next;
            self.nodes[id].next = previous;
            previous = Some(id);
        }

        self.head = Some(tail);
        self.tail = Some(head);
        debug!("reversed list of {} nodes", self.len);
    }

    /// Value at the lower middle of the list, located with a tortoise/hare walk.
    pub fn middle(&self) -> Option<&T> {
        let head = self.head?;
        Some(&self.nodes[self.middle_of(head, self.len)].value)
    }

    // Never yields more than `len` handles, so a list closed into a cycle
    // is still walked only once.
    fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.head;
        (0..self.len).map_while(move |_| {
            let id = current?;
            current = self.nodes[id].next;
            Some(id)
        })
    }

    fn insert_after(&mut self, anchor: NodeId, value: T) {
        let next = self.nodes[anchor].next;
        let id = self.nodes.insert(Node { value, next });
        self.nodes[anchor].next = Some(id);
        if self.tail == Some(anchor) {
            self.tail = Some(id);
        }
        self.len += 1;
    }

    fn unlink_head(&mut self, head: NodeId) -> Option<T> {
        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            self.head = self.nodes[head].next;
        }
        self.len -= 1;
        self.discard(head)
    }

    // The node must already be unlinked from its predecessor.
    fn discard(&mut self, id: NodeId) -> Option<T> {
        let mut node = self.nodes.remove(id)?;
        node.invalidate();

        // only the tail can point backwards
        if let Some(tail) = self.tail {
            if let Some(tail) = self.nodes.get_mut(tail) {
                if tail.next == Some(id) {
                    tail.invalidate();
                }
            }
        }

        Some(node.value)
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// First node holding `value`.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        self.ids().find(|&id| self.nodes[id].value == *value)
    }

    pub fn is_head(&self, value: &T) -> bool {
        self.head().is_some_and(|head| head == value)
    }

    pub fn is_tail(&self, value: &T) -> bool {
        self.tail().is_some_and(|tail| tail == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.is_head(value) || self.is_tail(value) || self.find(value).is_some()
    }

    /// Removes the first node holding `value`.
    ///
    /// Fails with [`Error::Empty`] on an empty list. A value that is not in
    /// the list is reported as `Ok(false)` and leaves the list untouched.
    pub fn remove(&mut self, value: &T) -> Result<bool> {
        let head = self.head.ok_or(Error::Empty)?;
        if self.nodes[head].value == *value {
            self.unlink_head(head);
            debug!("removed head, {} nodes left", self.len);
            return Ok(true);
        }

        let mut previous = head;
        let mut current = self.nodes[head].next;
        for _ in 1..self.len {
            let Some(id) = current else {
                break;
            };
            if self.nodes[id].value == *value {
                self.nodes[previous].next = self.nodes[id].next;
                if self.tail == Some(id) {
                    self.tail = Some(previous);
                }
                self.len -= 1;
                self.discard(id);
                debug!("removed node, {} nodes left", self.len);
                return Ok(true);
            }
            previous = id;
            current = self.nodes[id].next;
        }

        Ok(false)
    }

    /// Inserts `value` right after the first node holding `existing`.
    ///
    /// Fails with [`Error::Empty`] on an empty list. When no node holds
    /// `existing` nothing is inserted and `Ok(())` is still returned.
    pub fn add_after(&mut self, existing: &T, value: T) -> Result<()> {
        let head = self.head.ok_or(Error::Empty)?;
        if self.nodes[head].value == *existing {
            self.insert_after(head, value);
            return Ok(());
        }
        if self.is_tail(existing) {
            self.add_last(value);
            return Ok(());
        }

        if let Some(anchor) = self.find(existing) {
            self.insert_after(anchor, value);
        }
        Ok(())
    }

    /// Checks whether the values read the same in both directions.
    ///
    /// An empty list is not considered a palindrome.
    pub fn is_palindrome(&self) -> bool {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return false;
        };
        if self.nodes[head].value != self.nodes[tail].value {
            return false;
        }
        if self.len <= 3 {
            return true;
        }

        let middle = self.middle_of(head, self.len);
        let mut second_half = Vec::with_capacity(self.len / 2);
        let mut current = self.nodes[middle].next;
        for _ in 0..self.len / 2 {
            let Some(id) = current else {
                break;
            };
            second_half.push(&self.nodes[id].value);
            current = self.nodes[id].next;
        }

        second_half
            .iter()
            .rev()
            .zip(self.iter())
            .all(|(&mirrored, value)| mirrored == value)
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    /// Copies the values into an independent list. Returns `None` for an
    /// empty list.
    pub fn clone_values(&self) -> Option<Self> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().cloned().collect())
    }

    /// Copies the values into an independent list in reverse order. Returns
    /// `None` for an empty list.
    pub fn reverse_clone(&self) -> Option<Self> {
        if self.is_empty() {
            return None;
        }

        let mut list = Self::new();
        for value in self.iter() {
            list.add_first(value.clone());
        }
        Some(list)
    }
}

impl<T: Copy + Into<i64>> SinglyLinkedList<T> {
    /// Reads the values from head to tail as binary digits.
    ///
    /// Only meaningful when every value is 0 or 1; other values are folded in
    /// the same way without any check.
    pub fn decimal_equivalent(&self) -> i64 {
        self.iter()
            .fold(0i64, |acc, &bit| acc.wrapping_shl(1).wrapping_add(bit.into()))
    }
}
