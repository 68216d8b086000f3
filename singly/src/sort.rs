use log::debug;

use crate::{NodeId, SinglyLinkedList};

////////////////////////////////////////////////////////////////////////////////

impl<T: Ord> SinglyLinkedList<T> {
    /// Stable top-down merge sort over the node chain. Nodes are relinked,
    /// never reallocated, so handles keep pointing at the same values.
    pub fn sort(&mut self) {
        if self.head.is_none() {
            return;
        }
        self.break_loop();

        let Some(head) = self.merge_sort(self.head, self.len) else {
            return;
        };

        let mut len = 1;
        let mut current = head;
        while let Some(next) = self.nodes[current].next {
            current = next;
            len += 1;
        }

        self.head = Some(head);
        self.tail = Some(current);
        self.len = len;
        debug!("sorted list of {} nodes", len);
    }

    /// Merges two lists into a new one by repeatedly taking the smaller front
    /// value. Neither input has to be sorted. Returns `None` if both are empty.
    pub fn merge_sorted(&self, other: &Self) -> Option<Self>
    where
        T: Clone,
    {
        if self.is_empty() && other.is_empty() {
            return None;
        }

        let mut merged = Self::new();
        let mut left = self.iter().peekable();
        let mut right = other.iter().peekable();
        loop {
            let next = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) if l <= r => left.next(),
                (Some(_), Some(_)) => right.next(),
                (Some(_), None) => left.next(),
                (None, Some(_)) => right.next(),
                (None, None) => break,
            };
            if let Some(value) = next {
                merged.add_last(value.clone());
            }
        }
        Some(merged)
    }

    fn merge_sort(&mut self, head: Option<NodeId>, len: usize) -> Option<NodeId> {
        let head = head?;
        if len < 2 {
            return Some(head);
        }

        let middle = self.middle_of(head, len);
        let second = self.nodes[middle].next.take();

        let left = self.merge_sort(Some(head), (len + 1) / 2);
        let right = self.merge_sort(second, len / 2);
        self.merge_chains(left, right)
    }

    fn merge_chains(
        &mut self,
        mut left: Option<NodeId>,
        mut right: Option<NodeId>,
    ) -> Option<NodeId> {
        let mut head = None;
        let mut last: Option<NodeId> = None;
        loop {
            let next = match (left, right) {
                (Some(l), Some(r)) => {
                    // ties go left to keep the sort stable
                    if self.nodes[l].value <= self.nodes[r].value {
                        left = self.nodes[l].next;
                        l
                    } else {
                        right = self.nodes[r].next;
                        r
                    }
                }
                (Some(rest), None) | (None, Some(rest)) => {
                    match last {
                        Some(id) => self.nodes[id].next = Some(rest),
                        None => head = Some(rest),
                    }
                    break;
                }
                (None, None) => break,
            };

            match last {
                Some(id) => self.nodes[id].next = Some(next),
                None => head = Some(next),
            }
            last = Some(next);
        }
        head
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Collapses every run of equal adjacent values into its first node.
    /// The list is expected to be sorted already.
    pub fn remove_duplicates_sorted(&mut self) {
        let Some(mut current) = self.head else {
            return;
        };

        let mut removed = 0;
        for _ in 1..self.len {
            if self.tail == Some(current) {
                break;
            }
            let Some(next) = self.nodes[current].next else {
                break;
            };
            if self.nodes[current].value != self.nodes[next].value {
                current = next;
                continue;
            }

            self.nodes[current].next = self.nodes[next].next;
            if self.tail == Some(next) {
                self.tail = Some(current);
            }
            self.discard(next);
            removed += 1;
        }

        self.len -= removed;
        debug!("removed {} duplicates, {} nodes left", removed, self.len);
    }
}

impl<T> SinglyLinkedList<T> {
    // Lower middle of the chain starting at `start`. `len` bounds the walk
    // for a list whose tail has been pointed back into itself.
    pub(crate) fn middle_of(&self, start: NodeId, len: usize) -> NodeId {
        let mut tortoise = start;
        let mut hare = start;
        for _ in 0..len.saturating_sub(1) / 2 {
            let Some(step) = self.nodes[hare].next else {
                break;
            };
            let Some(next) = self.nodes[step].next else {
                break;
            };
            hare = next;
            if let Some(id) = self.nodes[tortoise].next {
                tortoise = id;
            }
        }
        tortoise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_of_picks_lower_middle() {
        for len in 1..12 {
            let list: SinglyLinkedList<_> = (0..len).collect();
            let middle = list.middle_of(list.head_id().unwrap(), list.len());
            assert_eq!(list.get(middle), Some(&((len - 1) / 2)));
        }
    }

    #[test]
    fn merge_chains_keeps_equal_keys_in_order() {
        #[derive(Debug, Clone)]
        struct Keyed(u8, char);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Keyed {}
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut list: SinglyLinkedList<_> = [
            Keyed(2, 'a'),
            Keyed(1, 'b'),
            Keyed(2, 'c'),
            Keyed(1, 'd'),
            Keyed(2, 'e'),
        ]
        .into_iter()
        .collect();
        list.sort();

        let tags = list.iter().map(|k| k.1).collect::<String>();
        assert_eq!(tags, "bdace");
    }
}
