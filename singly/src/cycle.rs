use std::collections::HashSet;

use log::trace;

use crate::{NodeId, SinglyLinkedList};

////////////////////////////////////////////////////////////////////////////////

impl<T> SinglyLinkedList<T> {
    /// Floyd's tortoise and hare: `true` if following `next` from the head
    /// never reaches the end.
    pub fn has_loop(&self) -> bool {
        self.meeting_point().is_some()
    }

    /// Number of nodes on the cycle, 0 if there is none.
    pub fn loop_size(&self) -> usize {
        let Some(meeting) = self.meeting_point() else {
            return 0;
        };

        let mut size = 1;
        let mut current = self.nodes[meeting].next;
        while let Some(id) = current {
            if id == meeting {
                break;
            }
            size += 1;
            current = self.nodes[id].next;
        }
        size
    }

    /// First node of the cycle, found by restarting one cursor from the head
    /// after the tortoise and the hare meet.
    pub fn loop_start(&self) -> Option<NodeId> {
        let meeting = self.meeting_point()?;

        // the hare started one node ahead, so the entry is as far from the
        // head as it is from the node after the meeting point
        let mut current = self.head?;
        let mut runner = self.nodes[meeting].next?;
        while current != runner {
            current = self.nodes[current].next?;
            runner = self.nodes[runner].next?;
        }
        Some(current)
    }

    pub fn has_loop_with_set(&self) -> bool {
        self.loop_start_with_set().is_some()
    }

    /// Same answer as [`loop_start`](Self::loop_start), remembering every
    /// visited node instead of running two cursors.
    pub fn loop_start_with_set(&self) -> Option<NodeId> {
        let mut seen = HashSet::with_capacity(self.len);
        let mut current = self.head;
        while let Some(id) = current {
            if !seen.insert(id) {
                return Some(id);
            }
            current = self.nodes[id].next;
        }
        None
    }

    /// Points the tail back at the first node holding `value`.
    pub fn set_loop(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find(value) {
            Some(id) => self.link_tail_to(id),
            None => false,
        }
    }

    /// Points the tail back at `id`. The link is a plain handle: dropping the
    /// list or calling [`break_loop`](Self::break_loop) is always safe.
    pub fn link_tail_to(&mut self, id: NodeId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        match self.tail {
            Some(tail) => {
                self.nodes[tail].next = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn break_loop(&mut self) {
        if let Some(tail) = self.tail {
            self.nodes[tail].next = None;
        }
    }

    fn meeting_point(&self) -> Option<NodeId> {
        let mut tortoise = self.head?;
        let mut hare = self.nodes[tortoise].next?;
        loop {
            if hare == tortoise {
                trace!("tortoise and hare met at {:?}", hare);
                return Some(hare);
            }
            let step = self.nodes[hare].next?;
            hare = self.nodes[step].next?;
            tortoise = self.nodes[tortoise].next?;
        }
    }
}
