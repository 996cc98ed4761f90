//! Monotone bucket priority queue over the node arena.
//!
//! Buckets are indexed by integer priority. Each bucket stores the index of
//! the head of a singly linked list threaded through [`PathNode::next`], so
//! the queue itself never owns nodes. Entries sharing a priority pop in LIFO
//! order.
//!
//! Priorities below [`DENSE_BUCKETS`] live in a flat array. Larger ones, which
//! only arise from extreme elevation changes, go to an ordered overflow map
//! so a single huge key never sizes the array.

use std::collections::BTreeMap;

use crate::node::{NIL, PathNode};

/// Number of priorities stored in the flat bucket array.
pub const DENSE_BUCKETS: usize = 1 << 16;

/// Integer-keyed frontier for A* searches with non-negative step costs.
#[derive(Debug)]
pub struct BucketQueue {
    buckets: Vec<usize>,
    /// List heads for priorities of at least `DENSE_BUCKETS`. Never holds `NIL`.
    overflow: BTreeMap<u32, usize>,
    /// Lowest dense priority that may still hold an entry.
    min: usize,
    len: usize,
}

impl Default for BucketQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketQueue {
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
            overflow: BTreeMap::new(),
            min: usize::MAX,
            len: 0,
        }
    }

    /// Number of queued nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push node `idx` at its current priority.
    pub fn enqueue(&mut self, nodes: &mut [PathNode], idx: usize) {
        let priority = nodes[idx].priority();
        let p = priority as usize;
        if p < DENSE_BUCKETS {
            if p < self.min {
                self.min = p;
            }
            if p >= self.buckets.len() {
                self.buckets.resize(p + 1, NIL);
            }
            nodes[idx].next = self.buckets[p];
            self.buckets[p] = idx;
        } else {
            let head = self.overflow.entry(priority).or_insert(NIL);
            nodes[idx].next = *head;
            *head = idx;
        }
        self.len += 1;
    }

    /// Pop a node with the lowest priority, or `None` if the queue is empty.
    pub fn dequeue(&mut self, nodes: &mut [PathNode]) -> Option<usize> {
        while self.min < self.buckets.len() {
            let head = self.buckets[self.min];
            if head != NIL {
                self.buckets[self.min] = nodes[head].next;
                nodes[head].next = NIL;
                self.len -= 1;
                return Some(head);
            }
            self.min += 1;
        }

        let mut entry = self.overflow.first_entry()?;
        let head = *entry.get();
        match nodes[head].next {
            NIL => {
                entry.remove();
            }
            next => *entry.get_mut() = next,
        }
        nodes[head].next = NIL;
        self.len -= 1;
        Some(head)
    }

    /// Move node `idx` from the bucket for `old_priority` to the bucket for
    /// its current priority.
    ///
    /// Returns `false` and leaves the queue untouched if the node was not
    /// queued at `old_priority`.
    pub fn change_key(&mut self, nodes: &mut [PathNode], idx: usize, old_priority: u32) -> bool {
        let Some(head) = self.head(old_priority) else {
            return false;
        };

        if head == idx {
            self.set_head(old_priority, nodes[idx].next);
        } else {
            let mut cur = head;
            loop {
                if cur == NIL {
                    return false;
                }
                let next = nodes[cur].next;
                if next == idx {
                    nodes[cur].next = nodes[idx].next;
                    break;
                }
                cur = next;
            }
        }

        self.len -= 1;
        self.enqueue(nodes, idx);
        true
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.overflow.clear();
        self.min = usize::MAX;
        self.len = 0;
    }

    fn head(&self, priority: u32) -> Option<usize> {
        let p = priority as usize;
        if p < DENSE_BUCKETS {
            self.buckets.get(p).copied()
        } else {
            self.overflow.get(&priority).copied()
        }
    }

    fn set_head(&mut self, priority: u32, head: usize) {
        let p = priority as usize;
        if p < DENSE_BUCKETS {
            self.buckets[p] = head;
        } else if head == NIL {
            self.overflow.remove(&priority);
        } else {
            self.overflow.insert(priority, head);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridgeway_core::Point;

    fn arena(priorities: &[u32]) -> Vec<PathNode> {
        priorities
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let mut n = PathNode::default();
                n.discover(Point::new(i as i32, 0), 2, p, 0, NIL);
                n
            })
            .collect()
    }

    fn drain(q: &mut BucketQueue, nodes: &mut [PathNode]) -> Vec<usize> {
        std::iter::from_fn(|| q.dequeue(nodes)).collect()
    }

    #[test]
    fn pops_in_priority_order() {
        let mut nodes = arena(&[5, 1, 3, 0]);
        let mut q = BucketQueue::new();
        for i in 0..nodes.len() {
            q.enqueue(&mut nodes, i);
        }
        assert_eq!(q.len(), 4);
        assert_eq!(drain(&mut q, &mut nodes), vec![3, 1, 2, 0]);
        assert!(q.is_empty());
        assert_eq!(q.dequeue(&mut nodes), None);
    }

    #[test]
    fn equal_priorities_pop_lifo() {
        let mut nodes = arena(&[2, 2, 2]);
        let mut q = BucketQueue::new();
        for i in 0..3 {
            q.enqueue(&mut nodes, i);
        }
        assert_eq!(drain(&mut q, &mut nodes), vec![2, 1, 0]);
    }

    #[test]
    fn enqueue_below_mark_lowers_it() {
        let mut nodes = arena(&[4, 6, 1]);
        let mut q = BucketQueue::new();
        q.enqueue(&mut nodes, 0);
        q.enqueue(&mut nodes, 1);
        assert_eq!(q.dequeue(&mut nodes), Some(0));
        q.enqueue(&mut nodes, 2);
        assert_eq!(q.dequeue(&mut nodes), Some(2));
        assert_eq!(q.dequeue(&mut nodes), Some(1));
    }

    #[test]
    fn change_key_moves_head_and_inner_entries() {
        let mut nodes = arena(&[7, 7, 7, 3]);
        let mut q = BucketQueue::new();
        for i in 0..4 {
            q.enqueue(&mut nodes, i);
        }
        // Bucket 7 holds 2 -> 1 -> 0. Move the middle entry, then the head.
        nodes[1].g = 1;
        assert!(q.change_key(&mut nodes, 1, 7));
        nodes[2].g = 2;
        assert!(q.change_key(&mut nodes, 2, 7));
        assert_eq!(q.len(), 4);
        assert_eq!(drain(&mut q, &mut nodes), vec![1, 2, 3, 0]);
    }

    #[test]
    fn change_key_tail_entry() {
        let mut nodes = arena(&[4, 4, 4]);
        let mut q = BucketQueue::new();
        for i in 0..3 {
            q.enqueue(&mut nodes, i);
        }
        nodes[0].g = 0;
        assert!(q.change_key(&mut nodes, 0, 4));
        assert_eq!(drain(&mut q, &mut nodes), vec![0, 2, 1]);
    }

    #[test]
    fn change_key_rejects_unknown_entries() {
        let mut nodes = arena(&[3, 3, 9]);
        let mut q = BucketQueue::new();
        q.enqueue(&mut nodes, 0);
        q.enqueue(&mut nodes, 2);
        assert!(!q.change_key(&mut nodes, 1, 3));
        assert!(!q.change_key(&mut nodes, 1, 40));
        assert_eq!(q.len(), 2);
        assert_eq!(drain(&mut q, &mut nodes), vec![0, 2]);
    }

    #[test]
    fn huge_priorities_use_the_overflow_map() {
        let top = u32::MAX;
        let big = DENSE_BUCKETS as u32 + 5;
        let mut nodes = arena(&[top, big, 3, top, big]);
        let mut q = BucketQueue::new();
        for i in 0..nodes.len() {
            q.enqueue(&mut nodes, i);
        }
        // Only the small key touches the flat array.
        assert_eq!(q.buckets.len(), 4);
        assert_eq!(q.overflow.len(), 2);
        assert_eq!(drain(&mut q, &mut nodes), vec![2, 4, 1, 3, 0]);
        assert!(q.overflow.is_empty());
    }

    #[test]
    fn change_key_moves_entries_out_of_overflow() {
        let top = u32::MAX;
        let mut nodes = arena(&[top, top, 7]);
        let mut q = BucketQueue::new();
        for i in 0..3 {
            q.enqueue(&mut nodes, i);
        }
        // Overflow bucket for `top` holds 1 -> 0. Move the tail, then the head.
        nodes[0].g = 2;
        assert!(q.change_key(&mut nodes, 0, top));
        nodes[1].g = DENSE_BUCKETS as u32;
        assert!(q.change_key(&mut nodes, 1, top));
        assert!(!q.overflow.contains_key(&top));
        assert!(!q.change_key(&mut nodes, 1, top));
        assert_eq!(q.len(), 3);
        assert_eq!(drain(&mut q, &mut nodes), vec![0, 2, 1]);
    }

    #[test]
    fn clear_empties_queue() {
        let mut nodes = arena(&[1, 2, u32::MAX]);
        let mut q = BucketQueue::new();
        q.enqueue(&mut nodes, 0);
        q.enqueue(&mut nodes, 1);
        q.enqueue(&mut nodes, 2);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(&mut nodes), None);
        q.enqueue(&mut nodes, 1);
        assert_eq!(q.dequeue(&mut nodes), Some(1));
    }
}
