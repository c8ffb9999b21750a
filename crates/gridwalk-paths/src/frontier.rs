//! Frontier containers driving the search loops.
//!
//! [`Queue`] is the FIFO frontier of breadth-first search. [`PriorityQueue`]
//! is a binary min-heap keyed by `(priority, insertion_order)`: lower
//! priorities come out first and ties are broken by insertion order, so
//! stored items never need to be ordered themselves.

use std::collections::{BinaryHeap, VecDeque};

use crate::error::{Result, SearchError};

// ---------------------------------------------------------------------------
// Queue
// ---------------------------------------------------------------------------

/// First-in first-out frontier.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Append `item` at the back.
    #[inline]
    pub fn put(&mut self, item: T) {
        self.elements.push_back(item);
    }

    /// Remove and return the front element.
    ///
    /// Fails with [`SearchError::PreconditionViolation`] when the queue is
    /// empty; callers are expected to check [`is_empty`](Self::is_empty)
    /// first.
    #[inline]
    pub fn get(&mut self) -> Result<T> {
        self.elements
            .pop_front()
            .ok_or(SearchError::PreconditionViolation {
                reason: "get on an empty queue",
            })
    }
}

// ---------------------------------------------------------------------------
// PriorityQueue
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: i32,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so that BinaryHeap (max-heap) pops the smallest
        // (priority, seq) pair first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority frontier.
///
/// `put` and `get` are O(log n). The same item may be inserted several
/// times with different priorities; every insertion is a separate entry.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Insert `item` with the given priority.
    pub fn put(&mut self, item: T, priority: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            item,
            priority,
            seq,
        });
    }

    /// Remove and return the item with the smallest priority.
    ///
    /// Fails with [`SearchError::PreconditionViolation`] when empty.
    #[inline]
    pub fn get(&mut self) -> Result<T> {
        self.get_with_priority().map(|(item, _)| item)
    }

    /// Like [`get`](Self::get), also returning the priority the item was
    /// inserted with.
    pub fn get_with_priority(&mut self) -> Result<(T, i32)> {
        self.heap
            .pop()
            .map(|e| (e.item, e.priority))
            .ok_or(SearchError::PreconditionViolation {
                reason: "get on an empty priority queue",
            })
    }

    /// Smallest priority currently stored, without removing anything.
    #[inline]
    pub fn peek_priority(&self) -> Option<i32> {
        self.heap.peek().map(|e| e.priority)
    }
}
