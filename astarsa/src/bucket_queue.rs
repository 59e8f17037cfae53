use sa_types::Cost;
use std::cmp::{max, min};
use std::collections::VecDeque;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueueElement<T> {
    pub f: Cost,
    pub data: T,
}

/// A heap where values are sorted by bucket sort.
///
/// Elements with equal `f` are popped in insertion order, which makes the
/// search deterministic under ties.
#[derive(Debug)]
pub struct BucketQueue<T> {
    layers: Vec<VecDeque<T>>,
    /// The first layer with an element is at least `next`.
    next: usize,
    /// Layers far lower than the current minimum are shrunk when the minimum f
    /// has increased sufficiently beyond them.
    next_clear: usize,
    size: usize,
    max_size: usize,
}

const CLEAR_DELAY: usize = 10;

impl<T> BucketQueue<T> {
    pub fn push(&mut self, QueueElement { f, data }: QueueElement<T>) {
        if self.layers.len() <= f as usize {
            self.layers.resize_with(f as usize + 1, VecDeque::default);
        }
        self.next = min(self.next, f as usize);
        self.layers[f as usize].push_back(data);
        self.size += 1;
        self.max_size = max(self.max_size, self.size);
    }

    pub fn peek(&mut self) -> Option<Cost> {
        if self.is_empty() {
            return None;
        }
        loop {
            if !self.layers[self.next].is_empty() {
                return Some(self.next as Cost);
            }
            self.next += 1;
            // NOTE: This needs to be a while loop since `next` can go up in jumps after being empty.
            while self.next_clear + CLEAR_DELAY < self.next {
                debug_assert!(self.layers[self.next_clear].is_empty());
                self.layers[self.next_clear].shrink_to_fit();
                self.next_clear += 1;
            }
        }
    }

    pub fn pop(&mut self) -> Option<QueueElement<T>> {
        let f = self.peek()?;
        let data = self.layers[f as usize].pop_front()?;
        self.size -= 1;
        if self.size == 0 {
            self.next = usize::MAX;
        }
        Some(QueueElement { f, data })
    }

    /// The largest number of elements held at once.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<T> Default for BucketQueue<T> {
    fn default() -> Self {
        Self {
            layers: Default::default(),
            next: usize::MAX,
            next_clear: 0,
            size: 0,
            max_size: 0,
        }
    }
}
