//! Binary min-heap used to pick the two lightest nodes during the tree build.
//!
//! Entries carry their own total order. The tree builder keys every node by
//! (weight, sequence number), so equal weights always come out in insertion order.

use crate::error::CodecError;

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The smallest entry, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }
}

impl<T: Ord> MinHeap<T> {
    /// Heapify `source` in place, bottom-up.
    pub fn build(source: Vec<T>) -> Self {
        let mut heap = MinHeap { elements: source };
        for i in (0..heap.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Check the heap property over every parent/child pair.
    pub fn is_valid(&self) -> bool {
        (1..self.len()).all(|i| self.elements[Self::parent(i)] <= self.elements[i])
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.len();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;
            if l < n && self.elements[l] < self.elements[smallest] {
                smallest = l;
            }
            if r < n && self.elements[r] < self.elements[smallest] {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 && self.elements[i] < self.elements[Self::parent(i)] {
            self.elements.swap(i, Self::parent(i));
            i = Self::parent(i);
        }
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.len() - 1);
    }

    /// Remove and return the smallest entry.
    pub fn extract_min(&mut self) -> Result<T, CodecError> {
        if self.elements.is_empty() {
            return Err(CodecError::EmptyQueue);
        }
        let last = self.len() - 1;
        self.elements.swap(0, last);
        let result = self.elements.pop().ok_or(CodecError::EmptyQueue)?;
        self.sift_down(0);
        Ok(result)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
