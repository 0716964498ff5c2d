//! A binary min-heap.
//!
//! This is the ordering primitive behind the merge: it holds at most a few
//! candidates per source and always exposes the smallest one at its root.

use core::fmt;

/// A binary min-heap stored in a dense `Vec`.
///
/// For every position `i > 0`, the element at `(i - 1) / 2` compares less
/// than or equal to the element at `i`. Ties are not broken in any
/// particular order; callers that need a stable order must fold it into
/// `T`'s `Ord` implementation.
///
/// # Examples
///
/// ```
/// use timeline_merge::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.insert(5);
/// heap.insert(1);
/// heap.insert(3);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.extract_min(), Some(1));
/// assert_eq!(heap.extract_min(), Some(3));
/// assert_eq!(heap.extract_min(), Some(5));
/// assert_eq!(heap.extract_min(), None);
/// ```
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Insert an element. `O(log n)`.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the smallest element, or `None` if the heap is
    /// empty. `O(log n)`.
    pub fn extract_min(&mut self) -> Option<T> {
        match self.items.len() {
            0 => None,
            1 => self.items.pop(),
            _ => {
                // Moves the last element into the root slot.
                let min = self.items.swap_remove(0);
                self.sift_down(0);
                Some(min)
            }
        }
    }

    /// Returns the smallest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[parent] <= self.items[index] {
                break;
            }
            self.items.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.items[right] < self.items[left] {
                smaller = right;
            }
            if self.items[index] <= self.items[smaller] {
                break;
            }
            self.items.swap(index, smaller);
            index = smaller;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_heap<T: Ord + fmt::Debug>(heap: &MinHeap<T>) {
        for i in 1..heap.items.len() {
            let parent = (i - 1) / 2;
            assert!(
                heap.items[parent] <= heap.items[i],
                "heap invariant broken at {i}: {heap:?}"
            );
        }
    }

    #[test]
    fn empty() {
        let mut heap: MinHeap<u32> = MinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.extract_min(), None);
        // Still empty, still `None`.
        assert_eq!(heap.extract_min(), None);
    }

    #[test]
    fn single() {
        let mut heap = MinHeap::with_capacity(1);
        heap.insert(0u32);
        assert_eq!(heap.peek(), Some(&0));
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.extract_min(), Some(0));
        assert!(heap.is_empty());
    }

    #[test]
    fn duplicates() {
        let mut heap = MinHeap::new();
        for n in [4, 4, 2, 4, 2] {
            heap.insert(n);
            assert_heap(&heap);
        }
        let mut out = vec![];
        while let Some(n) = heap.extract_min() {
            assert_heap(&heap);
            out.push(n);
        }
        assert_eq!(out, [2, 2, 4, 4, 4]);
    }

    #[test]
    fn invariant_under_random_ops() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut heap = MinHeap::new();
        let mut shadow: Vec<u16> = vec![];

        for _ in 0..5_000 {
            if rng.gen_bool(0.6) {
                let n = rng.gen_range(0..500);
                heap.insert(n);
                shadow.push(n);
            } else {
                shadow.sort_unstable_by(|a, b| b.cmp(a));
                assert_eq!(heap.extract_min(), shadow.pop());
            }
            assert_heap(&heap);
            assert_eq!(heap.len(), shadow.len());
            assert_eq!(heap.peek(), shadow.iter().min());
        }
    }

    #[test]
    fn debug() {
        let mut heap = MinHeap::new();
        heap.insert(2);
        heap.insert(1);
        assert_eq!(format!("{:?}", heap), "[1, 2]");
    }
}
