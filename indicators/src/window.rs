use std::collections::VecDeque;

/// Fixed-capacity sliding window with a running sum.
///
/// Pushing the value that overflows the capacity evicts the oldest one,
/// so `push` and `mean` are both O(1) and memory stays bounded at
/// `capacity` elements regardless of how long the series runs.
///
/// `mean()` returns `None` until the window is full: a partially warmed
/// window has no meaningful average.
pub struct SlidingWindow {
    values: VecDeque<f64>,
    sum: f64,
    capacity: usize,
}

impl SlidingWindow {
    /// `capacity` must be at least 1; callers validate before constructing.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1);
        Self {
            values: VecDeque::with_capacity(capacity),
            sum: 0.0,
            capacity,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);
        self.sum += value;

        if self.values.len() > self.capacity {
            if let Some(evicted) = self.values.pop_front() {
                self.sum -= evicted;
            }
        }
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    pub fn mean(&self) -> Option<f64> {
        if self.is_full() {
            Some(self.sum / self.capacity as f64)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
