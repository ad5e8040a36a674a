//! Running median over a growing multiset of durations

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Incremental order-statistic container answering median queries.
///
/// The lower half lives in a max-heap and the upper half in a min-heap.
/// The lower half holds the extra element when the size is odd, so its
/// top is the element at sorted position `floor((n - 1) / 2)` and the top
/// of the upper half is the one at `ceil((n - 1) / 2)`.
#[derive(Debug, Default, Clone)]
pub struct RunningMedian {
    lower: BinaryHeap<u64>,
    upper: BinaryHeap<Reverse<u64>>,
}

impl RunningMedian {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert one value in O(log n).
    pub fn insert(&mut self, value: u64) {
        match self.lower.peek() {
            Some(&top) if value > top => self.upper.push(Reverse(value)),
            _ => self.lower.push(value),
        }

        if self.lower.len() > self.upper.len() + 1 {
            if let Some(moved) = self.lower.pop() {
                self.upper.push(Reverse(moved));
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(Reverse(moved)) = self.upper.pop() {
                self.lower.push(moved);
            }
        }
    }

    /// Median of the values inserted so far; 0 when empty.
    pub fn median(&self) -> f64 {
        let Some(&low) = self.lower.peek() else {
            return 0.0;
        };
        if self.lower.len() > self.upper.len() {
            return low as f64;
        }
        match self.upper.peek() {
            Some(&Reverse(high)) => (low as f64 + high as f64) / 2.0,
            None => low as f64,
        }
    }
}
