use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::error::MedianError;

/// A totally ordered number the median finder can hold.
///
/// Medians are averaged in `f64`, so the two middle values never overflow
/// the integer type when summed. Floats are not supported since they are not `Ord`.
pub trait Sample: Ord + Copy + Debug {
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Running median over a stream of numbers, kept as two heaps split at the median.
///
/// The lower half holds the extra element when the count is odd.
#[derive(Debug, Clone)]
pub struct MedianFinder<T: Sample> {
    max_heap: BinaryHeap<T>,          // Max-heap for the lower half
    min_heap: BinaryHeap<Reverse<T>>, // Min-heap for the upper half (using Reverse)
}

impl<T: Sample> Default for MedianFinder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> MedianFinder<T> {
    pub fn new() -> Self {
        Self {
            max_heap: BinaryHeap::new(),
            min_heap: BinaryHeap::new(),
        }
    }

    pub fn insert_num(&mut self, num: T) {
        match self.max_heap.peek() {
            Some(&lower_max) if num > lower_max => self.min_heap.push(Reverse(num)),
            _ => self.max_heap.push(num),
        }
        self.rebalance();
    }

    /// Removes one occurrence of `num`, returning whether it was present.
    ///
    /// Removal scans and rebuilds the heap holding the value, so it is O(n).
    /// A value that was never inserted leaves the finder untouched.
    pub fn remove_num(&mut self, num: T) -> bool {
        let removed = remove_one(&mut self.max_heap, &num)
            || remove_one(&mut self.min_heap, &Reverse(num));
        if removed {
            self.rebalance();
        } else {
            tracing::debug!(value = ?num, "Ignoring removal of a value that is not tracked");
        }
        removed
    }

    pub fn find_median(&self) -> Result<f64, MedianError> {
        let lower_max = match self.max_heap.peek() {
            Some(&lower_max) => lower_max,
            None => return Err(MedianError::Empty),
        };
        if self.max_heap.len() > self.min_heap.len() {
            return Ok(lower_max.to_f64());
        }
        match self.min_heap.peek() {
            Some(&Reverse(upper_min)) => Ok((lower_max.to_f64() + upper_min.to_f64()) / 2.0),
            None => Ok(lower_max.to_f64()),
        }
    }

    pub fn len(&self) -> usize {
        self.max_heap.len() + self.min_heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.max_heap.is_empty()
    }

    /// Number of values at or below the median.
    pub fn lower_len(&self) -> usize {
        self.max_heap.len()
    }

    /// Number of values at or above the median.
    pub fn upper_len(&self) -> usize {
        self.min_heap.len()
    }

    pub fn clear(&mut self) {
        self.max_heap.clear();
        self.min_heap.clear();
    }

    fn rebalance(&mut self) {
        if self.max_heap.len() > self.min_heap.len() + 1 {
            if let Some(lower_max) = self.max_heap.pop() {
                tracing::trace!(value = ?lower_max, "Moving lower max to the upper half");
                self.min_heap.push(Reverse(lower_max));
            }
        } else if self.min_heap.len() > self.max_heap.len() {
            if let Some(Reverse(upper_min)) = self.min_heap.pop() {
                tracing::trace!(value = ?upper_min, "Moving upper min to the lower half");
                self.max_heap.push(upper_min);
            }
        }
    }
}

impl<T: Sample> Extend<T> for MedianFinder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for num in iter {
            self.insert_num(num);
        }
    }
}

impl<T: Sample> FromIterator<T> for MedianFinder<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut finder = Self::new();
        finder.extend(iter);
        finder
    }
}

fn remove_one<H: Ord>(heap: &mut BinaryHeap<H>, target: &H) -> bool {
    if !heap.iter().any(|item| item == target) {
        return false;
    }
    let mut items = std::mem::take(heap).into_vec();
    if let Some(idx) = items.iter().position(|item| item == target) {
        items.swap_remove(idx);
    }
    *heap = BinaryHeap::from(items);
    true
}
