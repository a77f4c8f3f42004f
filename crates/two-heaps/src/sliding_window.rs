use std::iter::FusedIterator;

use crate::error::MedianError;
use crate::medianfinder::{MedianFinder, Sample};

/// Medians of every `window_size`-long window of `sequence`, left to right.
///
/// A window longer than the sequence produces no medians.
pub fn sliding_window_median<T: Sample>(
    sequence: &[T],
    window_size: usize,
) -> Result<Vec<f64>, MedianError> {
    Ok(sliding_medians(sequence, window_size)?.collect())
}

/// Lazy form of [`sliding_window_median`].
pub fn sliding_medians<T: Sample>(
    sequence: &[T],
    window_size: usize,
) -> Result<SlidingMedians<'_, T>, MedianError> {
    SlidingMedians::new(sequence, window_size)
}

/// Iterator over window medians, driving a single [`MedianFinder`].
///
/// Each step inserts the incoming value, reads the median and then evicts the
/// value leaving the window.
#[derive(Debug, Clone)]
pub struct SlidingMedians<'a, T: Sample> {
    sequence: &'a [T],
    window_size: usize,
    finder: MedianFinder<T>,
    end: usize,
}

impl<'a, T: Sample> SlidingMedians<'a, T> {
    pub fn new(sequence: &'a [T], window_size: usize) -> Result<Self, MedianError> {
        if window_size == 0 {
            return Err(MedianError::InvalidWindow(window_size));
        }
        let end = window_size - 1;
        let mut finder = MedianFinder::new();
        if end < sequence.len() {
            finder.extend(sequence[..end].iter().copied());
        }
        tracing::debug!(
            len = sequence.len(),
            window_size,
            "Starting sliding window median"
        );
        Ok(Self {
            sequence,
            window_size,
            finder,
            end,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }
}

impl<T: Sample> Iterator for SlidingMedians<'_, T> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let incoming = *self.sequence.get(self.end)?;
        self.finder.insert_num(incoming);
        // Never empty right after an insert
        let median = self.finder.find_median().ok()?;
        let outgoing = self.sequence[self.end + 1 - self.window_size];
        self.finder.remove_num(outgoing);
        self.end += 1;
        Some(median)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len().saturating_sub(self.end);
        (remaining, Some(remaining))
    }
}

impl<T: Sample> ExactSizeIterator for SlidingMedians<'_, T> {}

impl<T: Sample> FusedIterator for SlidingMedians<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_of_three() {
        let medians = sliding_window_median(&[1, 2, -1, 3, 5], 3).unwrap();
        assert_eq!(medians, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_window_of_two() {
        let medians = sliding_window_median(&[1, 2, -1, 3, 5], 2).unwrap();
        assert_eq!(medians, vec![1.5, 0.5, 1.0, 4.0]);
    }

    #[test]
    fn test_window_of_one_echoes_input() {
        let medians = sliding_window_median(&[4u8, 9, 0], 1).unwrap();
        assert_eq!(medians, vec![4.0, 9.0, 0.0]);
    }

    #[test]
    fn test_single_element_sequence() {
        assert_eq!(sliding_window_median(&[7], 1).unwrap(), vec![7.0]);
    }

    #[test]
    fn test_zero_window_is_rejected() {
        assert_eq!(
            sliding_window_median(&[1, 2, 3], 0),
            Err(MedianError::InvalidWindow(0))
        );
    }

    #[test]
    fn test_window_longer_than_sequence() {
        assert!(sliding_window_median(&[1, 2, 3], 4).unwrap().is_empty());
        assert!(sliding_window_median::<i32>(&[], 2).unwrap().is_empty());
    }

    #[test]
    fn test_window_covering_whole_sequence() {
        let medians = sliding_window_median(&[5, 1, 4, 2], 4).unwrap();
        assert_eq!(medians, vec![3.0]);
    }

    #[test]
    fn test_duplicates_leave_window() {
        let medians = sliding_window_median(&[2, 2, 2, 9, 9, 9], 3).unwrap();
        assert_eq!(medians, vec![2.0, 2.0, 9.0, 9.0]);
    }

    #[test]
    fn test_exact_size() {
        let mut medians = sliding_medians(&[1, 2, -1, 3, 5], 2).unwrap();
        assert_eq!(medians.len(), 4);
        medians.next();
        assert_eq!(medians.len(), 3);
        assert_eq!(medians.by_ref().count(), 3);
        assert_eq!(medians.next(), None);
        assert_eq!(sliding_medians(&[1, 2], 3).unwrap().len(), 0);
    }
}
