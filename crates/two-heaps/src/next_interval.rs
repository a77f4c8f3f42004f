use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

/// Heap entry ordering an interval index by one key.
#[derive(Debug, PartialEq, Eq)]
struct Keyed {
    key: i64,
    idx: usize,
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

/// For each interval, the index of the interval with the smallest start that is
/// not before its end, or `None` if there is no such interval.
///
/// Starts are expected to be distinct.
pub fn next_interval(intervals: &[Interval]) -> Vec<Option<usize>> {
    let mut by_start: BinaryHeap<Keyed> = intervals
        .iter()
        .enumerate()
        .map(|(idx, interval)| Keyed {
            key: interval.start,
            idx,
        })
        .collect();
    let mut by_end: BinaryHeap<Keyed> = intervals
        .iter()
        .enumerate()
        .map(|(idx, interval)| Keyed {
            key: interval.end,
            idx,
        })
        .collect();

    let mut result = vec![None; intervals.len()];
    while let Some(top_end) = by_end.pop() {
        let mut candidate = None;
        while by_start
            .peek()
            .is_some_and(|top_start| top_start.key >= top_end.key)
        {
            candidate = by_start.pop();
        }
        if let Some(next) = candidate {
            result[top_end.idx] = Some(next.idx);
            // Smaller ends still to come may pick the same interval
            by_start.push(next);
        }
    }
    result
}
