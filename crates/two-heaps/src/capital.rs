use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::MedianError;

/// Final capital after investing in at most `project_count` projects.
///
/// Project `i` needs `capitals[i]` to start and adds `profits[i]` once done.
/// Projects are chosen greedily: among the affordable ones, the most profitable.
/// Selection stops early once nothing left is affordable. A total that does not
/// fit in `u64` is an error.
pub fn max_capital(
    capitals: &[u64],
    profits: &[u64],
    initial_capital: u64,
    project_count: usize,
) -> Result<u64, MedianError> {
    if capitals.len() != profits.len() {
        return Err(MedianError::LengthMismatch {
            capitals: capitals.len(),
            profits: profits.len(),
        });
    }

    // Min-heap of projects by required capital
    let mut locked: BinaryHeap<Reverse<(u64, usize)>> = capitals
        .iter()
        .enumerate()
        .map(|(idx, &capital)| Reverse((capital, idx)))
        .collect();
    // Max-heap of profits of projects we can already afford
    let mut affordable: BinaryHeap<u64> = BinaryHeap::with_capacity(capitals.len());

    let mut capital = initial_capital;
    for round in 0..project_count {
        while let Some(&Reverse((required, idx))) = locked.peek() {
            if required > capital {
                break;
            }
            locked.pop();
            affordable.push(profits[idx]);
        }
        match affordable.pop() {
            Some(profit) => {
                capital = capital
                    .checked_add(profit)
                    .ok_or(MedianError::Overflow { capital, profit })?;
                tracing::trace!(round, profit, capital, "Selected project");
            }
            None => {
                tracing::debug!(round, capital, "No affordable project left");
                break;
            }
        }
    }
    Ok(capital)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_projects() {
        assert_eq!(max_capital(&[0, 1, 2], &[1, 2, 3], 1, 2), Ok(6));
    }

    #[test]
    fn test_three_projects() {
        assert_eq!(max_capital(&[0, 1, 2, 3], &[1, 2, 3, 5], 0, 3), Ok(8));
    }

    #[test]
    fn test_nothing_affordable() {
        assert_eq!(max_capital(&[5, 6], &[10, 10], 1, 2), Ok(1));
    }

    #[test]
    fn test_each_project_used_once() {
        assert_eq!(max_capital(&[0], &[4], 0, 5), Ok(4));
    }

    #[test]
    fn test_zero_projects() {
        assert_eq!(max_capital(&[0, 0], &[3, 7], 2, 0), Ok(2));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            max_capital(&[0, 1], &[1], 0, 1),
            Err(MedianError::LengthMismatch {
                capitals: 2,
                profits: 1
            })
        );
    }

    #[test]
    fn test_capital_overflow() {
        assert_eq!(
            max_capital(&[0, 0], &[u64::MAX, 5], 1, 2),
            Err(MedianError::Overflow {
                capital: 1,
                profit: u64::MAX
            })
        );
    }
}
