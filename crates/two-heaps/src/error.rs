use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MedianError {
    #[error("The median of an empty stream is undefined")]
    Empty,
    #[error("The window size `{0}` must be at least 1")]
    InvalidWindow(usize),
    #[error("Got `{capitals}` project capitals but `{profits}` profits")]
    LengthMismatch { capitals: usize, profits: usize },
    #[error("Adding profit `{profit}` to capital `{capital}` overflows")]
    Overflow { capital: u64, profit: u64 },
}
