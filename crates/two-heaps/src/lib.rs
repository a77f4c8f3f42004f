//! The Two Heaps pattern.
//!
//! A set of numbers is split into a max-heap holding the smaller part and a
//! min-heap holding the larger part, so both middle values are one `peek` away.
//!
//! ```
//! use two_heaps::MedianFinder;
//!
//! let mut finder = MedianFinder::new();
//! finder.insert_num(3);
//! finder.insert_num(1);
//! assert_eq!(finder.find_median(), Ok(2.0));
//!
//! let medians = two_heaps::sliding_window_median(&[1, 2, -1, 3, 5], 3).unwrap();
//! assert_eq!(medians, vec![1.0, 2.0, 3.0]);
//! ```

pub mod capital;
pub mod error;
pub mod macros;
pub mod medianfinder;
pub mod next_interval;
pub mod sliding_window;

#[doc(hidden)]
pub use tracing as __tracing;

pub use capital::max_capital;
pub use error::MedianError;
pub use medianfinder::{MedianFinder, Sample};
pub use next_interval::{next_interval, Interval};
pub use sliding_window::{sliding_medians, sliding_window_median, SlidingMedians};
