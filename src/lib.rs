//! Coin change, solved two ways.
//!
//! [`greedy::make_change`] takes the largest coin that fits until nothing is
//! left; [`dynamic::make_change`] builds a minimum-coin table and walks it back.
//! [`bench::compare_algorithms`] times both over a range of amounts and
//! [`plot::plot_times`] charts the result.
//!
//! ```
//! use coinchange::{dynamic, greedy, Denominations};
//!
//! let coins = Denominations::default();
//! let fast = greedy::make_change(113, &coins).unwrap();
//! let exact = dynamic::make_change(113, &coins).unwrap();
//! assert_eq!(fast, exact);
//! assert_eq!(exact.to_string(), "{50: 2, 10: 1, 2: 1, 1: 1}");
//! ```

pub mod bench;
pub mod cs;
pub mod error;
pub mod plot;

pub use bench::{compare_algorithms, Comparison};
pub use cs::{canonical, dynamic, greedy};
pub use cs::change::{validate_amount, Change, Denominations, DEFAULT_DENOMINATIONS};
pub use error::{Error, Result};
pub use plot::{plot_times, PlotConfig};
