//! Wall-clock comparison of the greedy and dynamic-programming solvers.

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::info;

use crate::cs::change::Denominations;
use crate::cs::{dynamic, greedy};

/// Timings for both solvers, aligned by index with `amounts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    pub amounts: Vec<usize>,
    pub greedy_times: Vec<Duration>,
    pub dp_times: Vec<Duration>,
}

impl Comparison {
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn total_greedy(&self) -> Duration {
        self.greedy_times.iter().sum()
    }

    pub fn total_dp(&self) -> Duration {
        self.dp_times.iter().sum()
    }
}

/// Times one call of each solver for every amount in `1..=max_amount`.
///
/// Each call is measured on its own. A solver that cannot make an amount is
/// still timed; the error is discarded along with the result.
///
/// # Examples
///
/// ```
/// use coinchange::{compare_algorithms, Denominations};
///
/// let run = compare_algorithms(20, &Denominations::default());
/// assert_eq!(run.amounts, (1..=20).collect::<Vec<_>>());
/// assert_eq!(run.greedy_times.len(), 20);
/// assert_eq!(run.dp_times.len(), 20);
/// ```
pub fn compare_algorithms(max_amount: usize, denominations: &Denominations) -> Comparison {
    let mut comparison = Comparison::default();

    for amount in 1..=max_amount {
        let start = Instant::now();
        let _ = black_box(greedy::make_change(black_box(amount), denominations));
        comparison.greedy_times.push(start.elapsed());

        let start = Instant::now();
        let _ = black_box(dynamic::make_change(black_box(amount), denominations));
        comparison.dp_times.push(start.elapsed());

        comparison.amounts.push(amount);
    }

    info!(
        "timed {} amounts: greedy {:?} total, dynamic programming {:?} total",
        comparison.len(),
        comparison.total_greedy(),
        comparison.total_dp()
    );

    comparison
}
