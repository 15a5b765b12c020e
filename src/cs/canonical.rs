//! Checks whether greedy change-making is optimal for a coin system.

use log::debug;

use crate::cs::change::Denominations;
use crate::cs::dynamic::ChangeTable;
use crate::cs::greedy;
use crate::error::{Error, Result};

/// An amount where greedy change-making is worse than optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counterexample {
    pub amount: usize,
    /// Coins greedy used, `None` if greedy could not make the amount at all.
    pub greedy_coins: Option<usize>,
    pub optimal_coins: usize,
}

/// Finds the smallest amount for which greedy is not optimal.
///
/// By Kozen and Zaks, if a counterexample exists the smallest one is below
/// the sum of the two largest coins, so only amounts up to that sum are
/// checked. Amounts no combination can reach are skipped.
///
/// # Errors
///
/// [`Error::TooLarge`] if the table up to that sum cannot be built.
///
/// # Examples
///
/// ```
/// use coinchange::{canonical::find_counterexample, Denominations};
///
/// let coins = Denominations::new([1, 3, 4]).unwrap();
/// let found = find_counterexample(&coins).unwrap().unwrap();
/// assert_eq!(found.amount, 6);
/// assert_eq!(found.greedy_coins, Some(3));
/// assert_eq!(found.optimal_coins, 2);
///
/// assert_eq!(find_counterexample(&Denominations::default()), Ok(None));
/// ```
pub fn find_counterexample(denominations: &Denominations) -> Result<Option<Counterexample>> {
    let coins = denominations.as_slice();
    if coins.len() < 2 {
        return Ok(None);
    }

    let bound = coins[0]
        .checked_add(coins[1])
        .ok_or(Error::TooLarge { amount: usize::MAX })?;
    let table = ChangeTable::build(bound, denominations)?;

    for amount in 1..=bound {
        let Some(optimal_coins) = table.min_count(amount) else {
            continue;
        };
        let greedy_coins = greedy::make_change(amount, denominations)
            .ok()
            .map(|change| change.coin_count());

        if greedy_coins.map_or(true, |count| count > optimal_coins) {
            debug!("{denominations} is not canonical, first counterexample at {amount}");
            return Ok(Some(Counterexample {
                amount,
                greedy_coins,
                optimal_coins,
            }));
        }
    }

    Ok(None)
}

/// True when greedy change-making is optimal for every amount.
pub fn is_canonical(denominations: &Denominations) -> Result<bool> {
    Ok(find_counterexample(denominations)?.is_none())
}
