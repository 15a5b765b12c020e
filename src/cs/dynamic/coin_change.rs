use log::debug;

use crate::cs::change::{Change, Denominations};
use crate::error::{Error, Result};

// Sentinel for sub-amounts no combination of coins can reach.
const UNREACHABLE: usize = usize::MAX;

// One slot per amount in `0..=amount`, or `TooLarge` if that cannot be allocated.
fn table_of<T: Clone>(amount: usize, fill: T) -> Result<Vec<T>> {
    let len = amount.checked_add(1).ok_or(Error::TooLarge { amount })?;
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(len)
        .map_err(|_| Error::TooLarge { amount })?;
    slots.resize(len, fill);
    Ok(slots)
}

/// Minimum-coin table for every amount from 0 up to a target.
///
/// `min_coins[i]` is the fewest coins that make `i` (or the unreachable
/// sentinel) and `last_coin[i]` is the coin that achieved it. Following
/// `last_coin` back from any reachable `i` rebuilds an optimal combination.
///
/// # Examples
///
/// ```
/// use coinchange::{dynamic::ChangeTable, Denominations};
///
/// let coins = Denominations::new([1, 3, 4]).unwrap();
/// let table = ChangeTable::build(10, &coins).unwrap();
///
/// assert_eq!(table.min_count(6), Some(2)); // 3 + 3
/// assert_eq!(table.reconstruct(6).unwrap().to_string(), "{3: 2}");
/// ```
#[derive(Debug, Clone)]
pub struct ChangeTable {
    min_coins: Vec<usize>,
    last_coin: Vec<usize>,
}

impl ChangeTable {
    /// Fills the table for `0..=amount` with the unbounded recurrence
    /// `min_coins[i] = min(min_coins[i - d] + 1)` over coins `d <= i`.
    ///
    /// Coins are tried largest first and only a strictly better count
    /// replaces the current one, so ties go to the larger coin.
    ///
    /// # Errors
    ///
    /// [`Error::TooLarge`] if a table for `0..=amount` cannot be allocated.
    pub fn build(amount: usize, denominations: &Denominations) -> Result<Self> {
        let mut min_coins = table_of(amount, UNREACHABLE)?;
        let mut last_coin = table_of(amount, 0_usize)?;
        min_coins[0] = 0; // base case

        for current in 1..=amount {
            for coin in denominations.iter() {
                if coin > current {
                    continue;
                }
                let rest = min_coins[current - coin];
                if rest == UNREACHABLE {
                    continue;
                }
                if rest + 1 < min_coins[current] {
                    min_coins[current] = rest + 1;
                    last_coin[current] = coin;
                }
            }
        }

        debug!(
            "built change table for 0..={amount} over {} denominations",
            denominations.len()
        );

        Ok(Self {
            min_coins,
            last_coin,
        })
    }

    /// Largest amount the table covers.
    pub fn target(&self) -> usize {
        self.min_coins.len() - 1
    }

    /// Fewest coins that make `amount`, or `None` if unreachable or outside
    /// the table.
    pub fn min_count(&self, amount: usize) -> Option<usize> {
        match self.min_coins.get(amount) {
            Some(&count) if count != UNREACHABLE => Some(count),
            _ => None,
        }
    }

    /// Walks `last_coin` back from `amount` to rebuild one optimal combination.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `amount` exceeds the table, and
    /// [`Error::Unreachable`] if no combination makes `amount`.
    pub fn reconstruct(&self, amount: usize) -> Result<Change> {
        if amount > self.target() {
            return Err(Error::OutOfRange {
                amount,
                target: self.target(),
            });
        }
        if self.min_count(amount).is_none() {
            return Err(Error::Unreachable {
                amount,
                remainder: amount,
            });
        }

        let mut change = Change::new();
        let mut remaining = amount;
        while remaining > 0 {
            let coin = self.last_coin[remaining];
            // A reachable entry always records a coin; zero would never shrink `remaining`.
            if coin == 0 {
                return Err(Error::Unreachable {
                    amount,
                    remainder: remaining,
                });
            }
            change.add(coin, 1);
            remaining -= coin;
        }

        Ok(change)
    }
}

/// Makes change for `amount` with the fewest possible coins.
///
/// O(amount × denominations) time and O(amount) space.
///
/// # Errors
///
/// Returns [`Error::Unreachable`] if no combination of the denominations
/// adds up to `amount`, and [`Error::TooLarge`] if the table for `amount`
/// cannot be allocated.
///
/// # Examples
///
/// ```
/// use coinchange::{dynamic, Denominations, Error};
///
/// let coins = Denominations::new([1, 6, 10]).unwrap();
/// // 6 + 6 + 6, where greedy would use 10 + 6 + 1 + 1
/// assert_eq!(dynamic::make_change(18, &coins).unwrap().to_string(), "{6: 3}");
///
/// let coins = Denominations::new([2, 4]).unwrap();
/// assert_eq!(
///     dynamic::make_change(7, &coins),
///     Err(Error::Unreachable { amount: 7, remainder: 7 })
/// );
/// ```
pub fn make_change(amount: usize, denominations: &Denominations) -> Result<Change> {
    ChangeTable::build(amount, denominations)?.reconstruct(amount)
}

/// Computes the number of distinct ways to form `amount` from the given
/// denominations, ignoring order.
///
/// Iterating coins in the outer loop and amounts in the inner one counts each
/// multiset once.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the count does not fit in a `u128`, and
/// [`Error::TooLarge`] if the table for `amount` cannot be allocated.
///
/// # Examples
///
/// ```
/// use coinchange::{dynamic::count_ways, Denominations};
///
/// // 5, 2+2+1, 2+1+1+1, 1+1+1+1+1
/// let coins = Denominations::new([1, 2, 5]).unwrap();
/// assert_eq!(count_ways(5, &coins).unwrap(), 4);
/// ```
pub fn count_ways(amount: usize, denominations: &Denominations) -> Result<u128> {
    let mut dp = table_of(amount, 0_u128)?;
    dp[0] = 1; // one way to form 0: use no coins

    for coin in denominations.iter() {
        for curr_amount in coin..=amount {
            dp[curr_amount] = dp[curr_amount]
                .checked_add(dp[curr_amount - coin])
                .ok_or(Error::Overflow {
                    amount: curr_amount,
                })?;
        }
    }

    Ok(dp[amount])
}
