use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// Coin values used when the caller does not supply their own.
pub const DEFAULT_DENOMINATIONS: [usize; 6] = [50, 25, 10, 5, 2, 1];

/// A validated set of coin values, kept in descending order.
///
/// Every value is positive and appears once. The set is never empty.
///
/// # Examples
///
/// ```
/// use coinchange::{Denominations, Error};
///
/// let coins = Denominations::new([1, 5, 10]).unwrap();
/// assert_eq!(coins.as_slice(), &[10, 5, 1]);
///
/// assert_eq!(Denominations::new([5, 0]), Err(Error::InvalidDenomination(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denominations {
    coins: Vec<usize>,
}

impl Denominations {
    /// Validates `coins` and sorts them largest first.
    ///
    /// Input is signed so that non-positive values can be rejected here
    /// instead of wrapping silently.
    pub fn new<I>(coins: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut values: Vec<usize> = Vec::new();
        for coin in coins {
            if coin <= 0 {
                return Err(Error::InvalidDenomination(coin));
            }
            let value = usize::try_from(coin).map_err(|_| Error::InvalidDenomination(coin))?;
            if values.contains(&value) {
                return Err(Error::DuplicateDenomination(value));
            }
            values.push(value);
        }

        if values.is_empty() {
            return Err(Error::EmptyDenominations);
        }

        values.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self { coins: values })
    }

    /// Coin values, largest first.
    pub fn as_slice(&self) -> &[usize] {
        &self.coins
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.coins.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// True when a coin of value 1 is present, so every amount is reachable.
    pub fn has_unit(&self) -> bool {
        self.coins.last() == Some(&1)
    }
}

impl Default for Denominations {
    fn default() -> Self {
        Self {
            coins: DEFAULT_DENOMINATIONS.to_vec(),
        }
    }
}

impl fmt::Display for Denominations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, coin) in self.coins.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coin}")?;
        }
        write!(f, "]")
    }
}

/// Converts a signed amount, rejecting negatives.
pub fn validate_amount(amount: i64) -> Result<usize> {
    usize::try_from(amount).map_err(|_| Error::InvalidAmount(amount))
}

/// How many coins of each denomination make up an amount.
///
/// Only denominations that are actually used are stored, so every count is at
/// least one. Displayed largest denomination first, e.g. `{50: 2, 10: 1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Change {
    coins: BTreeMap<usize, usize>,
}

impl Change {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` coins of value `coin`. A zero count is ignored.
    pub fn add(&mut self, coin: usize, count: usize) {
        if count == 0 {
            return;
        }
        let held = self.coins.entry(coin).or_insert(0);
        *held = held.saturating_add(count);
    }

    /// Number of coins of value `coin` used, zero if absent.
    pub fn count_of(&self, coin: usize) -> usize {
        self.coins.get(&coin).copied().unwrap_or(0)
    }

    /// Weighted sum, i.e. the amount this change adds up to.
    ///
    /// Saturates at `usize::MAX`. Change produced by the solvers never does.
    pub fn total(&self) -> usize {
        self.coins
            .iter()
            .fold(0_usize, |sum, (coin, count)| sum.saturating_add(coin.saturating_mul(*count)))
    }

    /// Total number of coins, saturating at `usize::MAX`.
    pub fn coin_count(&self) -> usize {
        self.coins
            .values()
            .fold(0_usize, |sum, count| sum.saturating_add(*count))
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// `(denomination, count)` pairs, largest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.coins.iter().rev().map(|(&coin, &count)| (coin, count))
    }
}

impl FromIterator<(usize, usize)> for Change {
    fn from_iter<T: IntoIterator<Item = (usize, usize)>>(iter: T) -> Self {
        let mut change = Change::new();
        for (coin, count) in iter {
            change.add(coin, count);
        }
        change
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (coin, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coin}: {count}")?;
        }
        write!(f, "}}")
    }
}
