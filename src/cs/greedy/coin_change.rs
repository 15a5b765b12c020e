use log::debug;

use crate::cs::change::{Change, Denominations};
use crate::error::{Error, Result};

/// Makes change for `amount` by always taking the largest coin that fits.
///
/// Runs in O(number of denominations). The result is minimal only for
/// canonical coin systems (see [`crate::canonical`]); for other systems it may
/// use more coins than [`crate::dynamic::make_change`], but it always adds up
/// to exactly `amount` or fails.
///
/// # Errors
///
/// Returns [`Error::GreedyStuck`] if something is left over after the smallest
/// denomination, which can only happen when the set has no coin of value 1.
/// Another combination may still exist; [`crate::dynamic::make_change`] finds it.
///
/// # Examples
///
/// ```
/// use coinchange::{greedy, Denominations, Error};
///
/// let change = greedy::make_change(113, &Denominations::default()).unwrap();
/// assert_eq!(change.to_string(), "{50: 2, 10: 1, 2: 1, 1: 1}");
///
/// // 7 = 5 + 2, and 2 cannot be made from 4s
/// let coins = Denominations::new([5, 4]).unwrap();
/// assert_eq!(
///     greedy::make_change(7, &coins),
///     Err(Error::GreedyStuck { amount: 7, remainder: 2 })
/// );
/// ```
pub fn make_change(amount: usize, denominations: &Denominations) -> Result<Change> {
    let mut change = Change::new();
    let mut remaining = amount;

    for coin in denominations.iter() {
        if remaining == 0 {
            break;
        }
        let count = remaining / coin;
        if count > 0 {
            change.add(coin, count);
            remaining -= coin * count;
        }
    }

    if remaining != 0 {
        debug!("greedy change for {amount} stuck with {remaining} left over");
        return Err(Error::GreedyStuck {
            amount,
            remainder: remaining,
        });
    }

    Ok(change)
}
