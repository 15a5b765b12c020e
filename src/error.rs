use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid amount: {0} (amounts must be non-negative)")]
    InvalidAmount(i64),

    #[error("invalid denomination: {0} (denominations must be positive)")]
    InvalidDenomination(i64),

    #[error("duplicate denomination: {0}")]
    DuplicateDenomination(usize),

    #[error("denomination set is empty")]
    EmptyDenominations,

    #[error("no combination of coins makes {amount} ({remainder} left over)")]
    Unreachable { amount: usize, remainder: usize },

    #[error("greedy change for {amount} leaves {remainder}")]
    GreedyStuck { amount: usize, remainder: usize },

    #[error("amount {amount} is too large for a change table")]
    TooLarge { amount: usize },

    #[error("amount {amount} is outside the table built for 0..={target}")]
    OutOfRange { amount: usize, target: usize },

    #[error("number of combinations for {amount} overflows")]
    Overflow { amount: usize },

    #[error("plotting failed: {0}")]
    Plot(String),
}
