pub mod coin_change;

pub use coin_change::make_change;
