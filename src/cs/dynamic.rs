pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{count_ways, make_change, ChangeTable};
