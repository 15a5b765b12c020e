pub mod canonical;
pub mod change;
pub mod dynamic;
pub mod greedy;

// Re-export the solvers under descriptive names
pub use canonical::{find_counterexample, is_canonical, Counterexample};
pub use change::{Change, Denominations};
pub use dynamic::{count_ways, ChangeTable};
pub use dynamic::make_change as make_change_optimal;
pub use greedy::make_change as make_change_greedy;
