//! Automated player: heuristic evaluation, exhaustive placement search, and
//! step-wise move execution.
//!
//! - [`evaluator`]: four-feature board scoring with fixed weights
//! - [`search`]: rotation x column enumeration with deterministic tie-break
//! - [`driver`]: replays the chosen placement as validated player actions

pub mod driver;
pub mod evaluator;
pub mod search;

pub use driver::execute_move;
pub use evaluator::evaluate;
pub use search::{find_best_move, Placement};
