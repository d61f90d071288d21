pub mod constants;
pub mod layout;
pub mod solver;
mod cutlist;
mod options;
mod plan;
mod stats;
mod types;

pub use cutlist::*;
pub use layout::*;
pub use options::*;
pub use plan::{Plan, plan, plan_sync};
pub use solver::*;
pub use stats::calculate_statistics;
pub use types::*;
