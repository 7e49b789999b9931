pub mod filter;
pub mod walker;

pub use filter::PathFilter;
pub use walker::{WalkSummary, Walker};
