//! The table: the chain of played tiles and who played them.

pub mod chain;
pub mod history;

pub use chain::{Chain, Ends, Fit, Placement, Side};
pub use history::{PlayHistory, PlayRecord};
