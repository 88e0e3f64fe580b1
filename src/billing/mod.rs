pub mod calculator;
pub mod format;
pub mod types;

pub use calculator::compute;
pub use types::{ContractConfig, CostBreakdown, UsageProfile};
