pub mod chain_selector;
pub mod progress;

pub use chain_selector::{ChainSelector, ChainSelectorProps};
pub use progress::StepProgress;
