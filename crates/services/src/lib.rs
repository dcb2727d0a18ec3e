#![forbid(unsafe_code)]

pub mod assistant;
pub mod drill;
pub mod error;
pub mod ticker;

pub use drill_core::Clock;

pub use assistant::{AssistService, AssistantConfig, CompletionClient, HttpCompletionClient};
pub use drill::{DrillController, DrillEvent, DrillUpdate};
pub use error::AssistError;
pub use ticker::Ticker;
