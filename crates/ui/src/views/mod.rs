mod drill;
mod questions;

pub use drill::{DrillView, use_drill_provider};
pub use questions::QuestionsView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
