mod drill_vm;
mod markdown_vm;
mod question_vm;
mod time_fmt;

pub use drill_vm::{DrillIntent, DrillVm};
pub use question_vm::{SummaryVm, map_question_cards};
