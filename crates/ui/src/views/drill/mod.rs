mod complete;
mod editor_panel;
mod header;
mod provider;
mod question_panel;
mod solution_modal;
mod view;

pub use provider::use_drill_provider;
pub use view::DrillView;
