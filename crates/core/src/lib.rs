#![forbid(unsafe_code)]

pub mod content;
pub mod countdown;
pub mod markup;
pub mod model;
pub mod session;
pub mod time;

pub use countdown::{Countdown, TickOutcome, format_clock};
pub use session::{
    Advance, AssistFailure, AssistKind, AssistSlot, AssistTicket, DrillSession, SessionError,
};
pub use time::Clock;
