//! World glue the core keeps in-process: the calendar and event effects.

pub mod events;
pub mod time;

pub use events::{apply_event, EventApplication};
pub use time::{deduct_weekly_wages, TimePeriod, TimeSystem};
