pub mod date_math;
pub mod layout;
pub mod mini_month;

pub use date_math::{ChronoDateMath, DateMath};
pub use layout::{add_days, events_in, events_on, CalendarLayout, Navigate, Slot};
pub use mini_month::MiniMonth;
