pub mod app_settings;
pub mod event;
pub mod persistence;
pub mod roster;
pub mod view_mode;

pub use app_settings::{AppSettings, MiniMonthPadding, WeekStart, MAX_AGENDA_DAYS};
pub use event::{ColorPreset, Event, EventData, DEFAULT_EVENT_COLOR};
pub use roster::RosterMember;
pub use view_mode::ViewMode;
