use serde::{Deserialize, Serialize};

/// Display granularity of the main calendar grid.
#[derive(
    Serialize, Deserialize, clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    #[default]
    Month,
    Agenda,
}

impl ViewMode {
    /// Toolbar order of the view switch pills.
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Month,
        ViewMode::Week,
        ViewMode::Day,
        ViewMode::Agenda,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Day => "Day",
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
            ViewMode::Agenda => "Agenda",
        }
    }

    /// Keyboard shortcut that switches to this view.
    pub fn hotkey(self) -> char {
        match self {
            ViewMode::Day => 'd',
            ViewMode::Week => 'w',
            ViewMode::Month => 'm',
            ViewMode::Agenda => 'a',
        }
    }

    pub fn from_hotkey(c: char) -> Option<ViewMode> {
        Self::ALL.into_iter().find(|v| v.hotkey() == c)
    }

    /// Whether the grid is divided into time slots rather than whole days.
    pub fn is_timed(self) -> bool {
        matches!(self, ViewMode::Day | ViewMode::Week)
    }
}
