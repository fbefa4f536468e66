use crate::data::persistence::{get_config_dir, Persistable};
use crate::data::roster::{default_roster, RosterMember};
use crate::data::view_mode::ViewMode;
use anyhow::Result;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Longest agenda range accepted from config, about ten years.
pub const MAX_AGENDA_DAYS: u32 = 3660;

/// First column of every week-aligned grid.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// How the sidebar mini-month fills its grid.
///
/// `MonthOnly` lists exactly the days of the displayed month, laid out in
/// sequence from the first column, so the grid is not always a multiple of
/// seven and weekdays do not line up with the header. `FullWeeks` pads with
/// days of the adjacent months so each row is one real week.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MiniMonthPadding {
    #[default]
    MonthOnly,
    FullWeeks,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub title: String,
    pub default_view: ViewMode,
    pub week_start: WeekStart,
    pub mini_month_padding: MiniMonthPadding,
    pub slot_minutes: u32,
    pub agenda_days: u32,
    pub roster: Vec<RosterMember>,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            title: "Calendar".to_string(),
            default_view: ViewMode::Month,
            week_start: WeekStart::Sunday,
            mini_month_padding: MiniMonthPadding::MonthOnly,
            slot_minutes: 60,
            agenda_days: 30,
            roster: default_roster(),
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl AppSettings {
    /// Reads config.yaml from the configured directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_dir()?)
    }

    pub fn load_from(dir: &std::path::Path) -> Result<Self> {
        Ok(SettingsWrapper::load_from(dir)?.settings)
    }

    pub fn save_to(&self, dir: &std::path::Path) -> Result<()> {
        let wrapper = SettingsWrapper {
            settings: self.clone(),
        };
        wrapper.save_to(dir)
    }

    /// Slot length in minutes, falling back to an hour when the configured
    /// value is zero or does not divide a day evenly.
    pub fn effective_slot_minutes(&self) -> u32 {
        if self.slot_minutes == 0 || (24 * 60) % self.slot_minutes != 0 {
            60
        } else {
            self.slot_minutes
        }
    }

    /// Agenda length in days, clamped to `1..=MAX_AGENDA_DAYS`.
    pub fn effective_agenda_days(&self) -> u32 {
        self.agenda_days.clamp(1, MAX_AGENDA_DAYS)
    }
}
