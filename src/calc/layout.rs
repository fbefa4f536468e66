use crate::calc::date_math::DateMath;
use crate::data::{Event, ViewMode, MAX_AGENDA_DAYS};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// An empty interval picked on the grid, candidate for a new event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigate {
    Prev,
    Next,
    Today,
}

/// Date arithmetic behind every view of the main calendar grid.
pub struct CalendarLayout<'a> {
    pub math: &'a dyn DateMath,
    pub slot_minutes: u32,
    pub agenda_days: u32,
}

impl<'a> CalendarLayout<'a> {
    pub fn new(math: &'a dyn DateMath, slot_minutes: u32, agenda_days: u32) -> Self {
        CalendarLayout {
            math,
            slot_minutes: slot_minutes.max(1),
            agenda_days: agenda_days.clamp(1, MAX_AGENDA_DAYS),
        }
    }

    /// First and last day (inclusive) rendered for `view` around `focus`.
    pub fn visible_range(&self, view: ViewMode, focus: NaiveDate) -> (NaiveDate, NaiveDate) {
        match view {
            ViewMode::Month => {
                let first = self.math.start_of_week(self.math.start_of_month(focus));
                let last = self.math.end_of_week(self.math.end_of_month(focus));
                (first, last)
            }
            ViewMode::Week => (self.math.start_of_week(focus), self.math.end_of_week(focus)),
            ViewMode::Day => (focus, focus),
            ViewMode::Agenda => (focus, add_days(focus, self.agenda_days as i64 - 1)),
        }
    }

    pub fn navigate(
        &self,
        view: ViewMode,
        focus: NaiveDate,
        action: Navigate,
        today: NaiveDate,
    ) -> NaiveDate {
        let sign = match action {
            Navigate::Today => return today,
            Navigate::Prev => -1,
            Navigate::Next => 1,
        };
        match view {
            ViewMode::Month => self.math.add_months(focus, sign),
            ViewMode::Week => add_days(focus, 7 * sign as i64),
            ViewMode::Day => add_days(focus, sign as i64),
            ViewMode::Agenda => add_days(focus, self.agenda_days as i64 * sign as i64),
        }
    }

    /// Toolbar caption for the visible range.
    pub fn range_label(&self, view: ViewMode, focus: NaiveDate) -> String {
        let (first, last) = self.visible_range(view, focus);
        let fmt = |date: NaiveDate, pattern: &str| self.math.format(midnight(date), pattern);
        match view {
            ViewMode::Month => fmt(focus, "%B %Y"),
            ViewMode::Week => {
                let end_pattern = if first.month() == last.month() {
                    "%d"
                } else {
                    "%b %d"
                };
                format!("{} – {}", fmt(first, "%b %d"), fmt(last, end_pattern))
            }
            ViewMode::Day => fmt(focus, "%A %b %d"),
            ViewMode::Agenda => format!("{} – {}", fmt(first, "%m/%d/%Y"), fmt(last, "%m/%d/%Y")),
        }
    }

    /// Week rows of the month view, always padded to whole weeks.
    pub fn month_weeks(&self, focus: NaiveDate) -> Vec<[NaiveDate; 7]> {
        let (first, last) = self.visible_range(ViewMode::Month, focus);
        let mut weeks = Vec::new();
        let mut start = first;
        while start <= last {
            weeks.push(week_from(start));
            match start.checked_add_signed(Duration::days(7)) {
                Some(next) => start = next,
                None => break,
            }
        }
        weeks
    }

    pub fn week_days(&self, focus: NaiveDate) -> [NaiveDate; 7] {
        week_from(self.math.start_of_week(focus))
    }

    pub fn slots_per_day(&self) -> u32 {
        (24 * 60 / self.slot_minutes).max(1)
    }

    /// The slot under the cursor. Month and agenda views select whole days.
    pub fn slot_at(&self, view: ViewMode, date: NaiveDate, slot_index: u32) -> Slot {
        if view.is_timed() {
            let index = slot_index.min(self.slots_per_day() - 1);
            let start = midnight(date) + Duration::minutes((index * self.slot_minutes) as i64);
            Slot {
                start,
                end: start
                    .checked_add_signed(Duration::minutes(self.slot_minutes as i64))
                    .unwrap_or(NaiveDateTime::MAX),
            }
        } else {
            Slot {
                start: midnight(date),
                end: midnight(add_days(date, 1)),
            }
        }
    }

    /// Slot index containing `time` of day.
    pub fn slot_index_of(&self, time: NaiveTime) -> u32 {
        let minutes = time.signed_duration_since(NaiveTime::MIN).num_minutes() as u32;
        (minutes / self.slot_minutes).min(self.slots_per_day() - 1)
    }

    /// Events overlapping the agenda range that starts at `focus`.
    pub fn agenda<'e>(&self, events: &'e [Event], focus: NaiveDate) -> Vec<&'e Event> {
        let end = add_days(focus, self.agenda_days as i64);
        events_in(events, midnight(focus), midnight(end))
    }
}

/// Events overlapping `[from, to)`, ordered by start. Ties keep insertion order.
pub fn events_in(events: &[Event], from: NaiveDateTime, to: NaiveDateTime) -> Vec<&Event> {
    let mut found: Vec<&Event> = events.iter().filter(|e| e.overlaps(from, to)).collect();
    found.sort_by_key(|e| e.start);
    found
}

pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events_in(events, midnight(date), midnight(add_days(date, 1)))
}

/// `date` shifted by `days`, saturating at the ends of the calendar.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn week_from(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| add_days(start, i as i64))
}
