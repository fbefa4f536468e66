use crate::calc::date_math::{month_name, DateMath};
use crate::data::MiniMonthPadding;
use chrono::{Datelike, Duration, NaiveDate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Outside the displayed month. Only possible with `FullWeeks` padding.
    pub other_month: bool,
    pub today: bool,
}

/// State of the sidebar month picker.
#[derive(Clone, Debug)]
pub struct MiniMonth {
    /// First day of the displayed month.
    anchor: NaiveDate,
    /// External date the anchor was last synchronised from.
    synced_from: NaiveDate,
    padding: MiniMonthPadding,
}

impl MiniMonth {
    pub fn new(current: NaiveDate, padding: MiniMonthPadding, math: &dyn DateMath) -> Self {
        MiniMonth {
            anchor: math.start_of_month(current),
            synced_from: current,
            padding,
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Re-anchors on `current` when the externally supplied date changed.
    /// Local prev/next navigation survives as long as it does not.
    pub fn sync(&mut self, current: NaiveDate, math: &dyn DateMath) -> bool {
        if current == self.synced_from {
            return false;
        }
        self.synced_from = current;
        self.anchor = math.start_of_month(current);
        true
    }

    pub fn prev_month(&mut self, math: &dyn DateMath) {
        self.anchor = math.add_months(self.anchor, -1);
    }

    pub fn next_month(&mut self, math: &dyn DateMath) {
        self.anchor = math.add_months(self.anchor, 1);
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.anchor.month()), self.anchor.year())
    }

    /// Every cell of the grid in display order.
    pub fn days(&self, math: &dyn DateMath, today: NaiveDate) -> Vec<DayCell> {
        let month_start = math.start_of_month(self.anchor);
        let month_end = math.end_of_month(self.anchor);
        let (first, last) = match self.padding {
            MiniMonthPadding::MonthOnly => (month_start, month_end),
            MiniMonthPadding::FullWeeks => {
                (math.start_of_week(month_start), math.end_of_week(month_end))
            }
        };

        let mut cells = Vec::new();
        let mut current = first;
        while current <= last {
            cells.push(DayCell {
                date: current,
                other_month: current.month() != self.anchor.month()
                    || current.year() != self.anchor.year(),
                today: current == today,
            });
            current += Duration::days(1);
        }
        cells
    }

    /// Grid cells split into rows of seven. With `MonthOnly` the last row may
    /// be short.
    pub fn rows(&self, math: &dyn DateMath, today: NaiveDate) -> Vec<Vec<DayCell>> {
        self.days(math, today)
            .chunks(7)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Day-selection hook. Returns the clicked date when it is part of the
    /// displayed grid.
    pub fn click_day(&self, date: NaiveDate, math: &dyn DateMath) -> Option<NaiveDate> {
        self.days(math, date)
            .iter()
            .any(|c| c.date == date)
            .then_some(date)
    }
}
