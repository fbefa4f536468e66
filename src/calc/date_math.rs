use crate::data::WeekStart;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

/// Calendar arithmetic and formatting used by the page and its widgets.
///
/// The page state never touches a date library directly; everything it needs
/// goes through this trait so another implementation can be swapped in.
pub trait DateMath {
    fn format(&self, at: NaiveDateTime, pattern: &str) -> String;
    fn parse(&self, text: &str, pattern: &str) -> Option<NaiveDateTime>;
    fn start_of_week(&self, date: NaiveDate) -> NaiveDate;
    /// Column of `date` in a week-aligned grid, 0..=6.
    fn day_of_week(&self, date: NaiveDate) -> u32;
    fn start_of_month(&self, date: NaiveDate) -> NaiveDate;
    fn end_of_month(&self, date: NaiveDate) -> NaiveDate;
    fn add_months(&self, date: NaiveDate, months: i32) -> NaiveDate;
    fn days_in_month(&self, year: i32, month: u32) -> u32;

    fn end_of_week(&self, date: NaiveDate) -> NaiveDate {
        let start = self.start_of_week(date);
        start.checked_add_signed(Duration::days(6)).unwrap_or(start)
    }

    /// Two-letter weekday headers in grid column order.
    fn weekday_headers(&self) -> [&'static str; 7] {
        // Any date will do; walk one full week from its grid start.
        let origin = self.start_of_week(NaiveDate::from_ymd_opt(2023, 1, 4).unwrap_or_default());
        let mut out = [""; 7];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = short_weekday((origin + Duration::days(i as i64)).weekday());
        }
        out
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ChronoDateMath {
    pub week_start: WeekStart,
}

impl ChronoDateMath {
    pub fn new(week_start: WeekStart) -> Self {
        ChronoDateMath { week_start }
    }
}

impl DateMath for ChronoDateMath {
    fn format(&self, at: NaiveDateTime, pattern: &str) -> String {
        at.format(pattern).to_string()
    }

    fn parse(&self, text: &str, pattern: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(text, pattern)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(text, pattern)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        date.checked_sub_signed(Duration::days(self.day_of_week(date) as i64))
            .unwrap_or(date)
    }

    fn day_of_week(&self, date: NaiveDate) -> u32 {
        match self.week_start.weekday() {
            Weekday::Mon => date.weekday().num_days_from_monday(),
            _ => date.weekday().num_days_from_sunday(),
        }
    }

    fn start_of_month(&self, date: NaiveDate) -> NaiveDate {
        date.with_day(1).unwrap_or(date)
    }

    fn end_of_month(&self, date: NaiveDate) -> NaiveDate {
        let last = self.days_in_month(date.year(), date.month());
        date.with_day(last).unwrap_or(date)
    }

    fn add_months(&self, date: NaiveDate, months: i32) -> NaiveDate {
        let month = date.month() as i32;
        let new_total = month - 1 + months;
        let new_month = (new_total.rem_euclid(12) + 1) as u32;
        let new_year = date.year() + new_total.div_euclid(12);
        let new_day = date.day().min(self.days_in_month(new_year, new_month));
        NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(date)
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        match (
            NaiveDate::from_ymd_opt(year, month, 1),
            NaiveDate::from_ymd_opt(next_year, next_month, 1),
        ) {
            (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
            _ => 0,
        }
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

fn short_weekday(w: Weekday) -> &'static str {
    match w {
        Weekday::Sun => "Su",
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sunday() -> ChronoDateMath {
        ChronoDateMath::new(WeekStart::Sunday)
    }

    fn monday() -> ChronoDateMath {
        ChronoDateMath::new(WeekStart::Monday)
    }

    #[test]
    fn test_start_of_week_sunday() {
        // 2025-11-10 is a Monday
        assert_eq!(sunday().start_of_week(d(2025, 11, 10)), d(2025, 11, 9));
        assert_eq!(sunday().start_of_week(d(2025, 11, 9)), d(2025, 11, 9));
    }

    #[test]
    fn test_start_of_week_monday() {
        assert_eq!(monday().start_of_week(d(2025, 11, 10)), d(2025, 11, 10));
        assert_eq!(monday().start_of_week(d(2025, 11, 9)), d(2025, 11, 3));
    }

    #[test]
    fn test_end_of_week() {
        assert_eq!(sunday().end_of_week(d(2025, 11, 10)), d(2025, 11, 15));
        assert_eq!(monday().end_of_week(d(2025, 11, 10)), d(2025, 11, 16));
    }

    #[test]
    fn test_day_of_week_depends_on_week_start() {
        let sat = d(2025, 11, 1);
        assert_eq!(sunday().day_of_week(sat), 6);
        assert_eq!(monday().day_of_week(sat), 5);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(sunday().start_of_month(d(2025, 2, 17)), d(2025, 2, 1));
        assert_eq!(sunday().end_of_month(d(2025, 2, 17)), d(2025, 2, 28));
        assert_eq!(sunday().end_of_month(d(2024, 2, 1)), d(2024, 2, 29));
    }

    #[test]
    fn test_add_months_across_year() {
        assert_eq!(sunday().add_months(d(2025, 11, 15), 2), d(2026, 1, 15));
        assert_eq!(sunday().add_months(d(2025, 1, 10), -1), d(2024, 12, 10));
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        assert_eq!(sunday().add_months(d(2025, 1, 31), 1), d(2025, 2, 28));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(sunday().days_in_month(2025, 1), 31);
        assert_eq!(sunday().days_in_month(2025, 2), 28);
        assert_eq!(sunday().days_in_month(2024, 2), 29);
        assert_eq!(sunday().days_in_month(2025, 4), 30);
        assert_eq!(sunday().days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_format_and_parse() {
        let at = d(2025, 11, 10).and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(sunday().format(at, "%Y-%m-%d %H:%M"), "2025-11-10 09:00");
        assert_eq!(sunday().parse("2025-11-10 09:00", "%Y-%m-%d %H:%M"), Some(at));
    }

    #[test]
    fn test_parse_date_only_pattern_gives_midnight() {
        let parsed = sunday().parse("2025-11-10", "%Y-%m-%d").unwrap();
        assert_eq!(parsed, d(2025, 11, 10).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(sunday().parse("garbage", "%Y-%m-%d"), None);
    }

    #[test]
    fn test_weekday_headers_follow_week_start() {
        assert_eq!(sunday().weekday_headers(), ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]);
        assert_eq!(monday().weekday_headers(), ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
    }
}
