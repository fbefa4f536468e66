use crate::calc::{ChronoDateMath, DateMath, MiniMonth};
use crate::data::AppSettings;
use anyhow::{anyhow, Result};
use chrono::{Datelike, Local, NaiveDate};

pub fn run(month: Option<&str>) -> Result<()> {
    let settings = AppSettings::load()?;
    let math = ChronoDateMath::new(settings.week_start);
    let today = Local::now().date_naive();
    let anchor = match month {
        Some(m) => parse_month(m, &math)?,
        None => today,
    };
    let mini = MiniMonth::new(anchor, settings.mini_month_padding, &math);
    write_month(&mini, &math, today, &mut std::io::stdout())
}

/// Parses `YYYY-MM` into the first day of that month.
pub(crate) fn parse_month(text: &str, math: &dyn DateMath) -> Result<NaiveDate> {
    math.parse(&format!("{}-01", text.trim()), "%Y-%m-%d")
        .map(|dt| dt.date())
        .ok_or_else(|| anyhow!("invalid month '{}', expected YYYY-MM", text))
}

pub(crate) fn write_month<W: std::io::Write>(
    mini: &MiniMonth,
    math: &dyn DateMath,
    today: NaiveDate,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{:^27}", mini.title())?;
    let headers: Vec<String> = math.weekday_headers().iter().map(|h| format!("{h:>3}")).collect();
    writeln!(out, "{}", headers.join(" "))?;
    for row in mini.rows(math, today) {
        let cells: Vec<String> = row
            .iter()
            .map(|c| {
                let marker = if c.today {
                    "*"
                } else if c.other_month {
                    "."
                } else {
                    " "
                };
                format!("{:>2}{}", c.date.day(), marker)
            })
            .collect();
        writeln!(out, "{}", cells.join(" ").trim_end())?;
    }
    Ok(())
}
