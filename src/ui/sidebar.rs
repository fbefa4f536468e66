use super::{fit, to_color};
use crate::calc::{DateMath, MiniMonth};
use crate::data::RosterMember;
use crate::page::style::color_or_default;
use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const CELL_WIDTH: usize = 3;

pub fn render_mini_month(
    f: &mut Frame,
    area: Rect,
    mini: &MiniMonth,
    math: &dyn DateMath,
    today: NaiveDate,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("‹ {:^16} ›", mini.title()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(
            math.weekday_headers()
                .iter()
                .map(|h| Span::styled(fit(h, CELL_WIDTH), Style::default().fg(Color::DarkGray)))
                .collect::<Vec<_>>(),
        ),
    ];

    for row in mini.rows(math, today) {
        let spans: Vec<Span> = row
            .iter()
            .map(|cell| {
                let mut style = Style::default();
                if cell.other_month {
                    style = style.add_modifier(Modifier::DIM);
                }
                if cell.today {
                    style = style.fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD);
                }
                Span::styled(fit(&format!("{:>2}", cell.date.day()), CELL_WIDTH), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(p, area);
}

pub fn render_roster(f: &mut Frame, area: Rect, roster: &[RosterMember]) {
    let lines: Vec<Line> = roster
        .iter()
        .map(|m| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(to_color(color_or_default(&m.color)))),
                Span::raw(m.name.clone()),
            ])
        })
        .collect();
    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Talent "),
    );
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::ChronoDateMath;
    use crate::data::roster::default_roster;
    use crate::data::MiniMonthPadding;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_mini_month_renders_title_and_days() {
        let math = ChronoDateMath::default();
        let mini = MiniMonth::new(d(2025, 11, 10), MiniMonthPadding::MonthOnly, &math);
        let mut terminal = Terminal::new(TestBackend::new(26, 10)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_mini_month(f, area, &mini, &math, d(2025, 11, 10))
            })
            .unwrap();
        let out = buffer_text(&terminal);
        assert!(out.contains("November 2025"));
        assert!(out.contains("Su Mo Tu"));
        assert!(out.contains("30"));
    }

    #[test]
    fn test_roster_renders_every_name() {
        let roster = default_roster();
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_roster(f, area, &roster)
            })
            .unwrap();
        let out = buffer_text(&terminal);
        for m in &roster {
            assert!(out.contains(&m.name), "missing {}", m.name);
        }
    }
}
