use super::{fit, to_color};
use crate::calc::{events_in, events_on, CalendarLayout};
use crate::data::{Event, ViewMode};
use crate::page::EventStyle;
use chrono::{Datelike, NaiveDate, NaiveTime};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const TIME_GUTTER: usize = 6;

/// Everything the grid needs to draw one frame.
pub struct CalendarProps<'a> {
    pub events: &'a [Event],
    pub view: ViewMode,
    pub focus: NaiveDate,
    pub cursor_slot: u32,
    pub focused_event: Option<&'a str>,
    pub agenda_cursor: usize,
    pub today: NaiveDate,
    pub layout: &'a CalendarLayout<'a>,
    pub style_of: &'a dyn Fn(&Event) -> EventStyle,
}

/// Draws the main calendar grid. The page only hands over data and callbacks.
pub trait CalendarRenderer {
    fn render(&self, f: &mut Frame, area: Rect, props: &CalendarProps<'_>);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalCalendar;

impl CalendarRenderer for TerminalCalendar {
    fn render(&self, f: &mut Frame, area: Rect, props: &CalendarProps<'_>) {
        let block = Block::default().borders(Borders::ALL).title(format!(
            " {} ",
            props.layout.range_label(props.view, props.focus)
        ));
        let inner = block.inner(area);
        f.render_widget(block, area);

        match props.view {
            ViewMode::Month => render_month(f, inner, props),
            ViewMode::Week => render_timed(f, inner, props, &props.layout.week_days(props.focus)),
            ViewMode::Day => render_timed(f, inner, props, &[props.focus]),
            ViewMode::Agenda => render_agenda(f, inner, props),
        }
    }
}

fn event_span(props: &CalendarProps<'_>, event: &Event, text: &str, width: usize) -> Span<'static> {
    let policy = (props.style_of)(event);
    let mut style = Style::default()
        .fg(to_color(policy.foreground))
        .bg(to_color(policy.background));
    if props.focused_event == Some(event.id.as_str()) {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    // A pill: no border glyphs, just breathing room on both ends.
    let label = if policy.rounded {
        format!(" {} ", text)
    } else {
        text.to_string()
    };
    Span::styled(fit(&label, width), style)
}

fn render_month(f: &mut Frame, area: Rect, props: &CalendarProps<'_>) {
    let weeks = props.layout.month_weeks(props.focus);
    if area.height < 2 || area.width < 7 || weeks.is_empty() {
        return;
    }
    let col_w = area.width as usize / 7;
    let row_h = ((area.height as usize - 1) / weeks.len()).max(2);

    let header: Vec<Span> = props
        .layout
        .math
        .weekday_headers()
        .iter()
        .map(|h| Span::styled(fit(h, col_w), Style::default().add_modifier(Modifier::BOLD)))
        .collect();
    let mut lines = vec![Line::from(header)];

    for week in &weeks {
        for line_idx in 0..row_h {
            let spans: Vec<Span> = week
                .iter()
                .map(|date| month_cell_line(props, *date, line_idx, row_h - 1, col_w))
                .collect();
            lines.push(Line::from(spans));
        }
    }
    f.render_widget(Paragraph::new(lines), area);
}

/// One text line of a month cell: the day number first, then one event per line.
fn month_cell_line(
    props: &CalendarProps<'_>,
    date: NaiveDate,
    line_idx: usize,
    event_lines: usize,
    width: usize,
) -> Span<'static> {
    if line_idx == 0 {
        let mut style = Style::default();
        if (date.year(), date.month()) != (props.focus.year(), props.focus.month()) {
            style = style.add_modifier(Modifier::DIM);
        }
        if date == props.today {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if date == props.focus && props.focused_event.is_none() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        return Span::styled(fit(&format!("{:>2}", date.day()), width), style);
    }

    let events = events_on(props.events, date);
    let i = line_idx - 1;
    if events.len() > event_lines && i + 1 == event_lines {
        let hidden = events.len() - i;
        return Span::styled(
            fit(&format!("+{hidden} more"), width),
            Style::default().fg(Color::DarkGray),
        );
    }
    match events.get(i) {
        Some(e) => event_span(props, e, &e.title, width),
        None => Span::raw(" ".repeat(width)),
    }
}

/// First slot row shown so that the cursor stays roughly centred.
pub(crate) fn first_visible_slot(cursor: u32, rows: u32, total: u32) -> u32 {
    if rows >= total {
        0
    } else {
        cursor.saturating_sub(rows / 2).min(total - rows)
    }
}

fn render_timed(f: &mut Frame, area: Rect, props: &CalendarProps<'_>, days: &[NaiveDate]) {
    if area.height < 2 || days.is_empty() {
        return;
    }
    let col_w = (area.width as usize).saturating_sub(TIME_GUTTER) / days.len();

    let mut header = vec![Span::raw(" ".repeat(TIME_GUTTER))];
    for day in days {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if *day == props.today {
            style = style.fg(Color::Yellow);
        }
        header.push(Span::styled(fit(&day.format("%a %d").to_string(), col_w), style));
    }
    let mut lines = vec![Line::from(header)];

    let total = props.layout.slots_per_day();
    let rows = area.height as u32 - 1;
    let first = first_visible_slot(props.cursor_slot, rows, total);

    for slot_idx in first..(first + rows).min(total) {
        let mut spans = Vec::with_capacity(days.len() + 1);
        let label_at = props.layout.slot_at(props.view, days[0], slot_idx).start;
        spans.push(Span::styled(
            fit(&label_at.format("%H:%M").to_string(), TIME_GUTTER),
            Style::default().fg(Color::DarkGray),
        ));

        for day in days {
            let slot = props.layout.slot_at(props.view, *day, slot_idx);
            let here = events_in(props.events, slot.start, slot.end);
            let shown = here
                .iter()
                .find(|e| props.focused_event == Some(e.id.as_str()))
                .or_else(|| here.first());
            let is_cursor = *day == props.focus && slot_idx == props.cursor_slot;

            let span = match shown {
                Some(e) => {
                    // Title only where the block begins, or at the top edge.
                    let mut text = if e.start >= slot.start || slot_idx == first {
                        e.title.clone()
                    } else {
                        String::new()
                    };
                    if here.len() > 1 && !text.is_empty() {
                        text = format!("{} +{}", text, here.len() - 1);
                    }
                    event_span(props, e, &text, col_w)
                }
                None if is_cursor && props.focused_event.is_none() => Span::styled(
                    fit("", col_w),
                    Style::default().add_modifier(Modifier::REVERSED),
                ),
                None => Span::styled(fit("·", col_w), Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn agenda_time(event: &Event) -> String {
    let whole_days = event.start.time() == NaiveTime::MIN && event.end.time() == NaiveTime::MIN;
    if whole_days && event.end > event.start {
        "All day".to_string()
    } else {
        format!("{} – {}", event.start.format("%H:%M"), event.end.format("%H:%M"))
    }
}

fn render_agenda(f: &mut Frame, area: Rect, props: &CalendarProps<'_>) {
    let events = props.layout.agenda(props.events, props.focus);
    if events.is_empty() {
        f.render_widget(
            Paragraph::new("There are no events in this range.")
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Time").style(bold),
        Cell::from("Event").style(bold),
    ]);
    let event_width = (area.width as usize).saturating_sub(12 + 15 + 2);
    let rows: Vec<Row> = events
        .iter()
        .map(|e| {
            Row::new(vec![
                Cell::from(e.start.format("%a %b %d").to_string()),
                Cell::from(agenda_time(e)),
                Cell::from(Line::from(event_span(props, e, &e.title, event_width))),
            ])
        })
        .collect();

    let mut state = TableState::default();
    state.select(Some(props.agenda_cursor.min(events.len() - 1)));

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(15),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
    .highlight_symbol("> ");
    f.render_stateful_widget(table, area, &mut state);
}
