use super::{centered_rect, to_color};
use crate::calc::DateMath;
use crate::data::{ColorPreset, Event};
use crate::page::style::color_or_default;
use crate::page::{format_range, EventForm, FormField, ModalState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 14;

pub fn render_modal(
    f: &mut Frame,
    area: Rect,
    modal: &ModalState,
    form: &EventForm,
    math: &dyn DateMath,
) {
    let (title, lines) = match modal {
        ModalState::Closed => return,
        ModalState::Creating { slot } => (
            " New Event ",
            create_lines(&format_range(slot.start, slot.end, math), form),
        ),
        ModalState::Viewing { event } => (" Event ", view_lines(event, math)),
    };

    let rect = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    f.render_widget(Clear, rect);
    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().add_modifier(Modifier::BOLD)),
    );
    f.render_widget(p, rect);
}

fn label(text: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("{:<13}", text), style)
}

fn create_lines(range: &str, form: &EventForm) -> Vec<Line<'static>> {
    let cursor = |field: FormField| if form.focus == field { "_" } else { "" };
    let mut color_spans = vec![label("Color", form.focus == FormField::Color)];
    for preset in ColorPreset::ALL {
        let mut style = Style::default().fg(to_color(color_or_default(preset.hex())));
        if preset == form.color {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        color_spans.push(Span::styled(format!(" {} ", preset.label()), style));
        color_spans.push(Span::raw(" "));
    }

    let submit_style = if form.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    vec![
        Line::from(Span::styled(range.to_string(), Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(vec![
            label("Title", form.focus == FormField::Title),
            Span::raw(format!("{}{}", form.title, cursor(FormField::Title))),
        ]),
        Line::from(vec![
            label("Description", form.focus == FormField::Description),
            Span::raw(format!("{}{}", form.description, cursor(FormField::Description))),
        ]),
        Line::from(color_spans),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] Create", submit_style),
            Span::raw("   "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            "Tab/Shift+Tab=field  ←→=color",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn view_lines(event: &Event, math: &dyn DateMath) -> Vec<Line<'static>> {
    let swatch = Style::default().fg(to_color(color_or_default(event.color_or_default())));
    vec![
        Line::from(vec![
            Span::styled("● ", swatch),
            Span::styled(event.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format_range(event.start, event.end, math),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(
            event
                .description
                .clone()
                .unwrap_or_else(|| "No description.".to_string()),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Del/x] Delete",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("[Esc] Close", Style::default().fg(Color::DarkGray)),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{ChronoDateMath, Slot};
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(modal: &ModalState, form: &EventForm) -> String {
        let math = ChronoDateMath::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_modal(f, area, modal, form, &math)
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn slot() -> Slot {
        let day = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();
        Slot {
            start: day.and_hms_opt(9, 0, 0).unwrap(),
            end: day.and_hms_opt(10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_closed_modal_draws_nothing() {
        let out = draw(&ModalState::Closed, &EventForm::default());
        assert!(out.trim().is_empty());
    }

    #[test]
    fn test_create_modal_shows_range_and_fields() {
        let form = EventForm {
            title: "Demo".to_string(),
            ..EventForm::default()
        };
        let out = draw(&ModalState::Creating { slot: slot() }, &form);
        assert!(out.contains("New Event"));
        assert!(out.contains("Mon, Nov 10 2025, 09:00 – 10:00"));
        assert!(out.contains("Demo_"));
        assert!(out.contains("Green"));
        assert!(out.contains("[Enter] Create"));
    }

    #[test]
    fn test_view_modal_shows_event_and_delete() {
        let s = slot();
        let event = Event {
            id: "seed-1".to_string(),
            title: "Board meeting".to_string(),
            start: s.start,
            end: s.end,
            color: None,
            description: Some("Quarterly numbers".to_string()),
        };
        let out = draw(&ModalState::Viewing { event }, &EventForm::default());
        assert!(out.contains("Board meeting"));
        assert!(out.contains("Quarterly numbers"));
        assert!(out.contains("[Del/x] Delete"));
    }
}
