use super::calendar_grid::{CalendarProps, CalendarRenderer, TerminalCalendar};
use super::modal::render_modal;
use super::sidebar::{render_mini_month, render_roster};
use crate::calc::{add_days, events_in, CalendarLayout, ChronoDateMath, MiniMonth, Navigate};
use crate::data::{AppSettings, Event, ViewMode};
use crate::page::{event_style, AppState, EventForm, FormField, ModalState};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;
use tracing::debug;

const SIDEBAR_WIDTH: u16 = 26;
const MINI_MONTH_HEIGHT: u16 = 10;

// Toolbar pill colors
const PILL_ACTIVE: Color = Color::Rgb(66, 133, 244);
const PILL_BG: Color = Color::Rgb(40, 44, 52);

pub struct App {
    pub state: AppState,
    settings: AppSettings,
    math: ChronoDateMath,
    mini: MiniMonth,
    today: NaiveDate,
    /// Date the main grid is centred on and the cursor sits in.
    focus: NaiveDate,
    /// Time slot under the cursor in day and week views.
    cursor_slot: u32,
    /// Index into the events under the cursor, cycled with Tab.
    focused_event: Option<usize>,
    /// Selected row of the agenda view.
    agenda_cursor: usize,
    /// Create-form inputs; reset every time the modal closes.
    form: EventForm,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl App {
    pub fn new(settings: AppSettings, now: NaiveDateTime) -> Self {
        let math = ChronoDateMath::new(settings.week_start);
        let today = now.date();
        let state = AppState::seeded(now, settings.default_view);
        let mini = MiniMonth::new(today, settings.mini_month_padding, &math);
        let cursor_slot = CalendarLayout::new(
            &math,
            settings.effective_slot_minutes(),
            settings.effective_agenda_days(),
        )
        .slot_index_of(now.time());
        App {
            state,
            settings,
            math,
            mini,
            today,
            focus: today,
            cursor_slot,
            focused_event: None,
            agenda_cursor: 0,
            form: EventForm::default(),
            clock: local_now,
        }
    }

    fn layout(&self) -> CalendarLayout<'_> {
        CalendarLayout::new(
            &self.math,
            self.settings.effective_slot_minutes(),
            self.settings.effective_agenda_days(),
        )
    }

    /// Events the cursor is resting on, in display order.
    fn events_under_cursor(&self) -> Vec<&Event> {
        let layout = self.layout();
        match self.state.view {
            ViewMode::Agenda => layout
                .agenda(&self.state.events.events, self.focus)
                .into_iter()
                .skip(self.agenda_cursor)
                .take(1)
                .collect(),
            view => {
                let slot = layout.slot_at(view, self.focus, self.cursor_slot);
                events_in(&self.state.events.events, slot.start, slot.end)
            }
        }
    }

    fn focused_event_id(&self) -> Option<String> {
        let idx = self.focused_event?;
        self.events_under_cursor().get(idx).map(|e| e.id.clone())
    }

    fn set_focus(&mut self, date: NaiveDate) {
        self.focus = date;
        self.focused_event = None;
        self.agenda_cursor = 0;
        self.mini.sync(date, &self.math);
    }

    fn navigate(&mut self, action: Navigate) {
        let target = self
            .layout()
            .navigate(self.state.view, self.focus, action, self.today);
        self.set_focus(target);
    }

    fn move_slot(&mut self, delta: i64) {
        let last = self.layout().slots_per_day() as i64 - 1;
        self.cursor_slot = (self.cursor_slot as i64 + delta).clamp(0, last) as u32;
        self.focused_event = None;
    }

    fn move_agenda(&mut self, delta: i64) {
        let len = self
            .layout()
            .agenda(&self.state.events.events, self.focus)
            .len() as i64;
        if len == 0 {
            self.agenda_cursor = 0;
            return;
        }
        self.agenda_cursor = (self.agenda_cursor as i64 + delta).clamp(0, len - 1) as usize;
    }

    fn cycle_event_focus(&mut self) {
        let count = self.events_under_cursor().len();
        self.focused_event = match (count, self.focused_event) {
            (0, _) => None,
            (_, None) => Some(0),
            (n, Some(i)) if i + 1 < n => Some(i + 1),
            _ => None,
        };
    }

    /// Enter on the grid: open the focused event, or start creating over the
    /// slot under the cursor.
    fn activate(&mut self) {
        if self.state.view == ViewMode::Agenda {
            if let Some(event) = self.events_under_cursor().first().map(|e| (*e).clone()) {
                self.state.select_event(event);
            }
            return;
        }
        let focused = self
            .focused_event
            .and_then(|i| self.events_under_cursor().get(i).map(|e| (*e).clone()));
        match focused {
            Some(event) => self.state.select_event(event),
            None => {
                let slot = self
                    .layout()
                    .slot_at(self.state.view, self.focus, self.cursor_slot);
                self.state.select_slot(slot);
            }
        }
        self.form = EventForm::default();
    }

    fn close_modal(&mut self) {
        self.state.close_modal();
        self.form = EventForm::default();
        self.focused_event = None;
    }

    /// Follows the wall clock so the today marker and `t` survive midnight.
    fn refresh_today(&mut self) {
        self.today = (self.clock)().date();
    }

    /// The mini-month day-selection hook. The page does not act on it.
    fn on_mini_day_click(&self, date: NaiveDate) {
        if let Some(day) = self.mini.click_day(date, &self.math) {
            debug!(%day, "mini-month day clicked");
        }
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.refresh_today();
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if matches!(self.state.modal, ModalState::Creating { .. }) {
            self.handle_create_key(code);
            return false;
        }
        if let Some(id) = self.state.selected_event().map(|e| e.id.clone()) {
            match code {
                KeyCode::Delete | KeyCode::Char('x') => {
                    self.state.delete_event(&id);
                    self.close_modal();
                }
                KeyCode::Esc => self.close_modal(),
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Left if self.state.view != ViewMode::Agenda => {
                self.set_focus(add_days(self.focus, -1));
            }
            KeyCode::Right if self.state.view != ViewMode::Agenda => {
                self.set_focus(add_days(self.focus, 1));
            }
            KeyCode::Up => match self.state.view {
                ViewMode::Month => self.set_focus(add_days(self.focus, -7)),
                ViewMode::Week | ViewMode::Day => self.move_slot(-1),
                ViewMode::Agenda => self.move_agenda(-1),
            },
            KeyCode::Down => match self.state.view {
                ViewMode::Month => self.set_focus(add_days(self.focus, 7)),
                ViewMode::Week | ViewMode::Day => self.move_slot(1),
                ViewMode::Agenda => self.move_agenda(1),
            },
            KeyCode::Tab => self.cycle_event_focus(),
            KeyCode::Esc => self.focused_event = None,
            KeyCode::Enter => self.activate(),
            KeyCode::Char('n') => self.navigate(Navigate::Next),
            KeyCode::Char('p') => self.navigate(Navigate::Prev),
            KeyCode::Char('t') => self.navigate(Navigate::Today),
            KeyCode::Char('<') | KeyCode::Char(',') => self.mini.prev_month(&self.math),
            KeyCode::Char('>') | KeyCode::Char('.') => self.mini.next_month(&self.math),
            KeyCode::Char('o') => self.on_mini_day_click(self.focus),
            KeyCode::Char(c) => {
                if let Some(view) = ViewMode::from_hotkey(c) {
                    self.state.set_view(view);
                    self.focused_event = None;
                    self.agenda_cursor = 0;
                }
            }
            _ => {}
        }
        false
    }

    fn handle_create_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.close_modal(),
            KeyCode::Enter => {
                let now = (self.clock)();
                let color = self.form.color.hex();
                let title = self.form.title.clone();
                let description = self.form.description().map(str::to_string);
                if self
                    .state
                    .create_event(&title, description.as_deref(), Some(color), now)
                    .is_some()
                {
                    self.form = EventForm::default();
                }
            }
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Left if self.form.focus == FormField::Color => self.form.prev_color(),
            KeyCode::Right if self.form.focus == FormField::Color => self.form.next_color(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.input_char(c),
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        self.refresh_today();
        let size = f.area();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
            .split(size);

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(MINI_MONTH_HEIGHT), // mini-month
                Constraint::Min(3),                    // roster
            ])
            .split(columns[0]);
        render_mini_month(f, sidebar[0], &self.mini, &self.math, self.today);
        render_roster(f, sidebar[1], &self.settings.roster);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // toolbar
                Constraint::Min(8),    // calendar grid
                Constraint::Length(2), // key hints
            ])
            .split(columns[1]);
        self.render_toolbar(f, main[0]);

        let layout = self.layout();
        let focused_id = self.focused_event_id();
        let props = CalendarProps {
            events: &self.state.events.events,
            view: self.state.view,
            focus: self.focus,
            cursor_slot: self.cursor_slot,
            focused_event: focused_id.as_deref(),
            agenda_cursor: self.agenda_cursor,
            today: self.today,
            layout: &layout,
            style_of: &event_style,
        };
        TerminalCalendar.render(f, main[1], &props);
        self.render_help(f, main[2]);

        if self.state.is_modal_open() {
            render_modal(f, size, &self.state.modal, &self.form, &self.math);
        }
    }

    fn render_toolbar(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.settings.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  [t] Today  [p] Back  [n] Next   "),
        ];
        for view in ViewMode::ALL {
            let style = if view == self.state.view {
                Style::default()
                    .fg(Color::White)
                    .bg(PILL_ACTIVE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray).bg(PILL_BG)
            };
            spans.push(Span::styled(
                format!(" {} ({}) ", view.label(), view.hotkey()),
                style,
            ));
            spans.push(Span::raw(" "));
        }
        let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(p, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let hints = match self.state.view {
            ViewMode::Agenda => "↑↓=row  Enter=open event  q=quit",
            ViewMode::Month => "←→↑↓=day  Tab=event  Enter=open/new  </>=mini-month  q=quit",
            _ => "←→=day  ↑↓=slot  Tab=event  Enter=open/new  </>=mini-month  q=quit",
        };
        f.render_widget(
            Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
            area,
        );
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}
