use crate::data::{AppSettings, ViewMode};
use crate::ui::calendar_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::Local;
use tracing::info;

pub fn run(view: Option<ViewMode>) -> Result<()> {
    let mut settings = AppSettings::load()?;
    if let Some(view) = view {
        settings.default_view = view;
    }

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let now = Local::now().naive_local();
    info!(view = ?settings.default_view, "calendar page opened");
    let mut app = App::new(settings, now);

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    info!(events = app.state.events.len(), "calendar page closed");

    result
}
