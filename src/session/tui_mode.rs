//! TUI mode execution

use super::{SessionData, join_background_tasks};
use crate::cli_messages;
use crate::ui::{self, UIConfig};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::error::Error;
use std::io::{self, Stdout};

type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switch to raw mode on the alternate screen.
fn enter_terminal() -> io::Result<DashboardTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Give the terminal back to the shell.
fn restore_terminal(terminal: &mut DashboardTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Runs the dashboard in the terminal until the user quits.
///
/// The refresh timer is stopped through the session's shutdown channel when
/// the UI loop returns, and the terminal is restored even when drawing failed.
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let SessionData {
        event_receiver,
        join_handles,
        shutdown_sender,
        navigator,
        slots,
        source,
    } = session;

    let mut terminal = enter_terminal()?;
    let app = ui::App::new(
        navigator,
        slots,
        event_receiver,
        shutdown_sender.clone(),
        UIConfig::new(with_background, source.clone()),
    );
    let result = ui::run(&mut terminal, app).await;
    restore_terminal(&mut terminal)?;
    result?;

    cli_messages::session_stopping(&source);
    let _ = shutdown_sender.send(());
    join_background_tasks(join_handles).await;
    cli_messages::session_finished();
    Ok(())
}
