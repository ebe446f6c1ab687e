//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::SPLASH_DURATION_MS;
use crate::events::Event as WorkerEvent;
use crate::navigation::{Navigator, Section};
use crate::slots::SharedSlots;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub source: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, source: String) -> Self {
        Self {
            with_background_color,
            source,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Section tabs and the analytics dashboard.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Owns the active section and triggers loads.
    navigator: Navigator,

    /// Cards written by the loader.
    slots: SharedSlots,

    /// Receives events from background tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Broadcasts shutdown signal to background tasks.
    shutdown_sender: broadcast::Sender<()>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        navigator: Navigator,
        slots: SharedSlots,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            current_screen: Screen::Splash,
            navigator,
            slots,
            event_receiver,
            shutdown_sender,
            ui_config,
        }
    }

    fn enter_dashboard(&mut self) {
        let state = DashboardState::new(
            self.start_time,
            self.navigator.active(),
            self.ui_config.clone(),
        );
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Handle a key press on the dashboard screen.
    async fn handle_dashboard_key(&mut self, code: KeyCode) {
        let active = self.navigator.active();
        let target = match code {
            KeyCode::Char(c) if c.is_ascii_digit() => Section::from_shortcut(c),
            KeyCode::Right | KeyCode::Tab => Some(active.next()),
            KeyCode::Left | KeyCode::BackTab => Some(active.previous()),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                // Load handles are detached; results reach the UI through the slots.
                let _ = self.navigator.reload().await;
                None
            }
            _ => None,
        };

        if let Some(section) = target {
            let _ = self.navigator.select(section).await;
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            let slots = app.slots.snapshot().await;
            state.update(slots, app.navigator.active());
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match &app.current_screen {
                    // Any key press will skip the splash screen
                    Screen::Splash => app.enter_dashboard(),
                    Screen::Dashboard(_) => app.handle_dashboard_key(key.code).await,
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
