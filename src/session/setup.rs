//! Session setup and initialization

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::metrics::ColumnNames;
use crate::navigation::Navigator;
use crate::slots::SharedSlots;
use crate::source::ResourceLocator;
use crate::workers::core::EventSender;
use crate::workers::loader::DashboardLoader;
use crate::workers::refresh::spawn_refresh_timer;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for background task events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handles for background tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all background tasks
    pub shutdown_sender: broadcast::Sender<()>,
    /// Section state; starts on the maps section
    pub navigator: Navigator,
    /// Cards written by the loader
    pub slots: SharedSlots,
    /// Human readable workbook location
    pub source: String,
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Creates the event channel and the display slots
/// 2. Builds the loader for the configured source
/// 3. Starts the refresh timer, gated on the navigator's visibility
///
/// Must be called from within a tokio runtime.
pub fn setup_session(locator: &ResourceLocator, columns: ColumnNames) -> SessionData {
    let (sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let event_sender = EventSender::new(sender);

    let slots = SharedSlots::default();
    let loader = Arc::new(DashboardLoader::new(
        locator.source(),
        columns,
        slots.clone(),
        event_sender.clone(),
    ));
    let navigator = Navigator::new(loader.clone(), event_sender.clone());

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let timer = spawn_refresh_timer(
        loader.clone(),
        navigator.visibility(),
        event_sender,
        shutdown_sender.subscribe(),
    );

    SessionData {
        event_receiver,
        join_handles: vec![timer],
        shutdown_sender,
        navigator,
        slots,
        source: locator.to_string(),
    }
}
