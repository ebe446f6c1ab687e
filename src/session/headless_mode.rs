//! Headless mode execution

use super::{SessionData, join_background_tasks};
use crate::cli_messages;
use crate::navigation::Section;
use crate::workers::loader::LoadOutcome;
use std::error::Error;

/// Runs the application in headless mode
///
/// The analytics section is treated as permanently visible: one load runs
/// immediately and the refresh timer repeats it. Events are printed to the
/// console until Ctrl+C.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    cli_messages::session_starting("headless", &session.source);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    if let Some(first_load) = session.navigator.select(Section::Graphic).await {
        let source = session.source.clone();
        tokio::spawn(async move {
            if let Ok(LoadOutcome::Completed(metrics)) = first_load.await {
                cli_messages::dashboard_loaded(&source, &metrics);
            }
        });
    }

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    cli_messages::session_stopping(&session.source);
    join_background_tasks(session.join_handles).await;
    cli_messages::session_finished();

    Ok(())
}
