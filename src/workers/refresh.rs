//! Refresh timer
//!
//! Re-runs the loader on a fixed period while the analytics section is the
//! visible one.

use super::core::EventSender;
use super::loader::DashboardLoader;
use crate::consts::cli_consts::refresh::refresh_interval;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::navigation::Visibility;
use log::debug;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Spawn the refresh timer. The first tick fires one full period after start.
pub fn spawn_refresh_timer(
    loader: Arc<DashboardLoader>,
    visibility: Visibility,
    event_sender: EventSender,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = refresh_interval();
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = ticker.tick() => {
                    if !visibility.is_analytics_visible() {
                        debug!("Refresh tick ignored, analytics section hidden");
                        continue;
                    }
                    event_sender
                        .send_timer_event(
                            "Refreshing dashboard data...".to_string(),
                            EventType::Refresh,
                            LogLevel::Info,
                        )
                        .await;
                    let loader = loader.clone();
                    tokio::spawn(async move {
                        loader.load().await;
                    });
                }
            }
        }
    })
}
