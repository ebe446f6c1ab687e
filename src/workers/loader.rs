//! Dashboard loader
//!
//! Fetches the workbook, aggregates it, and publishes the result to the
//! display slots. Failures never escape `load`: they are logged and shown as
//! the error marker in every slot.

use super::core::EventSender;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::metrics::{AggregateMetrics, ColumnNames};
use crate::slots::SharedSlots;
use crate::source::WorkbookSource;
use crate::source::error::SourceError;
use crate::workbook::{self, ParseError};
use log::{debug, error, info, warn};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(#[from] SourceError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result of a single `load` call.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Metrics were computed and published.
    Completed(AggregateMetrics),
    /// The load failed and the slots show the error marker.
    Failed(LoadError),
    /// Another load was already in flight; nothing was done.
    Skipped,
}

impl LoadOutcome {
    #[cfg(test)]
    pub fn is_completed(&self) -> bool {
        matches!(self, LoadOutcome::Completed(_))
    }
}

pub struct DashboardLoader {
    source: Arc<dyn WorkbookSource>,
    columns: ColumnNames,
    slots: SharedSlots,
    event_sender: EventSender,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the load finishes, whichever way it ends.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl DashboardLoader {
    pub fn new(
        source: Arc<dyn WorkbookSource>,
        columns: ColumnNames,
        slots: SharedSlots,
        event_sender: EventSender,
    ) -> Self {
        Self {
            source,
            columns,
            slots,
            event_sender,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn slots(&self) -> &SharedSlots {
        &self.slots
    }

    /// Run one fetch → parse → aggregate → publish cycle.
    ///
    /// At most one load runs at a time; a call made while another is in
    /// flight returns [`LoadOutcome::Skipped`] without touching the slots.
    pub async fn load(&self) -> LoadOutcome {
        self.run(false).await
    }

    /// Like [`load`](Self::load), but first puts the cards back on the
    /// placeholder. The reset only happens once this call owns the in-flight
    /// flag; a skipped call leaves the cards to the load already running.
    pub async fn load_fresh(&self) -> LoadOutcome {
        self.run(true).await
    }

    async fn run(&self, reset: bool) -> LoadOutcome {
        let Some(_guard) = self.try_begin() else {
            debug!("Dashboard load already in flight, skipping request");
            self.event_sender
                .send_loader_event(
                    "Load already in progress - request skipped".to_string(),
                    EventType::Waiting,
                    LogLevel::Debug,
                )
                .await;
            return LoadOutcome::Skipped;
        };
        if reset {
            self.slots.reset().await;
        }

        let location = self.source.describe();
        debug!("Loading dashboard data from {}", location);
        self.event_sender
            .send_loader_event(
                format!("Loading workbook from {}", location),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        match self.fetch_and_aggregate().await {
            Ok(metrics) => {
                self.slots.publish(&metrics).await;
                info!(
                    "Dashboard data updated: {} techniques, {} states, {} municipalities",
                    metrics.techniques, metrics.states, metrics.municipalities
                );
                self.event_sender
                    .send_loader_event(
                        format!(
                            "Dashboard updated: {} técnicas, {} estados, {} municipios",
                            metrics.techniques, metrics.states, metrics.municipalities
                        ),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                LoadOutcome::Completed(metrics)
            }
            Err(e) => {
                self.slots.fail().await;
                error!("Error loading dashboard data: {}", e);
                self.event_sender
                    .send_loader_event(
                        format!("Failed to load dashboard data: {}", e),
                        EventType::Error,
                        LogLevel::Error,
                    )
                    .await;
                LoadOutcome::Failed(e)
            }
        }
    }

    fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(&self.in_flight))
    }

    async fn fetch_and_aggregate(&self) -> Result<AggregateMetrics, LoadError> {
        let bytes = self.source.fetch().await?;
        let sheet = workbook::read_first_sheet(bytes)?;
        debug!(
            "Read {} rows from sheet '{}'",
            sheet.rows.len(),
            sheet.name
        );

        // Absent columns count as zero; only report them.
        let missing = self.columns.missing_from(&sheet.headers);
        if !missing.is_empty() {
            let names = missing.join(", ");
            warn!("Sheet '{}' has no column named {}", sheet.name, names);
            self.event_sender
                .send_loader_event(
                    format!("Column not found, counted as 0: {}", names),
                    EventType::Warning,
                    LogLevel::Warn,
                )
                .await;
        }

        Ok(AggregateMetrics::compute(&sheet.rows, &self.columns))
    }
}

impl fmt::Debug for DashboardLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardLoader")
            .field("source", &self.source.describe())
            .field("columns", &self.columns)
            .field("in_flight", &self.in_flight.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
