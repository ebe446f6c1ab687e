//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as WorkerEvent;
use crate::navigation::Section;
use crate::slots::DisplaySlots;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// Whether a workbook load is currently running
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingState {
    Idle,
    Active { started_at: Instant },
}

/// Dashboard state rebuilt from the shared slots and worker events each frame.
#[derive(Debug)]
pub struct DashboardState {
    /// Where the workbook is fetched from.
    pub source: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Section currently shown.
    pub active_section: Section,
    /// Latest copy of the three cards.
    pub slots: DisplaySlots,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Timestamp of the last successful load
    last_update_timestamp: Option<String>,
    loading_state: LoadingState,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(start_time: Instant, active_section: Section, ui_config: UIConfig) -> Self {
        Self {
            source: ui_config.source,
            start_time,
            active_section,
            slots: DisplaySlots::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            last_update_timestamp: None,
            loading_state: LoadingState::Idle,
        }
    }

    pub fn loading_state(&self) -> &LoadingState {
        &self.loading_state
    }

    pub fn set_loading_state(&mut self, state: LoadingState) {
        self.loading_state = state;
    }

    pub fn last_update_timestamp(&self) -> &Option<String> {
        &self.last_update_timestamp
    }

    pub fn set_last_update_timestamp(&mut self, timestamp: Option<String>) {
        self.last_update_timestamp = timestamp;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
