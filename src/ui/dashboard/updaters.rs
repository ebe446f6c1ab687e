//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::{DashboardState, LoadingState};

use crate::events::{Event as WorkerEvent, EventType, Worker};
use crate::navigation::Section;
use crate::slots::DisplaySlots;

use std::time::Instant;

impl DashboardState {
    /// Update the dashboard state with the latest slots, section, and events.
    pub fn update(&mut self, slots: DisplaySlots, active_section: Section) {
        self.tick += 1;
        self.slots = slots;
        self.active_section = active_section;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event.clone());
            self.process_event(&event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        if event.worker != Worker::Loader {
            return;
        }
        match event.event_type {
            EventType::Refresh => {
                if !matches!(self.loading_state(), LoadingState::Active { .. }) {
                    self.set_loading_state(LoadingState::Active {
                        started_at: Instant::now(),
                    });
                }
            }
            EventType::Success => {
                self.set_loading_state(LoadingState::Idle);
                self.set_last_update_timestamp(Some(event.timestamp.clone()));
            }
            EventType::Error => self.set_loading_state(LoadingState::Idle),
            EventType::Warning | EventType::Waiting => {}
        }
    }
}
