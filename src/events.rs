//! Event System
//!
//! Types and implementations for background task events and logging

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Worker {
    /// Fetches the workbook and computes the dashboard metrics.
    Loader,
    /// Periodic trigger that re-runs the loader.
    RefreshTimer,
    /// Section switching driven by the user.
    Navigator,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Warning,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Loader, msg, event_type, log_level)
    }

    pub fn timer_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::RefreshTimer, msg, event_type, log_level)
    }

    pub fn navigator_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Navigator, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.worker, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_info_events_are_always_displayed() {
        let success = Event::loader_with_level("ok".into(), EventType::Success, LogLevel::Debug);
        let info = Event::timer_with_level("tick".into(), EventType::Refresh, LogLevel::Info);
        assert!(success.should_display());
        assert!(info.should_display());
    }

    #[test]
    fn display_includes_worker_and_message() {
        let event = Event::loader_with_level(
            "Workbook loaded".into(),
            EventType::Success,
            LogLevel::Info,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Success ["));
        assert!(rendered.ends_with("Loader: Workbook loaded"));
    }
}
