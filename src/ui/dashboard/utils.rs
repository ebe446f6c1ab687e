//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Loader => Color::Cyan,
        Worker::RefreshTimer => Color::Yellow,
        Worker::Navigator => Color::Gray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") {
        return "Failed to load dashboard data: network error".to_string();
    }
    if msg.contains("operation timed out") {
        return "Failed to load dashboard data: request timed out".to_string();
    }
    msg.to_string()
}

/// Format a duration in seconds as `Xh Ym Zs`, dropping leading zero units.
pub fn format_elapsed(secs: u64) -> String {
    if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_keeps_month_day_and_minutes() {
        assert_eq!(format_compact_timestamp("2026-10-18 09:05:41"), "10-18 09:05");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn transport_errors_are_shortened() {
        assert_eq!(
            clean_http_error_message(
                "Failed to load dashboard data: Resource unavailable: Transport error: error sending request for url (http://x/)"
            ),
            "Failed to load dashboard data: network error"
        );
        assert_eq!(clean_http_error_message("plain"), "plain");
    }

    #[test]
    fn elapsed_time_is_human_readable() {
        assert_eq!(format_elapsed(42), "42s");
        assert_eq!(format_elapsed(125), "2m 5s");
        assert_eq!(format_elapsed(3725), "1h 2m 5s");
    }
}
