//! Console messages
//!
//! Everything the commands and the non-interactive sessions print outside the
//! terminal UI goes through here: one tagged, coloured line per message.
//! Lines about the workbook always name its locator.

use crate::metrics::AggregateMetrics;
use std::fmt::Display;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn tag(self) -> &'static str {
        match self {
            Tone::Info => "INFO",
            Tone::Warn => "WARN",
            Tone::Error => "ERROR",
            Tone::Success => "SUCCESS",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[1;36m",
            Tone::Warn => "\x1b[1;33m",
            Tone::Error => "\x1b[1;31m",
            Tone::Success => "\x1b[1;32m",
        }
    }
}

fn format_line(tone: Tone, text: impl Display) -> String {
    format!("{}[{}]\x1b[0m {}", tone.color(), tone.tag(), text)
}

fn emit(tone: Tone, text: impl Display) {
    println!("{}", format_line(tone, text));
}

/// `configure` stored a new workbook locator.
pub fn source_saved(source: &str, config_path: &Path) {
    emit(
        Tone::Success,
        format!("Source saved: {} ({})", source, config_path.display()),
    );
}

/// `configure` was given a path that does not exist yet.
pub fn source_not_found(path: &Path) {
    emit(
        Tone::Warn,
        format!(
            "Source {} does not exist; loads will show Error until it does",
            path.display()
        ),
    );
}

/// The configuration file exists but could not be read.
pub fn config_unreadable(config_path: &Path, reason: impl Display) {
    emit(
        Tone::Error,
        format!(
            "Ignoring unreadable configuration {}: {}",
            config_path.display(),
            reason
        ),
    );
}

pub fn config_cleared(config_path: &Path) {
    emit(
        Tone::Info,
        format!("Clearing configuration {}", config_path.display()),
    );
}

pub fn session_starting(mode: &str, source: &str) {
    emit(
        Tone::Info,
        format!("Starting {} dashboard for {}", mode, source),
    );
}

/// A load finished and the cards now show `metrics`.
pub fn dashboard_loaded(source: &str, metrics: &AggregateMetrics) {
    emit(Tone::Success, loaded_text(source, metrics));
}

fn loaded_text(source: &str, metrics: &AggregateMetrics) -> String {
    format!(
        "{}: {} técnicas, {} estados, {} municipios",
        source, metrics.techniques, metrics.states, metrics.municipalities
    )
}

pub fn session_stopping(source: &str) {
    emit(Tone::Info, format!("Stopping refresh of {}...", source));
}

pub fn session_finished() {
    emit(Tone::Success, "Atlas dashboard exited successfully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_tagged_and_reset_their_colour() {
        let line = format_line(Tone::Warn, "careful");
        assert!(line.starts_with("\x1b[1;33m[WARN]"));
        assert!(line.ends_with("\x1b[0m careful"));
    }

    #[test]
    fn loaded_text_names_the_source() {
        let metrics = AggregateMetrics {
            techniques: 3,
            states: 2,
            municipalities: 3,
        };
        assert_eq!(
            loaded_text("data.xlsx", &metrics),
            "data.xlsx: 3 técnicas, 2 estados, 3 municipios"
        );
    }
}
