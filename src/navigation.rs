//! Section navigation
//!
//! Tracks which section is visible and which control is active. Entering the
//! analytics section resets the cards and starts a load.

use crate::events::EventType;
use crate::logging::LogLevel;
use crate::workers::core::EventSender;
use crate::workers::loader::{DashboardLoader, LoadOutcome};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;

/// The content sections of the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::Display)]
pub enum Section {
    #[default]
    #[strum(to_string = "Mapas")]
    Maps,
    #[strum(to_string = "Gráficas")]
    Graphic,
    #[strum(to_string = "Información")]
    Info,
    #[strum(to_string = "Enviar")]
    Submit,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Maps,
        Section::Graphic,
        Section::Info,
        Section::Submit,
    ];

    /// Stable identifier of the control that selects this section.
    pub fn button_id(&self) -> &'static str {
        match self {
            Section::Maps => "btn-maps",
            Section::Graphic => "btn-graphic",
            Section::Info => "btn-info",
            Section::Submit => "btn-send",
        }
    }

    /// Stable identifier of the section itself.
    pub fn section_id(&self) -> &'static str {
        match self {
            Section::Maps => "maps-section",
            Section::Graphic => "graphic-section",
            Section::Info => "info-section",
            Section::Submit => "send-section",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Section bound to the 1-based number key, if any.
    pub fn from_shortcut(key: char) -> Option<Section> {
        let idx = key.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(idx).copied()
    }

    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Shared flag telling whether the analytics section is on screen.
#[derive(Debug, Clone, Default)]
pub struct Visibility {
    analytics: Arc<AtomicBool>,
}

impl Visibility {
    pub fn is_analytics_visible(&self) -> bool {
        self.analytics.load(Ordering::Acquire)
    }

    pub fn set_analytics_visible(&self, visible: bool) {
        self.analytics.store(visible, Ordering::Release);
    }
}

#[derive(Debug)]
pub struct Navigator {
    active: Section,
    visibility: Visibility,
    loader: Arc<DashboardLoader>,
    event_sender: EventSender,
}

impl Navigator {
    pub fn new(loader: Arc<DashboardLoader>, event_sender: EventSender) -> Self {
        Self {
            active: Section::default(),
            visibility: Visibility::default(),
            loader,
            event_sender,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.clone()
    }

    /// Show `section` and mark its control active.
    ///
    /// Selecting the analytics section, even when it is already shown,
    /// resets the cards to the placeholder and spawns a load whose handle is
    /// returned.
    pub async fn select(&mut self, section: Section) -> Option<JoinHandle<LoadOutcome>> {
        self.active = section;
        self.visibility
            .set_analytics_visible(section == Section::Graphic);
        self.event_sender
            .send_navigation_event(
                format!(
                    "Showing {} ({} via {})",
                    section,
                    section.section_id(),
                    section.button_id()
                ),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;

        if section != Section::Graphic {
            return None;
        }

        let loader = self.loader.clone();
        Some(tokio::spawn(async move { loader.load_fresh().await }))
    }

    /// Reload the dashboard if it is the visible section.
    pub async fn reload(&mut self) -> Option<JoinHandle<LoadOutcome>> {
        if self.active != Section::Graphic {
            return None;
        }
        self.select(Section::Graphic).await
    }
}
