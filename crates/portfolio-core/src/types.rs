//! Core types shared by the navigator, modal and notifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base window title, used on the home section and as the fallback
/// for unmapped section keys.
pub const BASE_TITLE: &str = "Seif El Islam - Frontend & 3D Designer";

/// One logical page section among the fixed set.
///
/// Sections are static and declared up front; only their visibility
/// changes at runtime, and at most one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Tps,
    Services,
    Contact,
}

impl Section {
    /// All sections, in display order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Tps,
        Section::Services,
        Section::Contact,
    ];

    /// Parse a navigation key. Unknown keys are tolerated by callers,
    /// so this returns `None` rather than an error.
    pub fn from_key(key: &str) -> Option<Section> {
        match key {
            "home" => Some(Section::Home),
            "tps" => Some(Section::Tps),
            "services" => Some(Section::Services),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }

    /// The navigation key for this section.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Tps => "tps",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    /// Label shown on the nav link.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Tps => "Practical Works",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    /// Window title while this section is visible.
    pub fn document_title(&self) -> String {
        match self {
            Section::Home => BASE_TITLE.to_string(),
            Section::Tps => format!("Practical Works - {}", BASE_TITLE),
            Section::Services => format!("Services - {}", BASE_TITLE),
            Section::Contact => format!("Contact - {}", BASE_TITLE),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Window title for a possibly-absent visible section.
pub fn document_title(section: Option<Section>) -> String {
    section
        .map(|s| s.document_title())
        .unwrap_or_else(|| BASE_TITLE.to_string())
}

/// What kind of resource a media request points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Label used in the modal title ("Render" vs "Animation").
    pub fn render_label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Render",
            MediaKind::Video => "Animation",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// One-shot descriptor of the media to display in the modal.
///
/// Produced when a "view render" action fires and consumed immediately;
/// never retained after the modal closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRequest {
    /// Display title of the owning work
    pub title: String,
    /// Image or video
    pub kind: MediaKind,
    /// Source the loader resolves (a path under the assets directory)
    pub source: String,
}

/// Severity of a user-visible notification, determining its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Neutral informational message
    Info,
    /// Successful operation
    Success,
    /// Non-critical issue worth surfacing
    Warning,
    /// Failure that affects what the user asked for
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "info"),
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Warning => write!(f, "warning"),
            NotificationLevel::Error => write!(f, "error"),
        }
    }
}

/// A short-lived status toast. At most one exists at any instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Monotonic id, used to guard expiry timers against eviction races
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_key_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("blog"), None);
        assert_eq!(Section::from_key(""), None);
    }

    #[test]
    fn test_document_title_mapping() {
        assert_eq!(document_title(Some(Section::Home)), BASE_TITLE);
        assert_eq!(
            document_title(Some(Section::Services)),
            "Services - Seif El Islam - Frontend & 3D Designer"
        );
        assert_eq!(document_title(None), BASE_TITLE);
    }
}
