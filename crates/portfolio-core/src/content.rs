//! Portfolio content model.
//!
//! The built-in manifest covers the shipped portfolio; `--content`
//! swaps in a JSON file with the same shape. Content is read-only at
//! runtime.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;
use crate::types::{MediaKind, MediaRequest};

/// Who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    /// Phrases cycled by the hero typing line
    pub professions: Vec<String>,
}

/// The render attached to a practical work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSource {
    pub kind: MediaKind,
    pub source: String,
}

/// One practical work (TP) card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticalWork {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub render: MediaSource,
    /// Repository the "view repository" action opens
    #[serde(default)]
    pub repository_url: Option<String>,
    /// Bundled archive the "download project" action copies out
    #[serde(default)]
    pub archive_source: Option<String>,
    /// Report the "view report" action opens
    #[serde(default)]
    pub report_url: Option<String>,
}

impl PracticalWork {
    /// The modal request for this work's render.
    pub fn media_request(&self) -> MediaRequest {
        MediaRequest {
            title: self.title.clone(),
            kind: self.render.kind,
            source: self.render.source.clone(),
        }
    }
}

/// One service card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

/// One contact row. `href` opens externally; `value` is what the copy
/// button puts on the clipboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// Everything the pages render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub works: Vec<PracticalWork>,
    pub services: Vec<Service>,
    pub channels: Vec<ContactChannel>,
}

impl PortfolioContent {
    /// Parse a manifest from JSON.
    pub fn from_json_str(json: &str) -> PortfolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn from_json_file(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The shipped portfolio.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Seif El Islam".to_string(),
                headline: "Frontend & 3D Designer".to_string(),
                summary: "I build interfaces and render worlds. Frontend work \
                          with an eye for motion, and 3D scenes modeled, shaded \
                          and lit in Blender."
                    .to_string(),
                professions: vec![
                    "Frontend Developer".to_string(),
                    "3D Designer".to_string(),
                    "UI/UX Designer".to_string(),
                    "Blender Artist".to_string(),
                ],
            },
            works: vec![
                PracticalWork {
                    title: "Modern Loft Interior".to_string(),
                    description: "Interior scene modeled and rendered in Blender; \
                                  furniture, materials and lighting built from \
                                  reference photography."
                        .to_string(),
                    tags: vec!["Blender".to_string(), "Cycles".to_string()],
                    render: MediaSource {
                        kind: MediaKind::Image,
                        source: "renders/tp1-loft.png".to_string(),
                    },
                    repository_url: Some("https://github.com/seif-el-islam/tp1-loft".to_string()),
                    archive_source: Some("archives/tp1-loft.zip".to_string()),
                    report_url: Some(
                        "https://github.com/seif-el-islam/tp1-loft/blob/main/report.pdf"
                            .to_string(),
                    ),
                },
                PracticalWork {
                    title: "Product Turntable".to_string(),
                    description: "Animated product showcase: a 360° turntable \
                                  with studio lighting and depth of field, \
                                  rendered as a short clip."
                        .to_string(),
                    tags: vec!["Blender".to_string(), "Animation".to_string()],
                    render: MediaSource {
                        kind: MediaKind::Video,
                        source: "renders/tp2-turntable.mp4".to_string(),
                    },
                    repository_url: Some(
                        "https://github.com/seif-el-islam/tp2-turntable".to_string(),
                    ),
                    archive_source: Some("archives/tp2-turntable.zip".to_string()),
                    report_url: None,
                },
            ],
            services: vec![
                Service {
                    title: "Frontend Development".to_string(),
                    description: "Responsive, animated interfaces with careful \
                                  attention to transitions and perceived speed."
                        .to_string(),
                },
                Service {
                    title: "3D Modeling & Rendering".to_string(),
                    description: "Scenes, products and environments modeled in \
                                  Blender and rendered for web or print."
                        .to_string(),
                },
                Service {
                    title: "UI/UX Design".to_string(),
                    description: "Interface design from wireframe to polished \
                                  mockup, grounded in how the page will actually \
                                  move."
                        .to_string(),
                },
            ],
            channels: vec![
                ContactChannel {
                    label: "Email".to_string(),
                    value: "seif.elislam@example.com".to_string(),
                    href: Some("mailto:seif.elislam@example.com".to_string()),
                },
                ContactChannel {
                    label: "GitHub".to_string(),
                    value: "github.com/seif-el-islam".to_string(),
                    href: Some("https://github.com/seif-el-islam".to_string()),
                },
                ContactChannel {
                    label: "LinkedIn".to_string(),
                    value: "linkedin.com/in/seif-el-islam".to_string(),
                    href: Some("https://www.linkedin.com/in/seif-el-islam".to_string()),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_is_coherent() {
        let content = PortfolioContent::builtin();
        assert_eq!(content.profile.professions.len(), 4);
        assert!(!content.works.is_empty());
        for work in &content.works {
            assert!(!work.render.source.is_empty());
            let request = work.media_request();
            assert_eq!(request.title, work.title);
        }
    }

    #[test]
    fn test_manifest_parses_with_optional_fields_absent() {
        let json = r#"{
            "profile": {
                "name": "A",
                "headline": "B",
                "summary": "C",
                "professions": ["Dev"]
            },
            "works": [{
                "title": "W",
                "description": "D",
                "render": { "kind": "image", "source": "w.png" }
            }],
            "services": [],
            "channels": [{ "label": "Email", "value": "a@b.c" }]
        }"#;
        let content = PortfolioContent::from_json_str(json).unwrap();
        assert_eq!(content.works[0].render.kind, MediaKind::Image);
        assert!(content.works[0].repository_url.is_none());
        assert!(content.channels[0].href.is_none());
    }

    #[test]
    fn test_malformed_manifest_is_an_error() {
        assert!(PortfolioContent::from_json_str("{").is_err());
    }
}
