//! Media loading seam for the modal.
//!
//! The modal never touches the filesystem directly; it goes through
//! [`MediaLoader`] so the transport stays swappable and tests can script
//! outcomes. The production loader resolves sources against the assets
//! directory and hands media to the webview as data URIs.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;
use tracing::debug;

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{MediaKind, MediaRequest};

/// Fixed fallback shown when an image fails to load. Embedded so it can
/// never itself fail to load.
pub const FALLBACK_IMAGE_URI: &str = "data:image/png;base64,\
iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

/// Media ready for display.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedMedia {
    Image { data_uri: String },
    Video { data_uri: String },
}

/// Resolves a [`MediaRequest`] into displayable media.
#[async_trait]
pub trait MediaLoader: Send + Sync {
    async fn load(&self, request: &MediaRequest) -> PortfolioResult<LoadedMedia>;
}

/// Loads media from files under an assets directory.
///
/// Images are decoded to verify they are displayable before being
/// re-encoded as data URIs; videos are probed for existence and a
/// playable extension, then inlined the same way.
pub struct FsMediaLoader {
    assets_dir: PathBuf,
}

impl FsMediaLoader {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    /// Absolute sources pass through; relative ones resolve against the
    /// assets directory.
    fn resolve(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.assets_dir.join(path)
        }
    }
}

#[async_trait]
impl MediaLoader for FsMediaLoader {
    async fn load(&self, request: &MediaRequest) -> PortfolioResult<LoadedMedia> {
        let path = self.resolve(&request.source);
        debug!(source = %request.source, kind = %request.kind, "loading media");

        match request.kind {
            MediaKind::Image => {
                let bytes = tokio::fs::read(&path).await?;
                // Decode up front so a corrupt file fails here, not in the webview.
                image::load_from_memory(&bytes)?;
                let mime = image_mime(&path);
                let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                Ok(LoadedMedia::Image {
                    data_uri: format!("data:{};base64,{}", mime, encoded),
                })
            }
            MediaKind::Video => {
                let mime = video_mime(&path)
                    .ok_or_else(|| PortfolioError::UnsupportedMedia(request.source.clone()))?;
                let bytes = tokio::fs::read(&path).await?;
                if bytes.is_empty() {
                    return Err(PortfolioError::EmptyMedia(request.source.clone()));
                }
                let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                Ok(LoadedMedia::Video {
                    data_uri: format!("data:{};base64,{}", mime, encoded),
                })
            }
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn image_mime(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

fn video_mime(path: &Path) -> Option<&'static str> {
    match extension(path).as_deref() {
        Some("mp4") | Some("m4v") => Some("video/mp4"),
        Some("webm") => Some("video/webm"),
        Some("mov") => Some("video/quicktime"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_extensions_all_have_mimes() {
        for ext in ["mp4", "webm", "mov", "m4v", "MP4"] {
            assert!(video_mime(Path::new(&format!("clip.{}", ext))).is_some());
        }
        assert!(video_mime(Path::new("clip.txt")).is_none());
        assert!(video_mime(Path::new("clip")).is_none());
    }

    #[test]
    fn test_fallback_is_a_decodable_png() {
        let encoded = FALLBACK_IMAGE_URI
            .strip_prefix("data:image/png;base64,")
            .expect("fallback must be a png data uri");
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .expect("fallback must be valid base64");
        image::load_from_memory(&bytes).expect("fallback must decode");
    }
}
