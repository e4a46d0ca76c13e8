//! The `Portfolio` facade - wires the three machines together.
//!
//! Created once at startup and lives for the window's lifetime. The
//! modal shares the notifier so load outcomes surface as toasts.

use std::sync::Arc;

use crate::content::PortfolioContent;
use crate::media::MediaLoader;
use crate::modal::MediaModal;
use crate::navigator::Navigator;
use crate::notify::Notifier;

/// Owns the navigator, modal, notifier and content.
///
/// Cheap to clone; clones share all state.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use portfolio_core::{FsMediaLoader, Portfolio, PortfolioContent};
///
/// let portfolio = Portfolio::new(
///     PortfolioContent::builtin(),
///     Arc::new(FsMediaLoader::new("assets")),
/// );
/// portfolio.navigator().navigate_to("services").await;
/// ```
#[derive(Clone)]
pub struct Portfolio {
    navigator: Navigator,
    modal: MediaModal,
    notifier: Notifier,
    content: Arc<PortfolioContent>,
}

impl Portfolio {
    pub fn new(content: PortfolioContent, loader: Arc<dyn MediaLoader>) -> Self {
        let notifier = Notifier::new();
        Self {
            navigator: Navigator::new(),
            modal: MediaModal::new(loader, notifier.clone()),
            notifier,
            content: Arc::new(content),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn modal(&self) -> &MediaModal {
        &self.modal
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }
}
