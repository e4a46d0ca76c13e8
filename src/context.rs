//! Portfolio context for the component tree.
//!
//! The [`Portfolio`] facade is provided once by the `App` root; every
//! component reaches it through [`use_portfolio`]. Clones are cheap and
//! share all state.

use dioxus::prelude::*;
use portfolio_core::Portfolio;

/// Hook to access the shared [`Portfolio`] from context.
///
/// # Example
///
/// ```ignore
/// let portfolio = use_portfolio();
/// portfolio.notifier().notify("Opening repository...", NotificationLevel::Info);
/// ```
pub fn use_portfolio() -> Portfolio {
    use_context::<Portfolio>()
}
