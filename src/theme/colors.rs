//! Color constants for the portfolio palette.
//!
//! Deep-night backgrounds with a cyan main color and a violet accent.

#![allow(dead_code)]

// === NIGHT (Backgrounds) ===
pub const NIGHT: &str = "#0b1120";
pub const NIGHT_RAISED: &str = "#111a2c";
pub const NIGHT_BORDER: &str = "#1d2a40";

// === MAIN (Links, Buttons, Highlights) ===
pub const MAIN: &str = "#00abf0";
pub const MAIN_GLOW: &str = "rgba(0, 171, 240, 0.35)";

// === ACCENT (Gradients, Caret) ===
pub const ACCENT: &str = "#7a5cff";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ededed";
pub const TEXT_SECONDARY: &str = "rgba(237, 237, 237, 0.7)";
pub const TEXT_MUTED: &str = "rgba(237, 237, 237, 0.45)";

// === SEMANTIC ===
pub const SUCCESS: &str = "#2ecc71";
pub const WARNING: &str = "#f39c12";
pub const DANGER: &str = "#e74c3c";
pub const INFO: &str = "#3498db";
