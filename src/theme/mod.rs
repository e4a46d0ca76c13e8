//! Theme for the portfolio desktop.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
