#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{PortfolioContent, BASE_TITLE};

/// Content manifest, resolved from command line before launch
static CONTENT: OnceLock<PortfolioContent> = OnceLock::new();

/// Directory media sources and bundled archives resolve against
static ASSETS_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the portfolio content (manifest override or built-in)
pub fn content() -> PortfolioContent {
    CONTENT
        .get()
        .cloned()
        .unwrap_or_else(PortfolioContent::builtin)
}

/// Get the assets directory (set from command line or default)
pub fn assets_dir() -> PathBuf {
    ASSETS_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("assets"))
}

/// Portfolio desktop - sections, renders and contact in one window
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio as a desktop app")]
struct Args {
    /// Content manifest (JSON) overriding the built-in portfolio
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Directory render media and archives are read from
    #[arg(short, long)]
    assets_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let content = match args.content {
        Some(path) => match PortfolioContent::from_json_file(&path) {
            Ok(content) => {
                tracing::info!("Loaded content manifest from {:?}", path);
                content
            }
            Err(e) => {
                tracing::error!("Failed to load content manifest {:?}: {}", path, e);
                PortfolioContent::builtin()
            }
        },
        None => PortfolioContent::builtin(),
    };
    let _ = CONTENT.set(content);
    if let Some(dir) = args.assets_dir {
        let _ = ASSETS_DIR.set(dir);
    }

    tracing::info!("Starting portfolio desktop, assets dir: {:?}", assets_dir());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(BASE_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
