//! Practical work card with its four actions.
//!
//! "View render" feeds the media modal; the other three are thin
//! platform delegations (open URL, save-file dialog + copy) and always
//! surface a toast.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{MediaKind, NotificationLevel, PracticalWork};

use crate::context::use_portfolio;

fn archive_file_name(title: &str) -> String {
    let slug: Vec<String> = title
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.to_string())
        .collect();
    format!("{}.zip", slug.join("-"))
}

#[component]
pub fn WorkCard(work: PracticalWork) -> Element {
    let portfolio = use_portfolio();

    let view_render = use_callback({
        let portfolio = portfolio.clone();
        let work = work.clone();
        move |_: ()| {
            let portfolio = portfolio.clone();
            let request = work.media_request();
            spawn(async move {
                portfolio.modal().open(request).await;
            });
        }
    });

    let open_repository = use_callback({
        let portfolio = portfolio.clone();
        let url = work.repository_url.clone();
        move |_: ()| {
            let Some(url) = url.clone() else { return };
            portfolio
                .notifier()
                .notify("Opening repository...", NotificationLevel::Info);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open repository {}: {}", url, e);
                portfolio
                    .notifier()
                    .notify("Could not open the repository", NotificationLevel::Error);
            }
        }
    });

    let download_archive = use_callback({
        let portfolio = portfolio.clone();
        let work = work.clone();
        move |_: ()| {
            let Some(source) = work.archive_source.clone() else {
                return;
            };
            let portfolio = portfolio.clone();
            let title = work.title.clone();
            spawn(async move {
                portfolio.notifier().notify(
                    format!("Starting download for {}...", title),
                    NotificationLevel::Info,
                );

                let mut dialog =
                    rfd::AsyncFileDialog::new().set_file_name(archive_file_name(&title));
                if let Some(downloads) = dirs::download_dir() {
                    dialog = dialog.set_directory(downloads);
                }
                let Some(destination) = dialog.save_file().await else {
                    tracing::debug!("archive download cancelled");
                    return;
                };

                let from = crate::assets_dir().join(&source);
                match tokio::fs::copy(&from, destination.path()).await {
                    Ok(_) => {
                        tokio::time::sleep(Duration::from_millis(1000)).await;
                        portfolio.notifier().notify(
                            format!("{} archive saved.", title),
                            NotificationLevel::Success,
                        );
                    }
                    Err(e) => {
                        tracing::warn!("Archive copy failed from {:?}: {}", from, e);
                        portfolio.notifier().notify(
                            "Could not save the project archive",
                            NotificationLevel::Error,
                        );
                    }
                }
            });
        }
    });

    let view_report = use_callback({
        let portfolio = portfolio.clone();
        let work = work.clone();
        move |_: ()| {
            let Some(url) = work.report_url.clone() else {
                return;
            };
            portfolio.notifier().notify(
                format!("Opening report for {}...", work.title),
                NotificationLevel::Info,
            );
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open report {}: {}", url, e);
                portfolio
                    .notifier()
                    .notify("Could not open the report", NotificationLevel::Error);
            }
        }
    });

    let render_label = match work.render.kind {
        MediaKind::Image => "View Render",
        MediaKind::Video => "View Animation",
    };

    rsx! {
        article { class: "tp-card",
            div { class: "tp-card-body",
                h3 { class: "tp-title", "{work.title}" }
                p { class: "tp-description", "{work.description}" }
                div { class: "tp-tags",
                    for tag in work.tags.iter() {
                        span { key: "{tag}", class: "tp-tag", "{tag}" }
                    }
                }
            }
            div { class: "tp-actions",
                button {
                    class: "btn view-render",
                    onclick: move |_| view_render.call(()),
                    {render_label}
                }
                if work.repository_url.is_some() {
                    button {
                        class: "btn-outline",
                        onclick: move |_| open_repository.call(()),
                        "Repository"
                    }
                }
                if work.archive_source.is_some() {
                    button {
                        class: "btn-outline",
                        onclick: move |_| download_archive.call(()),
                        "Download"
                    }
                }
                if work.report_url.is_some() {
                    button {
                        class: "btn-outline",
                        onclick: move |_| view_report.call(()),
                        "Report"
                    }
                }
            }
        }
    }
}
