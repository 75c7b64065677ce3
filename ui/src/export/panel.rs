use std::time::Duration;

use dioxus::prelude::*;
use tracing::{error, warn};

use crate::core::platform;
use crate::core::state::ScorecardState;
use crate::render::ExportFormat;
use crate::t;

use super::{perform_copy, perform_export, Delivery};

const COPIED_RESET: Duration = Duration::from_secs(2);

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(ExportFormat),
    Done(String),
    Error(String),
}

fn delivery_message(delivery: &Delivery) -> String {
    match delivery {
        Delivery::Download(filename) => {
            format!("{} {filename}", t!("export-download-started"))
        }
        #[cfg(not(target_arch = "wasm32"))]
        Delivery::Saved(path) => format!("{} {}", t!("export-saved-to"), path.display()),
    }
}

fn working_label(format: ExportFormat) -> String {
    match format {
        ExportFormat::Html => t!("export-working-html"),
        ExportFormat::Svg => t!("export-working-svg"),
        ExportFormat::Png => t!("export-working-png"),
    }
}

/// Export tab body: download buttons, clipboard copy and a status line.
#[component]
pub fn ExportPanel() -> Element {
    let state = use_context::<Signal<ScorecardState>>();
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);
    let copied = use_signal(|| false);

    let start_export = move |format: ExportFormat| {
        let mut status_signal = status;
        let mut busy_signal = busy;
        if busy_signal() {
            return;
        }
        busy_signal.set(true);
        status_signal.set(ExportStatus::Working(format));
        let snapshot = state.read().clone();

        let finish = move |outcome: Result<Delivery, super::ExportError>| {
            let mut status_signal = status_signal;
            let mut busy_signal = busy_signal;
            match outcome {
                Ok(delivery) => status_signal.set(ExportStatus::Done(delivery_message(&delivery))),
                Err(err) => {
                    error!(error = %err, format = format.extension(), "export failed");
                    status_signal.set(ExportStatus::Error(err.to_string()));
                }
            }
            busy_signal.set(false);
        };

        #[cfg(target_arch = "wasm32")]
        {
            platform::spawn_future(async move {
                finish(perform_export(format, snapshot).await);
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            finish(futures::executor::block_on(perform_export(format, snapshot)));
        }
    };

    let copy_handler = move |_| {
        let mut busy_signal = busy;
        if busy_signal() {
            return;
        }
        busy_signal.set(true);
        let snapshot = state.read().clone();

        let finish = move |outcome: Result<(), super::ExportError>| {
            let mut busy_signal = busy_signal;
            let mut copied_signal = copied;
            match outcome {
                Ok(()) => {
                    copied_signal.set(true);
                    platform::spawn_future(async move {
                        platform::sleep(COPIED_RESET).await;
                        copied_signal.set(false);
                    });
                }
                Err(err) => warn!(error = %err, "copy to clipboard failed"),
            }
            busy_signal.set(false);
        };

        #[cfg(target_arch = "wasm32")]
        {
            platform::spawn_future(async move {
                finish(perform_copy(snapshot).await);
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            finish(futures::executor::block_on(perform_copy(snapshot)));
        }
    };

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(format) => Some((
            "export-panel__status".to_string(),
            format!("{}…", working_label(*format)),
        )),
        ExportStatus::Done(message) => Some((
            "export-panel__status export-panel__status--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "export-panel__status export-panel__status--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let filename_stem = ExportFormat::Html
        .filename(&state.read())
        .trim_end_matches(".html")
        .to_string();

    rsx! {
        section { class: "export-panel",
            p { class: "export-panel__intro", {t!("export-intro")} }
            p { class: "export-panel__filename",
                span { class: "export-panel__filename-label", {t!("export-filename-label")} }
                code { "{filename_stem}.*" }
            }

            div { class: "export-panel__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: move |_| start_export(ExportFormat::Html),
                    {t!("export-html")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy(),
                    onclick: move |_| start_export(ExportFormat::Svg),
                    {t!("export-svg")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy(),
                    onclick: move |_| start_export(ExportFormat::Png),
                    {t!("export-png")}
                }
            }

            div { class: "export-panel__copy",
                button {
                    r#type: "button",
                    class: if copied() { "button button--ghost button--copied" } else { "button button--ghost" },
                    disabled: busy(),
                    onclick: copy_handler,
                    if copied() {
                        {t!("export-copied")}
                    } else {
                        {t!("export-copy-html")}
                    }
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}
