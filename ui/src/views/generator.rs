use dioxus::prelude::*;

use crate::editor::{ChartTab, DataTab, Preview, QuickStats, StyleTab};
use crate::export::ExportPanel;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorTab {
    Data,
    Style,
    Chart,
    Export,
}

impl EditorTab {
    const ALL: [EditorTab; 4] = [
        EditorTab::Data,
        EditorTab::Style,
        EditorTab::Chart,
        EditorTab::Export,
    ];

    fn label(self) -> String {
        match self {
            EditorTab::Data => t!("tab-data"),
            EditorTab::Style => t!("tab-style"),
            EditorTab::Chart => t!("tab-chart"),
            EditorTab::Export => t!("tab-export"),
        }
    }

    fn slug(self) -> &'static str {
        match self {
            EditorTab::Data => "data",
            EditorTab::Style => "style",
            EditorTab::Chart => "chart",
            EditorTab::Export => "export",
        }
    }
}

/// The whole generator: tabbed configuration on the left, preview and stats on the right.
#[component]
pub fn Generator() -> Element {
    // Subscribe to the global language code (if provided) so labels refresh on change.
    let _lang = try_use_context::<Signal<String>>().map(|code| code());
    let mut active = use_signal(|| EditorTab::Data);

    rsx! {
        section { class: "page page-generator",
            header { class: "page-generator__intro",
                h1 { {t!("generator-title")} }
                p { {t!("generator-subtitle")} }
            }

            div { class: "page-generator__columns",
                section { class: "panel editor",
                    header { class: "panel__header",
                        h2 { {t!("editor-title")} }
                    }
                    nav { class: "tabs", role: "tablist",
                        for tab in EditorTab::ALL {
                            button {
                                key: "{tab.slug()}",
                                r#type: "button",
                                role: "tab",
                                class: if active() == tab { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" },
                                aria_selected: active() == tab,
                                onclick: move |_| active.set(tab),
                                {tab.label()}
                            }
                        }
                    }
                    div { class: "tabs__content", role: "tabpanel",
                        {match active() {
                            EditorTab::Data => rsx! { DataTab {} },
                            EditorTab::Style => rsx! { StyleTab {} },
                            EditorTab::Chart => rsx! { ChartTab {} },
                            EditorTab::Export => rsx! { ExportPanel {} },
                        }}
                    }
                }

                div { class: "page-generator__side",
                    Preview {}
                    QuickStats {}
                }
            }
        }
    }
}
