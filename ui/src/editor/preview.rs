use dioxus::prelude::*;

use crate::core::state::ScorecardState;
use crate::render::{card_size, render_card_svg};
use crate::t;

/// Live preview of the card exactly as the PNG export captures it.
#[component]
pub fn Preview() -> Element {
    let state = use_context::<Signal<ScorecardState>>();
    let snapshot = state.read();
    let (width, height) = card_size(&snapshot);
    let markup = render_card_svg(&snapshot);

    rsx! {
        section { class: "panel preview",
            header { class: "panel__header",
                h2 { {t!("preview-title")} }
                span { class: "panel__meta", "{width} × {height}" }
            }
            div { class: "preview__stage",
                div {
                    class: "preview__card",
                    style: "width: {width}px; height: {height}px;",
                    dangerous_inner_html: "{markup}",
                }
            }
        }
    }
}
