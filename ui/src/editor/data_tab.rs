use dioxus::prelude::*;

use crate::core::score::{Metric, SCORE_MAX, SCORE_MIN};
use crate::core::state::ScorecardState;
use crate::t;

/// Title, use case, custom metric and the five labelled scores.
#[component]
pub fn DataTab() -> Element {
    let mut state = use_context::<Signal<ScorecardState>>();
    let snapshot = state.read().data.clone();

    rsx! {
        div { class: "editor-tab editor-tab--data",
            div { class: "field",
                label { class: "field__label", r#for: "title", {t!("data-title")} }
                input {
                    id: "title",
                    class: "field__input",
                    r#type: "text",
                    value: "{snapshot.title}",
                    placeholder: t!("data-title-placeholder"),
                    oninput: move |evt: FormEvent| state.write().data.title = evt.value(),
                }
            }

            div { class: "field",
                label { class: "field__label", r#for: "use-case", {t!("data-use-case")} }
                textarea {
                    id: "use-case",
                    class: "field__input",
                    rows: "2",
                    value: "{snapshot.use_case}",
                    placeholder: t!("data-use-case-placeholder"),
                    oninput: move |evt: FormEvent| state.write().data.use_case = evt.value(),
                }
            }

            div { class: "field",
                label { class: "field__label", r#for: "custom-metric", {t!("data-custom-metric")} }
                input {
                    id: "custom-metric",
                    class: "field__input",
                    r#type: "text",
                    value: "{snapshot.custom_metric}",
                    placeholder: t!("data-custom-metric-placeholder"),
                    oninput: move |evt: FormEvent| state.write().data.custom_metric = evt.value(),
                }
            }

            hr { class: "editor-tab__separator" }

            h4 { class: "editor-tab__heading", {t!("data-points")} }
            for metric in Metric::ALL {
                MetricRow {
                    key: "{metric.index()}",
                    metric,
                    label: snapshot.label(metric).to_string(),
                    score: snapshot.metric(metric),
                }
            }
        }
    }
}

#[component]
fn MetricRow(metric: Metric, label: String, score: u8) -> Element {
    let mut state = use_context::<Signal<ScorecardState>>();
    let placeholder = format!("{} {}", t!("data-label-placeholder"), metric.index() + 1);

    rsx! {
        div { class: "metric-row",
            div { class: "metric-row__header",
                input {
                    class: "field__input metric-row__label",
                    r#type: "text",
                    value: "{label}",
                    placeholder: placeholder,
                    oninput: move |evt: FormEvent| state.write().data.set_label(metric, evt.value()),
                }
                span { class: "metric-row__badge", "{score}/{SCORE_MAX}" }
            }
            input {
                class: "metric-row__slider",
                r#type: "range",
                min: "{SCORE_MIN}",
                max: "{SCORE_MAX}",
                step: "1",
                value: "{score}",
                oninput: move |evt: FormEvent| state.write().data.set_metric(metric, &evt.value()),
            }
        }
    }
}
