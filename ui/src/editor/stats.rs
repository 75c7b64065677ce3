use dioxus::prelude::*;

use crate::core::format::format_average;
use crate::core::score::{METRIC_COUNT, SCORE_MAX};
use crate::core::state::ScorecardState;
use crate::t;

const MAX_TOTAL: u32 = SCORE_MAX as u32 * METRIC_COUNT as u32;

/// Total, average, status and automation level at a glance.
#[component]
pub fn QuickStats() -> Element {
    let state = use_context::<Signal<ScorecardState>>();
    let data = state.read().data.clone();
    let status = data.status();

    rsx! {
        section { class: "panel quick-stats",
            header { class: "panel__header",
                h2 { {t!("stats-title")} }
            }
            dl { class: "quick-stats__grid",
                div { class: "quick-stats__item",
                    dt { {t!("stats-total")} }
                    dd { "{data.total_score()}/{MAX_TOTAL}" }
                }
                div { class: "quick-stats__item",
                    dt { {t!("stats-average")} }
                    dd { "{format_average(data.average_score())}/{SCORE_MAX}" }
                }
                div { class: "quick-stats__item",
                    dt { {t!("stats-status")} }
                    dd {
                        span { class: "status-pill {status.css_class()}", "{status}" }
                    }
                }
                div { class: "quick-stats__item",
                    dt { {t!("stats-automation")} }
                    dd { "{data.automation_level()}%" }
                }
            }
        }
    }
}
