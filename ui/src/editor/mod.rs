//! Form widgets that mutate the shared [`ScorecardState`](crate::core::state::ScorecardState),
//! plus the live preview and quick stats that read it back.

mod chart_tab;
mod data_tab;
mod preview;
mod stats;
mod style_tab;

pub use chart_tab::ChartTab;
pub use data_tab::DataTab;
pub use preview::Preview;
pub use stats::QuickStats;
pub use style_tab::StyleTab;
