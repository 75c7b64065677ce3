//! The single live state triple the editor mutates and the renderers read.

use serde::{Deserialize, Serialize};

use super::score::ScoreModel;
use super::style::{ChartOptions, StyleConfig};

/// Everything needed to render a scorecard.
///
/// The editor holds one of these in a `Signal` provided through context;
/// renderers only ever see a shared reference to a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScorecardState {
    pub data: ScoreModel,
    pub style: StyleConfig,
    pub chart: ChartOptions,
}

impl ScorecardState {
    pub fn new(data: ScoreModel, style: StyleConfig, chart: ChartOptions) -> Self {
        Self { data, style, chart }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::FontFamily;

    #[test]
    fn defaults_match_startup_values() {
        let state = ScorecardState::default();
        assert_eq!(state.data.title, "Social Media Content Agent");
        assert_eq!(state.data.scores(), [4, 5, 4, 3, 4]);
        assert_eq!(state.style.primary_color, "#04EAFD");
        assert_eq!(state.style.font_family, FontFamily::Inter);
        assert!(state.chart.show_grid);
        assert!(!state.chart.show_legend);
        assert_eq!(state.chart.border_width, 2.5);
    }

    #[test]
    fn snapshot_serializes() {
        let json = serde_json::to_string(&ScorecardState::default()).unwrap();
        assert!(json.contains("\"custom_labels\""));
        let back: ScorecardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ScorecardState::default());
    }
}
