//! Scorecard data: the five rated metrics plus the derived summary values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest score a metric can hold.
pub const SCORE_MIN: u8 = 1;
/// Highest score a metric can hold; also the outer ring of the radar.
pub const SCORE_MAX: u8 = 5;
/// Number of rated metrics (and radar axes).
pub const METRIC_COUNT: usize = 5;

/// The five rated metrics, in fixed axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Autonomy,
    ToolUse,
    Reliability,
    CostEffectiveness,
    Creativity,
}

impl Metric {
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::Autonomy,
        Metric::ToolUse,
        Metric::Reliability,
        Metric::CostEffectiveness,
        Metric::Creativity,
    ];

    /// Axis position of this metric (0 = top, clockwise).
    pub fn index(self) -> usize {
        match self {
            Metric::Autonomy => 0,
            Metric::ToolUse => 1,
            Metric::Reliability => 2,
            Metric::CostEffectiveness => 3,
            Metric::Creativity => 4,
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Metric::Autonomy => "Autonomy",
            Metric::ToolUse => "Tool Use",
            Metric::Reliability => "Reliability",
            Metric::CostEffectiveness => "Cost-Effectiveness",
            Metric::Creativity => "Creativity",
        }
    }
}

/// Coarse classification derived from the average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    Monitoring,
    Review,
}

impl Status {
    /// Thresholds are inclusive at the lower bound.
    pub fn from_average(average: f64) -> Self {
        if average >= 4.0 {
            Status::Active
        } else if average >= 3.0 {
            Status::Monitoring
        } else {
            Status::Review
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
            Status::Monitoring => "MONITORING",
            Status::Review => "REVIEW",
        }
    }

    /// Badge modifier used by the quick-stats panel.
    pub fn css_class(self) -> &'static str {
        match self {
            Status::Active => "status-pill--active",
            Status::Monitoring => "status-pill--monitoring",
            Status::Review => "status-pill--review",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title, metrics and labels for one evaluated agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreModel {
    pub title: String,
    /// Collected alongside the title; not rendered into any artifact.
    pub use_case: String,
    autonomy: u8,
    tool_use: u8,
    reliability: u8,
    cost_effectiveness: u8,
    creativity: u8,
    pub custom_metric: String,
    pub custom_labels: [String; METRIC_COUNT],
}

impl Default for ScoreModel {
    fn default() -> Self {
        Self {
            title: "Social Media Content Agent".to_string(),
            use_case: "Automates social media posting and engagement".to_string(),
            autonomy: 4,
            tool_use: 5,
            reliability: 4,
            cost_effectiveness: 3,
            creativity: 4,
            custom_metric: String::new(),
            custom_labels: Metric::ALL.map(|metric| metric.default_label().to_string()),
        }
    }
}

impl ScoreModel {
    pub fn metric(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Autonomy => self.autonomy,
            Metric::ToolUse => self.tool_use,
            Metric::Reliability => self.reliability,
            Metric::CostEffectiveness => self.cost_effectiveness,
            Metric::Creativity => self.creativity,
        }
    }

    /// Store a raw form value, applying [`clamp_metric_input`].
    pub fn set_metric(&mut self, metric: Metric, input: &str) {
        self.set_metric_value(metric, clamp_metric_input(input));
    }

    pub fn set_metric_value(&mut self, metric: Metric, value: u8) {
        let value = value.clamp(SCORE_MIN, SCORE_MAX);
        let slot = match metric {
            Metric::Autonomy => &mut self.autonomy,
            Metric::ToolUse => &mut self.tool_use,
            Metric::Reliability => &mut self.reliability,
            Metric::CostEffectiveness => &mut self.cost_effectiveness,
            Metric::Creativity => &mut self.creativity,
        };
        *slot = value;
    }

    pub fn set_label(&mut self, metric: Metric, label: String) {
        self.custom_labels[metric.index()] = label;
    }

    pub fn label(&self, metric: Metric) -> &str {
        &self.custom_labels[metric.index()]
    }

    /// Scores in axis order.
    pub fn scores(&self) -> [u8; METRIC_COUNT] {
        Metric::ALL.map(|metric| self.metric(metric))
    }

    pub fn total_score(&self) -> u32 {
        self.scores().iter().map(|&score| u32::from(score)).sum()
    }

    pub fn average_score(&self) -> f64 {
        f64::from(self.total_score()) / METRIC_COUNT as f64
    }

    /// Integer percentage of the maximum possible total (20–100).
    pub fn automation_level(&self) -> u32 {
        let max_total = f64::from(SCORE_MAX) * METRIC_COUNT as f64;
        (f64::from(self.total_score()) / max_total * 100.0).round() as u32
    }

    pub fn status(&self) -> Status {
        Status::from_average(self.average_score())
    }

    pub fn has_custom_metric(&self) -> bool {
        !self.custom_metric.is_empty()
    }

    /// Footer headline: the custom override when set, otherwise the automation level.
    pub fn key_metric(&self) -> String {
        if self.has_custom_metric() {
            self.custom_metric.clone()
        } else {
            format!("{}% Automation", self.automation_level())
        }
    }

    /// Caption shown above the key metric.
    pub fn key_metric_label(&self) -> &'static str {
        if self.has_custom_metric() {
            "Key Metric"
        } else {
            "Automation Level"
        }
    }
}

/// Parse a metric from form input.
///
/// Unparseable or empty input becomes [`SCORE_MIN`]; it never keeps the previous value.
pub fn clamp_metric_input(input: &str) -> u8 {
    let parsed = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(f64::round)
        .unwrap_or(f64::from(SCORE_MIN));
    parsed.clamp(f64::from(SCORE_MIN), f64::from(SCORE_MAX)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(scores: [u8; METRIC_COUNT]) -> ScoreModel {
        let mut model = ScoreModel::default();
        for (metric, score) in Metric::ALL.into_iter().zip(scores) {
            model.set_metric_value(metric, score);
        }
        model
    }

    #[test]
    fn derived_values_hold_for_every_score_vector() {
        let range = SCORE_MIN..=SCORE_MAX;
        for a in range.clone() {
            for b in range.clone() {
                for c in range.clone() {
                    for d in range.clone() {
                        for e in range.clone() {
                            let model = model_with([a, b, c, d, e]);
                            let sum = u32::from(a + b + c + d + e);
                            assert_eq!(model.total_score(), sum);
                            assert_eq!(model.average_score(), f64::from(sum) / 5.0);
                            assert_eq!(
                                model.automation_level(),
                                (f64::from(sum) / 25.0 * 100.0).round() as u32
                            );
                            let avg = model.average_score();
                            let expected = if avg >= 4.0 {
                                Status::Active
                            } else if avg >= 3.0 {
                                Status::Monitoring
                            } else {
                                Status::Review
                            };
                            assert_eq!(model.status(), expected);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn status_thresholds_are_inclusive() {
        assert_eq!(Status::from_average(4.0), Status::Active);
        assert_eq!(Status::from_average(3.999), Status::Monitoring);
        assert_eq!(Status::from_average(3.0), Status::Monitoring);
        assert_eq!(Status::from_average(2.8), Status::Review);
    }

    #[test]
    fn perfect_scores_report_full_automation() {
        let model = model_with([5, 5, 5, 5, 5]);
        assert_eq!(model.total_score(), 25);
        assert_eq!(model.average_score(), 5.0);
        assert_eq!(model.automation_level(), 100);
        assert_eq!(model.status(), Status::Active);
        assert_eq!(model.key_metric(), "100% Automation");
        assert_eq!(model.key_metric_label(), "Automation Level");
    }

    #[test]
    fn custom_metric_overrides_key_metric() {
        let mut model = model_with([1, 1, 1, 1, 1]);
        model.custom_metric = "95% Accuracy".to_string();
        assert_eq!(model.status(), Status::Review);
        assert_eq!(model.key_metric(), "95% Accuracy");
        assert_eq!(model.key_metric_label(), "Key Metric");
    }

    #[test]
    fn metric_input_falls_back_to_minimum() {
        assert_eq!(clamp_metric_input("0"), 1);
        assert_eq!(clamp_metric_input("abc"), 1);
        assert_eq!(clamp_metric_input(""), 1);
        assert_eq!(clamp_metric_input("-3"), 1);
    }

    #[test]
    fn metric_input_clamps_high_values() {
        assert_eq!(clamp_metric_input("6"), 5);
        assert_eq!(clamp_metric_input("7"), 5);
        assert_eq!(clamp_metric_input("4.6"), 5);
    }

    #[test]
    fn metric_input_in_range_passes_through() {
        for value in SCORE_MIN..=SCORE_MAX {
            assert_eq!(clamp_metric_input(&value.to_string()), value);
        }
    }

    #[test]
    fn failed_parse_never_keeps_previous_value() {
        let mut model = ScoreModel::default();
        assert_eq!(model.metric(Metric::ToolUse), 5);
        model.set_metric(Metric::ToolUse, "not a number");
        assert_eq!(model.metric(Metric::ToolUse), 1);
    }

    #[test]
    fn labels_follow_metric_order() {
        let mut model = ScoreModel::default();
        model.set_label(Metric::Reliability, "Uptime".to_string());
        assert_eq!(model.custom_labels[2], "Uptime");
        assert_eq!(model.label(Metric::Autonomy), "Autonomy");
        assert_eq!(model.custom_labels.len(), METRIC_COUNT);
    }
}
