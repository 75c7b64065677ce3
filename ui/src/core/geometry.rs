//! Regular-pentagon radar layout.
//!
//! The SVG export and the preview card draw from these formulas directly.
//! The interactive chart inside the HTML export uses Chart.js' own radial
//! scale, configured (0–5 range, first axis up, clockwise) to land on the
//! same points.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::score::{METRIC_COUNT, SCORE_MAX};

/// First axis points straight up.
pub const START_ANGLE: f64 = -FRAC_PI_2;
/// Angle between neighbouring axes.
pub const ANGLE_STEP: f64 = TAU / METRIC_COUNT as f64;
/// Radius the label offset is specified against.
pub const REFERENCE_RADIUS: f64 = 160.0;
/// Label distance beyond the outer ring at [`REFERENCE_RADIUS`].
pub const REFERENCE_LABEL_OFFSET: f64 = 30.0;
/// Dead band around the center for picking label alignment.
const ANCHOR_TOLERANCE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Where and how to place one axis label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub position: Point,
    pub anchor: TextAnchor,
    /// Vertical nudge: -5 above the center, +15 below, +5 level.
    pub dy: i32,
}

/// Radar layout around `center` with outer radius `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center: Point,
    pub radius: f64,
}

impl RadarGeometry {
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            center: Point { x: cx, y: cy },
            radius,
        }
    }

    pub fn angle(index: usize) -> f64 {
        START_ANGLE + index as f64 * ANGLE_STEP
    }

    /// Distance from the outer ring to the label anchors.
    pub fn label_offset(&self) -> f64 {
        REFERENCE_LABEL_OFFSET * self.radius / REFERENCE_RADIUS
    }

    fn polar(&self, index: usize, distance: f64) -> Point {
        let angle = Self::angle(index);
        Point {
            x: self.center.x + angle.cos() * distance,
            y: self.center.y + angle.sin() * distance,
        }
    }

    /// Position of `score` on axis `index`.
    pub fn point(&self, index: usize, score: f64) -> Point {
        self.polar(index, score / f64::from(SCORE_MAX) * self.radius)
    }

    pub fn data_points(&self, scores: &[u8; METRIC_COUNT]) -> [Point; METRIC_COUNT] {
        std::array::from_fn(|index| self.point(index, f64::from(scores[index])))
    }

    /// Closed `M … L … Z` path through the score points.
    pub fn data_path(&self, scores: &[u8; METRIC_COUNT]) -> String {
        let mut path = self
            .data_points(scores)
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let command = if index == 0 { 'M' } else { 'L' };
                format!("{command} {} {}", point.x, point.y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        path.push_str(" Z");
        path
    }

    /// Concentric ring radii, innermost first.
    pub fn grid_rings(&self) -> [f64; METRIC_COUNT] {
        std::array::from_fn(|level| (level + 1) as f64 / f64::from(SCORE_MAX) * self.radius)
    }

    /// Outer end of each spoke (the start is always the center).
    pub fn spoke_ends(&self) -> [Point; METRIC_COUNT] {
        std::array::from_fn(|index| self.polar(index, self.radius))
    }

    pub fn label_anchors(&self) -> [LabelAnchor; METRIC_COUNT] {
        std::array::from_fn(|index| {
            let position = self.polar(index, self.radius + self.label_offset());
            let anchor = if position.x < self.center.x - ANCHOR_TOLERANCE {
                TextAnchor::End
            } else if position.x > self.center.x + ANCHOR_TOLERANCE {
                TextAnchor::Start
            } else {
                TextAnchor::Middle
            };
            let dy = if position.y < self.center.y - ANCHOR_TOLERANCE {
                -5
            } else if position.y > self.center.y + ANCHOR_TOLERANCE {
                15
            } else {
                5
            };
            LabelAnchor {
                position,
                anchor,
                dy,
            }
        })
    }
}
