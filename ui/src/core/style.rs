//! Visual styling and chart rendering options.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::is_hex_color;

/// Inclusive numeric bounds for a form field, with the slider step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Parse, snap to the step and clamp. Unparseable input becomes `min`.
    pub fn parse(&self, input: &str) -> f64 {
        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => self.snap(value),
            _ => self.min,
        }
    }

    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

pub const BORDER_RADIUS_RANGE: FieldRange = FieldRange::new(0.0, 50.0, 1.0);
pub const CARD_WIDTH_RANGE: FieldRange = FieldRange::new(300.0, 1000.0, 1.0);
pub const CARD_HEIGHT_RANGE: FieldRange = FieldRange::new(400.0, 1200.0, 1.0);
pub const FONT_SIZE_RANGE: FieldRange = FieldRange::new(12.0, 24.0, 1.0);

pub const ANIMATION_RANGE: FieldRange = FieldRange::new(0.0, 3000.0, 100.0);
pub const POINT_RADIUS_RANGE: FieldRange = FieldRange::new(2.0, 12.0, 1.0);
pub const BORDER_WIDTH_RANGE: FieldRange = FieldRange::new(1.0, 5.0, 0.5);
pub const FILL_OPACITY_RANGE: FieldRange = FieldRange::new(0.0, 1.0, 0.05);

/// Selectable font families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    Inter,
    Arial,
    Helvetica,
    Georgia,
    TimesNewRoman,
    Roboto,
    OpenSans,
}

impl FontFamily {
    pub const ALL: [FontFamily; 7] = [
        FontFamily::Inter,
        FontFamily::Arial,
        FontFamily::Helvetica,
        FontFamily::Georgia,
        FontFamily::TimesNewRoman,
        FontFamily::Roboto,
        FontFamily::OpenSans,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Arial => "Arial",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Georgia => "Georgia",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Roboto => "Roboto",
            FontFamily::OpenSans => "Open Sans",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.name() == name)
    }

    /// Query value for the Google Fonts css2 endpoint (`Open+Sans`).
    pub fn css_query_name(self) -> String {
        self.name().replace(' ', "+")
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    Secondary,
    Background,
    Text,
}

impl ColorRole {
    pub const ALL: [ColorRole; 4] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Background,
        ColorRole::Text,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    BorderRadius,
    CardWidth,
    CardHeight,
    FontSize,
}

impl Dimension {
    pub fn range(self) -> FieldRange {
        match self {
            Dimension::BorderRadius => BORDER_RADIUS_RANGE,
            Dimension::CardWidth => CARD_WIDTH_RANGE,
            Dimension::CardHeight => CARD_HEIGHT_RANGE,
            Dimension::FontSize => FONT_SIZE_RANGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub border_radius: u32,
    pub card_width: u32,
    pub card_height: u32,
    pub font_size: u32,
    pub font_family: FontFamily,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            primary_color: "#04EAFD".to_string(),
            secondary_color: "#6AF66A".to_string(),
            background_color: "#FFFFFF".to_string(),
            text_color: "#2E2E32".to_string(),
            border_radius: 12,
            card_width: 600,
            card_height: 800,
            font_size: 16,
            font_family: FontFamily::Inter,
        }
    }
}

impl StyleConfig {
    pub fn color(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary_color,
            ColorRole::Secondary => &self.secondary_color,
            ColorRole::Background => &self.background_color,
            ColorRole::Text => &self.text_color,
        }
    }

    /// Accepts `#rrggbb` only; anything else leaves the current color.
    pub fn set_color(&mut self, role: ColorRole, value: &str) -> bool {
        let value = value.trim();
        if !is_hex_color(value) {
            return false;
        }
        let slot = match role {
            ColorRole::Primary => &mut self.primary_color,
            ColorRole::Secondary => &mut self.secondary_color,
            ColorRole::Background => &mut self.background_color,
            ColorRole::Text => &mut self.text_color,
        };
        *slot = value.to_string();
        true
    }

    pub fn dimension(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::BorderRadius => self.border_radius,
            Dimension::CardWidth => self.card_width,
            Dimension::CardHeight => self.card_height,
            Dimension::FontSize => self.font_size,
        }
    }

    pub fn set_dimension(&mut self, dimension: Dimension, input: &str) {
        let value = dimension.range().parse(input) as u32;
        let slot = match dimension {
            Dimension::BorderRadius => &mut self.border_radius,
            Dimension::CardWidth => &mut self.card_width,
            Dimension::CardHeight => &mut self.card_height,
            Dimension::FontSize => &mut self.font_size,
        };
        *slot = value;
    }

    pub fn set_font_family(&mut self, name: &str) -> bool {
        match FontFamily::from_name(name) {
            Some(family) => {
                self.font_family = family;
                true
            }
            None => false,
        }
    }

    /// Status badge corner radius (half the card radius).
    pub fn badge_radius(&self) -> u32 {
        (f64::from(self.border_radius) * 0.5).round() as u32
    }

    /// Footer box corner radius (three quarters of the card radius).
    pub fn footer_radius(&self) -> u32 {
        (f64::from(self.border_radius) * 0.75).round() as u32
    }

    /// Axis label size used by the interactive chart.
    pub fn point_label_size(&self) -> u32 {
        self.font_size.saturating_sub(3)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub show_grid: bool,
    pub show_labels: bool,
    pub show_legend: bool,
    pub animation_duration: u32,
    pub point_radius: u32,
    pub border_width: f64,
    pub fill_opacity: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_labels: true,
            show_legend: false,
            animation_duration: 1200,
            point_radius: 6,
            border_width: 2.5,
            fill_opacity: 0.15,
        }
    }
}

impl ChartOptions {
    pub fn set_animation_duration(&mut self, input: &str) {
        self.animation_duration = ANIMATION_RANGE.parse(input) as u32;
    }

    pub fn set_point_radius(&mut self, input: &str) {
        self.point_radius = POINT_RADIUS_RANGE.parse(input) as u32;
    }

    pub fn set_border_width(&mut self, input: &str) {
        self.border_width = BORDER_WIDTH_RANGE.parse(input);
    }

    pub fn set_fill_opacity(&mut self, input: &str) {
        // Two decimals keep 0.15 from drifting to 0.15000000000000002.
        let value = FILL_OPACITY_RANGE.parse(input);
        self.fill_opacity = (value * 100.0).round() / 100.0;
    }

    /// Fill opacity as a whole percentage for display.
    pub fn fill_percent(&self) -> u32 {
        (self.fill_opacity * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_clamp_to_documented_ranges() {
        let mut style = StyleConfig::default();
        style.set_dimension(Dimension::CardWidth, "5000");
        assert_eq!(style.card_width, 1000);
        style.set_dimension(Dimension::CardHeight, "100");
        assert_eq!(style.card_height, 400);
        style.set_dimension(Dimension::BorderRadius, "24");
        assert_eq!(style.border_radius, 24);
        style.set_dimension(Dimension::FontSize, "18.4");
        assert_eq!(style.font_size, 18);
    }

    #[test]
    fn malformed_dimension_falls_back_to_minimum() {
        let mut style = StyleConfig::default();
        style.set_dimension(Dimension::CardWidth, "wide");
        assert_eq!(style.card_width, 300);
        style.set_dimension(Dimension::FontSize, "");
        assert_eq!(style.font_size, 12);
    }

    #[test]
    fn invalid_color_keeps_previous() {
        let mut style = StyleConfig::default();
        assert!(!style.set_color(ColorRole::Primary, "#12"));
        assert_eq!(style.primary_color, "#04EAFD");
        assert!(style.set_color(ColorRole::Primary, "#112233"));
        assert_eq!(style.color(ColorRole::Primary), "#112233");
    }

    #[test]
    fn font_family_round_trips_by_name() {
        for family in FontFamily::ALL {
            assert_eq!(FontFamily::from_name(family.name()), Some(family));
        }
        assert_eq!(FontFamily::from_name("Comic Sans"), None);
        assert_eq!(FontFamily::TimesNewRoman.css_query_name(), "Times+New+Roman");
    }

    #[test]
    fn derived_radii_round_half_up() {
        let mut style = StyleConfig::default();
        style.border_radius = 13;
        assert_eq!(style.badge_radius(), 7);
        assert_eq!(style.footer_radius(), 10);
    }

    #[test]
    fn chart_options_snap_to_steps() {
        let mut options = ChartOptions::default();
        options.set_border_width("3.3");
        assert_eq!(options.border_width, 3.5);
        options.set_fill_opacity("0.42");
        assert_eq!(options.fill_opacity, 0.4);
        options.set_animation_duration("1250");
        assert_eq!(options.animation_duration, 1300);
        options.set_point_radius("40");
        assert_eq!(options.point_radius, 12);
        options.set_point_radius("nope");
        assert_eq!(options.point_radius, 2);
    }
}
