//! SVG layout of the on-screen preview card.
//!
//! The preview shows this document directly and the PNG export rasterizes
//! it, so what gets captured is exactly what is displayed.

use std::fmt::Write;

use crate::core::color::{alpha_hex, with_alpha, ALPHA_GRID, ALPHA_MUTED, ALPHA_SPOKE, ALPHA_TINT};
use crate::core::format::format_number;
use crate::core::geometry::{Point, RadarGeometry};
use crate::core::score::{METRIC_COUNT, SCORE_MAX};
use crate::core::state::ScorecardState;

use super::escape_markup;
use super::fonts::{measure, text_width, FontWeight};
use super::html::LEGEND_LABEL;

const PREVIEW_MAX_WIDTH: u32 = 500;
const PREVIEW_MAX_HEIGHT: u32 = 600;
const PADDING: f64 = 32.0;
const SECTION_GAP: f64 = 24.0;

const TITLE_SIZE: f64 = 20.0;
const BADGE_SIZE: f64 = 14.0;
const BADGE_PAD_X: f64 = 12.0;
const BADGE_PAD_Y: f64 = 4.0;
const BADGE_TRACKING: f64 = 0.025;
const TITLE_BADGE_GAP: f64 = 16.0;

const RADAR_PANEL_MAX: f64 = 300.0;
const RADAR_PANEL_MIN: f64 = 120.0;
const RADAR_MIN_RADIUS: f64 = 24.0;
const LEGEND_HEIGHT: f64 = 24.0;
const LEGEND_SWATCH: (f64, f64) = (40.0, 12.0);
const LEGEND_SIZE: f64 = 12.0;

const FOOTER_PAD: f64 = 24.0;
const FOOTER_LABEL_SIZE: f64 = 14.0;
const FOOTER_VALUE_SIZE: f64 = 24.0;
const FOOTER_LINE_GAP: f64 = 8.0;

/// Displayed card size in CSS pixels: the configured size capped at 500×600.
pub fn card_size(state: &ScorecardState) -> (u32, u32) {
    (
        state.style.card_width.min(PREVIEW_MAX_WIDTH),
        state.style.card_height.min(PREVIEW_MAX_HEIGHT),
    )
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Rect {
    fn bottom(&self) -> f64 {
        self.y + self.h
    }

    fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }
}

/// Resolved positions of every block on the card.
#[derive(Debug, Clone)]
struct CardLayout {
    width: f64,
    height: f64,
    title: Rect,
    badge: Rect,
    legend: Option<Rect>,
    radar: RadarGeometry,
    footer: Rect,
}

impl CardLayout {
    fn compute(state: &ScorecardState) -> Self {
        let (width, height) = card_size(state);
        let (width, height) = (f64::from(width), f64::from(height));
        let inner_width = width - 2.0 * PADDING;
        let status = state.data.status();

        let badge_text = text_width(FontWeight::Bold, BADGE_SIZE, status.as_str())
            + BADGE_TRACKING * BADGE_SIZE * status.as_str().len() as f64;
        let badge_h = measure(BADGE_SIZE).line_h + 2.0 * BADGE_PAD_Y;
        let badge_w = (badge_text + 2.0 * BADGE_PAD_X).round();
        let badge = Rect {
            x: width - PADDING - badge_w,
            y: PADDING,
            w: badge_w,
            h: badge_h,
        };

        let title_line = measure(TITLE_SIZE).line_h;
        let title = Rect {
            x: PADDING,
            y: PADDING,
            w: (inner_width - badge_w - TITLE_BADGE_GAP).max(0.0),
            h: title_line,
        };

        let header_bottom = title.bottom().max(badge.bottom());
        let footer_h = 2.0 * FOOTER_PAD
            + measure(FOOTER_LABEL_SIZE).line_h
            + FOOTER_LINE_GAP
            + measure(FOOTER_VALUE_SIZE).line_h;

        let panel_top = header_bottom + SECTION_GAP;
        let room = height - panel_top - SECTION_GAP - footer_h - PADDING;
        let panel_h = room.clamp(RADAR_PANEL_MIN, RADAR_PANEL_MAX);
        let radar_panel = Rect {
            x: PADDING,
            y: panel_top,
            w: inner_width,
            h: panel_h,
        };

        let legend = state.chart.show_legend.then(|| Rect {
            x: PADDING,
            y: panel_top,
            w: inner_width,
            h: LEGEND_HEIGHT,
        });
        let chart_top = legend.map_or(panel_top, |l| l.bottom());
        let chart_h = radar_panel.bottom() - chart_top;

        let radius = radar_radius(state, inner_width, chart_h);
        let radar = RadarGeometry::new(width / 2.0, chart_top + chart_h / 2.0, radius);

        let footer = Rect {
            x: PADDING,
            y: radar_panel.bottom() + SECTION_GAP,
            w: inner_width,
            h: footer_h,
        };

        Self {
            width,
            height,
            title,
            badge,
            legend,
            radar,
            footer,
        }
    }
}

/// Largest radius whose axis labels still fit inside the chart area.
fn radar_radius(state: &ScorecardState, width: f64, height: f64) -> f64 {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let radius = if state.chart.show_labels {
        let size = f64::from(state.style.point_label_size());
        let widest = state
            .data
            .custom_labels
            .iter()
            .map(|label| text_width(FontWeight::SemiBold, size, label))
            .fold(0.0, f64::max);
        // Label anchors sit at 1.1875·R; the side ones reach cos(18°) of that.
        let reach = 1.1875;
        let by_height = (half_h - size - 5.0) / reach;
        let by_width = (half_w - widest) / (reach * 18f64.to_radians().cos());
        by_height.min(by_width)
    } else {
        half_w.min(half_h) - f64::from(state.chart.point_radius) - 2.0
    };
    radius.max(RADAR_MIN_RADIUS)
}

/// Two decimals are plenty at 2× raster density.
fn px(value: f64) -> String {
    format_number((value * 100.0).round() / 100.0)
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", px(p.x), px(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_card_svg(state: &ScorecardState) -> String {
    let layout = CardLayout::compute(state);
    let mut svg = String::with_capacity(8 * 1024);
    let _ = write_card(&mut svg, state, &layout);
    svg
}

fn write_card(out: &mut String, state: &ScorecardState, layout: &CardLayout) -> std::fmt::Result {
    let style = &state.style;
    let primary = &style.primary_color;
    let secondary = &style.secondary_color;
    let background = &style.background_color;
    let w = px(layout.width);
    let h = px(layout.height);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
    )?;
    writeln!(out, "  <defs>")?;
    for (id, alpha) in [("cardAccent", ""), ("cardTint", ALPHA_TINT)] {
        writeln!(
            out,
            r#"    <linearGradient id="{id}" x1="0" y1="0" x2="1" y2="1">"#
        )?;
        writeln!(
            out,
            r#"      <stop offset="0" stop-color="{}"/>"#,
            with_alpha(primary, alpha)
        )?;
        writeln!(
            out,
            r#"      <stop offset="1" stop-color="{}"/>"#,
            with_alpha(secondary, alpha)
        )?;
        writeln!(out, "    </linearGradient>")?;
    }
    writeln!(
        out,
        r#"    <clipPath id="cardClip"><rect width="{w}" height="{h}" rx="{}"/></clipPath>"#,
        style.border_radius
    )?;
    writeln!(
        out,
        r#"    <clipPath id="titleClip"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
        px(layout.title.x),
        px(layout.title.y),
        px(layout.title.w),
        px(layout.title.h)
    )?;
    writeln!(out, "  </defs>")?;

    writeln!(
        out,
        r#"  <g clip-path="url(#cardClip)" font-family="{}, sans-serif" font-size="{}">"#,
        escape_markup(style.font_family.name()),
        style.font_size
    )?;
    writeln!(
        out,
        r#"    <rect width="{w}" height="{h}" fill="{background}"/>"#
    )?;

    write_header(out, state, layout)?;
    if let Some(legend) = layout.legend {
        write_legend(out, state, legend)?;
    }
    write_radar(out, state, layout)?;
    write_footer(out, state, layout)?;

    writeln!(out, "  </g>")?;
    write!(out, "</svg>")
}

fn write_header(out: &mut String, state: &ScorecardState, layout: &CardLayout) -> std::fmt::Result {
    let style = &state.style;
    let title_metrics = measure(TITLE_SIZE);
    writeln!(
        out,
        r#"    <text x="{}" y="{}" font-size="{}" font-weight="{}" fill="{}" clip-path="url(#titleClip)">{}</text>"#,
        px(layout.title.x),
        px(layout.title.y + title_metrics.asc),
        format_number(TITLE_SIZE),
        FontWeight::Bold.css_value(),
        style.text_color,
        escape_markup(&state.data.title)
    )?;

    let badge = layout.badge;
    writeln!(
        out,
        r#"    <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="url(#cardAccent)"/>"#,
        px(badge.x),
        px(badge.y),
        px(badge.w),
        px(badge.h),
        style.badge_radius()
    )?;
    writeln!(
        out,
        r##"    <text x="{}" y="{}" font-size="{}" font-weight="{}" letter-spacing="{}" fill="#FFFFFF" text-anchor="middle">{}</text>"##,
        px(badge.center_x()),
        px(badge.y + badge.h / 2.0 + BADGE_SIZE * 0.35),
        format_number(BADGE_SIZE),
        FontWeight::Bold.css_value(),
        px(BADGE_TRACKING * BADGE_SIZE),
        state.data.status()
    )
}

fn write_legend(out: &mut String, state: &ScorecardState, legend: Rect) -> std::fmt::Result {
    let primary = &state.style.primary_color;
    let (swatch_w, swatch_h) = LEGEND_SWATCH;
    let label_w = text_width(FontWeight::Regular, LEGEND_SIZE, LEGEND_LABEL);
    let start = legend.center_x() - (swatch_w + 8.0 + label_w) / 2.0;
    let swatch_y = legend.y + (legend.h - swatch_h) / 2.0;
    writeln!(
        out,
        r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{primary}" stroke-width="{}"/>"#,
        px(start),
        px(swatch_y),
        px(swatch_w),
        px(swatch_h),
        with_alpha(primary, &alpha_hex(state.chart.fill_opacity)),
        format_number(state.chart.border_width)
    )?;
    writeln!(
        out,
        r#"    <text x="{}" y="{}" font-size="{}" fill="{}">{LEGEND_LABEL}</text>"#,
        px(start + swatch_w + 8.0),
        px(swatch_y + swatch_h - 1.0),
        format_number(LEGEND_SIZE),
        state.style.text_color
    )
}

fn write_radar(out: &mut String, state: &ScorecardState, layout: &CardLayout) -> std::fmt::Result {
    let chart = &state.chart;
    let style = &state.style;
    let primary = &style.primary_color;
    let radar = &layout.radar;
    let center = radar.center;

    if chart.show_grid {
        for level in 1..=SCORE_MAX {
            let ring: Vec<Point> = (0..METRIC_COUNT)
                .map(|index| radar.point(index, f64::from(level)))
                .collect();
            writeln!(
                out,
                r#"    <polygon points="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
                points_attr(&ring),
                with_alpha(&style.text_color, ALPHA_GRID)
            )?;
        }
        for end in radar.spoke_ends() {
            writeln!(
                out,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
                px(center.x),
                px(center.y),
                px(end.x),
                px(end.y),
                with_alpha(&style.text_color, ALPHA_SPOKE)
            )?;
        }
    }

    let points = radar.data_points(&state.data.scores());
    writeln!(
        out,
        r#"    <polygon points="{}" fill="{}" stroke="{primary}" stroke-width="{}" stroke-linejoin="round"/>"#,
        points_attr(&points),
        with_alpha(primary, &alpha_hex(chart.fill_opacity)),
        format_number(chart.border_width)
    )?;
    for point in points {
        writeln!(
            out,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="{primary}" stroke="{}" stroke-width="2"/>"#,
            px(point.x),
            px(point.y),
            chart.point_radius,
            style.background_color
        )?;
    }

    if chart.show_labels {
        for (anchor, label) in radar.label_anchors().iter().zip(&state.data.custom_labels) {
            writeln!(
                out,
                r#"    <text x="{}" y="{}" dy="{}" text-anchor="{}" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
                px(anchor.position.x),
                px(anchor.position.y),
                anchor.dy,
                anchor.anchor.as_str(),
                style.point_label_size(),
                FontWeight::SemiBold.css_value(),
                style.text_color,
                escape_markup(label)
            )?;
        }
    }
    Ok(())
}

fn write_footer(out: &mut String, state: &ScorecardState, layout: &CardLayout) -> std::fmt::Result {
    let style = &state.style;
    let footer = layout.footer;
    writeln!(
        out,
        r#"    <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="url(#cardTint)" stroke="{}" stroke-width="1"/>"#,
        px(footer.x),
        px(footer.y),
        px(footer.w),
        px(footer.h),
        style.footer_radius(),
        with_alpha(&style.primary_color, ALPHA_GRID)
    )?;

    let label = measure(FOOTER_LABEL_SIZE);
    let value = measure(FOOTER_VALUE_SIZE);
    let label_baseline = footer.y + FOOTER_PAD + label.asc;
    let value_baseline = footer.y + FOOTER_PAD + label.line_h + FOOTER_LINE_GAP + value.asc;
    writeln!(
        out,
        r#"    <text x="{}" y="{}" font-size="{}" font-weight="500" letter-spacing="{}" fill="{}" text-anchor="middle">{}</text>"#,
        px(footer.center_x()),
        px(label_baseline),
        format_number(FOOTER_LABEL_SIZE),
        px(BADGE_TRACKING * FOOTER_LABEL_SIZE),
        with_alpha(&style.text_color, ALPHA_MUTED),
        state.data.key_metric_label().to_uppercase()
    )?;
    writeln!(
        out,
        r#"    <text x="{}" y="{}" font-size="{}" font-weight="800" fill="url(#cardAccent)" text-anchor="middle">{}</text>"#,
        px(footer.center_x()),
        px(value_baseline),
        format_number(FOOTER_VALUE_SIZE),
        escape_markup(&state.data.key_metric())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_capped_for_display() {
        let mut state = ScorecardState::default();
        assert_eq!(card_size(&state), (500, 600));
        state.style.card_width = 320;
        state.style.card_height = 450;
        assert_eq!(card_size(&state), (320, 450));
    }

    #[test]
    fn svg_matches_card_size() {
        let mut state = ScorecardState::default();
        state.style.card_width = 420;
        let svg = render_card_svg(&state);
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 420 600" width="420" height="600">"#
        ));
        assert!(svg.ends_with("</svg>"));
    }

    /// Vertical extent of the radar panel, between header and footer.
    fn radar_panel_span(layout: &CardLayout) -> (f64, f64) {
        let top = layout.title.bottom().max(layout.badge.bottom()) + SECTION_GAP;
        (top, layout.footer.y - SECTION_GAP)
    }

    #[test]
    fn blocks_stay_inside_the_card() {
        for (w, h) in [(300, 400), (600, 800), (1000, 1200), (300, 1200), (1000, 400)] {
            let mut state = ScorecardState::default();
            state.style.card_width = w;
            state.style.card_height = h;
            state.chart.show_legend = true;
            let layout = CardLayout::compute(&state);
            assert!(layout.badge.x >= PADDING, "badge overflows at {w}x{h}");
            let (top, bottom) = radar_panel_span(&layout);
            assert!(bottom - top <= RADAR_PANEL_MAX);
            assert!(layout.radar.radius >= RADAR_MIN_RADIUS);
            assert!(layout.radar.center.y > top);
            assert!(layout.radar.center.y < bottom);
            assert!(layout.footer.y > bottom);
        }
    }

    #[test]
    fn default_card_fits_footer_and_full_radar_panel() {
        let layout = CardLayout::compute(&ScorecardState::default());
        let (top, bottom) = radar_panel_span(&layout);
        assert_eq!(bottom - top, RADAR_PANEL_MAX);
        assert!(layout.footer.bottom() <= layout.height - PADDING);
        assert_eq!(layout.radar.center.x, 250.0);
    }

    #[test]
    fn uses_style_and_status() {
        let state = ScorecardState::default();
        let svg = render_card_svg(&state);
        assert!(svg.contains(r#"<rect width="500" height="600" rx="12"/>"#));
        assert!(svg.contains(r#"font-family="Inter, sans-serif" font-size="16""#));
        assert!(svg.contains(">ACTIVE</text>"));
        assert!(svg.contains(">AUTOMATION LEVEL</text>"));
        assert!(svg.contains(r#"fill="url(#cardAccent)" text-anchor="middle">80% Automation</text>"#));
        assert!(svg.contains(r##"stop-color="#04EAFD0D""##));
        assert!(svg.contains(r#"rx="6" fill="url(#cardAccent)""#));
        assert!(svg.contains(r#"rx="9" fill="url(#cardTint)""#));
    }

    #[test]
    fn chart_toggles_change_the_card() {
        let mut state = ScorecardState::default();
        let full = render_card_svg(&state);
        assert_eq!(full.matches(r#"fill="none""#).count(), 5);
        assert_eq!(full.matches("<line ").count(), 5);
        assert!(full.contains(">Tool Use</text>"));
        assert!(!full.contains(LEGEND_LABEL));

        state.chart.show_grid = false;
        state.chart.show_labels = false;
        state.chart.show_legend = true;
        let bare = render_card_svg(&state);
        assert_eq!(bare.matches(r#"fill="none""#).count(), 0);
        assert!(!bare.contains(">Tool Use</text>"));
        assert!(bare.contains(LEGEND_LABEL));
    }

    #[test]
    fn custom_metric_and_escaping() {
        let mut state = ScorecardState::default();
        state.data.title = "Ops <Bot>".to_string();
        state.data.custom_metric = "99% & rising".to_string();
        let svg = render_card_svg(&state);
        assert!(svg.contains(">Ops &lt;Bot&gt;</text>"));
        assert!(svg.contains(">99% &amp; rising</text>"));
        assert!(svg.contains(">KEY METRIC</text>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let state = ScorecardState::default();
        assert_eq!(render_card_svg(&state), render_card_svg(&state));
    }
}
