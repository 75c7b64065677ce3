//! Static 400×400 SVG export drawn straight from the radar geometry.

use std::fmt::Write;

use crate::core::color::{
    alpha_hex, with_alpha, ALPHA_CAPTION, ALPHA_GRID, ALPHA_MUTED, ALPHA_SPOKE, ALPHA_TINT,
};
use crate::core::format::format_number;
use crate::core::geometry::RadarGeometry;
use crate::core::state::ScorecardState;

use super::escape_markup;
use super::html::DOCUMENT_TITLE_PREFIX;

/// Width and height of the exported SVG viewBox.
pub const SVG_SIZE: f64 = 400.0;
const RADIUS: f64 = 160.0;

pub fn render_svg(state: &ScorecardState) -> String {
    let mut svg = String::with_capacity(6 * 1024);
    let _ = write_svg(&mut svg, state);
    svg
}

fn write_svg(out: &mut String, state: &ScorecardState) -> std::fmt::Result {
    let data = &state.data;
    let style = &state.style;
    let chart = &state.chart;
    let size = format_number(SVG_SIZE);
    let center = SVG_SIZE / 2.0;
    let geometry = RadarGeometry::new(center, center, RADIUS);
    let font = style.font_family.name();
    let primary = &style.primary_color;
    let text = &style.text_color;
    let background = &style.background_color;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">"#
    )?;
    writeln!(out, "  <defs>")?;
    writeln!(
        out,
        r#"    <linearGradient id="statusGradient" x1="0%" y1="0%" x2="100%" y2="0%">"#
    )?;
    writeln!(out, r#"      <stop offset="0%" style="stop-color:{primary}"/>"#)?;
    writeln!(
        out,
        r#"      <stop offset="100%" style="stop-color:{}"/>"#,
        style.secondary_color
    )?;
    writeln!(out, "    </linearGradient>")?;
    writeln!(out, "  </defs>")?;
    writeln!(out)?;
    writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{background}"/>"#
    )?;
    writeln!(
        out,
        r#"  <text x="200" y="30" font-family="{font}" font-size="18" font-weight="700" fill="{text}" text-anchor="middle">{}</text>"#,
        escape_markup(&data.title)
    )?;
    writeln!(
        out,
        r#"  <rect x="320" y="40" width="60" height="20" rx="10" fill="url(#statusGradient)"/>"#
    )?;
    writeln!(
        out,
        r#"  <text x="350" y="52" font-family="{font}" font-size="10" font-weight="700" fill="{background}" text-anchor="middle">{}</text>"#,
        data.status()
    )?;
    writeln!(out)?;

    if chart.show_grid {
        let center = format_number(center);
        write!(out, "  ")?;
        for ring in geometry.grid_rings() {
            write!(
                out,
                r#"<circle cx="{center}" cy="{center}" r="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
                format_number(ring),
                with_alpha(text, ALPHA_GRID)
            )?;
        }
        writeln!(out)?;
        write!(out, "  ")?;
        for end in geometry.spoke_ends() {
            write!(
                out,
                r#"<line x1="{center}" y1="{center}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
                format_number(end.x),
                format_number(end.y),
                with_alpha(text, ALPHA_SPOKE)
            )?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    let scores = data.scores();
    writeln!(
        out,
        r#"  <path d="{}" fill="{}" stroke="{primary}" stroke-width="{}"/>"#,
        geometry.data_path(&scores),
        with_alpha(primary, &alpha_hex(chart.fill_opacity)),
        format_number(chart.border_width)
    )?;
    write!(out, "  ")?;
    for point in geometry.data_points(&scores) {
        write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{primary}" stroke="{background}" stroke-width="2"/>"#,
            format_number(point.x),
            format_number(point.y),
            chart.point_radius
        )?;
    }
    writeln!(out)?;

    if chart.show_labels {
        write!(out, "  ")?;
        for (anchor, label) in geometry.label_anchors().iter().zip(&data.custom_labels) {
            write!(
                out,
                r#"<text x="{}" y="{}" text-anchor="{}" dy="{}" font-family="{font}" font-size="12" font-weight="600" fill="{text}">{}</text>"#,
                format_number(anchor.position.x),
                format_number(anchor.position.y),
                anchor.anchor.as_str(),
                anchor.dy,
                escape_markup(label)
            )?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        r#"  <rect x="150" y="350" width="100" height="40" rx="8" fill="{}" stroke="{}"/>"#,
        with_alpha(primary, ALPHA_TINT),
        with_alpha(primary, ALPHA_GRID)
    )?;
    writeln!(
        out,
        r#"  <text x="200" y="365" font-family="{font}" font-size="11" fill="{}" text-anchor="middle">{}</text>"#,
        with_alpha(text, ALPHA_MUTED),
        data.key_metric_label().to_uppercase()
    )?;
    writeln!(
        out,
        r#"  <text x="200" y="380" font-family="{font}" font-size="16" font-weight="800" fill="{primary}" text-anchor="middle">{}</text>"#,
        escape_markup(&data.key_metric())
    )?;
    writeln!(
        out,
        r#"  <text x="200" y="395" font-family="{font}" font-size="8" fill="{}" text-anchor="middle">{DOCUMENT_TITLE_PREFIX}</text>"#,
        with_alpha(text, ALPHA_CAPTION)
    )?;
    write!(out, "</svg>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_fixed_viewbox() {
        let svg = render_svg(&ScorecardState::default());
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 400" width="400" height="400">"#
        ));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn draws_grid_only_when_enabled() {
        let mut state = ScorecardState::default();
        let with_grid = render_svg(&state);
        assert_eq!(with_grid.matches(r##"fill="none" stroke="#2E2E321A""##).count(), 5);
        assert_eq!(with_grid.matches("<line ").count(), 5);
        assert!(with_grid.contains(r#"<circle cx="200" cy="200" r="160" fill="none""#));

        state.chart.show_grid = false;
        let without = render_svg(&state);
        assert_eq!(without.matches(r#"fill="none""#).count(), 0);
        assert_eq!(without.matches("<line ").count(), 0);
    }

    #[test]
    fn draws_labels_only_when_enabled() {
        let mut state = ScorecardState::default();
        let labelled = render_svg(&state);
        assert!(labelled.contains(r#"text-anchor="middle" dy="-5""#));
        assert!(labelled.contains(">Cost-Effectiveness</text>"));

        state.chart.show_labels = false;
        let bare = render_svg(&state);
        assert!(!bare.contains(">Cost-Effectiveness</text>"));
        assert!(!bare.contains("dy="));
    }

    #[test]
    fn data_polygon_uses_alpha_fill_and_border_width() {
        let svg = render_svg(&ScorecardState::default());
        assert!(svg.contains(r##"fill="#04EAFD26" stroke="#04EAFD" stroke-width="2.5"/>"##));
        assert!(svg.contains(r#"<path d="M 200 72 L "#));
        assert_eq!(svg.matches(r##"r="6" fill="#04EAFD""##).count(), 5);
    }

    #[test]
    fn footer_and_badge_text() {
        let svg = render_svg(&ScorecardState::default());
        assert!(svg.contains(">ACTIVE</text>"));
        assert!(svg.contains(">AUTOMATION LEVEL</text>"));
        assert!(svg.contains(">80% Automation</text>"));
        assert!(svg.contains(">GoodHelpAI Agent Evaluation</text>"));
        assert!(svg.contains(r#"fill="url(#statusGradient)""#));
    }

    #[test]
    fn text_is_xml_escaped() {
        let mut state = ScorecardState::default();
        state.data.title = "R&D <beta>".to_string();
        let svg = render_svg(&state);
        assert!(svg.contains(">R&amp;D &lt;beta&gt;</text>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let state = ScorecardState::default();
        assert_eq!(render_svg(&state), render_svg(&state));
    }
}
