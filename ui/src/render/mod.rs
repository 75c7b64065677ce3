//! Scorecard → artifact rendering.
//!
//! Every renderer here is a pure function of a [`ScorecardState`] snapshot:
//! the same state always yields the same bytes.

mod card;
mod fonts;
mod html;
mod raster;
mod svg;

pub use card::{card_size, render_card_svg};
pub use html::render_html;
pub use raster::{rasterize_card, raster_size, RASTER_SCALE};
pub use svg::{render_svg, SVG_SIZE};

use crate::core::format::export_filename;
use crate::core::state::ScorecardState;

/// Downloadable output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Svg,
    Png,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html",
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Png => "image/png",
        }
    }

    pub fn filename(self, state: &ScorecardState) -> String {
        export_filename(&state.data.title, self.extension())
    }
}

/// Characters XML 1.0 forbids outright; they are dropped from user text.
fn is_forbidden_in_xml(ch: char) -> bool {
    matches!(ch, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Escape text for HTML element content and attribute values.
pub(crate) fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other if is_forbidden_in_xml(other) => {}
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_name_their_files() {
        let state = ScorecardState::default();
        assert_eq!(
            ExportFormat::Png.filename(&state),
            "social_media_content_agent_radar_chart.png"
        );
        assert_eq!(ExportFormat::Svg.mime(), "image/svg+xml");
        assert_eq!(ExportFormat::Html.mime(), "text/html");
    }

    #[test]
    fn markup_escaping() {
        assert_eq!(
            escape_markup(r#"<b>"R&D"</b> it's"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; it&#39;s"
        );
        assert_eq!(escape_markup("plain"), "plain");
    }

    #[test]
    fn control_characters_are_dropped() {
        assert_eq!(escape_markup("Bot\u{1}\u{1F}\u{FFFF}"), "Bot");
        assert_eq!(escape_markup("a\tb\nc\rd"), "a\tb\nc\rd");
    }
}
