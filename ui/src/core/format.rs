//! Formatting helpers for presenting values and naming exports.

/// Shortest round-trip form: `2.5`, `6`, `173.20508075688772`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid printing `-0`.
        return "0".to_string();
    }
    format!("{value}")
}

pub fn format_average(value: f64) -> String {
    format!("{value:.1}")
}

/// Whitespace as browsers match it with `\s`: Unicode `White_Space` plus the
/// byte-order mark, minus NEL (U+0085).
fn is_title_space(ch: char) -> bool {
    ch == '\u{FEFF}' || (ch.is_whitespace() && ch != '\u{85}')
}

/// Filename stem derived from a title: whitespace runs collapse to a single
/// `_`, everything else is kept, then the whole thing is lowercased.
pub fn export_stem(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for ch in title.chars() {
        if is_title_space(ch) {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(ch);
            in_whitespace = false;
        }
    }
    stem.to_lowercase()
}

/// `<stem>_radar_chart.<extension>`
pub fn export_filename(title: &str, extension: &str) -> String {
    format!("{}_radar_chart.{extension}", export_stem(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_trailing_zero() {
        assert_eq!(format_number(6.0), "6");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn average_has_one_decimal() {
        assert_eq!(format_average(4.0), "4.0");
        assert_eq!(format_average(3.4), "3.4");
    }

    #[test]
    fn stem_collapses_whitespace_only() {
        assert_eq!(export_stem("My Agent!! Test"), "my_agent!!_test");
        assert_eq!(export_stem("Tabs\t\tand  spaces"), "tabs_and_spaces");
        assert_eq!(export_stem("A\u{FEFF}B\u{85}C"), "a_b\u{85}c");
        assert_eq!(export_stem("No\u{A0}\u{3000}Break"), "no_break");
        assert_eq!(export_stem("  padded "), "_padded_");
    }

    #[test]
    fn filename_appends_suffix_and_extension() {
        assert_eq!(
            export_filename("Social Media Content Agent", "svg"),
            "social_media_content_agent_radar_chart.svg"
        );
    }
}
