//! Hex color helpers shared by every renderer.
//!
//! Translucent tints are written by appending a two-digit alpha to a
//! `#rrggbb` color (`#04EAFD` + `1A`), so all three outputs stay in sync.

/// Grid ring stroke alpha (~10%).
pub const ALPHA_GRID: &str = "1A";
/// Spoke stroke alpha (~15%).
pub const ALPHA_SPOKE: &str = "26";
/// Footer tint alpha (~5%).
pub const ALPHA_TINT: &str = "0D";
/// Secondary text alpha (~70%).
pub const ALPHA_MUTED: &str = "B3";
/// Caption text alpha (~60%).
pub const ALPHA_CAPTION: &str = "99";

/// Two-digit lowercase hex alpha for a fill opacity in `[0, 1]`.
pub fn alpha_hex(opacity: f64) -> String {
    let opacity = if opacity.is_finite() {
        opacity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("{:02x}", (opacity * 255.0).round() as u8)
}

/// Concatenate a hex color with an alpha suffix.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    format!("{color}{alpha}")
}

/// `true` for `#rrggbb` (either case).
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fill_opacity_maps_to_26() {
        assert_eq!(alpha_hex(0.15), "26");
    }

    #[test]
    fn alpha_hex_is_zero_padded() {
        assert_eq!(alpha_hex(0.0), "00");
        assert_eq!(alpha_hex(0.05), "0d");
        assert_eq!(alpha_hex(1.0), "ff");
    }

    #[test]
    fn alpha_hex_clamps_out_of_range() {
        assert_eq!(alpha_hex(1.7), "ff");
        assert_eq!(alpha_hex(-0.2), "00");
        assert_eq!(alpha_hex(f64::NAN), "00");
    }

    #[test]
    fn with_alpha_concatenates() {
        assert_eq!(with_alpha("#04EAFD", ALPHA_GRID), "#04EAFD1A");
    }

    #[test]
    fn hex_validation() {
        assert!(is_hex_color("#04eafd"));
        assert!(is_hex_color("#FFFFFF"));
        assert!(!is_hex_color("04eafd"));
        assert!(!is_hex_color("#04e"));
        assert!(!is_hex_color("#04eafg"));
    }
}
