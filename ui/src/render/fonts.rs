//! Font discovery and measurement for the preview card.
//!
//! The card is laid out as SVG, which has no text flow, so the status badge
//! and title need their widths computed up front. Heuristic per-glyph
//! advances are used by default; they are tuned against Inter and slightly
//! overestimate, which keeps badges from clipping their text.
//!
//! On native targets the system font database is also what the PNG exporter
//! shapes text with. With the `system_metrics` feature, widths are measured
//! through `fontdue` against the same sans-serif face, so the layout matches
//! the raster exactly on the machine doing the export.

#[cfg(all(feature = "system_metrics", not(target_arch = "wasm32")))]
use fontdue::Font;
use once_cell::sync::Lazy;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use system::SYSTEM_FONTS;

/// Lightweight weight indicator so callers avoid stringly-typed lookups.
#[derive(Clone, Copy, Debug)]
pub enum FontWeight {
    Regular,
    SemiBold,
    Bold,
}

impl FontWeight {
    /// CSS / SVG `font-weight` value.
    pub fn css_value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// Vertical metrics used to place baselines.
#[derive(Clone, Copy, Debug)]
pub struct TextMetrics {
    /// Chosen vertical line height for layout rhythm.
    pub line_h: f64,
    /// Estimated ascender distance above baseline.
    pub asc: f64,
}

/// Measuring font resolved from the system database (when feature enabled).
#[cfg(all(feature = "system_metrics", not(target_arch = "wasm32")))]
pub struct Fonts {
    sans: Option<Font>,
}

/// Heuristic-only measurer.
#[cfg(not(all(feature = "system_metrics", not(target_arch = "wasm32"))))]
pub struct Fonts;

impl Fonts {
    pub fn load() -> Self {
        #[cfg(all(feature = "system_metrics", not(target_arch = "wasm32")))]
        {
            let sans = system::sans_face();
            if sans.is_none() {
                tracing::warn!("no measurable sans-serif face; using heuristics");
            }
            Fonts { sans }
        }
        #[cfg(not(all(feature = "system_metrics", not(target_arch = "wasm32"))))]
        {
            Fonts
        }
    }

    pub fn metrics(&self, size_px: f64) -> TextMetrics {
        let line_h = (size_px * 1.28).round();
        let asc = (size_px * 0.92).round();
        TextMetrics { line_h, asc }
    }

    /// Horizontal advance of `text` at `size_px`.
    pub fn text_width(&self, weight: FontWeight, size_px: f64, text: &str) -> f64 {
        #[cfg(all(feature = "system_metrics", not(target_arch = "wasm32")))]
        {
            if let Some(font) = &self.sans {
                let advance: f32 = text
                    .chars()
                    .map(|ch| font.metrics(ch, size_px as f32).advance_width)
                    .sum();
                // Only the regular face is loaded; heavier weights are scaled.
                return f64::from(advance) * weight_factor(weight);
            }
        }

        heuristic_width(weight, size_px, text)
    }
}

fn weight_factor(weight: FontWeight) -> f64 {
    match weight {
        FontWeight::Regular => 1.0,
        FontWeight::SemiBold => 1.04,
        FontWeight::Bold => 1.08,
    }
}

fn heuristic_width(weight: FontWeight, size_px: f64, text: &str) -> f64 {
    let ems: f64 = text
        .chars()
        .map(|ch| match ch {
            ' ' => 0.28,
            'i' | 'j' | 'l' | '!' | '.' | ',' | ':' | ';' | '\'' | '|' => 0.26,
            'M' | 'W' | 'm' | 'w' | '%' => 0.86,
            c if c.is_ascii_uppercase() => 0.68,
            c if c.is_ascii_digit() => 0.6,
            c if c.is_ascii_lowercase() => 0.54,
            _ => 0.6,
        })
        .sum();
    ems * size_px * weight_factor(weight)
}

static FONTS: Lazy<Fonts> = Lazy::new(Fonts::load);

/// Measure against the process-wide font set.
pub fn text_width(weight: FontWeight, size_px: f64, text: &str) -> f64 {
    FONTS.text_width(weight, size_px, text)
}

pub fn measure(size_px: f64) -> TextMetrics {
    FONTS.metrics(size_px)
}

#[cfg(not(target_arch = "wasm32"))]
mod system {
    use std::sync::Arc;

    #[cfg(feature = "system_metrics")]
    use fontdue::Font;
    use once_cell::sync::Lazy;
    use usvg::fontdb::{Database, Family, Query};

    /// Families tried, in order, for the generic `sans-serif` slot.
    const SANS_CANDIDATES: [&str; 7] = [
        "Inter",
        "Arial",
        "Helvetica",
        "DejaVu Sans",
        "Liberation Sans",
        "Noto Sans",
        "Open Sans",
    ];

    /// System fonts, scanned once per process, with `sans-serif` pointed at
    /// an installed face.
    pub(crate) static SYSTEM_FONTS: Lazy<Arc<Database>> = Lazy::new(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        match sans_family(&db) {
            Some(family) => {
                tracing::debug!(faces = db.len(), %family, "loaded system fonts");
                db.set_sans_serif_family(family);
            }
            None => tracing::warn!(faces = db.len(), "no proportional system font found"),
        }
        Arc::new(db)
    });

    fn has_family(db: &Database, name: &str) -> bool {
        let families = [Family::Name(name)];
        db.query(&Query {
            families: &families,
            ..Query::default()
        })
        .is_some()
    }

    /// First preferred family that is installed, else any proportional one.
    pub(super) fn sans_family(db: &Database) -> Option<String> {
        SANS_CANDIDATES
            .iter()
            .find(|name| has_family(db, name))
            .map(|name| name.to_string())
            .or_else(|| {
                db.faces()
                    .filter(|face| !face.monospaced)
                    .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
            })
    }

    #[cfg(feature = "system_metrics")]
    pub(super) fn sans_face() -> Option<fontdue::Font> {
        let db = &**SYSTEM_FONTS;
        let id = db.query(&Query {
            families: &[Family::SansSerif],
            ..Query::default()
        })?;
        db.with_face_data(id, |data, index| {
            let settings = fontdue::FontSettings {
                collection_index: index,
                ..fontdue::FontSettings::default()
            };
            Font::from_bytes(data, settings).ok()
        })
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_increase_with_size() {
        let small = measure(12.0);
        let large = measure(48.0);
        assert!(large.line_h > small.line_h);
        assert!(large.asc > small.asc);
    }

    #[test]
    fn baseline_consistency_ratio() {
        let m = measure(32.0);
        let baseline_ratio = m.asc / 32.0;
        assert!(baseline_ratio > 0.80 && baseline_ratio < 1.05);
    }

    #[test]
    fn width_grows_with_text_and_weight() {
        let short = text_width(FontWeight::Bold, 14.0, "REVIEW");
        let long = text_width(FontWeight::Bold, 14.0, "MONITORING");
        assert!(long > short);
        let regular = text_width(FontWeight::Regular, 14.0, "ACTIVE");
        let bold = text_width(FontWeight::Bold, 14.0, "ACTIVE");
        assert!(bold > regular);
        assert_eq!(text_width(FontWeight::Bold, 14.0, ""), 0.0);
    }

    #[test]
    fn css_weights() {
        assert_eq!(FontWeight::Regular.css_value(), 400);
        assert_eq!(FontWeight::SemiBold.css_value(), 600);
        assert_eq!(FontWeight::Bold.css_value(), 700);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn generic_sans_resolves_to_an_installed_face() {
        use usvg::fontdb::{Family, Query};

        let db = &**SYSTEM_FONTS;
        if db.faces().all(|face| face.monospaced) {
            return;
        }
        let id = db.query(&Query {
            families: &[Family::SansSerif],
            ..Query::default()
        });
        assert!(id.is_some(), "sans-serif maps to {:?}", db.family_name(&Family::SansSerif));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn sans_family_needs_a_proportional_face() {
        let mut db = usvg::fontdb::Database::new();
        assert_eq!(system::sans_family(&db), None);
        db.load_system_fonts();
        if db.faces().any(|face| !face.monospaced) {
            assert!(system::sans_family(&db).is_some());
        }
    }
}
