//! PNG capture of the displayed card at 2× density.

use crate::core::state::ScorecardState;
use crate::export::ExportError;

use super::card::{card_size, render_card_svg};

/// Device pixels per card pixel in the exported image.
pub const RASTER_SCALE: f32 = 2.0;

/// Pixel size of the exported PNG.
pub fn raster_size(state: &ScorecardState) -> (u32, u32) {
    let (width, height) = card_size(state);
    let scale = RASTER_SCALE as u32;
    (width * scale, height * scale)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn rasterize_card(state: &ScorecardState) -> Result<Vec<u8>, ExportError> {
    rasterize_svg(&render_card_svg(state), raster_size(state))
}

#[cfg(target_arch = "wasm32")]
pub async fn rasterize_card(state: &ScorecardState) -> Result<Vec<u8>, ExportError> {
    rasterize_in_browser(&render_card_svg(state), raster_size(state)).await
}

/// `<text>` elements in `svg` with visible content.
#[cfg(not(target_arch = "wasm32"))]
fn visible_text_elements(svg: &str) -> usize {
    svg.match_indices("<text")
        .filter_map(|(pos, _)| {
            let rest = &svg[pos + "<text".len()..];
            if !rest.starts_with([' ', '>']) {
                return None;
            }
            let body = &rest[rest.find('>')? + 1..];
            Some(&body[..body.find("</text>")?])
        })
        .filter(|content| !content.trim().is_empty())
        .count()
}

#[cfg(not(target_arch = "wasm32"))]
fn shaped_text_nodes(group: &usvg::Group) -> usize {
    group
        .children()
        .iter()
        .map(|node| match node {
            usvg::Node::Group(child) => shaped_text_nodes(child),
            usvg::Node::Text(_) => 1,
            _ => 0,
        })
        .sum()
}

/// Parse `svg` against the system fonts. Text that cannot be shaped is
/// dropped silently by usvg, so a missing node is reported as a capture error.
#[cfg(not(target_arch = "wasm32"))]
fn parse_card(svg: &str) -> Result<usvg::Tree, ExportError> {
    let mut options = usvg::Options::default();
    options.fontdb = super::fonts::SYSTEM_FONTS.clone();
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| ExportError::Capture(format!("card SVG rejected: {err}")))?;

    let expected = visible_text_elements(svg);
    let shaped = shaped_text_nodes(tree.root());
    if shaped < expected {
        return Err(ExportError::Capture(format!(
            "only {shaped} of {expected} text elements could be shaped; no usable font"
        )));
    }
    Ok(tree)
}

#[cfg(not(target_arch = "wasm32"))]
fn rasterize_svg(svg: &str, (width, height): (u32, u32)) -> Result<Vec<u8>, ExportError> {
    use tiny_skia::{Pixmap, Transform};

    let tree = parse_card(svg)?;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| ExportError::Capture(format!("invalid canvas size {width}x{height}")))?;
    resvg::render(
        &tree,
        Transform::from_scale(RASTER_SCALE, RASTER_SCALE),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied pixels; PNG wants straight alpha.
    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .write_header()
            .map_err(|err| ExportError::Capture(err.to_string()))?
            .write_image_data(&rgba)
            .map_err(|err| ExportError::Capture(err.to_string()))?;
    }

    Ok(buffer)
}

#[cfg(target_arch = "wasm32")]
async fn rasterize_in_browser(
    svg: &str,
    (width, height): (u32, u32),
) -> Result<Vec<u8>, ExportError> {
    use base64::Engine as _;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

    use crate::export::web::{document, ObjectUrl};

    let capture = |msg: &str| ExportError::Capture(msg.to_string());

    // Revoked when dropped, on every return path.
    let url = ObjectUrl::from_text(svg, "image/svg+xml")?;

    let canvas: HtmlCanvasElement = document()?
        .create_element("canvas")
        .map_err(|_| capture("Unable to create canvas"))?
        .dyn_into()
        .map_err(|_| capture("Canvas cast failed"))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| capture("Canvas context unavailable"))?
        .ok_or_else(|| capture("Canvas context missing"))?
        .dyn_into()
        .map_err(|_| capture("Context cast failed"))?;

    let image = HtmlImageElement::new().map_err(|_| capture("Unable to create image"))?;
    image.set_src(url.as_str());
    JsFuture::from(image.decode())
        .await
        .map_err(|_| capture("Image decode failed"))?;

    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        )
        .map_err(|_| capture("Unable to draw image"))?;
    drop(url);

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| capture("Unable to serialise canvas"))?;
    let encoded = data_url
        .split(',')
        .nth(1)
        .ok_or_else(|| capture("Malformed data URL"))?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| capture("PNG decode failed"))
}
