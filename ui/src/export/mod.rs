//! Export delivery: turns a scorecard snapshot into a file, a download or
//! clipboard contents.

mod delivery;
mod panel;

pub use delivery::{copy_to_clipboard, download_bytes, Delivery};
#[cfg(not(target_arch = "wasm32"))]
pub use delivery::{export_dir, write_into};
#[cfg(target_arch = "wasm32")]
pub(crate) use delivery::web;
pub use panel::ExportPanel;

use thiserror::Error;
use tracing::info;

use crate::core::state::ScorecardState;
use crate::render::{rasterize_card, render_html, render_svg, ExportFormat};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error("capture failed: {0}")]
    Capture(String),
    #[error("could not write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0} unavailable")]
    Unavailable(&'static str),
}

/// Render `format` for `state` without delivering it.
pub async fn build_artifact(
    format: ExportFormat,
    state: &ScorecardState,
) -> Result<Vec<u8>, ExportError> {
    Ok(match format {
        ExportFormat::Html => render_html(state).into_bytes(),
        ExportFormat::Svg => render_svg(state).into_bytes(),
        ExportFormat::Png => rasterize_card(state).await?,
    })
}

pub async fn perform_export(
    format: ExportFormat,
    state: ScorecardState,
) -> Result<Delivery, ExportError> {
    let filename = format.filename(&state);
    let bytes = build_artifact(format, &state).await?;
    let size = bytes.len();
    let delivery = download_bytes(&filename, format.mime(), bytes).await?;
    info!(%filename, size, format = format.extension(), "export delivered");
    Ok(delivery)
}

/// Copy the standalone HTML document to the clipboard.
pub async fn perform_copy(state: ScorecardState) -> Result<(), ExportError> {
    let html = render_html(&state);
    let size = html.len();
    copy_to_clipboard(html).await?;
    info!(size, "HTML copied to clipboard");
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn artifacts_match_renderers() {
        let state = ScorecardState::default();
        let html = futures::executor::block_on(build_artifact(ExportFormat::Html, &state)).unwrap();
        assert_eq!(html, render_html(&state).into_bytes());
        let svg = futures::executor::block_on(build_artifact(ExportFormat::Svg, &state)).unwrap();
        assert_eq!(svg, render_svg(&state).into_bytes());
        let png = futures::executor::block_on(build_artifact(ExportFormat::Png, &state)).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn errors_describe_their_cause() {
        assert_eq!(
            ExportError::Unavailable("document").to_string(),
            "document unavailable"
        );
        assert_eq!(
            ExportError::Capture("decode".into()).to_string(),
            "capture failed: decode"
        );
    }
}
