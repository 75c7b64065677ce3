//! Clipboard and file delivery for web and native targets.

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use super::ExportError;

/// Where an export ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// Browser download triggered for this filename.
    Download(String),
    /// Written to disk at this path.
    #[cfg(not(target_arch = "wasm32"))]
    Saved(PathBuf),
}

pub async fn copy_to_clipboard(payload: String) -> Result<(), ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        web::copy_text(&payload)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| ExportError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ExportError::Clipboard(err.to_string()))
    }
}

pub async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Delivery, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = web::ObjectUrl::from_bytes(&bytes, mime)?;
        web::click_download(url.as_str(), filename)?;
        Ok(Delivery::Download(filename.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = export_dir()?;
        write_into(&dir, filename, &bytes).map(Delivery::Saved)
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) mod web {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlElement, Url};

    use crate::export::ExportError;

    /// Blob URL revoked on drop, so early returns cannot leak it.
    pub(crate) struct ObjectUrl(String);

    impl ObjectUrl {
        pub(crate) fn from_bytes(bytes: &[u8], mime: &str) -> Result<Self, ExportError> {
            let array = js_sys::Uint8Array::from(bytes);
            Self::from_parts(&array.buffer(), mime)
        }

        pub(crate) fn from_text(text: &str, mime: &str) -> Result<Self, ExportError> {
            Self::from_parts(&JsValue::from_str(text), mime)
        }

        fn from_parts(part: &JsValue, mime: &str) -> Result<Self, ExportError> {
            let parts = js_sys::Array::new();
            parts.push(part);
            let opts = BlobPropertyBag::new();
            opts.set_type(mime);
            let blob = Blob::new_with_blob_sequence_and_options(&parts, &opts)
                .map_err(|_| ExportError::Unavailable("blob"))?;
            Url::create_object_url_with_blob(&blob)
                .map(ObjectUrl)
                .map_err(|_| ExportError::Unavailable("object URL"))
        }

        pub(crate) fn as_str(&self) -> &str {
            &self.0
        }
    }

    impl Drop for ObjectUrl {
        fn drop(&mut self) {
            Url::revoke_object_url(&self.0).ok();
        }
    }

    pub(crate) fn document() -> Result<Document, ExportError> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ExportError::Unavailable("document"))
    }

    /// Create `tag` as `T`, attached to the body but invisible.
    fn hidden_element<T>(document: &Document, tag: &'static str) -> Result<T, ExportError>
    where
        T: JsCast + AsRef<HtmlElement>,
    {
        let element: T = document
            .create_element(tag)
            .map_err(|_| ExportError::Unavailable(tag))?
            .dyn_into()
            .map_err(|_| ExportError::Unavailable(tag))?;
        let style = element.as_ref().style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();
        document
            .body()
            .ok_or(ExportError::Unavailable("document body"))?
            .append_child(element.as_ref())
            .map_err(|_| ExportError::Unavailable("document body"))?;
        Ok(element)
    }

    pub(crate) fn copy_text(payload: &str) -> Result<(), ExportError> {
        let document = document()?;
        let textarea: web_sys::HtmlTextAreaElement = hidden_element(&document, "textarea")?;
        textarea.set_value(payload);
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(ExportError::Clipboard("copy command rejected".to_string()))
        }
    }

    pub(crate) fn click_download(href: &str, filename: &str) -> Result<(), ExportError> {
        let anchor: HtmlAnchorElement = hidden_element(&document()?, "a")?;
        anchor.set_href(href);
        anchor.set_download(filename);
        anchor.click();
        anchor.remove();
        Ok(())
    }
}

/// The user's download folder, or `exports/` under the app data directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_dir() -> Result<PathBuf, ExportError> {
    if let Some(downloads) = directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
    {
        return Ok(downloads);
    }
    let dirs = directories::ProjectDirs::from("ai", "GoodHelpAI", "Agent Scorecard")
        .ok_or(ExportError::Unavailable("export directory"))?;
    Ok(dirs.data_dir().join("exports"))
}

/// Write `bytes` to `dir/filename`, creating `dir` if needed.
#[cfg(not(target_arch = "wasm32"))]
pub fn write_into(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    use std::fs;
    use std::io::Write;

    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    let mut file = fs::File::create(&path)?;
    file.write_all(bytes)?;
    Ok(path)
}
