//! Browser file plumbing for formation import/export.

use std::future::Future;

use tactics_core::{ExportedFile, FileMeta, FileReadError, FormationSource};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Url;

/// A file picked through an `<input type="file">`.
pub struct BrowserFile(pub web_sys::File);

impl FormationSource for BrowserFile {
    fn meta(&self) -> FileMeta {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = self.0.size() as u64;
        FileMeta::new(self.0.name(), self.0.type_(), size)
    }

    fn read_text(&self) -> impl Future<Output = Result<String, FileReadError>> {
        let promise = self.0.text();
        async move {
            let value = JsFuture::from(promise)
                .await
                .map_err(|e| FileReadError(format!("{e:?}")))?;
            value
                .as_string()
                .ok_or_else(|| FileReadError("file content is not text".to_string()))
        }
    }
}

/// Offers `file` to the user as a download.
pub fn download(file: &ExportedFile) -> Result<(), String> {
    let blob_options = web_sys::BlobPropertyBag::new();
    blob_options.set_type(file.mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(
        &js_sys::Array::of1(&file.contents.as_str().into()),
        &blob_options,
    )
    .map_err(|e| format!("{e:?}"))?;

    let url = Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;
    let document = gloo::utils::document();
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?;
    let _ = anchor.set_attribute("href", &url);
    let _ = anchor.set_attribute("download", &file.file_name);
    if let Some(anchor) = anchor.dyn_ref::<web_sys::HtmlElement>() {
        anchor.click();
    }
    let _ = Url::revoke_object_url(&url);
    Ok(())
}
