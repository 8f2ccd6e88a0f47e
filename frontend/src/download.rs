//! Browser file download for applicant exports.

use log::debug;
use shared::review::ExportFile;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Saves `file` through a temporary object URL and anchor click
pub fn save_file(file: &ExportFile) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.content.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&file.filename);
    anchor.click();
    Url::revoke_object_url(&url)?;

    debug!("Downloaded {} ({} bytes)", file.filename, file.content.len());
    Ok(())
}
