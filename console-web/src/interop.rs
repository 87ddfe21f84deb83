use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use console_domain::LabelField;

/// Get the browser viewport dimensions, falling back to the document
/// element when the window reports zero.
pub fn viewport_size() -> (u32, u32) {
    current_viewport_size().unwrap_or((0, 0))
}

fn current_viewport_size() -> Option<(u32, u32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    if width > 0.0 && height > 0.0 {
        return Some((width.round() as u32, height.round() as u32));
    }

    let document = window.document()?;
    let root = document.document_element()?;
    let width = root.client_width().max(0) as u32;
    let height = root.client_height().max(0) as u32;
    Some((width, height))
}

pub async fn track_viewport(mut viewport: Signal<(u32, u32)>) {
    if let Some((w, h)) = current_viewport_size() {
        viewport.set((w, h));
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some((w, h)) = current_viewport_size() {
            viewport.set((w, h));
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("orientationchange", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}

pub fn document_hidden() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.hidden())
        .unwrap_or(false)
}

/// `visibilitychange`/`focus` listeners that raise the shared refresh
/// flag. Dropping the value removes both listeners.
pub struct RefreshTriggers {
    visibility: Closure<dyn FnMut(web_sys::Event)>,
    focus: Closure<dyn FnMut(web_sys::Event)>,
}

pub fn watch_refresh_triggers(requested: Rc<Cell<bool>>) -> Option<RefreshTriggers> {
    let window = web_sys::window()?;
    let document = window.document()?;

    let flag = requested.clone();
    let visibility = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        // Fires on both transitions; only becoming visible refreshes.
        if !document_hidden() {
            flag.set(true);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let flag = requested;
    let focus = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        flag.set(true);
    }) as Box<dyn FnMut(web_sys::Event)>);

    if document
        .add_event_listener_with_callback("visibilitychange", visibility.as_ref().unchecked_ref())
        .is_err()
    {
        dioxus_logger::tracing::warn!("Failed to register visibilitychange listener");
    }
    if window
        .add_event_listener_with_callback("focus", focus.as_ref().unchecked_ref())
        .is_err()
    {
        dioxus_logger::tracing::warn!("Failed to register focus listener");
    }

    Some(RefreshTriggers { visibility, focus })
}

impl Drop for RefreshTriggers {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(document) = window.document() {
            let _ = document.remove_event_listener_with_callback(
                "visibilitychange",
                self.visibility.as_ref().unchecked_ref(),
            );
        }
        let _ = window
            .remove_event_listener_with_callback("focus", self.focus.as_ref().unchecked_ref());
    }
}

/// Decode inline label content to PDF bytes. A bare presence flag has no
/// inline content; the caller fetches the document instead.
pub fn decode_label_content(label: &LabelField) -> Option<Vec<u8>> {
    match label {
        LabelField::Bytes(bytes) if !bytes.is_empty() => Some(bytes.clone()),
        LabelField::Content(text) if !text.trim().is_empty() => {
            let body = strip_data_url_prefix(text.trim());
            let window = web_sys::window()?;
            let binary = window.atob(body).ok()?;
            Some(binary.chars().map(|c| c as u8).collect())
        }
        _ => None,
    }
}

pub fn strip_data_url_prefix(value: &str) -> &str {
    match value.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => value,
    }
}

pub fn label_file_name(sale_number: Option<&str>) -> String {
    match sale_number {
        Some(number) if !number.trim().is_empty() => format!("label_{}.pdf", number.trim()),
        _ => "label_document.pdf".to_string(),
    }
}

/// Blob + object URL + synthetic anchor click.
pub fn download_pdf(bytes: &[u8], file_name: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "failed to build blob")?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "failed to create object url")?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "failed to create anchor")?
        .dyn_into()
        .map_err(|_| "anchor cast failed")?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
    }
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_prefix_is_stripped() {
        assert_eq!(
            strip_data_url_prefix("data:application/pdf;base64,JVBERi0x"),
            "JVBERi0x"
        );
        assert_eq!(strip_data_url_prefix("JVBERi0x"), "JVBERi0x");
        // Only data: URLs are unwrapped.
        assert_eq!(strip_data_url_prefix("x;base64,y"), "x;base64,y");
    }

    #[test]
    fn label_file_name_uses_sale_number_when_present() {
        assert_eq!(label_file_name(Some("S-17")), "label_S-17.pdf");
        assert_eq!(label_file_name(Some("  ")), "label_document.pdf");
        assert_eq!(label_file_name(None), "label_document.pdf");
    }
}
