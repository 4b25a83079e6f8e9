//! Project link sharing: canonical URLs, QR image URLs and clipboard copy.
//!
//! QR images come from a third-party endpoint; this module only builds the
//! request URL.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const QR_SIZE: &str = "200x200";

/// Route path of a project detail page.
#[must_use]
pub fn project_path(id: &str) -> String {
    format!("/projects/{id}")
}

/// Absolute link to a project detail page.
#[must_use]
pub fn project_url(origin: &str, id: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), project_path(id))
}

/// Image URL of a QR code encoding the project link.
#[must_use]
pub fn qr_code_url(origin: &str, id: &str) -> String {
    let link = project_url(origin, id);
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("size", QR_SIZE)
        .append_pair("data", &link)
        .finish();
    format!("{QR_ENDPOINT}?{query}")
}

/// Origin of the current page, e.g. `https://example.com`.
pub fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns a description when the clipboard is unavailable or the browser
/// rejects the write.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let navigator = window.navigator();
        // Insecure origins expose no `navigator.clipboard` at all.
        if !js_sys::Reflect::has(&navigator, &"clipboard".into()).unwrap_or(false) {
            return Err("clipboard unavailable".to_owned());
        }
        let clipboard = navigator.clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard unavailable".to_owned())
    }
}
