//! Reading named values out of a `Cookie` header string.

use std::borrow::Cow;

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Returns the value of the first cookie called `name`, percent-decoded.
///
/// `header` has the `document.cookie` shape: `"a=1; b=2"`. A pair only
/// matches when `name` is followed directly by `=`, so asking for `tok`
/// never returns the value of `tokenx`. Values that do not decode to UTF-8
/// are returned as they appear in the header.
pub fn get_cookie(header: &str, name: &str) -> Option<String> {
    if header.is_empty() {
        return None;
    }

    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw)
                .unwrap_or(Cow::Borrowed(raw))
                .into_owned()
        })
}

pub fn document_cookie_header() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
        .and_then(|document| document.cookie().ok())
        .unwrap_or_default()
}
