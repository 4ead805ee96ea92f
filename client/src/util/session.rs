//! Browser session side effects behind an explicit context object.
//!
//! SYSTEM CONTEXT
//! ==============
//! The submit actions in `net::api` receive a [`SessionContext`] instead of
//! reaching for `window`/`document` globals, so outcome application can be
//! exercised with a recording double and SSR stays deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

/// Side effects a submit action may request on the browser session.
pub trait SessionContext {
    /// Persist a cookie on the current document.
    fn set_cookie(&self, name: &str, value: &str);
    /// Replace the current location with a client route.
    fn redirect(&self, path: &str);
}

/// Real browser-backed session effects. No-ops on the server.
pub struct BrowserSession;

impl SessionContext for BrowserSession {
    fn set_cookie(&self, name: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Ok(html_doc) = doc.dyn_into::<web_sys::HtmlDocument>() {
                    let _ = html_doc.set_cookie(&cookie_string(name, value));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
        }
    }

    fn redirect(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

/// Cookie attribute line written by [`BrowserSession::set_cookie`].
/// Path-wide so the token is visible on every route.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn cookie_string(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/")
}

/// Read a cookie value from `document.cookie`.
/// Returns `None` when the cookie is absent or on the server.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window()?.document()?;
        let html_doc = doc.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let header = html_doc.cookie().ok()?;
        cookie_value_from(&header, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Extract the first value for `name` from a `document.cookie` header string.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn cookie_value_from(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}
