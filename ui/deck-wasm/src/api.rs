//! HTTP API client.
//!
//! Wraps `fetch` for the two read-only endpoints the widget consumes.
//! Both loads are fire-and-forget: no retry, no timeout, and a failure
//! leaves the corresponding list empty.

use md_types::Profile;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Fetch a path and parse the body as a JSON array of profiles.
pub async fn fetch_profile_list(path: &str) -> Result<Vec<Profile>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(path, &opts).map_err(|e| format!("{:?}", e))?;

    let window = crate::dom::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;

    let text_str = text.as_string().unwrap_or_default();

    if !resp.ok() {
        return Err(format!("{} {}: {}", resp.status(), resp.status_text(), text_str));
    }

    serde_json::from_str(&text_str).map_err(|e| format!("JSON parse error: {}", e))
}

/// The candidate queue, in source order.
pub async fn fetch_profiles() -> Result<Vec<Profile>, String> {
    fetch_profile_list("/api/profiles").await
}

/// Profiles that liked the user.
pub async fn fetch_admirers() -> Result<Vec<Profile>, String> {
    fetch_profile_list("/api/likes/me/received").await
}
