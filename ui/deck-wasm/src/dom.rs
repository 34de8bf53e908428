//! DOM element bindings.
//!
//! All element references are resolved once at startup. Ids and classes
//! follow the host page markup; to add new UI elements, add a field here
//! and bind it in `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn get_textarea_value(el: &HtmlTextAreaElement) -> String {
    el.value().trim().to_string()
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

pub fn body() -> HtmlElement {
    doc().body().unwrap()
}

// ── Elements struct ──

/// All DOM references the deck UI touches.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Card stack and decisions
    pub card_stack: Element,
    pub like_btn: HtmlElement,
    pub skip_btn: HtmlElement,

    // Theme
    pub theme_btn: HtmlElement,

    // Liked panel
    pub saved_btn: HtmlElement,
    pub liked_panel: Element,
    pub liked_list: Element,
    pub back_btn: HtmlElement,

    // Who-liked-me panel
    pub who_liked_btn: HtmlElement,
    pub who_liked_panel: Element,
    pub who_liked_list: Element,
    pub who_back_btn: HtmlElement,

    // Draft editor panel
    pub create_btn: HtmlElement,
    pub create_panel: Element,
    pub create_close: HtmlElement,
    pub draft_name: HtmlInputElement,
    pub draft_age: HtmlInputElement,
    pub draft_city: HtmlInputElement,
    pub draft_photo: HtmlInputElement,
    pub draft_bio: HtmlTextAreaElement,
    pub save_profile_btn: HtmlElement,
    pub preview_profile_btn: HtmlElement,
    pub view_profile_btn: HtmlElement,
    pub draft_preview: Element,
    pub draft_message: Element,
}

macro_rules! get_query {
    ($sel:expr) => {
        query($sel).ok_or_else(|| JsValue::from_str(&format!("missing element {}", $sel)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_textarea {
    ($id:expr) => {
        by_id_typed::<HtmlTextAreaElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing textarea #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

macro_rules! get_query_html {
    ($sel:expr) => {
        query($sel)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| JsValue::from_str(&format!("missing html element {}", $sel)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            card_stack: get_query!(".card-stack"),
            like_btn: get_html!("like-btn"),
            skip_btn: get_html!("skip-btn"),

            theme_btn: get_html!("theme-btn"),

            saved_btn: get_html!("saved-btn"),
            liked_panel: get_query!(".liked-panel"),
            liked_list: get_query!(".liked-list"),
            back_btn: get_query_html!(".back-btn"),

            who_liked_btn: get_html!("who-liked-btn"),
            who_liked_panel: get_query!(".who-liked-panel"),
            who_liked_list: get_query!(".who-liked-list"),
            who_back_btn: get_query_html!(".who-back-btn"),

            create_btn: get_html!("create-btn"),
            create_panel: get_query!(".create-panel"),
            create_close: get_query_html!(".create-close"),
            draft_name: get_input!("draft-name"),
            draft_age: get_input!("draft-age"),
            draft_city: get_input!("draft-city"),
            draft_photo: get_input!("draft-photo"),
            draft_bio: get_textarea!("draft-bio"),
            save_profile_btn: get_html!("save-profile-btn"),
            preview_profile_btn: get_html!("preview-profile-btn"),
            view_profile_btn: get_html!("view-profile-btn"),
            draft_preview: get_query!(".draft-preview"),
            draft_message: get_query!(".draft-message"),
        })
    }
}
