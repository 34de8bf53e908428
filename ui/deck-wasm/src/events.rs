//! Event binding.
//!
//! Wires all UI listeners. Every handler turns a DOM event into an
//! [`Action`], runs it through the shared session, and hands the resulting
//! signals to `render`. The session travels into closures as an
//! `Rc<RefCell<..>>`; there are no ambient globals.

use md_core::Action;
use md_types::{DraftFields, PanelId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::{self, Elements};
use crate::render;
use crate::SharedSession;

/// Helper: attach sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Helper: attach a click handler that dispatches a fixed action.
macro_rules! on_click_action {
    ($el:expr, $els:expr, $session:expr, $action:expr) => {{
        let els = $els.clone();
        let session = $session.clone();
        on_click!($el, move |_: web_sys::MouseEvent| {
            dispatch(&session, &els, $action);
        });
    }};
}

/// Run one action through the session and render its signals.
pub fn dispatch(session: &SharedSession, els: &Elements, action: Action) {
    let signals = session.borrow_mut().apply(action);
    for signal in &signals {
        render::apply(els, signal);
    }
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements, session: &SharedSession) {
    // ── Decisions on the current card ──
    on_click_action!(els.like_btn, els, session, Action::Like);
    on_click_action!(els.skip_btn, els, session, Action::Skip);

    // ── Theme ──
    on_click_action!(els.theme_btn, els, session, Action::ToggleTheme);

    // ── Panels (open and back buttons both just toggle) ──
    on_click_action!(els.saved_btn, els, session, Action::TogglePanel(PanelId::Liked));
    on_click_action!(els.back_btn, els, session, Action::TogglePanel(PanelId::Liked));
    on_click_action!(
        els.who_liked_btn,
        els,
        session,
        Action::TogglePanel(PanelId::WhoLikedMe)
    );
    on_click_action!(
        els.who_back_btn,
        els,
        session,
        Action::TogglePanel(PanelId::WhoLikedMe)
    );
    on_click_action!(els.create_btn, els, session, Action::TogglePanel(PanelId::Draft));
    on_click_action!(
        els.create_close,
        els,
        session,
        Action::TogglePanel(PanelId::Draft)
    );

    // ── Draft editor ──
    {
        let els2 = els.clone();
        let session2 = session.clone();
        on_click!(els.save_profile_btn, move |_: web_sys::MouseEvent| {
            let fields = collect_draft_fields(&els2);
            dispatch(&session2, &els2, Action::SaveDraft(fields));
        });
    }
    {
        let els2 = els.clone();
        let session2 = session.clone();
        on_click!(els.preview_profile_btn, move |_: web_sys::MouseEvent| {
            let fields = collect_draft_fields(&els2);
            dispatch(&session2, &els2, Action::PreviewDraft(fields));
        });
    }
    {
        let els2 = els.clone();
        let session2 = session.clone();
        on_click!(els.view_profile_btn, move |_: web_sys::MouseEvent| {
            on_view_draft(&session2, &els2);
        });
    }
}

/// Raw form input; validation happens in the core.
fn collect_draft_fields(els: &Elements) -> DraftFields {
    DraftFields {
        name: dom::get_input_value(&els.draft_name),
        age: dom::get_input_value(&els.draft_age),
        city: dom::get_input_value(&els.draft_city),
        photo: dom::get_input_value(&els.draft_photo),
        bio: dom::get_textarea_value(&els.draft_bio),
    }
}

/// View-draft flow: show the saved draft if there is one, then offer
/// deletion behind a browser confirm. The confirmation is presentation
/// territory, so it lives here and not in the core.
fn on_view_draft(session: &SharedSession, els: &Elements) {
    let draft = session.borrow().load_draft();
    match draft {
        None => {
            dom::set_text(&els.draft_message, "No profile exists yet");
            dom::set_inner_html(&els.draft_preview, "");
        }
        Some(draft) => {
            render::render_draft(&els.draft_preview, &draft);
            let confirmed = dom::window()
                .confirm_with_message("Delete your saved profile?")
                .unwrap_or(false);
            if confirmed {
                dispatch(session, els, Action::DeleteDraft);
            }
        }
    }
}
