//! Matchdeck WASM frontend.
//!
//! Presentation adapter over the `md-core` state machine: binds the DOM,
//! wires events, fetches the remote lists and renders the core's signals.
//! Modularised for extensibility: each concern lives in its own module.

pub mod api;
pub mod dom;
pub mod events;
pub mod render;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::error;
use md_core::Session;
use wasm_bindgen::prelude::*;

use storage::LocalStore;

/// The one session per page load, shared between event closures.
pub type SharedSession = Rc<RefCell<Session<LocalStore>>>;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    let session: SharedSession = Rc::new(RefCell::new(Session::new(LocalStore)));

    // Restore persisted theme and ledger, then show the pre-load card state
    // (reported as exhausted until the fetch resolves).
    for signal in session.borrow().restore() {
        render::apply(&els, &signal);
    }
    render::render_exhausted(&els);

    events::bind_events(&els, &session);

    // One fire-and-forget fetch per list. No retry, no timeout: a failed or
    // hung request leaves the feed empty for the rest of the page life.
    {
        let els2 = els.clone();
        let session2 = session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_profiles().await {
                Ok(profiles) => {
                    for signal in session2.borrow_mut().feed_loaded(profiles) {
                        render::apply(&els2, &signal);
                    }
                }
                Err(e) => error!("failed to load profiles:", e),
            }
        });
    }
    {
        let els2 = els.clone();
        let session2 = session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_admirers().await {
                Ok(profiles) => {
                    for signal in session2.borrow_mut().admirers_loaded(profiles) {
                        render::apply(&els2, &signal);
                    }
                }
                Err(e) => error!("failed to load who-liked-me list:", e),
            }
        });
    }

    Ok(())
}
