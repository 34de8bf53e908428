//! Matchdeck interaction core.
//!
//! Pure state machine behind the card-browsing widget: feed traversal,
//! like ledger, profile draft, theme and panel flags. Consumes [`Action`]s,
//! emits [`Signal`]s, and talks to the outside world only through the
//! `PersistentStore` seam. Rendering, fetching and the DOM live in the
//! presentation adapter (`deck-wasm`), not here.

pub mod draft;
pub mod feed;
pub mod ledger;
pub mod panels;
pub mod session;
pub mod signal;
pub mod theme;

pub use draft::DraftError;
pub use session::{Action, Session};
pub use signal::Signal;
