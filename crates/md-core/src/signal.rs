//! Presentation signals.
//!
//! The core's entire contract with the rendering layer: every state change
//! that presentation might care about is announced as one of these. The
//! adapter subscribes and owns all DOM work.

use md_types::{DraftProfile, PanelId, Profile};

#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    /// A new profile is under the cursor.
    CurrentProfileChanged(Profile),
    /// The cursor moved past the end of the queue (or the queue is empty).
    FeedExhausted,
    /// Dark mode flag, to be applied to presentation.
    ThemeChanged(bool),
    PanelVisibilityChanged { panel: PanelId, open: bool },
    /// Validation failed; the message is user-facing.
    DraftValidationError(String),
    DraftSaved(DraftProfile),
    /// Validated but unsaved draft, for the live preview.
    DraftPreview(DraftProfile),
    DraftDeleted,
    /// The liked sequence changed (or was restored); full list in like order.
    LedgerChanged(Vec<Profile>),
    /// The who-liked-me list arrived.
    AdmirersChanged(Vec<Profile>),
}
