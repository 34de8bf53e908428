//! The locally authored profile draft.
//!
//! One draft at a time: saving overwrites the previous one wholesale, there
//! are no partial edits. Validation failures surface as [`DraftError`] with
//! a message fit for the user; nothing is written on failure.

use md_store::PersistentStore;
use md_types::{DraftFields, DraftProfile};
use thiserror::Error;

pub const DRAFT_KEY: &str = "md_draft_profile";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Name is required")]
    EmptyName,
    #[error("Age must be a whole number, got \"{0}\"")]
    InvalidAge(String),
}

/// Validate raw form input and build the draft. Shared by save and preview.
pub fn build(fields: &DraftFields) -> Result<DraftProfile, DraftError> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(DraftError::EmptyName);
    }

    let age: u32 = fields
        .age
        .trim()
        .parse()
        .map_err(|_| DraftError::InvalidAge(fields.age.trim().to_owned()))?;

    Ok(DraftProfile {
        name: name.to_owned(),
        age,
        city: optional(&fields.city),
        photo: optional(&fields.photo),
        bio: optional(&fields.bio),
    })
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Validate and persist, overwriting any prior draft. On failure the prior
/// draft is untouched.
pub fn save<S: PersistentStore>(
    store: &mut S,
    fields: &DraftFields,
) -> Result<DraftProfile, DraftError> {
    let draft = build(fields)?;
    let json = serde_json::to_string(&draft).unwrap_or_default();
    store.set(DRAFT_KEY, &json);
    Ok(draft)
}

/// The persisted draft, if one exists. An unreadable slot reads as absent.
pub fn load<S: PersistentStore>(store: &S) -> Option<DraftProfile> {
    let raw = store.get(DRAFT_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn delete<S: PersistentStore>(store: &mut S) {
    store.remove(DRAFT_KEY);
}
