//! Signal consumer: owns every DOM mutation.
//!
//! The core announces state changes as signals; this module maps each one
//! onto the page. No business logic lives here.

use md_core::Signal;
use md_types::{DraftProfile, PanelId, Profile};
use web_sys::Element;

use crate::dom::{self, Elements};

/// Apply one presentation signal to the page.
pub fn apply(els: &Elements, signal: &Signal) {
    match signal {
        Signal::CurrentProfileChanged(profile) => render_card(els, profile),
        Signal::FeedExhausted => render_exhausted(els),
        Signal::ThemeChanged(dark) => apply_theme(*dark),
        Signal::PanelVisibilityChanged { panel, open } => set_panel(els, *panel, *open),
        Signal::DraftValidationError(msg) => {
            dom::set_text(&els.draft_message, msg);
            dom::set_inner_html(&els.draft_preview, "");
        }
        Signal::DraftSaved(draft) => {
            dom::set_text(&els.draft_message, "Profile saved");
            render_draft(&els.draft_preview, draft);
        }
        Signal::DraftPreview(draft) => {
            dom::set_text(&els.draft_message, "");
            render_draft(&els.draft_preview, draft);
        }
        Signal::DraftDeleted => {
            dom::set_text(&els.draft_message, "Profile deleted");
            dom::set_inner_html(&els.draft_preview, "");
        }
        Signal::LedgerChanged(liked) => {
            render_profile_list(&els.liked_list, liked, "No liked profiles yet");
        }
        Signal::AdmirersChanged(admirers) => {
            render_profile_list(&els.who_liked_list, admirers, "Nobody has liked you yet");
        }
    }
}

/// Render the profile under the cursor as the top card.
pub fn render_card(els: &Elements, profile: &Profile) {
    dom::set_inner_html(&els.card_stack, &card_html(profile));
}

/// Terminal "nothing to browse" card; shown both for a drained queue and a
/// feed that never loaded.
pub fn render_exhausted(els: &Elements) {
    dom::set_inner_html(
        &els.card_stack,
        r#"<div class="empty-text">No more profiles</div>"#,
    );
}

fn card_html(profile: &Profile) -> String {
    format!(
        r#"
        <div class="card">
          <div class="card-inner">
            <div class="card-photo" style="background-image: url({})"></div>
            <div class="card-info">
              <div class="card-name-age">{}, {}</div>
              <div>{}</div>
              <div>{}</div>
            </div>
          </div>
        </div>
        "#,
        profile.photo.as_deref().unwrap_or(""),
        profile.name,
        profile.age,
        profile.city.as_deref().unwrap_or(""),
        profile.bio.as_deref().unwrap_or(""),
    )
}

/// Render a read-only list of profiles (liked panel, who-liked-me panel).
pub fn render_profile_list(container: &Element, profiles: &[Profile], empty_text: &str) {
    if profiles.is_empty() {
        dom::set_inner_html(
            container,
            &format!(r#"<div class="empty-text">{}</div>"#, empty_text),
        );
        return;
    }

    let mut html = String::new();
    for p in profiles {
        html.push_str(&format!(
            r#"
            <div class="list-card">
              <div class="list-photo" style="background-image: url({})"></div>
              <div class="list-info">
                <div class="list-name-age">{}, {}</div>
                <div>{}</div>
              </div>
            </div>
            "#,
            p.photo.as_deref().unwrap_or(""),
            p.name,
            p.age,
            p.city.as_deref().unwrap_or(""),
        ));
    }
    dom::set_inner_html(container, &html);
}

/// Render the draft (saved or previewed) like a feed card.
pub fn render_draft(container: &Element, draft: &DraftProfile) {
    let as_profile = Profile {
        name: draft.name.clone(),
        age: draft.age,
        city: draft.city.clone(),
        photo: draft.photo.clone(),
        bio: draft.bio.clone(),
    };
    dom::set_inner_html(container, &card_html(&as_profile));
}

fn apply_theme(dark: bool) {
    dom::toggle_class(&dom::body(), "dark-mode", dark);
}

/// Panels show/hide through `aria-hidden`, matching the page styling hooks.
fn set_panel(els: &Elements, panel: PanelId, open: bool) {
    let el = match panel {
        PanelId::Liked => &els.liked_panel,
        PanelId::Draft => &els.create_panel,
        PanelId::WhoLikedMe => &els.who_liked_panel,
    };
    let _ = el.set_attribute("aria-hidden", if open { "false" } else { "true" });
}
