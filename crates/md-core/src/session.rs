//! The per-page-load session: one owned state object wrapping every
//! component, dispatching user actions and returning presentation signals.
//!
//! Constructed once and passed by reference to whichever layer produces
//! actions; there are no ambient globals. Everything runs to completion on
//! the single interaction thread, so no locking is needed; the two fetches
//! resolve into `feed_loaded` / `admirers_loaded` when they arrive.

use md_store::PersistentStore;
use md_types::{DraftFields, DraftProfile, PanelId, Profile};

use crate::draft;
use crate::feed::Feed;
use crate::ledger::Ledger;
use crate::panels::Panels;
use crate::signal::Signal;
use crate::theme::ThemeState;

/// User actions produced by the input layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Like,
    Skip,
    ToggleTheme,
    TogglePanel(PanelId),
    SaveDraft(DraftFields),
    PreviewDraft(DraftFields),
    DeleteDraft,
}

pub struct Session<S> {
    store: S,
    feed: Feed,
    ledger: Ledger,
    theme: ThemeState,
    panels: Panels,
    admirers: Vec<Profile>,
}

impl<S: PersistentStore> Session<S> {
    /// Build a session over `store`, restoring theme and ledger from prior
    /// visits. The feed starts empty until `feed_loaded` is called.
    pub fn new(store: S) -> Self {
        let theme = ThemeState::restore(&store);
        let ledger = Ledger::restore(&store);
        Self {
            store,
            feed: Feed::new(),
            ledger,
            theme,
            panels: Panels::new(),
            admirers: Vec::new(),
        }
    }

    /// Announce restored state so presentation can apply it on load.
    pub fn restore(&self) -> Vec<Signal> {
        vec![
            Signal::ThemeChanged(self.theme.is_dark()),
            Signal::LedgerChanged(self.ledger.entries().to_vec()),
        ]
    }

    /// Ingest the fetched profile queue (replaces wholesale, cursor to 0).
    pub fn feed_loaded(&mut self, profiles: Vec<Profile>) -> Vec<Signal> {
        self.feed.replace(profiles);
        vec![self.cursor_signal()]
    }

    /// Ingest the who-liked-me list.
    pub fn admirers_loaded(&mut self, profiles: Vec<Profile>) -> Vec<Signal> {
        self.admirers = profiles;
        vec![Signal::AdmirersChanged(self.admirers.clone())]
    }

    /// Dispatch one user action.
    pub fn apply(&mut self, action: Action) -> Vec<Signal> {
        match action {
            Action::Like => self.decide(true),
            Action::Skip => self.decide(false),
            Action::ToggleTheme => {
                let dark = self.theme.toggle(&mut self.store);
                vec![Signal::ThemeChanged(dark)]
            }
            Action::TogglePanel(panel) => {
                let open = self.panels.toggle(panel);
                vec![Signal::PanelVisibilityChanged { panel, open }]
            }
            Action::SaveDraft(fields) => match draft::save(&mut self.store, &fields) {
                Ok(saved) => vec![Signal::DraftSaved(saved)],
                Err(e) => vec![Signal::DraftValidationError(e.to_string())],
            },
            Action::PreviewDraft(fields) => match draft::build(&fields) {
                Ok(preview) => vec![Signal::DraftPreview(preview)],
                Err(e) => vec![Signal::DraftValidationError(e.to_string())],
            },
            Action::DeleteDraft => {
                draft::delete(&mut self.store);
                vec![Signal::DraftDeleted]
            }
        }
    }

    /// Like or skip the current profile, then advance. With the feed
    /// exhausted there is no current profile and the decision is a no-op.
    fn decide(&mut self, like: bool) -> Vec<Signal> {
        let Some(current) = self.feed.current().cloned() else {
            return Vec::new();
        };

        let mut signals = Vec::new();
        if like {
            self.ledger.record_like(&mut self.store, current);
            signals.push(Signal::LedgerChanged(self.ledger.entries().to_vec()));
        }
        self.feed.advance();
        signals.push(self.cursor_signal());
        signals
    }

    fn cursor_signal(&self) -> Signal {
        match self.feed.current() {
            Some(p) => Signal::CurrentProfileChanged(p.clone()),
            None => Signal::FeedExhausted,
        }
    }

    /// The persisted draft, if any. Used by the view-draft flow, where the
    /// adapter owns the deletion confirmation.
    pub fn load_draft(&self) -> Option<DraftProfile> {
        draft::load(&self.store)
    }

    // ── Read accessors for initial render ──

    pub fn current_profile(&self) -> Option<&Profile> {
        self.feed.current()
    }

    pub fn liked(&self) -> &[Profile] {
        self.ledger.entries()
    }

    pub fn admirers(&self) -> &[Profile] {
        &self.admirers
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn panel_open(&self, panel: PanelId) -> bool {
        self.panels.is_open(panel)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use md_store::MemoryStore;

    fn profile(name: &str, age: u32) -> Profile {
        Profile {
            name: name.to_owned(),
            age,
            ..Profile::default()
        }
    }

    fn fields(name: &str, age: &str, city: &str) -> DraftFields {
        DraftFields {
            name: name.to_owned(),
            age: age.to_owned(),
            city: city.to_owned(),
            ..DraftFields::default()
        }
    }

    fn session_with_feed(profiles: Vec<Profile>) -> Session<MemoryStore> {
        let mut session = Session::new(MemoryStore::new());
        session.feed_loaded(profiles);
        session
    }

    #[test]
    fn restore_announces_theme_and_ledger() {
        let session = Session::new(MemoryStore::new());
        assert_eq!(
            session.restore(),
            vec![Signal::ThemeChanged(false), Signal::LedgerChanged(Vec::new())]
        );
    }

    #[test]
    fn feed_loaded_presents_first_profile() {
        let mut session = Session::new(MemoryStore::new());
        let signals = session.feed_loaded(vec![profile("a", 20), profile("b", 21)]);
        assert_eq!(signals, vec![Signal::CurrentProfileChanged(profile("a", 20))]);
    }

    #[test]
    fn empty_feed_loads_as_exhausted() {
        let mut session = Session::new(MemoryStore::new());
        assert_eq!(session.feed_loaded(Vec::new()), vec![Signal::FeedExhausted]);
    }

    #[test]
    fn like_records_then_advances() {
        let mut session = session_with_feed(vec![profile("a", 20), profile("b", 21)]);

        let signals = session.apply(Action::Like);
        assert_eq!(
            signals,
            vec![
                Signal::LedgerChanged(vec![profile("a", 20)]),
                Signal::CurrentProfileChanged(profile("b", 21)),
            ]
        );
    }

    #[test]
    fn skip_advances_without_recording() {
        let mut session = session_with_feed(vec![profile("a", 20), profile("b", 21)]);

        let signals = session.apply(Action::Skip);
        assert_eq!(signals, vec![Signal::CurrentProfileChanged(profile("b", 21))]);
        assert!(session.liked().is_empty());
    }

    #[test]
    fn decisions_on_exhausted_feed_are_noops() {
        let mut session = session_with_feed(vec![profile("only", 20)]);
        session.apply(Action::Skip);
        assert!(session.current_profile().is_none());

        for _ in 0..5 {
            assert!(session.apply(Action::Like).is_empty());
            assert!(session.apply(Action::Skip).is_empty());
        }
        assert!(session.liked().is_empty());
    }

    #[test]
    fn likes_accumulate_in_decision_order_with_duplicates() {
        let dup = profile("twin", 30);
        let mut session = session_with_feed(vec![dup.clone(), profile("mid", 25), dup.clone()]);

        session.apply(Action::Like);
        session.apply(Action::Like);
        session.apply(Action::Like);

        assert_eq!(session.liked(), [dup.clone(), profile("mid", 25), dup]);
    }

    #[test]
    fn theme_toggle_roundtrip() {
        let mut session = Session::new(MemoryStore::new());
        assert_eq!(
            session.apply(Action::ToggleTheme),
            vec![Signal::ThemeChanged(true)]
        );
        assert_eq!(
            session.apply(Action::ToggleTheme),
            vec![Signal::ThemeChanged(false)]
        );
        assert!(!session.is_dark());
    }

    #[test]
    fn panel_toggles_do_not_interfere() {
        let mut session = Session::new(MemoryStore::new());
        session.apply(Action::TogglePanel(PanelId::Liked));
        let signals = session.apply(Action::TogglePanel(PanelId::Draft));

        assert_eq!(
            signals,
            vec![Signal::PanelVisibilityChanged {
                panel: PanelId::Draft,
                open: true
            }]
        );
        assert!(session.panel_open(PanelId::Liked));
    }

    #[test]
    fn invalid_draft_signals_error_and_writes_nothing() {
        let mut session = Session::new(MemoryStore::new());
        let signals = session.apply(Action::SaveDraft(fields("", "30", "")));

        assert!(matches!(signals[0], Signal::DraftValidationError(_)));
        assert_eq!(session.load_draft(), None);
    }

    #[test]
    fn saved_draft_roundtrips() {
        let mut session = Session::new(MemoryStore::new());
        let signals = session.apply(Action::SaveDraft(fields("Ann", "28", "Riga")));

        let expected = DraftProfile {
            name: "Ann".into(),
            age: 28,
            city: Some("Riga".into()),
            photo: None,
            bio: None,
        };
        assert_eq!(signals, vec![Signal::DraftSaved(expected.clone())]);
        assert_eq!(session.load_draft(), Some(expected));
    }

    #[test]
    fn preview_validates_but_does_not_persist() {
        let mut session = Session::new(MemoryStore::new());
        let signals = session.apply(Action::PreviewDraft(fields("Ann", "28", "")));

        assert!(matches!(signals[0], Signal::DraftPreview(_)));
        assert_eq!(session.load_draft(), None);
    }

    #[test]
    fn reload_keeps_ledger_and_forgets_deleted_draft() {
        let mut session = session_with_feed(vec![profile("kept", 27)]);
        session.apply(Action::SaveDraft(fields("Ann", "28", "")));
        session.apply(Action::Like);
        session.apply(Action::DeleteDraft);

        // New session over the same slots simulates a page reload.
        let reloaded = Session::new(session.store().clone());
        assert_eq!(reloaded.liked(), [profile("kept", 27)]);
        assert_eq!(reloaded.load_draft(), None);
    }

    #[test]
    fn admirers_list_is_announced() {
        let mut session = Session::new(MemoryStore::new());
        let signals = session.admirers_loaded(vec![profile("fan", 24)]);
        assert_eq!(signals, vec![Signal::AdmirersChanged(vec![profile("fan", 24)])]);
        assert_eq!(session.admirers().len(), 1);
    }
}
