//! Open/closed flags for the auxiliary panels.
//!
//! Each flag is independent; nothing stops several panels from being open
//! at once. Panel visibility is session-local, not persisted.

use md_types::PanelId;

#[derive(Clone, Copy, Debug, Default)]
pub struct Panels {
    liked: bool,
    draft: bool,
    who_liked_me: bool,
}

impl Panels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, panel: PanelId) -> bool {
        match panel {
            PanelId::Liked => self.liked,
            PanelId::Draft => self.draft,
            PanelId::WhoLikedMe => self.who_liked_me,
        }
    }

    /// Flip one panel, returning its new state.
    pub fn toggle(&mut self, panel: PanelId) -> bool {
        let flag = match panel {
            PanelId::Liked => &mut self.liked,
            PanelId::Draft => &mut self.draft,
            PanelId::WhoLikedMe => &mut self.who_liked_me,
        };
        *flag = !*flag;
        *flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_closed_by_default() {
        let panels = Panels::new();
        assert!(!panels.is_open(PanelId::Liked));
        assert!(!panels.is_open(PanelId::Draft));
        assert!(!panels.is_open(PanelId::WhoLikedMe));
    }

    #[test]
    fn toggles_are_independent() {
        let mut panels = Panels::new();
        assert!(panels.toggle(PanelId::Liked));
        assert!(panels.toggle(PanelId::Draft));

        // toggling draft did not touch liked
        assert!(panels.is_open(PanelId::Liked));

        assert!(!panels.toggle(PanelId::Draft));
        assert!(panels.is_open(PanelId::Liked));
        assert!(!panels.is_open(PanelId::Draft));
    }

    #[test]
    fn several_panels_may_be_open() {
        let mut panels = Panels::new();
        panels.toggle(PanelId::Liked);
        panels.toggle(PanelId::WhoLikedMe);
        assert!(panels.is_open(PanelId::Liked) && panels.is_open(PanelId::WhoLikedMe));
    }
}
