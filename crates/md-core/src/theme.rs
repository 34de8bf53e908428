//! Dark-mode preference, persisted as "true"/"false".

use md_store::PersistentStore;

pub const THEME_KEY: &str = "md_theme_dark";

#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeState {
    dark: bool,
}

impl ThemeState {
    /// Read the persisted preference; anything but "true" means light.
    pub fn restore<S: PersistentStore>(store: &S) -> Self {
        let dark = store.get(THEME_KEY).as_deref() == Some("true");
        Self { dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip and persist; the caller re-applies via the theme signal.
    pub fn toggle<S: PersistentStore>(&mut self, store: &mut S) -> bool {
        self.dark = !self.dark;
        store.set(THEME_KEY, if self.dark { "true" } else { "false" });
        self.dark
    }
}
