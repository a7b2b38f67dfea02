//! Theme persistence and application.
//!
//! Reads the stored theme from `localStorage` and applies it as a
//! `data-theme` attribute on the `<html>` element. Storing writes back to
//! `localStorage` and updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op to keep
//! server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "fixity-theme";

/// Read the stored theme, defaulting to `Theme::Public`.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        Theme::parse(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply `theme` and persist it to localStorage.
pub fn store(theme: Theme) {
    apply(theme);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
}
