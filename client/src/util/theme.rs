//! Light/dark theme preference.
//!
//! The preference is read from storage at startup and applied as the
//! `data-theme` attribute of `<html>`. Toggling writes it back. Anything
//! other than a stored `"light"` means dark.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a rejected write is logged and the theme
//! still switches for the current page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::KeyValueStorage;

pub const THEME_KEY: &str = "rm_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored value.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Label for the header toggle button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read the stored preference, defaulting to dark.
pub fn read_preference(storage: &dyn KeyValueStorage) -> Theme {
    Theme::from_stored(storage.get_item(THEME_KEY).as_deref())
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
                log::warn!("failed to apply theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("theme {} applied", theme.as_str());
    }
}

/// Read, apply and return the stored preference.
pub fn init(storage: &dyn KeyValueStorage) -> Theme {
    let theme = read_preference(storage);
    apply(theme);
    theme
}

/// Switch to the other theme, apply it and persist it.
pub fn toggle(storage: &dyn KeyValueStorage, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(e) = storage.set_item(THEME_KEY, next.as_str()) {
        log::warn!("theme preference not saved: {e}");
    }
    next
}
