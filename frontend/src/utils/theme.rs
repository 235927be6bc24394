use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use web_sys::window;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct ThemeParseError(String);

impl Theme {
    /// Stored preference wins; without one (or with garbage) follow the OS.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                log::warn!("Ignoring stored theme: {}", e);
                Self::from_system(prefers_dark)
            }
            None => Self::from_system(prefers_dark),
        }
    }

    fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Reads `localStorage` and the `prefers-color-scheme` media query.
    pub fn load() -> Self {
        let Some(window) = window() else {
            return Theme::Light;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok())
            .flatten();
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);
        Self::resolve(stored.as_deref(), prefers_dark)
    }

    /// Writes the preference back and flips the `dark` class on `<html>`.
    pub fn persist(self) {
        let Some(window) = window() else {
            return;
        };
        match window.local_storage() {
            Ok(Some(storage)) => {
                if let Err(e) = storage.set_item(config::THEME_STORAGE_KEY, self.as_str()) {
                    log::warn!("Failed to store theme: {:?}", e);
                }
            }
            _ => log::warn!("localStorage unavailable, theme will not persist"),
        }
        if let Some(root) = window.document().and_then(|doc| doc.document_element()) {
            let result = if self.is_dark() {
                root.class_list().add_1("dark")
            } else {
                root.class_list().remove_1("dark")
            };
            if let Err(e) = result {
                log::warn!("Failed to update root class: {:?}", e);
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_wins() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    }

    #[test]
    fn test_falls_back_to_system_preference() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_unknown_stored_value_uses_system() {
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), false), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(ThemeParseError("Dark".to_string()))
        );
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
