use leptos::prelude::*;
use tracing::warn;

use crate::session::{BrowserStorage, SessionStore};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything but `dark` is the light theme.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext(RwSignal<Theme>);

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.0.get()
    }

    pub fn toggle(&self) {
        self.0.update(|theme| *theme = theme.toggled());
    }
}

/// Reads the stored theme and keeps `<html data-theme>` and storage in sync.
pub fn provide_theme() -> ThemeContext {
    let stored = BrowserStorage.get(THEME_KEY);
    let theme = ThemeContext(RwSignal::new(Theme::parse(stored.as_deref())));
    provide_context(theme);

    Effect::new(move |_| {
        let current = theme.get();
        BrowserStorage.set(THEME_KEY, current.as_str());

        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        match root {
            Some(root) => {
                if let Err(e) = root.set_attribute("data-theme", current.as_str()) {
                    warn!("Failed to apply theme: {e:?}");
                }
            }
            None => warn!("No document element to apply the theme to"),
        }
    });

    theme
}

pub fn expect_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
