//! Theme management module for the application.
//!
//! The light/dark theme is resolved once at startup and handed to
//! [`ThemeProvider`] explicitly. It is read-only afterwards: switching
//! persists the new preference and reloads the page.

use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Tema claro",
            Theme::Dark => "Tema escuro",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parse a stored theme name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// UI kit palette for this theme.
    pub fn thaw_theme(&self) -> thaw::Theme {
        match self {
            Theme::Light => thaw::Theme::light(),
            Theme::Dark => thaw::Theme::dark(),
        }
    }
}

const THEME_STORAGE_KEY: &str = "app-theme";

/// Load theme from localStorage.
fn load_saved_theme() -> Option<Theme> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|s| Theme::parse(&s))
}

/// Save theme to localStorage.
fn save_theme(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// OS-level preference, when the browser exposes one.
fn system_theme() -> Option<Theme> {
    let query = window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(if query.matches() {
        Theme::Dark
    } else {
        Theme::Light
    })
}

/// Resolve the theme for this page load: saved preference, then OS
/// preference, then dark.
pub fn resolve_startup_theme() -> Theme {
    let theme = load_saved_theme()
        .or_else(system_theme)
        .unwrap_or_default();
    log::debug!("startup theme: {}", theme.as_str());
    theme
}

/// Persist `theme` and reload so the next page load starts with it.
pub fn switch_theme(theme: Theme) {
    save_theme(theme);
    if let Some(w) = window() {
        let _ = w.location().reload();
    }
}

/// Set data-theme attribute on body for CSS selectors.
fn apply_body_attribute(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Read-only theme context.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    theme: Theme,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme
    }
}

/// Provides the startup theme to children components.
#[component]
pub fn ThemeProvider(theme: Theme, children: Children) -> impl IntoView {
    apply_body_attribute(theme);
    provide_context(ThemeContext { theme });

    let thaw_theme = RwSignal::new(theme.thaw_theme());

    view! {
        <thaw::ConfigProvider theme=thaw_theme>
            {children()}
        </thaw::ConfigProvider>
    }
}

/// Hook to read the theme.
pub fn use_theme() -> Theme {
    use_context::<ThemeContext>()
        .map(|ctx| ctx.theme())
        .unwrap_or_default()
}

/// Header button that switches between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let next = theme.toggled();

    view! {
        <button
            class="button button--ghost"
            title=next.display_name()
            aria-label=next.display_name()
            on:click=move |_| switch_theme(next)
        >
            {if theme.is_dark() {
                crate::shared::icons::icon("sun")
            } else {
                crate::shared::icons::icon("moon")
            }}
        </button>
    }
}
