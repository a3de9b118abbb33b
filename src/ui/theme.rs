//! Theme context module for managing dark/light/automatic theme
//!
//! Provides:
//! - ThemeMode enum (Auto, Dark, Light)
//! - ThemeContext for reactive theme state
//! - System theme detection via prefers-color-scheme
//! - LocalStorage persistence
//! - ThemeScript, which applies the stored theme before hydration

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// LocalStorage key holding the chosen mode
pub const THEME_STORAGE_KEY: &str = "bedroom-producers-theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parse a stored value; anything unknown means `Auto`
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            "light" => ThemeMode::Light,
            _ => ThemeMode::Auto,
        }
    }

    /// Whether this mode renders dark given the system preference
    pub fn resolve(self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::Auto => system_prefers_dark,
        }
    }

    /// Explicit mode that flips the currently rendered theme
    pub fn toggled(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode setting
    pub mode: RwSignal<ThemeMode>,
    /// Whether the current effective theme is dark (considering auto mode)
    pub is_dark: Memo<bool>,
    /// System prefers dark mode
    pub system_prefers_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        persist_theme(mode);
    }

    /// Switch between dark and light
    pub fn toggle(&self) {
        self.set_mode(ThemeMode::toggled(self.is_dark.get_untracked()));
    }
}

fn persist_theme(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

#[cfg(not(feature = "ssr"))]
fn load_persisted_theme() -> ThemeMode {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|value| ThemeMode::parse(&value))
        .unwrap_or_default()
}

#[cfg(not(feature = "ssr"))]
fn apply_theme_class(is_dark: bool) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let class_list = html.class_list();
    let _ = if is_dark {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
}

/// Provide theme context to the application.
///
/// Server and first client render both start in `Auto` with a light system
/// preference so hydration matches; the stored mode is read once mounted.
pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(ThemeMode::Auto);
    let system_prefers_dark = RwSignal::new(false);
    let is_dark = Memo::new(move |_| mode.get().resolve(system_prefers_dark.get()));

    let ctx = ThemeContext {
        mode,
        is_dark,
        system_prefers_dark,
    };

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            mode.set(load_persisted_theme());

            let Some(media_query) = web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            else {
                return;
            };
            system_prefers_dark.set(media_query.matches());

            let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |e: web_sys::MediaQueryListEvent| {
                    system_prefers_dark.set(e.matches());
                },
            );
            let _ = media_query
                .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());

            // Lives as long as the page
            handler.forget();
        });

        Effect::new(move |_| apply_theme_class(is_dark.get()));
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Inline script that sets the `dark` class before the app hydrates,
/// so a stored dark theme does not flash light on load
#[component]
pub fn ThemeScript() -> impl IntoView {
    let script = format!(
        "(function(){{try{{var m=localStorage.getItem('{THEME_STORAGE_KEY}');\
         var d=m==='dark'||(m!=='light'&&window.matchMedia('(prefers-color-scheme: dark)').matches);\
         if(d)document.documentElement.classList.add('dark');}}catch(e){{}}}})();"
    );
    view! { <script inner_html=script></script> }
}
