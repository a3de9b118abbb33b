use leptos::prelude::*;

/// Icon served from `public/icons`
#[component]
pub fn Icon(
    /// Icon name (file name without .svg)
    name: &'static str,
    /// CSS classes for sizing and colour filters
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Names of the bundled icons
pub mod icons {
    pub const LOGO: &str = "logo";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const ARROW_UP: &str = "arrow-up";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const MUSIC: &str = "music";
    pub const CHEVRON_UP: &str = "chevron-up";
    pub const CALENDAR: &str = "calendar";
    pub const CLOCK: &str = "clock";
}
