use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdGlobe, LdLogOut, LdMoon, LdSun};
use dioxus_free_icons::Icon;
use shared_types::Language;

use crate::components::button::{Button, ButtonVariant};

/// Bilingual greeting shown at the start of the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderGreeting {
    pub title_ar: &'static str,
    pub title_en: &'static str,
    pub subtitle_ar: &'static str,
    pub subtitle_en: &'static str,
}

/// Sticky top bar of a dashboard shell.
///
/// Stateless: the language switch offers the other language through
/// `on_set_lang`, the theme switch calls `on_toggle_theme`. The logout
/// button is only rendered when `show_logout` is set.
#[component]
pub fn DashboardHeader(
    lang: Language,
    is_dark: bool,
    greeting: HeaderGreeting,
    on_set_lang: EventHandler<Language>,
    on_toggle_theme: EventHandler<()>,
    #[props(default = false)] show_logout: bool,
    #[props(default)] on_logout: Option<EventHandler<()>>,
) -> Element {
    let direction = lang.direction();
    let other = lang.toggled();
    let greeting_class = format!("dashboard-header-greeting {}", direction.row_class());
    let text_class = format!("dashboard-header-text {}", direction.items_align_class());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            class: "dashboard-header",
            "data-tone": if is_dark { "dark" } else { "light" },

            div { class: greeting_class,
                div { class: text_class,
                    h1 { class: "dashboard-header-title", {lang.pick(greeting.title_ar, greeting.title_en)} }
                    p { class: "dashboard-header-subtitle", {lang.pick(greeting.subtitle_ar, greeting.subtitle_en)} }
                }
            }

            div { class: "dashboard-header-actions",
                Button {
                    dark: is_dark,
                    onclick: move |_| on_set_lang.call(other),
                    Icon::<LdGlobe> { icon: LdGlobe, width: 18, height: 18 }
                    span { {other.native_name()} }
                }
                Button {
                    dark: is_dark,
                    aria_label: "Toggle Theme",
                    onclick: move |_| on_toggle_theme.call(()),
                    if is_dark {
                        Icon::<LdSun> { icon: LdSun, width: 20, height: 20 }
                    } else {
                        Icon::<LdMoon> { icon: LdMoon, width: 20, height: 20 }
                    }
                }
                if show_logout {
                    div { class: "dashboard-header-divider" }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| {
                            if let Some(handler) = &on_logout {
                                handler.call(());
                            }
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        span { class: "dashboard-header-logout-label", {lang.pick("خروج", "Logout")} }
                    }
                }
            }
        }
    }
}
