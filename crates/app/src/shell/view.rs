use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;
use shared_types::{Language, SectionId, SectionRegistry, ShellEvent};
use shared_ui::{
    DashboardHeader, Footer, HeaderGreeting, SectionNav, Sidebar, SidebarContent, SidebarHeader,
    SidebarInset, SidebarTrigger, SidebarVariant,
};

use super::ShellController;
use crate::routes::Route;
use crate::sections::{render_section, SectionView};

const LOGO: Asset = asset!("/assets/logo.svg");

/// Per-role decoration around the shared layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellChrome {
    pub greeting: HeaderGreeting,
    pub sidebar_variant: SidebarVariant,
    pub show_logout: bool,
}

/// Sidebar, header, active section pane and footer for one dashboard.
pub fn dashboard_view<S: SectionView>(controller: ShellController<S>, chrome: ShellChrome) -> Element {
    let mut controller = controller;

    let state = controller.read();
    let layout = state.layout();
    let snapshot = state.snapshot();
    let lang = snapshot.language;
    let active: SectionId = snapshot.active_section.into();
    let entries = SectionRegistry::entries(snapshot.role);
    let brand = lang.pick("ابناؤنا", "Abnaouna");

    rsx! {
        div {
            class: "dashboard-shell {layout.row_class}",
            dir: layout.dir.as_str(),
            lang: layout.lang.as_str(),
            "data-theme": layout.theme,
            "data-role": snapshot.role.as_str(),

            Sidebar {
                open: state.sidebar().is_open(),
                edge: layout.sidebar_edge,
                pinned: layout.sidebar_pinned,
                overlay: layout.overlay_visible,
                variant: chrome.sidebar_variant,
                on_dismiss: move |_| controller.dispatch(ShellEvent::DismissSidebar),

                SidebarHeader {
                    img { class: "sidebar-logo", src: LOGO, alt: brand }
                    span { class: "sidebar-brand", "{brand}" }
                }
                SidebarContent {
                    SectionNav {
                        entries,
                        active,
                        lang,
                        on_select: move |id| controller.select(id),
                    }
                }
            }

            if layout.menu_button_visible {
                SidebarTrigger {
                    edge: layout.sidebar_edge,
                    on_toggle: move |_| controller.dispatch(ShellEvent::ToggleSidebar),
                    Icon::<LdMenu> { icon: LdMenu, width: 24, height: 24 }
                }
            }

            SidebarInset {
                DashboardHeader {
                    lang,
                    is_dark: snapshot.is_dark,
                    greeting: chrome.greeting,
                    on_set_lang: move |next: Language| controller.dispatch(ShellEvent::SetLanguage(next)),
                    on_toggle_theme: move |_| controller.dispatch(ShellEvent::ToggleTheme),
                    show_logout: chrome.show_logout,
                    on_logout: move |_| {
                        tracing::info!(role = S::ROLE.as_str(), "logout");
                        navigator().push(Route::RolePicker {});
                    },
                }
                main { class: "dashboard-main",
                    div { class: "dashboard-section", {render_section(active, lang)} }
                }
                Footer { lang }
            }
        }
    }
}
