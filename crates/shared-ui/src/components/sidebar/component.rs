use dioxus::prelude::*;
use shared_types::{Edge, Language, SectionEntry, SectionId};

use crate::components::icon::NavIcon;

/// Colour treatment of the sidebar panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SidebarVariant {
    #[default]
    Light,
    /// Slate panel used by the admin dashboard.
    Dark,
}

impl SidebarVariant {
    fn as_str(&self) -> &'static str {
        match self {
            SidebarVariant::Light => "light",
            SidebarVariant::Dark => "dark",
        }
    }
}

// ─── Layout components ─────────────────────────────────────────────────

/// Off-canvas navigation panel anchored to `edge`.
///
/// Holds no state of its own. On narrow viewports `open` slides it in and
/// `overlay` renders the dimmed backdrop, whose click calls `on_dismiss`.
/// `pinned` places it in the page flow, visible whatever `open` says.
#[component]
pub fn Sidebar(
    open: bool,
    edge: Edge,
    #[props(default = false)] pinned: bool,
    #[props(default = false)] overlay: bool,
    #[props(default)] variant: SidebarVariant,
    on_dismiss: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if open { "open" } else { "closed" },
            None,
            false,
        ),
        Attribute::new(
            "data-pinned",
            if pinned { "true" } else { "false" },
            None,
            false,
        ),
        Attribute::new("data-edge", edge.as_str(), None, false),
        Attribute::new("data-variant", variant.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if overlay {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| on_dismiss.call(()),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Brand block at the top of the sidebar.
#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

/// Scrollable navigation area.
#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

/// Navigation menu list inside the sidebar.
#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

/// A single item in a SidebarMenu.
#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Menu button. Icon and label swap sides under RTL.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default = false)] rtl: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = if rtl {
        "sidebar-menu-button flex-row-reverse text-right"
    } else {
        "sidebar-menu-button flex-row text-left"
    };

    rsx! {
        button {
            r#type: "button",
            class,
            "data-active": if active { "true" } else { "false" },
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// The full section menu for a role, in registry order. The active entry
/// carries a chevron pointing in the reading direction.
#[component]
pub fn SectionNav(
    entries: Vec<SectionEntry>,
    active: SectionId,
    lang: Language,
    on_select: EventHandler<SectionId>,
) -> Element {
    let rtl = lang.is_rtl();
    let chevron = lang.direction().forward_chevron();

    rsx! {
        SidebarMenu {
            for entry in entries {
                SidebarMenuItem { key: "{entry.key}",
                    SidebarMenuButton {
                        active: entry.id == active,
                        rtl,
                        onclick: move |_| on_select.call(entry.id),
                        NavIcon { icon: entry.icon, size: 20 }
                        span { class: "sidebar-menu-label", {entry.label(lang)} }
                        if entry.id == active {
                            span { class: "sidebar-menu-chevron",
                                NavIcon { icon: chevron, size: 16 }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Floating button that opens/closes the sidebar below the breakpoint.
#[component]
pub fn SidebarTrigger(edge: Edge, on_toggle: EventHandler<()>, children: Element) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "sidebar-trigger",
            "data-edge": edge.as_str(),
            "aria-label": "Toggle sidebar",
            onclick: move |_| on_toggle.call(()),
            {children}
        }
    }
}

/// The main content column that sits alongside the Sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-inset", {children} }
    }
}
