use dioxus::prelude::*;
use shared_types::AdminSection;
use shared_ui::{HeaderGreeting, SidebarVariant};

use crate::shell::{dashboard_view, use_dashboard_shell, ShellChrome};

const CHROME: ShellChrome = ShellChrome {
    greeting: HeaderGreeting {
        title_ar: "لوحة تحكم الأدمن",
        title_en: "Admin Dashboard",
        subtitle_ar: "مدير النظام",
        subtitle_en: "System Administrator",
    },
    sidebar_variant: SidebarVariant::Dark,
    show_logout: true,
};

/// Admin dashboard. Uses the slate sidebar.
#[component]
pub fn AdminShell(section: Option<String>) -> Element {
    let shell = use_dashboard_shell::<AdminSection>(section);
    dashboard_view(shell, CHROME)
}
