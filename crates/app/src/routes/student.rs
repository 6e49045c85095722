use dioxus::prelude::*;
use shared_types::StudentSection;
use shared_ui::{HeaderGreeting, SidebarVariant};

use crate::shell::{dashboard_view, use_dashboard_shell, ShellChrome};

const CHROME: ShellChrome = ShellChrome {
    greeting: HeaderGreeting {
        title_ar: "مرحبًا يا أحمد 👋",
        title_en: "Welcome Ahmed 👋",
        subtitle_ar: "جاهز نتعلم؟",
        subtitle_en: "Ready to learn?",
    },
    sidebar_variant: SidebarVariant::Light,
    show_logout: false,
};

/// Student dashboard.
#[component]
pub fn StudentShell(section: Option<String>) -> Element {
    let shell = use_dashboard_shell::<StudentSection>(section);
    dashboard_view(shell, CHROME)
}
