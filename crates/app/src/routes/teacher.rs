use dioxus::prelude::*;
use shared_types::TeacherSection;
use shared_ui::{HeaderGreeting, SidebarVariant};

use crate::shell::{dashboard_view, use_dashboard_shell, ShellChrome};

const CHROME: ShellChrome = ShellChrome {
    greeting: HeaderGreeting {
        title_ar: "مرحبًا أ/ محمد 👋",
        title_en: "Welcome Mr. Mohamed 👋",
        subtitle_ar: "مدرس الرياضيات",
        subtitle_en: "Mathematics Teacher",
    },
    sidebar_variant: SidebarVariant::Light,
    show_logout: true,
};

/// Teacher dashboard.
#[component]
pub fn TeacherShell(section: Option<String>) -> Element {
    let shell = use_dashboard_shell::<TeacherSection>(section);
    dashboard_view(shell, CHROME)
}
