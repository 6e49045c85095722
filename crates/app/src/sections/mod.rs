//! Content panes for each dashboard section.
//!
//! Panes only receive the current language. They never see shell state, so
//! switching sections or toggling the sidebar cannot leak into them.

mod admin;
mod student;
mod teacher;

use dioxus::prelude::*;
use shared_types::{DashboardSection, IconRef, Language, SectionId};
use shared_ui::{NavIcon, PageBody, PageHeader};

/// A section that knows how to present itself.
pub trait SectionView: DashboardSection {
    /// One-line description shown under the pane title.
    fn summary(self, lang: Language) -> &'static str;

    fn render(self, lang: Language) -> Element {
        let descriptor = self.descriptor();
        rsx! {
            SectionPane {
                key: "{self.key()}",
                lang,
                title: descriptor.label(lang).to_string(),
                summary: self.summary(lang).to_string(),
                icon: descriptor.icon,
            }
        }
    }
}

/// Render the pane registered for `id`.
pub fn render_section(id: SectionId, lang: Language) -> Element {
    match id {
        SectionId::Student(section) => section.render(lang),
        SectionId::Teacher(section) => section.render(lang),
        SectionId::Admin(section) => section.render(lang),
    }
}

#[component]
fn SectionPane(lang: Language, title: String, summary: String, icon: IconRef) -> Element {
    rsx! {
        section { class: "section-pane",
            PageHeader { lang, title, summary }
            PageBody {
                div { class: "section-pane-placeholder",
                    NavIcon { icon, size: 48 }
                }
            }
        }
    }
}
