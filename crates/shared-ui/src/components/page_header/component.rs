use dioxus::prelude::*;
use shared_types::Language;

/// Section heading: localized title plus an optional summary line,
/// aligned to the reading edge.
#[component]
pub fn PageHeader(lang: Language, title: String, #[props(default)] summary: Option<String>) -> Element {
    let direction = lang.direction();
    let class = format!("page-header {}", direction.text_align_class());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class,
            h2 { class: "page-title", "{title}" }
            if let Some(summary) = summary {
                p { class: "page-summary", "{summary}" }
            }
        }
    }
}

/// Body of a section pane.
#[component]
pub fn PageBody(children: Element) -> Element {
    rsx! {
        div { class: "page-body", {children} }
    }
}
