use dioxus::prelude::*;
use shared_types::Language;

pub const DEFAULT_FOOTER_AR: &str = "جميع التقييمات داخل المنصة لأغراض تدريبية فقط.";
pub const DEFAULT_FOOTER_EN: &str = "All evaluations are for training purposes only.";

/// Disclaimer line under every section. Custom texts replace the default
/// per language.
#[component]
pub fn Footer(
    lang: Language,
    #[props(default)] custom_ar: Option<String>,
    #[props(default)] custom_en: Option<String>,
) -> Element {
    let text = match lang {
        Language::Ar => custom_ar.unwrap_or_else(|| DEFAULT_FOOTER_AR.to_string()),
        Language::En => custom_en.unwrap_or_else(|| DEFAULT_FOOTER_EN.to_string()),
    };

    rsx! {
        footer { class: "dashboard-footer",
            p { "{text}" }
        }
    }
}
