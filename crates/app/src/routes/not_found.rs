use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page, shown in both languages.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", dir: "rtl", "الصفحة غير موجودة" }
                h2 { class: "not-found-title-en", "Page Not Found" }
                p { class: "not-found-message",
                    code { "{path}" }
                }
                Link { to: Route::RolePicker {},
                    class: "not-found-link",
                    "العودة للرئيسية / Back to home"
                }
            }
        }
    }
}
