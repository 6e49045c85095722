use dioxus::prelude::*;
use shared_types::Role;

use crate::routes::Route;

/// Dashboard route for a role, opening on its first section.
pub fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Student => Route::StudentShell { section: None },
        Role::Teacher => Route::TeacherShell { section: None },
        Role::Admin => Route::AdminShell { section: None },
    }
}

/// Landing page: pick which dashboard to open.
#[component]
pub fn RolePicker() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./role_picker.css") }

        div { class: "role-picker-page", dir: "rtl", lang: "ar",
            h1 { class: "role-picker-title", "ابناؤنا" }
            p { class: "role-picker-subtitle", "اختر لوحة التحكم" }
            div { class: "role-picker-grid",
                for role in Role::ALL {
                    Link {
                        key: "{role.as_str()}",
                        to: dashboard_route(role),
                        class: "role-picker-card",
                        span { class: "role-picker-label", "{role.label_ar()}" }
                        span { class: "role-picker-label-en", dir: "ltr", "{role.label_en()}" }
                    }
                }
            }
        }
    }
}
