pub mod admin;
pub mod not_found;
pub mod role_picker;
pub mod student;
pub mod teacher;

use dioxus::prelude::*;

use admin::AdminShell;
use not_found::NotFound;
use role_picker::RolePicker;
use student::StudentShell;
use teacher::TeacherShell;

/// Application routes. Each dashboard takes an optional `?section=` key
/// naming the section to open first.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    RolePicker {},
    #[route("/student?:section")]
    StudentShell { section: Option<String> },
    #[route("/teacher?:section")]
    TeacherShell { section: Option<String> },
    #[route("/admin?:section")]
    AdminShell { section: Option<String> },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
