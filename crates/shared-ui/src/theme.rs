use dioxus::prelude::*;
use shared_types::{Preferences, ShellLayout, PREFERENCES_COOKIE};

/// Script writing the shell's direction, language and theme onto `<html>`.
pub fn document_attributes_script(layout: &ShellLayout) -> String {
    format!(
        r#"
        (function() {{
            var root = document.documentElement;
            root.setAttribute('dir', '{dir}');
            root.setAttribute('lang', '{lang}');
            root.setAttribute('data-theme', '{theme}');
        }})();
        "#,
        dir = layout.dir.as_str(),
        lang = layout.lang.as_str(),
        theme = layout.theme,
    )
}

/// Apply the current layout's document-level attributes.
pub fn apply_document_attributes(layout: &ShellLayout) {
    document::eval(&document_attributes_script(layout));
}

fn persist_script(prefs: &Preferences) -> String {
    format!(
        "document.cookie = '{name}={value};path=/;max-age=2592000;SameSite=Lax';",
        name = PREFERENCES_COOKIE,
        value = prefs.to_cookie_value(),
    )
}

fn read_script() -> String {
    format!(
        r#"
        var match = document.cookie.match(/(?:^|;\s*){name}=([^;]*)/);
        return match ? match[1] : '';
        "#,
        name = PREFERENCES_COOKIE,
    )
}

/// Remember language and theme in a cookie.
pub fn persist_preferences(prefs: &Preferences) {
    document::eval(&persist_script(prefs));
}

/// Read preferences saved by [`persist_preferences`]. `None` when absent
/// or unreadable.
pub async fn load_preferences() -> Option<Preferences> {
    let value = document::eval(&read_script()).join::<String>().await.ok()?;
    if value.is_empty() {
        return None;
    }
    Preferences::parse_cookie_value(&value).ok()
}
