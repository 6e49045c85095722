use pretty_assertions::assert_eq;
use shared_types::{
    DashboardSection, Edge, Language, ShellConfig, ShellEvent, ShellState, TeacherSection,
};

#[test]
fn test_teacher_theme_double_toggle_is_identity() {
    let mut shell = ShellState::<TeacherSection>::new();
    shell.select_section(TeacherSection::Reports);
    let before = shell.snapshot();

    shell.apply(ShellEvent::ToggleTheme);
    assert!(shell.is_dark());
    assert_eq!(shell.layout().theme, "dark");

    shell.apply(ShellEvent::ToggleTheme);
    assert_eq!(shell.snapshot(), before);
    assert_eq!(shell.layout().theme, "light");
}

#[test]
fn test_teacher_sidebar_follows_reading_edge() {
    let mut shell = ShellState::<TeacherSection>::new();
    assert_eq!(shell.layout().sidebar_edge, Edge::Right);
    shell.apply(ShellEvent::SetLanguage(Language::En));
    assert_eq!(shell.layout().sidebar_edge, Edge::Left);
}

#[test]
fn test_teacher_shell_honours_config_defaults() {
    let config = ShellConfig {
        default_language: Language::En,
        default_dark: true,
        breakpoint_px: 768,
        persist_preferences: false,
    };
    let mut shell = ShellState::<TeacherSection>::with_config(&config);
    assert_eq!(shell.language(), Language::En);
    assert!(shell.is_dark());

    shell.resize_viewport(800.0);
    assert!(shell.layout().sidebar_visible);
    assert!(!shell.layout().menu_button_visible);
}

#[test]
fn test_teacher_contact_section_is_selectable_by_key() {
    let mut shell = ShellState::<TeacherSection>::new();
    assert_eq!(shell.select_section_key("contact"), TeacherSection::Contact);
    assert_eq!(shell.active_section().label(Language::En), "Contact Admin");
}
