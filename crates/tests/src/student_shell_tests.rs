use pretty_assertions::assert_eq;
use shared_types::{
    Language, Role, ShellEvent, ShellSnapshot, ShellState, SidebarOpenState, StudentSection,
};

#[test]
fn test_student_shell_initial_state() {
    let shell = ShellState::<StudentSection>::new();
    assert_eq!(
        shell.snapshot(),
        ShellSnapshot {
            role: Role::Student,
            active_section: StudentSection::Courses,
            language: Language::Ar,
            is_rtl: true,
            is_dark: false,
            sidebar: SidebarOpenState::Closed,
        }
    );
}

#[test]
fn test_select_quizzes_then_switch_to_english() {
    let mut shell = ShellState::<StudentSection>::new();
    let initial = shell.snapshot();

    shell.select_section_key("quizzes");
    assert_eq!(
        shell.snapshot(),
        ShellSnapshot {
            active_section: StudentSection::Quizzes,
            ..initial
        }
    );

    shell.set_language(Language::En);
    let snapshot = shell.snapshot();
    assert_eq!(snapshot.language, Language::En);
    assert!(!snapshot.is_rtl);
    assert_eq!(snapshot.active_section, StudentSection::Quizzes);
}

#[test]
fn test_double_language_toggle_restores_direction_and_section() {
    let mut shell = ShellState::<StudentSection>::new();
    shell.select_section(StudentSection::Recordings);
    let before = shell.snapshot();
    let layout_before = shell.layout();

    shell.apply(ShellEvent::ToggleLanguage);
    assert_ne!(shell.layout().dir, layout_before.dir);
    shell.apply(ShellEvent::ToggleLanguage);

    assert_eq!(shell.snapshot(), before);
    assert_eq!(shell.layout(), layout_before);
}

#[test]
fn test_student_initial_section_from_query() {
    let shell = ShellState::<StudentSection>::new().with_initial_section(Some("achievements"));
    assert_eq!(shell.active_section(), StudentSection::Achievements);
}
