use pretty_assertions::assert_eq;
use shared_types::{
    AdminSection, DashboardSection, SectionId, ShellEvent, ShellState, StudentSection,
};

#[test]
fn test_admin_unknown_section_falls_back_to_users() {
    let mut shell = ShellState::<AdminSection>::new();
    shell.select_section(AdminSection::Settings);

    shell.apply(ShellEvent::SelectSectionKey("nonexistent".to_string()));
    assert_eq!(shell.active_section(), AdminSection::Users);
    assert_eq!(shell.active_section().key(), "users");
}

#[test]
fn test_admin_ignores_sections_of_other_roles() {
    let mut shell = ShellState::<AdminSection>::new();
    shell.select_section(AdminSection::Notifications);

    let picked = shell.select_section_id(SectionId::Student(StudentSection::Quizzes));
    assert_eq!(picked, AdminSection::Users);
    assert_eq!(shell.active_section(), AdminSection::Users);
}

#[test]
fn test_admin_unknown_initial_section_keeps_default() {
    let shell = ShellState::<AdminSection>::new().with_initial_section(Some("courses"));
    assert_eq!(shell.active_section(), AdminSection::DEFAULT);
}

#[test]
fn test_admin_selects_every_section_by_key() {
    let mut shell = ShellState::<AdminSection>::new();
    for section in AdminSection::ALL {
        assert_eq!(shell.select_section_key(section.key()), *section);
    }
}
