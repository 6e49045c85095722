use shared_types::{AdminSection, DashboardSection, ShellState, StudentSection, TeacherSection};

use crate::common::{self, DESKTOP_WIDTH, PHONE_WIDTH};

/// Run every event from every starting viewport and check membership of
/// the active section after each step.
fn sweep<S: DashboardSection>() {
    for width in [PHONE_WIDTH, DESKTOP_WIDTH] {
        let mut shell: ShellState<S> = common::shell_at(width);
        common::assert_section_registered(&shell);
        for event in common::every_event::<S>() {
            shell.apply(event);
            common::assert_section_registered(&shell);
        }
        // And again in reverse, to start from a different state
        for event in common::every_event::<S>().into_iter().rev() {
            shell.apply(event);
            common::assert_section_registered(&shell);
        }
    }
}

#[test]
fn test_student_section_always_registered() {
    sweep::<StudentSection>();
}

#[test]
fn test_teacher_section_always_registered() {
    sweep::<TeacherSection>();
}

#[test]
fn test_admin_section_always_registered() {
    sweep::<AdminSection>();
}

#[test]
fn test_shells_do_not_share_state() {
    let mut student = ShellState::<StudentSection>::new();
    let admin = ShellState::<AdminSection>::new();
    student.toggle_theme();
    student.toggle_language();
    assert!(!admin.is_dark());
    assert!(admin.direction().is_rtl);
}
