use shared_types::{
    AdminSection, DashboardSection, SidebarController, SidebarOpenState, StudentSection,
    TeacherSection, Viewport,
};

use crate::common::{self, DESKTOP_WIDTH, PHONE_WIDTH};

#[test]
fn test_sidebar_starts_closed() {
    let sidebar = SidebarController::default();
    assert_eq!(sidebar.state(), SidebarOpenState::Closed);
}

#[test]
fn test_menu_button_flips_state() {
    let mut sidebar = SidebarController::default();
    sidebar.toggle();
    assert_eq!(sidebar.state(), SidebarOpenState::Open);
    sidebar.toggle();
    assert_eq!(sidebar.state(), SidebarOpenState::Closed);
}

#[test]
fn test_selecting_on_phone_closes_the_overlay() {
    let mut shell = common::open_phone_shell::<StudentSection>();
    shell.select_section(StudentSection::Homework);
    assert_eq!(shell.sidebar().state(), SidebarOpenState::Closed);
    assert_eq!(shell.active_section(), StudentSection::Homework);
}

#[test]
fn test_selecting_every_section_on_phone_closes_the_overlay() {
    for section in TeacherSection::ALL {
        let mut shell = common::open_phone_shell::<TeacherSection>();
        shell.select_section(*section);
        assert_eq!(shell.sidebar().state(), SidebarOpenState::Closed, "{section:?}");
    }
}

#[test]
fn test_selecting_on_desktop_leaves_state_alone() {
    let mut shell = common::shell_at::<AdminSection>(DESKTOP_WIDTH);
    shell.set_sidebar_open(true);
    shell.select_section(AdminSection::Reports);
    assert_eq!(shell.sidebar().state(), SidebarOpenState::Open);
}

#[test]
fn test_crossing_breakpoint_keeps_last_explicit_state() {
    let mut shell = common::open_phone_shell::<StudentSection>();
    assert_eq!(shell.resize_viewport(DESKTOP_WIDTH), Viewport::Wide);
    assert!(shell.layout().sidebar_visible);
    assert!(!shell.layout().overlay_visible);

    assert_eq!(shell.resize_viewport(PHONE_WIDTH), Viewport::Narrow);
    assert_eq!(shell.sidebar().state(), SidebarOpenState::Open);
    assert!(shell.layout().overlay_visible);
}

#[test]
fn test_overlay_click_dismisses() {
    let mut shell = common::open_phone_shell::<AdminSection>();
    shell.dismiss_sidebar();
    assert_eq!(shell.sidebar().state(), SidebarOpenState::Closed);
    assert!(!shell.layout().overlay_visible);
    assert!(shell.layout().menu_button_visible);
}

#[test]
fn test_breakpoint_width_counts_as_wide() {
    assert_eq!(Viewport::classify(1024.0, 1024), Viewport::Wide);
    assert_eq!(Viewport::classify(1023.5, 1024), Viewport::Narrow);
}
