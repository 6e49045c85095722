use shared_types::{
    DashboardSection, Language, SectionId, SectionRegistry, ShellEvent, ShellState,
    SidebarOpenState,
};

/// Width comfortably below the default 1024px breakpoint.
pub const PHONE_WIDTH: f64 = 390.0;

/// Width comfortably above the default 1024px breakpoint.
pub const DESKTOP_WIDTH: f64 = 1440.0;

/// A fresh shell whose viewport has reported `width_px`.
pub fn shell_at<S: DashboardSection>(width_px: f64) -> ShellState<S> {
    let mut shell = ShellState::<S>::new();
    shell.resize_viewport(width_px);
    shell
}

/// A narrow shell with the overlay sidebar already open.
pub fn open_phone_shell<S: DashboardSection>() -> ShellState<S> {
    let mut shell = shell_at::<S>(PHONE_WIDTH);
    shell.toggle_sidebar();
    assert_eq!(shell.sidebar().state(), SidebarOpenState::Open);
    shell
}

/// Panics unless the active section is registered for the shell's role.
pub fn assert_section_registered<S: DashboardSection>(shell: &ShellState<S>) {
    let id: SectionId = shell.active_section().into();
    assert!(
        SectionRegistry::contains(shell.role(), id),
        "{:?} is not registered for {:?}",
        id,
        shell.role()
    );
}

/// One of every kind of event, including malformed section keys and
/// viewport widths on both sides of the breakpoint.
pub fn every_event<S: DashboardSection>() -> Vec<ShellEvent<S>> {
    let mut events: Vec<ShellEvent<S>> = S::ALL.iter().map(|s| ShellEvent::SelectSection(*s)).collect();
    for key in ["nonexistent", "", "COURSES", "users", "students", "quizzes"] {
        events.push(ShellEvent::SelectSectionKey(key.to_string()));
    }
    events.extend([
        ShellEvent::SetLanguage(Language::En),
        ShellEvent::SetLanguage(Language::Ar),
        ShellEvent::ToggleLanguage,
        ShellEvent::ToggleTheme,
        ShellEvent::SetSidebarOpen(true),
        ShellEvent::SetSidebarOpen(false),
        ShellEvent::ToggleSidebar,
        ShellEvent::DismissSidebar,
        ShellEvent::Resize(PHONE_WIDTH),
        ShellEvent::Resize(DESKTOP_WIDTH),
        ShellEvent::Resize(1024.0),
    ]);
    events
}
