use serde::{Deserialize, Serialize};

use crate::config::ShellConfig;
use crate::locale::{Edge, Language, LocaleDirection, TextDirection};
use crate::preferences::Preferences;
use crate::role::Role;
use crate::section::{DashboardSection, SectionId};
use crate::sidebar::{SidebarController, SidebarOpenState, Viewport};

/// A user interaction the shell reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent<S> {
    SelectSection(S),
    /// Selection by raw key, e.g. from a query string. Unknown keys select
    /// the role's first section.
    SelectSectionKey(String),
    SetLanguage(Language),
    ToggleLanguage,
    ToggleTheme,
    SetSidebarOpen(bool),
    ToggleSidebar,
    /// Backdrop behind the mobile sidebar clicked.
    DismissSidebar,
    /// Viewport width changed, in CSS pixels.
    Resize(f64),
}

/// Cross-cutting UI state owned by one dashboard shell.
///
/// Fields are private: every mutation goes through a transition method so
/// the active section always belongs to `S` and the sidebar auto-dismiss
/// rule is applied on every selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellState<S: DashboardSection> {
    active_section: S,
    language: Language,
    is_dark: bool,
    sidebar: SidebarController,
}

impl<S: DashboardSection> Default for ShellState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DashboardSection> ShellState<S> {
    /// First section, Arabic, light theme, sidebar closed.
    pub fn new() -> Self {
        Self::with_config(&ShellConfig::default())
    }

    pub fn with_config(config: &ShellConfig) -> Self {
        Self {
            active_section: S::DEFAULT,
            language: config.default_language,
            is_dark: config.default_dark,
            sidebar: SidebarController::new(config.breakpoint_px),
        }
    }

    /// Start on the section named by `key`, if any. Unknown keys keep the default.
    pub fn with_initial_section(mut self, key: Option<&str>) -> Self {
        if let Some(key) = key {
            self.active_section = S::resolve(key);
        }
        self
    }

    pub fn with_preferences(mut self, prefs: Preferences) -> Self {
        self.language = prefs.language;
        self.is_dark = prefs.is_dark;
        self
    }

    pub fn role(&self) -> Role {
        S::ROLE
    }

    pub fn active_section(&self) -> S {
        self.active_section
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn sidebar(&self) -> &SidebarController {
        &self.sidebar
    }

    pub fn direction(&self) -> LocaleDirection {
        self.language.direction()
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            language: self.language,
            is_dark: self.is_dark,
        }
    }

    // ── Transitions ──

    /// Activate `section`, then close the overlay sidebar on narrow viewports.
    pub fn select_section(&mut self, section: S) {
        self.active_section = section;
        self.sidebar.section_selected();
    }

    /// Activate the section named `key`, falling back to the first section.
    pub fn select_section_key(&mut self, key: &str) -> S {
        let section = S::resolve(key);
        self.select_section(section);
        section
    }

    /// Activate a role-erased section. Ids from another role select the
    /// first section.
    pub fn select_section_id(&mut self, id: SectionId) -> S {
        let section = S::try_from(id).unwrap_or(S::DEFAULT);
        self.select_section(section);
        section
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn toggle_theme(&mut self) {
        self.is_dark = !self.is_dark;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar.set_open(open);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    pub fn dismiss_sidebar(&mut self) {
        self.sidebar.dismiss();
    }

    pub fn resize_viewport(&mut self, width_px: f64) -> Viewport {
        self.sidebar.resize(width_px)
    }

    pub fn apply(&mut self, event: ShellEvent<S>) {
        match event {
            ShellEvent::SelectSection(section) => self.select_section(section),
            ShellEvent::SelectSectionKey(key) => {
                self.select_section_key(&key);
            }
            ShellEvent::SetLanguage(language) => self.set_language(language),
            ShellEvent::ToggleLanguage => self.toggle_language(),
            ShellEvent::ToggleTheme => self.toggle_theme(),
            ShellEvent::SetSidebarOpen(open) => self.set_sidebar_open(open),
            ShellEvent::ToggleSidebar => self.toggle_sidebar(),
            ShellEvent::DismissSidebar => self.dismiss_sidebar(),
            ShellEvent::Resize(width_px) => {
                self.resize_viewport(width_px);
            }
        }
    }

    // ── Derived views ──

    /// Values handed down to header, sidebar and footer.
    pub fn snapshot(&self) -> ShellSnapshot<S> {
        ShellSnapshot {
            role: S::ROLE,
            active_section: self.active_section,
            language: self.language,
            is_rtl: self.direction().is_rtl,
            is_dark: self.is_dark,
            sidebar: self.sidebar.state(),
        }
    }

    /// Document attributes and mirrored layout classes for the current state.
    pub fn layout(&self) -> ShellLayout {
        let direction = self.direction();
        ShellLayout {
            dir: direction.direction,
            lang: self.language,
            theme: if self.is_dark { "dark" } else { "light" },
            sidebar_edge: direction.leading_edge(),
            row_class: direction.row_class(),
            text_align_class: direction.text_align_class(),
            items_align_class: direction.items_align_class(),
            sidebar_visible: self.sidebar.is_visible(),
            sidebar_pinned: self.sidebar.is_pinned(),
            overlay_visible: self.sidebar.overlay_visible(),
            menu_button_visible: self.sidebar.menu_button_visible(),
        }
    }
}

/// Outbound shell state, as passed to child views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSnapshot<S> {
    pub role: Role,
    pub active_section: S,
    pub language: Language,
    pub is_rtl: bool,
    pub is_dark: bool,
    pub sidebar: SidebarOpenState,
}

/// Layout decisions derived from shell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub dir: TextDirection,
    pub lang: Language,
    /// `data-theme` value: `"dark"` or `"light"`.
    pub theme: &'static str,
    /// Edge the sidebar and the mobile menu button are anchored to.
    pub sidebar_edge: Edge,
    pub row_class: &'static str,
    pub text_align_class: &'static str,
    pub items_align_class: &'static str,
    pub sidebar_visible: bool,
    /// Wide viewport: the sidebar sits in the page flow and ignores the open state.
    pub sidebar_pinned: bool,
    pub overlay_visible: bool,
    pub menu_button_visible: bool,
}
