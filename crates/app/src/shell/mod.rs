//! The dashboard shell: one reactive [`ShellState`] per mounted dashboard,
//! the hooks that keep the document and viewport in sync with it, and the
//! layout every role renders through.

mod view;
mod viewport;

pub use view::{dashboard_view, ShellChrome};

use dioxus::prelude::*;
use shared_types::{DashboardSection, Preferences, SectionId, ShellEvent, ShellState, Viewport};
use shared_ui::theme::{apply_document_attributes, load_preferences, persist_preferences};

use crate::config::shell_config;

/// Handle to a mounted shell's state. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct ShellController<S: DashboardSection> {
    state: Signal<ShellState<S>>,
    persist: bool,
}

impl<S: DashboardSection> ShellController<S> {
    fn new(state: Signal<ShellState<S>>, persist: bool) -> Self {
        Self { state, persist }
    }

    /// Current state, subscribing the caller to changes.
    pub fn read(&self) -> ShellState<S> {
        *self.state.read()
    }

    /// Apply one event and save preferences if it changed them.
    pub fn dispatch(&mut self, event: ShellEvent<S>) {
        if let Some(prefs) = self.transition(event) {
            persist_preferences(&prefs);
        }
    }

    /// Apply one event and log the resulting state. Returns the preferences
    /// to save when persistence is on and language or theme changed.
    fn transition(&mut self, event: ShellEvent<S>) -> Option<Preferences> {
        let before = *self.state.peek();
        let after = {
            let mut state = self.state.write();
            state.apply(event.clone());
            *state
        };

        tracing::debug!(
            role = S::ROLE.as_str(),
            ?event,
            section = after.active_section().key(),
            lang = after.language().as_str(),
            dark = after.is_dark(),
            sidebar = after.sidebar().state().as_str(),
            "shell transition"
        );

        (self.persist && before.preferences() != after.preferences()).then(|| after.preferences())
    }

    /// Select a section chosen from the role-erased sidebar menu.
    pub fn select(&mut self, id: SectionId) {
        let section = match S::try_from(id) {
            Ok(section) => section,
            Err(err) => {
                tracing::warn!(error = %err, "showing first section instead");
                S::DEFAULT
            }
        };
        self.dispatch(ShellEvent::SelectSection(section));
    }

    /// Adopt saved language and theme without writing them back.
    fn restore(&mut self, prefs: Preferences) {
        let mut state = self.state.write();
        let restored = state.with_preferences(prefs);
        *state = restored;
        tracing::debug!(
            role = S::ROLE.as_str(),
            lang = prefs.language.as_str(),
            dark = prefs.is_dark,
            "preferences restored"
        );
    }

    /// Whether `width_px` lands on the other side of the breakpoint.
    fn crosses_breakpoint(&self, width_px: f64) -> bool {
        let sidebar = *self.state.peek().sidebar();
        Viewport::classify(width_px, sidebar.breakpoint_px()) != sidebar.viewport()
    }
}

/// Mount a shell for the dashboard whose sections are `S`.
///
/// `initial_section` comes from the `?section=` query; unknown keys land on
/// the first section.
pub fn use_dashboard_shell<S: DashboardSection>(initial_section: Option<String>) -> ShellController<S> {
    let config = shell_config();

    let state = use_signal(|| {
        let key = initial_section.as_deref();
        if let Some(Err(err)) = key.map(S::parse) {
            tracing::warn!(error = %err, "unknown initial section, showing first section");
        }
        let shell = ShellState::<S>::with_config(config).with_initial_section(key);
        tracing::info!(
            role = S::ROLE.as_str(),
            section = shell.active_section().key(),
            lang = shell.language().as_str(),
            "dashboard shell mounted"
        );
        shell
    });

    let controller = ShellController::new(state, config.persist_preferences);

    // Mirror dir, lang and theme onto <html>
    use_effect(move || {
        let layout = state.read().layout();
        apply_document_attributes(&layout);
    });

    use_future(move || async move {
        let mut controller = controller;
        if !controller.persist {
            return;
        }
        if let Some(prefs) = load_preferences().await {
            controller.restore(prefs);
        }
    });

    use_future(move || viewport::watch(controller));

    controller
}
