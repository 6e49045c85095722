use serde::{Deserialize, Serialize};

/// Width (CSS pixels) at which the sidebar stops being an overlay.
pub const DEFAULT_BREAKPOINT_PX: u32 = 1024;

/// Explicit open/closed state of the off-canvas sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarOpenState {
    #[default]
    Closed,
    Open,
}

impl SidebarOpenState {
    pub fn from_open(open: bool) -> Self {
        if open {
            SidebarOpenState::Open
        } else {
            SidebarOpenState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SidebarOpenState::Open)
    }

    pub fn flipped(self) -> Self {
        Self::from_open(!self.is_open())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarOpenState::Closed => "closed",
            SidebarOpenState::Open => "open",
        }
    }
}

/// Viewport class relative to the breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Below the breakpoint: the sidebar is an overlay driven by the open state.
    #[default]
    Narrow,
    /// At or above the breakpoint: the sidebar is always visible.
    Wide,
}

impl Viewport {
    pub fn classify(width_px: f64, breakpoint_px: u32) -> Self {
        if width_px >= f64::from(breakpoint_px) {
            Viewport::Wide
        } else {
            Viewport::Narrow
        }
    }
}

/// Open/closed state machine for the navigation sidebar.
///
/// The viewport starts as [`Viewport::Narrow`] until the first width report.
/// Crossing the breakpoint never rewrites the open state; on a wide viewport
/// it is simply ignored and resumes once the viewport narrows again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarController {
    state: SidebarOpenState,
    viewport: Viewport,
    breakpoint_px: u32,
}

impl Default for SidebarController {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT_PX)
    }
}

impl SidebarController {
    pub fn new(breakpoint_px: u32) -> Self {
        Self {
            state: SidebarOpenState::Closed,
            viewport: Viewport::Narrow,
            breakpoint_px,
        }
    }

    pub fn state(&self) -> SidebarOpenState {
        self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn breakpoint_px(&self) -> u32 {
        self.breakpoint_px
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Menu button pressed.
    pub fn toggle(&mut self) {
        self.state = self.state.flipped();
    }

    pub fn set_open(&mut self, open: bool) {
        self.state = SidebarOpenState::from_open(open);
    }

    /// Backdrop behind the open overlay was clicked.
    pub fn dismiss(&mut self) {
        self.state = SidebarOpenState::Closed;
    }

    /// A section was picked from the menu. Auto-dismisses the overlay on a
    /// narrow viewport; leaves the state alone on a wide one.
    ///
    /// Returns `true` when the sidebar was closed by this call.
    pub fn section_selected(&mut self) -> bool {
        if self.viewport == Viewport::Narrow && self.state.is_open() {
            self.state = SidebarOpenState::Closed;
            true
        } else {
            false
        }
    }

    /// New viewport width reported. Returns the new viewport class.
    pub fn resize(&mut self, width_px: f64) -> Viewport {
        self.viewport = Viewport::classify(width_px, self.breakpoint_px);
        self.viewport
    }

    /// Whether the sidebar is on screen.
    pub fn is_visible(&self) -> bool {
        self.viewport == Viewport::Wide || self.state.is_open()
    }

    /// Whether the sidebar sits in the page flow instead of sliding over it.
    pub fn is_pinned(&self) -> bool {
        self.viewport == Viewport::Wide
    }

    /// Whether the dimmed backdrop should be rendered.
    pub fn overlay_visible(&self) -> bool {
        self.viewport == Viewport::Narrow && self.state.is_open()
    }

    /// Whether the floating menu button is shown.
    pub fn menu_button_visible(&self) -> bool {
        self.viewport == Viewport::Narrow
    }
}
