use dioxus::prelude::*;
use shared_types::{DashboardSection, ShellEvent};

use super::ShellController;

/// Reports the window width once on start and again on every resize.
const WATCH_SCRIPT: &str = r#"
    dioxus.send(window.innerWidth);
    window.addEventListener('resize', function() {
        dioxus.send(window.innerWidth);
    });
    await new Promise(function() {});
"#;

/// Feed viewport widths into the shell until the component unmounts.
///
/// Only widths that cross the breakpoint are dispatched, so dragging a
/// window edge does not re-render the shell on every frame.
pub async fn watch<S: DashboardSection>(mut controller: ShellController<S>) {
    let mut eval = document::eval(WATCH_SCRIPT);
    while let Ok(width_px) = eval.recv::<f64>().await {
        if controller.crosses_breakpoint(width_px) {
            controller.dispatch(ShellEvent::Resize(width_px));
        }
    }
}
