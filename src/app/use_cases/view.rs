//! Use-Cases für Viewport, Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Aktualisiert die Viewport-Größe des Plots.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.viewport_size = size;
}

/// Wendet geänderte Optionen an und persistiert sie.
///
/// Wird die Kontrollpunkt-Anzeige abgeschaltet, ist die Bearbeitung global
/// deaktiviert: laufende Drags und Hover werden gelöst.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    let disabled = !options.show_control_points;
    state.options = options;

    if disabled {
        state.edit.drag = None;
        state.edit.hover = None;
    }

    state.options.save_to_file(&EditorOptions::config_path())
}

/// Setzt die Optionen auf Standardwerte zurück (und persistiert sie).
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}

/// Leitet das kontrollierte Beenden der Anwendung ein.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
