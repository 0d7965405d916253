//! Hauptzustand der Anwendung.

use crate::core::{AirfoilDesign, PointRef};
use crate::shared::EditorOptions;

/// Interaktionszustand des Plot-Editors.
///
/// Höchstens ein Punkt wird gleichzeitig gezogen; Hover ist unabhängig davon
/// und dient nur der visuellen Rückmeldung, nie der Korrektheit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditState {
    /// Aktiv gezogener Kontrollpunkt (None = kein Drag)
    pub drag: Option<PointRef>,
    /// Aktuell überfahrener Kontrollpunkt
    pub hover: Option<PointRef>,
}

impl EditState {
    /// Ob gerade ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Der visuell hervorzuhebende Punkt: Drag hat Vorrang vor Hover.
    pub fn active_point(&self) -> Option<PointRef> {
        self.drag.or(self.hover)
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Profil-Design (funktional aktualisiert)
    pub design: AirfoilDesign,
    /// Drag-/Hover-Zustand des Editors
    pub edit: EditState,
    /// Aktuelle Viewport-Größe des Plots in Punkten
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen (Anzeige-Flags, Farben)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Standard-Anwendungszustand.
    pub fn new() -> Self {
        Self {
            design: AirfoilDesign::default_design(),
            edit: EditState::default(),
            viewport_size: [0.0, 0.0],
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Gesamtzahl der Kontrollpunkte (für die Statuszeile).
    pub fn control_point_count(&self) -> usize {
        self.design.upper.len() + self.design.lower.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
