//! App-Intent- und App-Command-Events.
//!
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik;
//! Commands sind die daraus abgeleiteten mutierenden Operationen.

use crate::core::{PointRef, SurfaceSide};
use crate::shared::EditorOptions;

/// Eingaben aus UI/System.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer-Down hat einen Kontrollpunkt getroffen (Pick-Hit)
    ControlPointDragStarted { target: PointRef },
    /// Pointer-Bewegung während eines aktiven Drags (Rohwert vor Klemmung)
    ControlPointDragMoved { raw_value: f64 },
    /// Drag regulär beendet (Pointer losgelassen)
    ControlPointDragEnded,
    /// Drag abgebrochen: Pointer hat den Plotbereich verlassen.
    /// Der zuletzt emittierte Wert bleibt bestehen (kein Revert).
    ControlPointDragAborted,
    /// Hover-Ziel hat sich geändert (None = kein Punkt in Reichweite)
    HoverChanged { target: Option<PointRef> },
    /// Gewichtswert direkt gesetzt (Eingabefeld im Edit-Panel)
    SetControlPointValueRequested {
        side: SurfaceSide,
        id: u64,
        value: f64,
    },
    /// Kontrollpunkt am Ende einer Oberfläche anfügen
    AddControlPointRequested { side: SurfaceSide },
    /// Letzten Kontrollpunkt einer Oberfläche entfernen
    RemoveControlPointRequested { side: SurfaceSide },
    /// Profil auf das Standard-Design zurücksetzen
    ResetDesignRequested,
    /// Komplette Gewichtsvektoren setzen (Ergebnisform externer Werkzeuge)
    SetAllWeightsRequested { upper: Vec<f64>, lower: Vec<f64> },
    /// Optionen wurden geändert (sofortige Anwendung + Persistierung)
    OptionsChanged { options: EditorOptions },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Operationen auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag auf einen Kontrollpunkt beginnen
    BeginDrag { target: PointRef },
    /// Wert des gezogenen Punkts aktualisieren (wird geklemmt)
    UpdateDraggedValue { raw_value: f64 },
    /// Aktiven Drag beenden
    EndDrag,
    /// Hover-Ziel setzen
    SetHover { target: Option<PointRef> },
    /// Gewichtswert eines Punkts setzen (wird geklemmt)
    SetControlPointValue {
        side: SurfaceSide,
        id: u64,
        value: f64,
    },
    /// Kontrollpunkt anfügen
    AddControlPoint { side: SurfaceSide },
    /// Letzten Kontrollpunkt entfernen
    RemoveControlPoint { side: SurfaceSide },
    /// Standard-Design wiederherstellen
    ResetDesign,
    /// Komplette Gewichtsvektoren übernehmen
    SetAllWeights { upper: Vec<f64>, lower: Vec<f64> },
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Anwendung beenden
    RequestExit,
}
