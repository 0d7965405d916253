//! Zentrale Konfiguration für den CST-Profil-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurven-Geometrie ────────────────────────────────────────────────

/// Anzahl der Abtast-Intervalle pro Oberfläche (Samples = Intervalle + 1).
pub const CURVE_SAMPLE_COUNT: usize = 100;
/// Untere Klemm-Grenze für CST-Gewichte.
pub const WEIGHT_MIN: f64 = -0.5;
/// Obere Klemm-Grenze für CST-Gewichte.
pub const WEIGHT_MAX: f64 = 0.5;
/// Minimale Anzahl Kontrollpunkte pro Oberfläche (Bernstein-Grad ≥ 1).
pub const MIN_CONTROL_POINTS: usize = 2;
/// Maximale Anzahl Kontrollpunkte pro Oberfläche.
pub const MAX_CONTROL_POINTS: usize = 16;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln (Hover und Drag-Start verwenden denselben Wert).
pub const PICK_RADIUS_PX: f64 = 12.0;

// ── Plot-Rendering ──────────────────────────────────────────────────

/// Anzahl vertikaler Gitter-Unterteilungen über x ∈ [0, 1].
pub const GRID_DIVISIONS_X: usize = 10;
/// Anzahl horizontaler Gitter-Unterteilungen über die sichtbare y-Spanne.
pub const GRID_DIVISIONS_Y: usize = 12;
/// Farbe der Oberseiten-Kurve (RGBA: Cyan).
pub const UPPER_CURVE_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe der Unterseiten-Kurve (RGBA: Orange).
pub const LOWER_CURVE_COLOR: [f32; 4] = [1.0, 0.6, 0.1, 1.0];
/// Füllfarbe des Profilquerschnitts (RGBA: halbtransparentes Blaugrau).
pub const FILL_COLOR: [f32; 4] = [0.25, 0.45, 0.65, 0.35];

// ── Strömungsansicht ────────────────────────────────────────────────

/// Verstärkungsfaktor für die Curl-Einfärbung der Strömungszellen.
pub const CURL_GAIN: f64 = 5.0;
/// Feste Farbe für Hindernis-Zellen (RGB).
pub const OBSTACLE_COLOR: [u8; 3] = [90, 90, 90];

// ── Laufzeit-Optionen (serialisierbar) ──────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `airfoil_cst_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Plot ────────────────────────────────────────────────────
    /// Kontrollpunkte anzeigen (aus = Bearbeitung global deaktiviert)
    pub show_control_points: bool,
    /// Gewichtswerte an den Kontrollpunkten beschriften
    pub show_labels: bool,
    /// Profilquerschnitt füllen
    pub fill_airfoil: bool,

    // ── Strömung ────────────────────────────────────────────────
    /// Strömungs-Panel anzeigen (startet/stoppt die Demo-Quelle)
    #[serde(default)]
    pub show_flow_panel: bool,

    // ── Farben ──────────────────────────────────────────────────
    /// Farbe der Oberseiten-Kurve (RGBA)
    pub upper_curve_color: [f32; 4],
    /// Farbe der Unterseiten-Kurve (RGBA)
    pub lower_curve_color: [f32; 4],
    /// Füllfarbe des Profilquerschnitts (RGBA)
    pub fill_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            show_control_points: true,
            show_labels: false,
            fill_airfoil: true,
            show_flow_panel: false,
            upper_curve_color: UPPER_CURVE_COLOR,
            lower_curve_color: LOWER_CURVE_COLOR,
            fill_color: FILL_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("airfoil_cst_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("airfoil_cst_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_optionen_ueberleben_toml_roundtrip() {
        let opts = EditorOptions::default();
        let toml_text = toml::to_string_pretty(&opts).expect("Serialisierung darf nicht scheitern");
        let parsed: EditorOptions = toml::from_str(&toml_text).expect("Parsen darf nicht scheitern");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn fehlendes_flow_panel_feld_faellt_auf_default() {
        // Abwärtskompatibilität: ältere TOML-Dateien ohne show_flow_panel
        let toml_text = r#"
show_control_points = true
show_labels = true
fill_airfoil = false
upper_curve_color = [0.0, 0.8, 1.0, 1.0]
lower_curve_color = [1.0, 0.6, 0.1, 1.0]
fill_color = [0.25, 0.45, 0.65, 0.35]
"#;
        let parsed: EditorOptions = toml::from_str(toml_text).expect("Parsen darf nicht scheitern");
        assert!(!parsed.show_flow_panel);
        assert!(parsed.show_labels);
    }
}
