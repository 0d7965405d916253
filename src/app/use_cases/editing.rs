//! Use-Cases für Kontrollpunkt-Bearbeitung: Drag-Lebenszyklus, Hover,
//! direkte Wertänderung, Punkt-Verwaltung.
//!
//! Gewichtswerte außerhalb des Klemmbereichs werden hier stillschweigend
//! geklemmt, nie abgelehnt — die Editierfläche kennt keinen "ungültigen"
//! Wert. Jede Wertänderung erzeugt eine neue Punktfolge (funktionales
//! Update), damit Re-Render-Trigger über Wertungleichheit funktionieren.

use crate::app::{AppState, EditState};
use crate::core::{AirfoilDesign, PointRef, SurfaceSide};
use crate::shared::options::{MAX_CONTROL_POINTS, MIN_CONTROL_POINTS, WEIGHT_MAX, WEIGHT_MIN};

/// Beginnt einen Drag auf den gegebenen Punkt.
pub fn begin_drag(state: &mut AppState, target: PointRef) {
    if state.edit.is_dragging() || !state.design.contains(target) {
        return;
    }
    state.edit.drag = Some(target);
    state.edit.hover = None;
}

/// Aktualisiert den Wert des gezogenen Punkts (synchron, ohne Batching).
///
/// Jede Zwischenposition erreicht sofort das Design und damit den Renderer.
pub fn update_dragged_value(state: &mut AppState, raw_value: f64) {
    let Some(target) = state.edit.drag else {
        return;
    };
    apply_value(state, target.side, target.id, raw_value);
}

/// Beendet den aktiven Drag. Der zuletzt gesetzte Wert bleibt bestehen.
pub fn end_drag(state: &mut AppState) {
    state.edit.drag = None;
}

/// Setzt das Hover-Ziel (nur visuelle Rückmeldung).
pub fn set_hover(state: &mut AppState, target: Option<PointRef>) {
    state.edit.hover = target.filter(|t| state.design.contains(*t));
}

/// Setzt den Gewichtswert eines Punkts direkt (Eingabefeld).
pub fn set_control_point_value(state: &mut AppState, side: SurfaceSide, id: u64, value: f64) {
    apply_value(state, side, id, value);
}

fn apply_value(state: &mut AppState, side: SurfaceSide, id: u64, raw_value: f64) {
    if !raw_value.is_finite() {
        log::warn!("Nicht-endlicher Gewichtswert verworfen: {}", raw_value);
        return;
    }
    let value = raw_value.clamp(WEIGHT_MIN, WEIGHT_MAX);
    let surface = state.design.surface(side).with_value(id, value);
    state.design.set_surface(side, surface);
}

/// Fügt einen Kontrollpunkt (Gewicht 0) am Ende einer Oberfläche an.
pub fn add_control_point(state: &mut AppState, side: SurfaceSide) {
    let surface = state.design.surface(side);
    if surface.len() >= MAX_CONTROL_POINTS {
        log::debug!("{}: Maximalzahl Kontrollpunkte erreicht", side.label());
        return;
    }
    let surface = surface.with_appended(0.0);
    state.design.set_surface(side, surface);
}

/// Entfernt den letzten Kontrollpunkt einer Oberfläche (Minimum bleibt gewahrt).
pub fn remove_control_point(state: &mut AppState, side: SurfaceSide) {
    let surface = state.design.surface(side);
    if surface.len() <= MIN_CONTROL_POINTS {
        return;
    }
    let surface = surface.with_removed_last();
    state.design.set_surface(side, surface);

    // Drag/Hover auf entfernte Punkte lösen
    if state.edit.drag.is_some_and(|t| !state.design.contains(t)) {
        state.edit.drag = None;
    }
    if state.edit.hover.is_some_and(|t| !state.design.contains(t)) {
        state.edit.hover = None;
    }
}

/// Stellt das Standard-Design wieder her.
pub fn reset_design(state: &mut AppState) {
    state.design = AirfoilDesign::default_design();
    state.edit = EditState::default();
    log::info!("Profil auf Standard-Design zurückgesetzt");
}

/// Übernimmt komplette Gewichtsvektoren (z.B. Ergebnis externer Werkzeuge).
pub fn set_all_weights(state: &mut AppState, upper: Vec<f64>, lower: Vec<f64>) -> anyhow::Result<()> {
    anyhow::ensure!(
        upper.len() >= MIN_CONTROL_POINTS && lower.len() >= MIN_CONTROL_POINTS,
        "Gewichtsvektoren benötigen mindestens {} Einträge (erhalten: {}/{})",
        MIN_CONTROL_POINTS,
        upper.len(),
        lower.len()
    );
    anyhow::ensure!(
        upper.iter().chain(lower.iter()).all(|w| w.is_finite()),
        "Gewichtsvektoren enthalten nicht-endliche Werte"
    );

    let clamp = |w: &f64| w.clamp(WEIGHT_MIN, WEIGHT_MAX);
    let upper: Vec<f64> = upper.iter().map(clamp).collect();
    let lower: Vec<f64> = lower.iter().map(clamp).collect();

    state.design = AirfoilDesign::from_weights(&upper, &lower);
    state.edit = EditState::default();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn upper_point(id: u64) -> PointRef {
        PointRef {
            side: SurfaceSide::Upper,
            id,
        }
    }

    #[test]
    fn test_drag_wert_wird_geklemmt() {
        let mut state = AppState::new();
        begin_drag(&mut state, upper_point(1));

        // Pixel weit außerhalb des Canvas ergeben Rohwerte jenseits der Klemmgrenze
        update_dragged_value(&mut state, 7.3);
        assert_relative_eq!(state.design.upper.value_of(1).unwrap(), WEIGHT_MAX);

        update_dragged_value(&mut state, -123.0);
        assert_relative_eq!(state.design.upper.value_of(1).unwrap(), WEIGHT_MIN);

        // Exakt auf der Klemmgrenze: Wert bleibt exakt 0.5
        update_dragged_value(&mut state, 0.5);
        assert_relative_eq!(state.design.upper.value_of(1).unwrap(), 0.5);
    }

    #[test]
    fn test_nicht_endlicher_wert_wird_verworfen() {
        let mut state = AppState::new();
        let before = state.design.upper.value_of(0).unwrap();
        set_control_point_value(&mut state, SurfaceSide::Upper, 0, f64::NAN);
        assert_relative_eq!(state.design.upper.value_of(0).unwrap(), before);
    }

    #[test]
    fn test_drag_ende_behaelt_letzten_wert() {
        let mut state = AppState::new();
        begin_drag(&mut state, upper_point(0));
        update_dragged_value(&mut state, 0.31);
        end_drag(&mut state);

        assert!(!state.edit.is_dragging());
        assert_relative_eq!(state.design.upper.value_of(0).unwrap(), 0.31);
    }

    #[test]
    fn test_remove_loest_haengenden_hover() {
        let mut state = AppState::new();
        let last_id = state.design.upper.points().last().unwrap().id;
        state.edit.hover = Some(upper_point(last_id));

        remove_control_point(&mut state, SurfaceSide::Upper);
        assert_eq!(state.edit.hover, None);
    }

    #[test]
    fn test_remove_respektiert_minimum() {
        let mut state = AppState::new();
        for _ in 0..10 {
            remove_control_point(&mut state, SurfaceSide::Lower);
        }
        assert_eq!(state.design.lower.len(), MIN_CONTROL_POINTS);
    }

    #[test]
    fn test_add_respektiert_maximum() {
        let mut state = AppState::new();
        for _ in 0..40 {
            add_control_point(&mut state, SurfaceSide::Upper);
        }
        assert_eq!(state.design.upper.len(), MAX_CONTROL_POINTS);
    }

    #[test]
    fn test_set_all_weights_klemmt_und_ersetzt() {
        let mut state = AppState::new();
        set_all_weights(
            &mut state,
            vec![0.9, 0.1, 0.2],
            vec![-0.9, -0.1],
        )
        .expect("gültige Vektoren");

        assert_relative_eq!(state.design.upper.value_of(0).unwrap(), WEIGHT_MAX);
        assert_relative_eq!(state.design.lower.value_of(0).unwrap(), WEIGHT_MIN);
        assert_eq!(state.design.upper.len(), 3);
        assert_eq!(state.design.lower.len(), 2);
    }

    #[test]
    fn test_set_all_weights_lehnt_zu_kurze_vektoren_ab() {
        let mut state = AppState::new();
        assert!(set_all_weights(&mut state, vec![0.1], vec![0.1, 0.2]).is_err());
    }
}
