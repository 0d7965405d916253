//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt die Zustandsmaschine des Editors: Idle/Hover/Drag-Übergänge
//! werden als Intent→Command-Entscheidungen gegen den aktuellen State
//! ausgedrückt. Ein Pick-Miss oder ein Intent im falschen Zustand erzeugt
//! schlicht keine Commands — nie einen Fehler.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ControlPointDragStarted { target } => {
            // Bearbeitung global deaktiviert → Pointer-Down bleibt folgenlos.
            // Ein zweiter Pointer-Down während eines Drags ebenso
            // (Ein-Pointer-Modell).
            if !state.options.show_control_points || state.edit.is_dragging() {
                return Vec::new();
            }
            if !state.design.contains(target) {
                return Vec::new();
            }
            vec![AppCommand::BeginDrag { target }]
        }
        AppIntent::ControlPointDragMoved { raw_value } => {
            if !state.edit.is_dragging() {
                return Vec::new();
            }
            vec![AppCommand::UpdateDraggedValue { raw_value }]
        }
        // Abbruch (Pointer verlässt den Plot) und reguläres Ende sind
        // identisch: der zuletzt emittierte Wert steht bereits im Design.
        AppIntent::ControlPointDragEnded | AppIntent::ControlPointDragAborted => {
            if !state.edit.is_dragging() {
                return Vec::new();
            }
            vec![AppCommand::EndDrag]
        }
        AppIntent::HoverChanged { target } => {
            // Während eines Drags und bei ausgeblendeten Kontrollpunkten
            // wird Hover nicht nachgeführt.
            if state.edit.is_dragging() || !state.options.show_control_points {
                return Vec::new();
            }
            vec![AppCommand::SetHover { target }]
        }
        AppIntent::SetControlPointValueRequested { side, id, value } => {
            vec![AppCommand::SetControlPointValue { side, id, value }]
        }
        AppIntent::AddControlPointRequested { side } => {
            vec![AppCommand::AddControlPoint { side }]
        }
        AppIntent::RemoveControlPointRequested { side } => {
            vec![AppCommand::RemoveControlPoint { side }]
        }
        AppIntent::ResetDesignRequested => vec![AppCommand::ResetDesign],
        AppIntent::SetAllWeightsRequested { upper, lower } => {
            vec![AppCommand::SetAllWeights { upper, lower }]
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PointRef, SurfaceSide};

    fn upper_point(id: u64) -> PointRef {
        PointRef {
            side: SurfaceSide::Upper,
            id,
        }
    }

    #[test]
    fn test_drag_start_erzeugt_begin_drag() {
        let state = AppState::new();
        let commands =
            map_intent_to_commands(&state, AppIntent::ControlPointDragStarted { target: upper_point(0) });
        assert!(matches!(commands[..], [AppCommand::BeginDrag { .. }]));
    }

    #[test]
    fn test_drag_start_bei_deaktivierter_bearbeitung_ist_noop() {
        let mut state = AppState::new();
        state.options.show_control_points = false;
        let commands =
            map_intent_to_commands(&state, AppIntent::ControlPointDragStarted { target: upper_point(0) });
        assert!(commands.is_empty());
    }

    #[test]
    fn test_zweiter_pointer_down_waehrend_drag_ist_noop() {
        let mut state = AppState::new();
        state.edit.drag = Some(upper_point(0));
        let commands =
            map_intent_to_commands(&state, AppIntent::ControlPointDragStarted { target: upper_point(1) });
        assert!(commands.is_empty());
    }

    #[test]
    fn test_drag_move_ohne_drag_ist_noop() {
        let state = AppState::new();
        let commands =
            map_intent_to_commands(&state, AppIntent::ControlPointDragMoved { raw_value: 0.1 });
        assert!(commands.is_empty());
    }

    #[test]
    fn test_hover_waehrend_drag_ist_noop() {
        let mut state = AppState::new();
        state.edit.drag = Some(upper_point(0));
        let commands = map_intent_to_commands(
            &state,
            AppIntent::HoverChanged {
                target: Some(upper_point(1)),
            },
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn test_unbekanntes_drag_ziel_ist_noop() {
        let state = AppState::new();
        let commands =
            map_intent_to_commands(&state, AppIntent::ControlPointDragStarted { target: upper_point(99) });
        assert!(commands.is_empty());
    }
}
