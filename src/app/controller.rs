//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command-Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        log::debug!("Command: {:?}", command);
        use super::use_cases::{editing, view};

        match command {
            // === Editieren ===
            AppCommand::BeginDrag { target } => editing::begin_drag(state, target),
            AppCommand::UpdateDraggedValue { raw_value } => {
                editing::update_dragged_value(state, raw_value)
            }
            AppCommand::EndDrag => editing::end_drag(state),
            AppCommand::SetHover { target } => editing::set_hover(state, target),
            AppCommand::SetControlPointValue { side, id, value } => {
                editing::set_control_point_value(state, side, id, value)
            }
            AppCommand::AddControlPoint { side } => editing::add_control_point(state, side),
            AppCommand::RemoveControlPoint { side } => editing::remove_control_point(state, side),
            AppCommand::ResetDesign => editing::reset_design(state),
            AppCommand::SetAllWeights { upper, lower } => {
                editing::set_all_weights(state, upper, lower)?
            }

            // === Viewport & Anwendungssteuerung ===
            AppCommand::ApplyOptions { options } => view::apply_options(state, options)?,
            AppCommand::SetViewportSize { size } => view::resize(state, size),
            AppCommand::RequestExit => view::request_exit(state),
        }

        Ok(())
    }
}
