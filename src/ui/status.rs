//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::flow::ConnectionStatus;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, flow_status: ConnectionStatus) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Punkte: {} oben | {} unten",
                state.design.upper.len(),
                state.design.lower.len()
            ));

            ui.separator();

            if let Some(target) = state.edit.drag {
                ui.label(format!("Drag: {} #{}", target.side.label(), target.id));
            } else if let Some(target) = state.edit.hover {
                ui.label(format!("Hover: {} #{}", target.side.label(), target.id));
            } else {
                ui.label("Kein Punkt aktiv");
            }

            ui.separator();

            if state.options.show_flow_panel {
                ui.label(format!("Strömung: {}", flow_status.label()));
            } else {
                ui.label("Strömung: aus");
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
