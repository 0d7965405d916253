//! Toolbar mit Anzeige-Optionen und Flächen-Werkzeugen.

use crate::app::{AppIntent, AppState};
use crate::core::SurfaceSide;
use crate::shared::options::{MAX_CONTROL_POINTS, MIN_CONTROL_POINTS};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Anzeige:");
            ui.separator();

            let mut options = state.options.clone();
            let mut changed = false;
            changed |= ui
                .checkbox(&mut options.show_control_points, "Kontrollpunkte")
                .changed();
            changed |= ui.checkbox(&mut options.show_labels, "Werte").changed();
            changed |= ui.checkbox(&mut options.fill_airfoil, "Füllung").changed();
            changed |= ui
                .checkbox(&mut options.show_flow_panel, "Strömung")
                .changed();
            if changed {
                events.push(AppIntent::OptionsChanged { options });
            }

            ui.separator();

            render_surface_tools(ui, state, SurfaceSide::Upper, &mut events);
            ui.separator();
            render_surface_tools(ui, state, SurfaceSide::Lower, &mut events);

            ui.separator();
            if ui.button("Zurücksetzen").clicked() {
                events.push(AppIntent::ResetDesignRequested);
            }
        });
    });

    events
}

/// Punkt-Anzahl-Steuerung (+/−) für eine Profilseite.
fn render_surface_tools(
    ui: &mut egui::Ui,
    state: &AppState,
    side: SurfaceSide,
    events: &mut Vec<AppIntent>,
) {
    let count = state.design.surface(side).len();
    ui.label(format!("{}: {}", side.label(), count));

    if ui
        .add_enabled(count < MAX_CONTROL_POINTS, egui::Button::new("+"))
        .clicked()
    {
        events.push(AppIntent::AddControlPointRequested { side });
    }
    if ui
        .add_enabled(count > MIN_CONTROL_POINTS, egui::Button::new("−"))
        .clicked()
    {
        events.push(AppIntent::RemoveControlPointRequested { side });
    }
}
