//! Seitliches Bearbeitungspanel: numerische Gewichte pro Kontrollpunkt.
//!
//! Spiegelt denselben Zustand wie die Drag-Bearbeitung im Plot; beide Wege
//! laufen über Intents, damit Klemmen und Validierung an einer Stelle bleiben.

use crate::app::{AppIntent, AppState};
use crate::core::{Surface, SurfaceSide};
use crate::shared::options::{MAX_CONTROL_POINTS, MIN_CONTROL_POINTS, WEIGHT_MAX, WEIGHT_MIN};

/// Rendert das Gewichte-Panel und gibt erzeugte Events zurück.
pub fn render_edit_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("edit_panel")
        .resizable(false)
        .default_width(190.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("CST-Gewichte");
            ui.separator();

            render_surface_section(ui, &state.design.upper, SurfaceSide::Upper, &mut events);
            ui.separator();
            render_surface_section(ui, &state.design.lower, SurfaceSide::Lower, &mut events);

            ui.separator();
            if ui.button("Profil zurücksetzen").clicked() {
                events.push(AppIntent::ResetDesignRequested);
            }
        });

    events
}

/// Gewichte-Zeilen und Punktanzahl-Steuerung für eine Profilseite.
fn render_surface_section(
    ui: &mut egui::Ui,
    surface: &Surface,
    side: SurfaceSide,
    events: &mut Vec<AppIntent>,
) {
    ui.horizontal(|ui| {
        ui.strong(side.label());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(surface.len() > MIN_CONTROL_POINTS, egui::Button::new("−"))
                .clicked()
            {
                events.push(AppIntent::RemoveControlPointRequested { side });
            }
            if ui
                .add_enabled(surface.len() < MAX_CONTROL_POINTS, egui::Button::new("+"))
                .clicked()
            {
                events.push(AppIntent::AddControlPointRequested { side });
            }
        });
    });

    for (index, point) in surface.points().iter().enumerate() {
        let mut value = point.value;
        ui.horizontal(|ui| {
            ui.label(format!("w{}", index));
            let response = ui.add(
                egui::DragValue::new(&mut value)
                    .speed(0.005)
                    .range(WEIGHT_MIN..=WEIGHT_MAX)
                    .fixed_decimals(3),
            );
            if response.changed() {
                events.push(AppIntent::SetControlPointValueRequested {
                    side,
                    id: point.id,
                    value,
                });
            }
        });
    }
}
