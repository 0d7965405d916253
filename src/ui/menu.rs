//! Top-Menü (Datei, Profil, Hilfe).

use crate::app::{AppIntent, AppState};
use crate::shared::EditorOptions;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Profil", |ui| {
                if ui.button("Profil zurücksetzen").clicked() {
                    events.push(AppIntent::ResetDesignRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen zurücksetzen").clicked() {
                    events.push(AppIntent::OptionsChanged {
                        options: EditorOptions::default(),
                    });
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                let mut options = state.options.clone();
                let mut changed = false;

                changed |= ui
                    .checkbox(&mut options.show_control_points, "Kontrollpunkte")
                    .changed();
                changed |= ui
                    .checkbox(&mut options.show_labels, "Wertebeschriftung")
                    .changed();
                changed |= ui.checkbox(&mut options.fill_airfoil, "Profilfüllung").changed();

                ui.separator();

                changed |= ui
                    .checkbox(&mut options.show_flow_panel, "Strömungsfeld")
                    .changed();

                if changed {
                    events.push(AppIntent::OptionsChanged { options });
                }
            });

            ui.menu_button("Hilfe", |ui| {
                if ui.button("Über").clicked() {
                    log::info!("CST Airfoil Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
