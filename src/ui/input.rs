//! Plot-Input-Handling: Maus-Events im Zeichenbereich → AppIntent.
//!
//! Der Input-Zustand merkt sich nur, ob der aktuelle Primär-Drag auf einem
//! Kontrollpunkt begonnen hat; alles Weitere (Gültigkeit des Ziels,
//! Editier-Sperren) entscheidet das Intent-Mapping.

use glam::DVec2;

use crate::app::{AppIntent, AppState};
use crate::core::picking::pick_control_point;
use crate::core::PlotViewport;
use crate::shared::options::PICK_RADIUS_PX;

/// Verwaltet den Input-Zustand für den Profil-Plot.
#[derive(Default)]
pub struct InputState {
    /// Primär-Drag hat auf einem Kontrollpunkt begonnen
    dragging: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { dragging: false }
    }

    /// Sammelt Plot-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Hit-Test, Drag und Hover im Plot.
    pub fn collect_plot_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let viewport = PlotViewport::new(rect.width() as f64, rect.height() as f64);
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        });

        self.handle_drag_start(ui, response, state, &viewport, &mut events);
        self.handle_drag_update(response, &viewport, &mut events);
        self.handle_drag_end(response, &mut events);
        self.handle_pointer_leave(ui, response, &mut events);
        self.handle_hover(response, state, &viewport, &mut events);

        events
    }

    /// Erkennt Drag-Beginn über den exakten Druckpunkt.
    fn handle_drag_start(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
        viewport: &PlotViewport,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle),
        // interact_pointer_pos() hingegen die Position *nach* Drag-Erkennung
        // (offset um ~6px), was zu asymmetrischen Hitboxen führen kann.
        let press_pos = ui.input(|i| i.pointer.press_origin());
        let hit = press_pos.and_then(|pos| {
            let local = pos - response.rect.min;
            pick_control_point(
                DVec2::new(local.x as f64, local.y as f64),
                &state.design,
                viewport,
                PICK_RADIUS_PX,
            )
        });

        if let Some(target) = hit {
            events.push(AppIntent::ControlPointDragStarted { target });
            self.dragging = true;
        }
    }

    /// Übersetzt die Zeigerposition während eines Drags in einen Roh-Höhenwert.
    fn handle_drag_update(
        &mut self,
        response: &egui::Response,
        viewport: &PlotViewport,
        events: &mut Vec<AppIntent>,
    ) {
        if !self.dragging || !response.dragged_by(egui::PointerButton::Primary) {
            return;
        }

        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let local_y = (pointer_pos.y - response.rect.min.y) as f64;
            events.push(AppIntent::ControlPointDragMoved {
                raw_value: viewport.from_px_y(local_y),
            });
        }
    }

    fn handle_drag_end(&mut self, response: &egui::Response, events: &mut Vec<AppIntent>) {
        if !response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if self.dragging {
            events.push(AppIntent::ControlPointDragEnded);
            self.dragging = false;
        }
    }

    /// Verlässt der Zeiger den Plotbereich während eines Drags, wird der Drag
    /// abgebrochen und der zuletzt übernommene Wert bleibt stehen.
    fn handle_pointer_leave(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        if !self.dragging {
            return;
        }

        let inside = ui
            .input(|i| i.pointer.latest_pos())
            .is_some_and(|pos| response.rect.contains(pos));
        if !inside {
            events.push(AppIntent::ControlPointDragAborted);
            self.dragging = false;
        }
    }

    /// Aktualisiert das Hover-Ziel, solange kein Drag läuft.
    fn handle_hover(
        &self,
        response: &egui::Response,
        state: &AppState,
        viewport: &PlotViewport,
        events: &mut Vec<AppIntent>,
    ) {
        if self.dragging || !state.options.show_control_points {
            return;
        }

        let target = response.hover_pos().and_then(|pos| {
            let local = pos - response.rect.min;
            pick_control_point(
                DVec2::new(local.x as f64, local.y as f64),
                &state.design,
                viewport,
                PICK_RADIUS_PX,
            )
        });

        // Nur bei Änderung emittieren, sonst flutet Hover das Command-Log
        if target != state.edit.hover {
            events.push(AppIntent::HoverChanged { target });
        }
    }
}
