//! Strömungs-Panel: konsumiert Frames und zeigt sie als Textur an.
//!
//! Das Panel besitzt Konsument und Demo-Quelle gemeinsam; beim Ausblenden
//! wird die Quelle gestoppt und der Kanal abgebaut, beim Einblenden neu
//! aufgebaut. Die Textur bleibt über ein Ausblenden hinweg erhalten, damit
//! beim Wiedereinblenden sofort das letzte Bild steht.

use std::sync::mpsc;
use std::time::Duration;

use crate::flow::{ConnectionStatus, FlowConsumer, FlowSourceHandle};
use crate::render::rasterize_frame;

/// Anzeige-Intervall; etwas unterhalb der Quellrate, damit kein Frame altert.
const REFRESH_INTERVAL: Duration = Duration::from_millis(16);

/// Bottom-Panel mit Live-Strömungsfeld.
#[derive(Default)]
pub struct FlowPanel {
    consumer: Option<FlowConsumer>,
    source: Option<FlowSourceHandle>,
    texture: Option<egui::TextureHandle>,
}

impl FlowPanel {
    /// Erstellt ein inaktives Panel ohne laufende Quelle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Verbindungsstatus (Disconnected, solange das Panel inaktiv ist).
    pub fn status(&self) -> ConnectionStatus {
        self.consumer
            .as_ref()
            .map(|c| c.status())
            .unwrap_or(ConnectionStatus::Disconnected)
    }

    /// Rendert das Panel; bei `visible == false` wird nur die Quelle gestoppt.
    pub fn show(&mut self, ctx: &egui::Context, visible: bool) {
        if !visible {
            self.shutdown();
            return;
        }

        self.ensure_running();
        self.pump_and_rasterize(ctx);
        let status = self.status();

        egui::TopBottomPanel::bottom("flow_panel")
            .resizable(true)
            .default_height(240.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.strong("Strömungsfeld");
                    ui.separator();
                    ui.label(status.label());
                });

                match &self.texture {
                    Some(texture) => {
                        // Seitenverhältnis der Zellauflösung beibehalten
                        let avail = ui.available_size();
                        let tex_size = texture.size_vec2();
                        let scale = (avail.x / tex_size.x).min(avail.y / tex_size.y).max(0.0);
                        ui.centered_and_justified(|ui| {
                            ui.add(
                                egui::Image::new(&*texture).fit_to_exact_size(tex_size * scale),
                            );
                        });
                    }
                    None => {
                        ui.centered_and_justified(|ui| {
                            ui.label("Warte auf Strömungsdaten…");
                        });
                    }
                }
            });

        // Frames kommen asynchron — ohne aktives Repaint bliebe das Bild stehen
        ctx.request_repaint_after(REFRESH_INTERVAL);
    }

    /// Stoppt die Demo-Quelle und baut den Kanal ab.
    pub fn shutdown(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.stop();
        }
        self.consumer = None;
    }

    /// Baut Kanal, Konsument und Demo-Quelle auf, falls noch nicht geschehen.
    fn ensure_running(&mut self) {
        if self.source.is_some() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        self.consumer = Some(FlowConsumer::new(rx));
        self.source = Some(FlowSourceHandle::spawn(tx));
        log::info!("Strömungsquelle gestartet");
    }

    /// Leert den Event-Kanal und aktualisiert die Textur aus dem letzten Frame.
    fn pump_and_rasterize(&mut self, ctx: &egui::Context) {
        let Some(consumer) = self.consumer.as_mut() else {
            return;
        };

        consumer.pump();
        if let Some(frame) = consumer.sample() {
            let image = rasterize_frame(&frame);
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
                None => {
                    self.texture =
                        Some(ctx.load_texture("flow_field", image, egui::TextureOptions::NEAREST))
                }
            }
        }
    }
}
