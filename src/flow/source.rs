//! Synthetische Demo-Quelle für Strömungs-Frames.
//!
//! Steht für die externe Streaming-Verbindung (persistenter Duplex-Kanal)
//! und liefert Status-Signale plus JSON-Payloads über denselben Kanal, den
//! eine echte Quelle verwenden würde. Kein CFD: ein analytisches Muster mit
//! kreisförmiger Hindernis-Maske, gerade genug, um den Konsumentenpfad
//! realistisch zu treiben.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::consumer::{ConnectionStatus, FlowEvent};

/// Gitterhöhe der Demo-Frames.
const GRID_HEIGHT: usize = 40;
/// Gitterbreite der Demo-Frames.
const GRID_WIDTH: usize = 100;
/// Sendeintervall (~30 Frames pro Sekunde).
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Handle auf den Produzenten-Thread der Demo-Quelle.
///
/// `stop()` (oder Drop) setzt das Stop-Flag und joint den Thread — es bleibt
/// kein wiederkehrender Produzent zurück, wenn die Ansicht geschlossen wird.
pub struct FlowSourceHandle {
    stop: Arc<AtomicBool>,
    join: Option<thread::JoinHandle<()>>,
}

impl FlowSourceHandle {
    /// Startet die Quelle auf einem Hintergrund-Thread.
    pub fn spawn(tx: Sender<FlowEvent>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        let join = thread::Builder::new()
            .name("flow-source".into())
            .spawn(move || run_source(tx, stop_flag))
            .ok();
        if join.is_none() {
            log::error!("Demo-Quelle konnte nicht gestartet werden");
        }

        Self { stop, join }
    }

    /// Stoppt den Produzenten und wartet auf sein Ende.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                log::error!("Demo-Quelle hat panisch beendet");
            }
        }
    }
}

impl Drop for FlowSourceHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_source(tx: Sender<FlowEvent>, stop: Arc<AtomicBool>) {
    log::info!("Demo-Strömungsquelle gestartet ({}×{})", GRID_HEIGHT, GRID_WIDTH);
    if tx.send(FlowEvent::Status(ConnectionStatus::Connecting)).is_err() {
        return;
    }
    if tx.send(FlowEvent::Status(ConnectionStatus::Connected)).is_err() {
        return;
    }

    let mut tick = 0u64;
    while !stop.load(Ordering::Relaxed) {
        let payload = build_payload(tick as f64 * 0.08);
        if tx.send(FlowEvent::Payload(payload)).is_err() {
            // Konsument weg — nichts mehr zu tun
            return;
        }
        tick += 1;
        thread::sleep(FRAME_INTERVAL);
    }

    let _ = tx.send(FlowEvent::Status(ConnectionStatus::Disconnected));
    log::info!("Demo-Strömungsquelle gestoppt");
}

/// Baut eine Frame-Payload mit wanderndem Wirbelmuster und rundem Hindernis.
fn build_payload(t: f64) -> String {
    let cx = GRID_WIDTH as f64 / 4.0;
    let cy = GRID_HEIGHT as f64 / 2.0;
    let obstacle_radius = GRID_HEIGHT as f64 / 6.0;

    let mut u = Vec::with_capacity(GRID_HEIGHT);
    let mut v = Vec::with_capacity(GRID_HEIGHT);
    let mut curl = Vec::with_capacity(GRID_HEIGHT);
    let mut solid = Vec::with_capacity(GRID_HEIGHT);

    for row in 0..GRID_HEIGHT {
        let mut u_row = Vec::with_capacity(GRID_WIDTH);
        let mut v_row = Vec::with_capacity(GRID_WIDTH);
        let mut curl_row = Vec::with_capacity(GRID_WIDTH);
        let mut solid_row = Vec::with_capacity(GRID_WIDTH);

        for col in 0..GRID_WIDTH {
            let x = col as f64;
            let y = row as f64;
            let dx = x - cx;
            let dy = y - cy;
            let is_solid = (dx * dx + dy * dy).sqrt() <= obstacle_radius;

            let phase = x * 0.25 - t * 2.0;
            let envelope = (-((y - cy) / (GRID_HEIGHT as f64 / 4.0)).powi(2)).exp();
            let wake = if x > cx { 1.0 } else { 0.2 };

            u_row.push(0.1 * wake);
            v_row.push(0.02 * phase.cos() * envelope);
            curl_row.push(0.12 * phase.sin() * envelope * wake);
            solid_row.push(is_solid);
        }

        u.push(u_row);
        v.push(v_row);
        curl.push(curl_row);
        solid.push(solid_row);
    }

    serde_json::json!({ "u": u, "v": v, "curl": curl, "solid": solid }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::FlowFrame;

    #[test]
    fn test_demo_payload_validiert_als_frame() {
        let frame = FlowFrame::from_payload(&build_payload(0.0))
            .expect("Demo-Payload muss gültig sein");
        assert_eq!(frame.height(), GRID_HEIGHT);
        assert_eq!(frame.width(), GRID_WIDTH);
        // Hindernis-Zentrum muss solid sein
        assert!(frame.solid_at(GRID_HEIGHT / 2, GRID_WIDTH / 4));
        // Ecke liegt außerhalb des Hindernisses
        assert!(!frame.solid_at(0, 0));
    }

    #[test]
    fn test_stop_beendet_quelle() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut handle = FlowSourceHandle::spawn(tx);
        // Quelle kurz laufen lassen, dann stoppen — stop() joint den Thread
        std::thread::sleep(Duration::from_millis(80));
        handle.stop();

        // Nach dem Stop endet der Strom mit Disconnected
        let mut last_status = None;
        while let Ok(event) = rx.try_recv() {
            if let FlowEvent::Status(status) = event {
                last_status = Some(status);
            }
        }
        assert_eq!(last_status, Some(ConnectionStatus::Disconnected));
    }
}
