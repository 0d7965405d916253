//! Konsument der Strömungs-Frames: Ein-Slot-Puffer und Verbindungsstatus.
//!
//! Der Slot hält höchstens den zuletzt empfangenen Frame (last-write-wins,
//! keine Queue, kein Backpressure). Der Render-Tick tastet den Slot ab;
//! ein leerer Slot ist kein Fehler, der Tick wird einfach übersprungen.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::{Arc, Mutex};

use super::frame::FlowFrame;

/// Verbindungsstatus der Streaming-Quelle.
///
/// Übergänge werden ausschließlich von der Quelle getrieben; der Konsument
/// betreibt weder Retry noch Reconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
    Errored,
}

impl ConnectionStatus {
    /// Anzeigename für die Statuszeile.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Verbinde…",
            ConnectionStatus::Connected => "Verbunden",
            ConnectionStatus::Disconnected => "Getrennt",
            ConnectionStatus::Errored => "Fehler",
        }
    }
}

/// Ereignis der Streaming-Quelle: Statuswechsel oder Frame-Payload.
#[derive(Debug)]
pub enum FlowEvent {
    Status(ConnectionStatus),
    Payload(String),
}

/// Ein-Slot-Puffer für den zuletzt empfangenen Frame.
///
/// Mutex statt nacktem Zellenzugriff: der Produzent darf auf einem anderen
/// Thread leben, der Lesepfad sieht den Frame immer als Schnappschuss.
#[derive(Clone, Default)]
pub struct FrameSlot {
    inner: Arc<Mutex<Option<Arc<FlowFrame>>>>,
}

impl FrameSlot {
    /// Erstellt einen leeren Slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Überschreibt den Slot mit dem neuesten Frame.
    pub fn store(&self, frame: Arc<FlowFrame>) {
        let Ok(mut slot) = self.inner.lock() else {
            log::error!("Frame-Slot-Lock fehlgeschlagen (Mutex vergiftet)");
            return;
        };
        *slot = Some(frame);
    }

    /// Liest den aktuellen Frame, ohne ihn zu entfernen.
    pub fn sample(&self) -> Option<Arc<FlowFrame>> {
        let Ok(slot) = self.inner.lock() else {
            log::error!("Frame-Slot-Lock fehlgeschlagen (Mutex vergiftet)");
            return None;
        };
        slot.clone()
    }

    /// Leert den Slot.
    pub fn clear(&self) {
        let Ok(mut slot) = self.inner.lock() else {
            return;
        };
        *slot = None;
    }
}

/// Verarbeitet eingehende Quell-Ereignisse und pflegt Slot + Status.
pub struct FlowConsumer {
    rx: Receiver<FlowEvent>,
    slot: FrameSlot,
    status: ConnectionStatus,
}

impl FlowConsumer {
    /// Erstellt einen Konsumenten für den gegebenen Ereigniskanal.
    pub fn new(rx: Receiver<FlowEvent>) -> Self {
        Self {
            rx,
            slot: FrameSlot::new(),
            status: ConnectionStatus::Connecting,
        }
    }

    /// Aktueller Verbindungsstatus.
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Zugriff auf den Frame-Slot (z.B. für Tests).
    pub fn slot(&self) -> &FrameSlot {
        &self.slot
    }

    /// Leert den Kanal ohne zu blockieren.
    ///
    /// Jede Payload überschreibt den Slot; kommen mehrere Frames zwischen
    /// zwei Render-Ticks an, wird nur der letzte je gerastert. Ungültige
    /// Payloads werden mit Diagnose verworfen, der Status bleibt unberührt.
    pub fn pump(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(FlowEvent::Status(status)) => {
                    if status != self.status {
                        log::info!("Strömungsquelle: {} → {}", self.status.label(), status.label());
                    }
                    self.status = status;
                }
                Ok(FlowEvent::Payload(json)) => match FlowFrame::from_payload(&json) {
                    Ok(frame) => self.slot.store(Arc::new(frame)),
                    Err(e) => log::warn!("Ungültiger Frame verworfen: {:#}", e),
                },
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.status == ConnectionStatus::Connected
                        || self.status == ConnectionStatus::Connecting
                    {
                        self.status = ConnectionStatus::Disconnected;
                    }
                    break;
                }
            }
        }
    }

    /// Tastet den Slot ab (Render-Tick). Leerer Slot → `None`, kein Fehler.
    pub fn sample(&self) -> Option<Arc<FlowFrame>> {
        self.slot.sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn payload(curl_value: f64) -> String {
        serde_json::json!({
            "u": [[0.0, 0.0], [0.0, 0.0]],
            "v": [[0.0, 0.0], [0.0, 0.0]],
            "curl": [[curl_value, 0.0], [0.0, 0.0]],
            "solid": [[false, false], [false, false]],
        })
        .to_string()
    }

    #[test]
    fn test_letzter_frame_gewinnt() {
        let (tx, rx) = mpsc::channel();
        let mut consumer = FlowConsumer::new(rx);

        // Zwei Frames vor dem ersten Abtasten: nur der zweite darf sichtbar sein
        tx.send(FlowEvent::Payload(payload(1.0))).unwrap();
        tx.send(FlowEvent::Payload(payload(2.0))).unwrap();
        consumer.pump();

        let frame = consumer.sample().expect("Slot muss belegt sein");
        assert_eq!(frame.curl_at(0, 0), 2.0);
    }

    #[test]
    fn test_abtasten_entfernt_frame_nicht() {
        let (tx, rx) = mpsc::channel();
        let mut consumer = FlowConsumer::new(rx);
        tx.send(FlowEvent::Payload(payload(1.0))).unwrap();
        consumer.pump();

        assert!(consumer.sample().is_some());
        assert!(consumer.sample().is_some());
    }

    #[test]
    fn test_ungueltige_payload_wird_verworfen_status_bleibt() {
        let (tx, rx) = mpsc::channel();
        let mut consumer = FlowConsumer::new(rx);
        tx.send(FlowEvent::Status(ConnectionStatus::Connected)).unwrap();
        tx.send(FlowEvent::Payload("{\"u\": [[0.0]]}".to_string())).unwrap();
        consumer.pump();

        // Nicht-fatal: kein Frame im Slot, Verbindung bleibt bestehen
        assert!(consumer.sample().is_none());
        assert_eq!(consumer.status(), ConnectionStatus::Connected);
    }

    #[test]
    fn test_ungueltige_payload_ueberschreibt_letzten_frame_nicht() {
        let (tx, rx) = mpsc::channel();
        let mut consumer = FlowConsumer::new(rx);
        tx.send(FlowEvent::Payload(payload(3.0))).unwrap();
        tx.send(FlowEvent::Payload("kaputt".to_string())).unwrap();
        consumer.pump();

        let frame = consumer.sample().expect("gültiger Frame bleibt erhalten");
        assert_eq!(frame.curl_at(0, 0), 3.0);
    }

    #[test]
    fn test_statuswechsel_wird_uebernommen() {
        let (tx, rx) = mpsc::channel();
        let mut consumer = FlowConsumer::new(rx);
        assert_eq!(consumer.status(), ConnectionStatus::Connecting);

        tx.send(FlowEvent::Status(ConnectionStatus::Connected)).unwrap();
        consumer.pump();
        assert_eq!(consumer.status(), ConnectionStatus::Connected);

        tx.send(FlowEvent::Status(ConnectionStatus::Errored)).unwrap();
        consumer.pump();
        assert_eq!(consumer.status(), ConnectionStatus::Errored);
    }

    #[test]
    fn test_kanalabbruch_meldet_getrennt() {
        let (tx, rx) = mpsc::channel();
        let mut consumer = FlowConsumer::new(rx);
        tx.send(FlowEvent::Status(ConnectionStatus::Connected)).unwrap();
        drop(tx);
        consumer.pump();
        assert_eq!(consumer.status(), ConnectionStatus::Disconnected);
    }
}
