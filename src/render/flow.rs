//! Rasterisierung eines Strömungs-Frames in ein Texturbild.
//!
//! Ein Gitterzelle wird auf genau ein Pixel abgebildet; die Skalierung auf
//! Anzeigegröße übernimmt egui beim Zeichnen der Textur (Nearest-Filter).

use crate::flow::FlowFrame;
use crate::shared::options::{CURL_GAIN, OBSTACLE_COLOR};

/// Rasterisiert einen Frame zeilenweise in ein RGBA-Bild (eine Zelle = ein Pixel).
pub fn rasterize_frame(frame: &FlowFrame) -> egui::ColorImage {
    let (width, height) = (frame.width(), frame.height());
    let mut rgba = Vec::with_capacity(width * height * 4);

    for row in 0..height {
        for col in 0..width {
            let [r, g, b] = cell_color(frame, row, col);
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
    }

    egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba)
}

/// Farbe einer Gitterzelle: Hindernis grau, sonst Wirbelstärke rot/blau.
pub fn cell_color(frame: &FlowFrame, row: usize, col: usize) -> [u8; 3] {
    if frame.solid_at(row, col) {
        OBSTACLE_COLOR
    } else {
        curl_color(frame.curl_at(row, col))
    }
}

/// Divergierende Farbskala für die Wirbelstärke.
///
/// Positive Werte färben den Rotkanal, negative den Blaukanal; der Betrag
/// wird mit [`CURL_GAIN`] verstärkt und auf [0, 255] gesättigt.
pub fn curl_color(curl: f64) -> [u8; 3] {
    let s = (curl * CURL_GAIN * 255.0).clamp(-255.0, 255.0);
    if s >= 0.0 {
        [s as u8, 0, 0]
    } else {
        [0, 0, (-s) as u8]
    }
}
