//! Validierter Strömungs-Frame.
//!
//! Eingehende Payloads haben dynamische Form; ein [`FlowFrame`] entsteht erst,
//! wenn alle vier Gitter vorhanden, rechteckig und formgleich sind. Ungültige
//! Payloads werden nie zu einem Frame-Wert — tief im Render-Pfad sind damit
//! keine Feld-Prüfungen mehr nötig.

use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;

/// Roh-Payload, wie von der Streaming-Quelle geliefert (alle Felder optional).
#[derive(Debug, Deserialize)]
pub struct RawFrame {
    #[serde(default)]
    pub u: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    pub v: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    pub curl: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    pub solid: Option<Vec<Vec<bool>>>,
}

/// Ein unveränderlicher Schnappschuss des Strömungsfelds (Zeilen-major).
#[derive(Debug, Clone, PartialEq)]
pub struct FlowFrame {
    width: usize,
    height: usize,
    u: Vec<f64>,
    v: Vec<f64>,
    curl: Vec<f64>,
    solid: Vec<bool>,
}

impl FlowFrame {
    /// Parst und validiert eine JSON-Payload zu einem Frame.
    pub fn from_payload(json: &str) -> Result<Self> {
        let raw: RawFrame =
            serde_json::from_str(json).context("Frame-Payload ist kein gültiges JSON")?;
        Self::try_from(raw)
    }

    /// Gitterbreite W.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gitterhöhe H.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Wirbelstärke der Zelle (row, col).
    pub fn curl_at(&self, row: usize, col: usize) -> f64 {
        self.curl[row * self.width + col]
    }

    /// Horizontale Geschwindigkeitskomponente der Zelle (row, col).
    pub fn u_at(&self, row: usize, col: usize) -> f64 {
        self.u[row * self.width + col]
    }

    /// Vertikale Geschwindigkeitskomponente der Zelle (row, col).
    pub fn v_at(&self, row: usize, col: usize) -> f64 {
        self.v[row * self.width + col]
    }

    /// Hindernis-Maske der Zelle (row, col).
    pub fn solid_at(&self, row: usize, col: usize) -> bool {
        self.solid[row * self.width + col]
    }
}

impl TryFrom<RawFrame> for FlowFrame {
    type Error = anyhow::Error;

    fn try_from(raw: RawFrame) -> Result<Self> {
        let Some(u) = raw.u else {
            bail!("Pflichtfeld 'u' fehlt");
        };
        let Some(v) = raw.v else {
            bail!("Pflichtfeld 'v' fehlt");
        };
        let Some(curl) = raw.curl else {
            bail!("Pflichtfeld 'curl' fehlt");
        };
        let Some(solid) = raw.solid else {
            bail!("Pflichtfeld 'solid' fehlt");
        };

        let (height, width, u) = flatten_grid("u", u, None)?;
        let shape = Some((height, width));
        let (_, _, v) = flatten_grid("v", v, shape)?;
        let (_, _, curl) = flatten_grid("curl", curl, shape)?;
        let (_, _, solid) = flatten_grid("solid", solid, shape)?;

        for (name, grid) in [("u", &u), ("v", &v), ("curl", &curl)] {
            ensure!(
                grid.iter().all(|x| x.is_finite()),
                "Gitter '{}' enthält nicht-endliche Werte",
                name
            );
        }

        Ok(Self {
            width,
            height,
            u,
            v,
            curl,
            solid,
        })
    }
}

/// Flacht ein 2D-Gitter zeilen-major ab und prüft Rechteckigkeit sowie
/// optional die erwartete Form.
fn flatten_grid<T: Copy>(
    name: &str,
    grid: Vec<Vec<T>>,
    expected: Option<(usize, usize)>,
) -> Result<(usize, usize, Vec<T>)> {
    let height = grid.len();
    ensure!(height > 0, "Gitter '{}' ist leer", name);
    let width = grid[0].len();
    ensure!(width > 0, "Gitter '{}' hat leere Zeilen", name);

    let mut flat = Vec::with_capacity(height * width);
    for (row_index, row) in grid.into_iter().enumerate() {
        ensure!(
            row.len() == width,
            "Gitter '{}' ist nicht rechteckig (Zeile {}: {} statt {})",
            name,
            row_index,
            row.len(),
            width
        );
        flat.extend(row);
    }

    if let Some((expected_h, expected_w)) = expected {
        ensure!(
            (height, width) == (expected_h, expected_w),
            "Gitter '{}' hat Form {}×{}, erwartet {}×{}",
            name,
            height,
            width,
            expected_h,
            expected_w
        );
    }

    Ok((height, width, flat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn valid_payload() -> String {
        serde_json::json!({
            "u": [[0.1, 0.2], [0.3, 0.4]],
            "v": [[0.0, 0.0], [0.0, 0.1]],
            "curl": [[0.5, -0.5], [0.0, 0.02]],
            "solid": [[false, true], [false, false]],
        })
        .to_string()
    }

    #[test]
    fn test_gueltige_payload_wird_frame() {
        let frame = FlowFrame::from_payload(&valid_payload()).expect("Payload ist gültig");
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_relative_eq!(frame.curl_at(0, 1), -0.5);
        assert_relative_eq!(frame.u_at(1, 0), 0.3);
        assert!(frame.solid_at(0, 1));
        assert!(!frame.solid_at(1, 1));
    }

    #[test]
    fn test_fehlendes_feld_wird_abgelehnt() {
        for field in ["u", "v", "curl", "solid"] {
            let mut value: serde_json::Value =
                serde_json::from_str(&valid_payload()).expect("Fixture ist JSON");
            value.as_object_mut().unwrap().remove(field);
            let err = FlowFrame::from_payload(&value.to_string())
                .expect_err("Payload ohne Pflichtfeld darf kein Frame werden");
            assert!(err.to_string().contains(field), "Fehler nennt das Feld");
        }
    }

    #[test]
    fn test_formabweichung_wird_abgelehnt() {
        let payload = serde_json::json!({
            "u": [[0.1, 0.2], [0.3, 0.4]],
            "v": [[0.0, 0.0], [0.0, 0.1]],
            "curl": [[0.5, -0.5, 1.0], [0.0, 0.02, 0.0]],
            "solid": [[false, true], [false, false]],
        })
        .to_string();
        assert!(FlowFrame::from_payload(&payload).is_err());
    }

    #[test]
    fn test_nicht_rechteckiges_gitter_wird_abgelehnt() {
        let payload = serde_json::json!({
            "u": [[0.1, 0.2], [0.3]],
            "v": [[0.0, 0.0], [0.0, 0.1]],
            "curl": [[0.5, -0.5], [0.0, 0.02]],
            "solid": [[false, true], [false, false]],
        })
        .to_string();
        assert!(FlowFrame::from_payload(&payload).is_err());
    }

    #[test]
    fn test_kein_json_wird_abgelehnt() {
        assert!(FlowFrame::from_payload("nicht json").is_err());
    }
}
