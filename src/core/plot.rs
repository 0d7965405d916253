//! Abbildung zwischen normiertem Kurvenraum und Pixel-Viewport.
//!
//! Normierter Raum: Sehnenanteil x ∈ [0, 1], Höhe y um 0 mit sichtbarer
//! Spanne [`PlotViewport::Y_RANGE`] (±0.3). Die Ränder sind pro Render-Ziel
//! fest; Vorwärts- und Rückwärtsabbildung müssen innerhalb einer Interaktion
//! denselben Viewport verwenden, sonst brechen Hit-Test und Drag auseinander.

use glam::DVec2;

/// Zustandslose Abbildung für einen Plot mit festen Rändern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotViewport {
    /// Breite des Render-Ziels in Pixeln
    pub width: f64,
    /// Höhe des Render-Ziels in Pixeln
    pub height: f64,
}

impl PlotViewport {
    /// Horizontaler Rand in Pixeln.
    pub const MARGIN_X: f64 = 40.0;
    /// Vertikaler Rand in Pixeln.
    pub const MARGIN_Y: f64 = 20.0;
    /// Sichtbare y-Spanne des Plots (±0.3).
    pub const Y_RANGE: f64 = 0.6;

    /// Erstellt einen Viewport für die gegebene Zielgröße.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Sehnenanteil → Pixel-x.
    pub fn to_px_x(&self, x_norm: f64) -> f64 {
        Self::MARGIN_X + x_norm * (self.width - 2.0 * Self::MARGIN_X)
    }

    /// Höhe → Pixel-y (Pixel-y wächst nach unten).
    pub fn to_px_y(&self, y_norm: f64) -> f64 {
        self.height / 2.0 - (y_norm / Self::Y_RANGE) * (self.height - 2.0 * Self::MARGIN_Y)
    }

    /// Pixel-x → Sehnenanteil (exakte Umkehrung von [`Self::to_px_x`]).
    pub fn from_px_x(&self, px: f64) -> f64 {
        (px - Self::MARGIN_X) / (self.width - 2.0 * Self::MARGIN_X)
    }

    /// Pixel-y → Höhe (exakte Umkehrung von [`Self::to_px_y`]).
    pub fn from_px_y(&self, px: f64) -> f64 {
        (self.height / 2.0 - px) * Self::Y_RANGE / (self.height - 2.0 * Self::MARGIN_Y)
    }

    /// Normierter Kurvenpunkt → Pixelposition.
    pub fn to_px(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.to_px_x(p.x), self.to_px_y(p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_raender_der_x_abbildung() {
        let vp = PlotViewport::new(800.0, 600.0);
        assert_relative_eq!(vp.to_px_x(0.0), PlotViewport::MARGIN_X);
        assert_relative_eq!(vp.to_px_x(1.0), 800.0 - PlotViewport::MARGIN_X);
        assert_relative_eq!(vp.to_px_x(0.5), 400.0);
    }

    #[test]
    fn test_nulllinie_liegt_in_der_mitte() {
        let vp = PlotViewport::new(800.0, 600.0);
        assert_relative_eq!(vp.to_px_y(0.0), 300.0);
        // Positive Höhe liegt oberhalb der Mitte (kleinere Pixel-y)
        assert!(vp.to_px_y(0.1) < 300.0);
        assert!(vp.to_px_y(-0.1) > 300.0);
    }

    #[test]
    fn test_roundtrip_pixel_y() {
        // to_px_y(from_px_y(p)) == p für beliebige Pixel im Plotbereich
        for &height in &[600.0, 721.0, 333.5] {
            let vp = PlotViewport::new(800.0, height);
            let mut px = PlotViewport::MARGIN_Y;
            while px < height - PlotViewport::MARGIN_Y {
                assert_relative_eq!(vp.to_px_y(vp.from_px_y(px)), px, epsilon = 1e-9);
                px += 13.7;
            }
        }
    }

    #[test]
    fn test_roundtrip_norm_y() {
        let vp = PlotViewport::new(1024.0, 768.0);
        for &y in &[-0.3, -0.12, 0.0, 0.07, 0.3] {
            assert_relative_eq!(vp.from_px_y(vp.to_px_y(y)), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_roundtrip_x() {
        let vp = PlotViewport::new(1024.0, 768.0);
        for &x in &[0.0, 0.25, 0.5, 0.99, 1.0] {
            assert_relative_eq!(vp.from_px_x(vp.to_px_x(x)), x, epsilon = 1e-12);
        }
    }
}
