//! Hit-Test für Kontrollpunkte (Hover- und Drag-Start-Erkennung).
//!
//! Scan-Reihenfolge ist deterministisch: Oberseite in Index-Reihenfolge,
//! dann Unterseite. Bei Distanz-Gleichstand gewinnt der zuerst gescannte
//! Punkt — bei 12 px Pick-Radius überlappen reale Punkte praktisch nie.

use glam::DVec2;

use super::airfoil::{AirfoilDesign, PointRef, Surface, SurfaceSide};
use super::plot::PlotViewport;

/// Pixelposition des Kontrollpunkts `index` einer Oberfläche mit `count` Punkten.
///
/// Normiertes x = index / (count − 1), bzw. 0 beim degenerierten
/// Ein-Punkt-Fall; normiertes y = Gewichtswert.
pub fn control_point_px(viewport: &PlotViewport, index: usize, count: usize, value: f64) -> DVec2 {
    let x_norm = if count > 1 {
        index as f64 / (count - 1) as f64
    } else {
        0.0
    };
    DVec2::new(viewport.to_px_x(x_norm), viewport.to_px_y(value))
}

/// Sucht den ersten Kontrollpunkt innerhalb von `radius_px` um die Pointer-Position.
///
/// `pointer_px` muss bereits in der Backing-Auflösung des Render-Ziels
/// vorliegen (der Input-Layer rechnet Anzeige- in Plot-Koordinaten um).
/// Ein Miss ist kein Fehler, sondern `None`.
pub fn pick_control_point(
    pointer_px: DVec2,
    design: &AirfoilDesign,
    viewport: &PlotViewport,
    radius_px: f64,
) -> Option<PointRef> {
    for side in [SurfaceSide::Upper, SurfaceSide::Lower] {
        if let Some(id) = pick_on_surface(pointer_px, design.surface(side), viewport, radius_px) {
            return Some(PointRef { side, id });
        }
    }
    None
}

fn pick_on_surface(
    pointer_px: DVec2,
    surface: &Surface,
    viewport: &PlotViewport,
    radius_px: f64,
) -> Option<u64> {
    let count = surface.len();
    for (index, point) in surface.points().iter().enumerate() {
        let pos = control_point_px(viewport, index, count, point.value);
        if pos.distance(pointer_px) <= radius_px {
            return Some(point.id);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::PICK_RADIUS_PX;
    use approx::assert_relative_eq;

    fn test_design() -> AirfoilDesign {
        AirfoilDesign::from_weights(&[0.2, 0.25, 0.2, 0.15], &[-0.1, -0.12, -0.08, -0.05])
    }

    #[test]
    fn test_pick_trifft_exakte_punktposition() {
        let design = test_design();
        let vp = PlotViewport::new(800.0, 600.0);

        for (index, point) in design.upper.points().iter().enumerate() {
            let pos = control_point_px(&vp, index, design.upper.len(), point.value);
            let hit = pick_control_point(pos, &design, &vp, PICK_RADIUS_PX);
            assert_eq!(
                hit,
                Some(PointRef {
                    side: SurfaceSide::Upper,
                    id: point.id
                })
            );
        }
    }

    #[test]
    fn test_pick_miss_ausserhalb_des_radius() {
        let design = test_design();
        let vp = PlotViewport::new(800.0, 600.0);
        // Ecke des Plots liegt weit weg von allen Punkten
        assert_eq!(
            pick_control_point(DVec2::new(1.0, 1.0), &design, &vp, PICK_RADIUS_PX),
            None
        );
    }

    #[test]
    fn test_pick_knapp_innerhalb_und_ausserhalb() {
        let design = test_design();
        let vp = PlotViewport::new(800.0, 600.0);
        let pos = control_point_px(&vp, 0, design.upper.len(), design.upper.points()[0].value);

        let inside = pos + DVec2::new(PICK_RADIUS_PX - 0.5, 0.0);
        let outside = pos + DVec2::new(PICK_RADIUS_PX + 0.5, 0.0);
        assert!(pick_control_point(inside, &design, &vp, PICK_RADIUS_PX).is_some());
        assert!(pick_control_point(outside, &design, &vp, PICK_RADIUS_PX).is_none());
    }

    #[test]
    fn test_gleichstand_gewinnt_oberseite() {
        // Ober- und Unterseiten-Punkt auf identischer Position: Scan-Reihenfolge
        // (Oberseite zuerst) entscheidet.
        let design = AirfoilDesign::from_weights(&[0.0, 0.2], &[0.0, -0.2]);
        let vp = PlotViewport::new(800.0, 600.0);
        let pos = control_point_px(&vp, 0, 2, 0.0);

        let hit = pick_control_point(pos, &design, &vp, PICK_RADIUS_PX).unwrap();
        assert_eq!(hit.side, SurfaceSide::Upper);
        assert_eq!(hit.id, 0);
    }

    #[test]
    fn test_punktpositionen_spannen_die_sehne_auf() {
        let vp = PlotViewport::new(800.0, 600.0);
        let first = control_point_px(&vp, 0, 4, 0.0);
        let last = control_point_px(&vp, 3, 4, 0.0);
        assert_relative_eq!(first.x, vp.to_px_x(0.0));
        assert_relative_eq!(last.x, vp.to_px_x(1.0));

        // Ein-Punkt-Fall: normiertes x = 0
        let single = control_point_px(&vp, 0, 1, 0.0);
        assert_relative_eq!(single.x, vp.to_px_x(0.0));
    }
}
