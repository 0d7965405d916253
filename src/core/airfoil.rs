//! Datenmodell des Profils: Kontrollpunkte, Oberflächen, Gesamtdesign.
//!
//! Oberflächen folgen einer Immutable-Value-Disziplin: jede Änderung erzeugt
//! eine neue geordnete Punktfolge statt in-place zu mutieren. Die Reihenfolge
//! ist maßgeblich — sie bestimmt den Bernstein-Grad `n = Anzahl − 1` und den
//! Index jedes Punkts in der Blending-Basis. Ids dienen nur der
//! Identifikation über Edits hinweg, nie der Umsortierung.

/// Ein CST-Gewicht, dem Nutzer als ziehbarer Griff präsentiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Stabil über Edits hinweg, eindeutig pro Oberfläche
    pub id: u64,
    /// CST-Gewicht (von der Editier-Logik auf den Klemmbereich begrenzt)
    pub value: f64,
}

/// Ober- oder Unterseite des Profils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceSide {
    Upper,
    Lower,
}

impl SurfaceSide {
    /// Anzeigename für UI und Statuszeile.
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceSide::Upper => "Oberseite",
            SurfaceSide::Lower => "Unterseite",
        }
    }
}

/// Verweis auf einen Kontrollpunkt (Drag- und Hover-Ziel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRef {
    pub side: SurfaceSide,
    pub id: u64,
}

/// Geordnete Kontrollpunktfolge einer Oberfläche.
///
/// Invarianten: mindestens [`Surface::MIN_POINTS`] Punkte, Ids eindeutig.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    points: Vec<ControlPoint>,
    /// Nächste zu vergebende Id (monoton, Ids werden nie wiederverwendet)
    next_id: u64,
}

impl Surface {
    /// Minimale Punktanzahl: Bernstein-Grad n = Anzahl − 1 ≥ 1.
    pub const MIN_POINTS: usize = 2;

    /// Erstellt eine Oberfläche aus rohen Gewichten (Ids fortlaufend ab 0).
    pub fn from_weights(weights: &[f64]) -> Self {
        debug_assert!(
            weights.len() >= Self::MIN_POINTS,
            "Oberfläche benötigt mindestens {} Kontrollpunkte",
            Self::MIN_POINTS
        );
        let points = weights
            .iter()
            .enumerate()
            .map(|(i, &value)| ControlPoint { id: i as u64, value })
            .collect::<Vec<_>>();
        Self {
            next_id: points.len() as u64,
            points,
        }
    }

    /// Geordnete Punktfolge (Reihenfolge = Basis-Index).
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Leer ist per Invariante unmöglich, der Vollständigkeit halber vorhanden.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gewichtsvektor in Basis-Reihenfolge.
    pub fn weights(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Basis-Index eines Punkts anhand seiner Id.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    /// Gewichtswert eines Punkts anhand seiner Id.
    pub fn value_of(&self, id: u64) -> Option<f64> {
        self.points.iter().find(|p| p.id == id).map(|p| p.value)
    }

    /// Neue Oberfläche mit geändertem Wert für `id`.
    ///
    /// Unbekannte Ids lassen die Folge unverändert (Pick-Miss ist kein Fehler).
    pub fn with_value(&self, id: u64, value: f64) -> Self {
        let points = self
            .points
            .iter()
            .map(|p| {
                if p.id == id {
                    ControlPoint { id: p.id, value }
                } else {
                    *p
                }
            })
            .collect();
        Self {
            points,
            next_id: self.next_id,
        }
    }

    /// Neue Oberfläche mit angefügtem Endpunkt.
    pub fn with_appended(&self, value: f64) -> Self {
        let mut points = self.points.clone();
        points.push(ControlPoint {
            id: self.next_id,
            value,
        });
        Self {
            points,
            next_id: self.next_id + 1,
        }
    }

    /// Neue Oberfläche ohne den letzten Punkt.
    ///
    /// Unterschreitet die Entfernung [`Surface::MIN_POINTS`], bleibt die
    /// Folge unverändert.
    pub fn with_removed_last(&self) -> Self {
        if self.points.len() <= Self::MIN_POINTS {
            return self.clone();
        }
        let mut points = self.points.clone();
        points.pop();
        Self {
            points,
            next_id: self.next_id,
        }
    }
}

/// Gesamtdesign: Ober- und Unterseite.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilDesign {
    pub upper: Surface,
    pub lower: Surface,
}

impl AirfoilDesign {
    /// Standard-Design: leicht gewölbtes Profil mit 4 Gewichten pro Seite.
    pub fn default_design() -> Self {
        Self {
            upper: Surface::from_weights(&[0.20, 0.28, 0.24, 0.18]),
            lower: Surface::from_weights(&[-0.10, -0.12, -0.08, -0.04]),
        }
    }

    /// Erstellt ein Design aus kompletten Gewichtsvektoren
    /// (Konsumform externer Werkzeuge: `upperCoefficients`/`lowerCoefficients`).
    pub fn from_weights(upper: &[f64], lower: &[f64]) -> Self {
        Self {
            upper: Surface::from_weights(upper),
            lower: Surface::from_weights(lower),
        }
    }

    /// Oberfläche einer Seite.
    pub fn surface(&self, side: SurfaceSide) -> &Surface {
        match side {
            SurfaceSide::Upper => &self.upper,
            SurfaceSide::Lower => &self.lower,
        }
    }

    /// Ersetzt die Oberfläche einer Seite durch eine funktional erzeugte neue.
    pub fn set_surface(&mut self, side: SurfaceSide, surface: Surface) {
        match side {
            SurfaceSide::Upper => self.upper = surface,
            SurfaceSide::Lower => self.lower = surface,
        }
    }

    /// Prüft, ob ein Punktverweis auf einen existierenden Punkt zeigt.
    pub fn contains(&self, point: PointRef) -> bool {
        self.surface(point.side).index_of(point.id).is_some()
    }
}

impl Default for AirfoilDesign {
    fn default() -> Self {
        Self::default_design()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_with_value_erzeugt_neue_folge() {
        let a = Surface::from_weights(&[0.1, 0.2, 0.3]);
        let b = a.with_value(1, 0.5);
        // Original unverändert, Kopie geändert, Ids und Reihenfolge stabil
        assert_relative_eq!(a.value_of(1).unwrap(), 0.2);
        assert_relative_eq!(b.value_of(1).unwrap(), 0.5);
        assert_eq!(a.len(), b.len());
        assert_eq!(
            a.points().iter().map(|p| p.id).collect::<Vec<_>>(),
            b.points().iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_with_value_unbekannte_id_ist_noop() {
        let a = Surface::from_weights(&[0.1, 0.2]);
        let b = a.with_value(99, 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_appended_vergibt_frische_id() {
        let a = Surface::from_weights(&[0.1, 0.2]);
        let b = a.with_appended(0.0);
        assert_eq!(b.len(), 3);
        assert_eq!(b.points()[2].id, 2);

        // Nach Entfernen und erneutem Anfügen darf die Id nicht wiederkehren
        let c = b.with_removed_last().with_appended(0.3);
        assert_eq!(c.points()[2].id, 3);
    }

    #[test]
    fn test_removed_last_respektiert_minimum() {
        let a = Surface::from_weights(&[0.1, 0.2]);
        let b = a.with_removed_last();
        assert_eq!(b.len(), Surface::MIN_POINTS);
    }

    #[test]
    fn test_ids_pro_oberflaeche_eindeutig() {
        let mut surface = Surface::from_weights(&[0.1, 0.2, 0.3]);
        for _ in 0..5 {
            surface = surface.with_appended(0.0);
        }
        let mut ids: Vec<u64> = surface.points().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), surface.len());
    }

    #[test]
    fn test_design_contains() {
        let design = AirfoilDesign::default_design();
        assert!(design.contains(PointRef {
            side: SurfaceSide::Upper,
            id: 0
        }));
        assert!(!design.contains(PointRef {
            side: SurfaceSide::Lower,
            id: 99
        }));
    }
}
