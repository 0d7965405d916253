//! CST-Parameterisierung (Class-Shape-Transformation) für 2D-Profilschnitte.
//!
//! Die Oberflächenhöhe ist das Produkt aus Klassenfunktion `C(x) = √x·(1−x)`
//! (runde Nase, spitze Hinterkante) und der Bernstein-gewichteten
//! Formfunktion `S(x)`. An x = 0 und x = 1 verschwindet die Klassenfunktion,
//! die Kurve schließt damit unabhängig von den Gewichten exakt am
//! Vorder- und Hinterkantenpunkt.

use glam::DVec2;

/// Binomialkoeffizient C(n, k) in doppelter Genauigkeit.
///
/// Iterative Produktformel statt Fakultäten: stabil bis weit über n = 20,
/// ohne Zwischenüberlauf.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    // Symmetrie ausnutzen: C(n, k) = C(n, n−k)
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

/// Bernstein-Basispolynom B_{k,n}(x) = C(n,k) · x^k · (1−x)^(n−k).
pub fn bernstein(k: usize, n: usize, x: f64) -> f64 {
    binomial(n, k) * x.powi(k as i32) * (1.0 - x).powi((n - k) as i32)
}

/// CST-Klassenfunktion C(x) = √x · (1 − x).
///
/// Der Exponent der Hinterkante ist hier fest 1 (nicht parametrisiert).
pub fn class_function(x: f64) -> f64 {
    x.sqrt() * (1.0 - x)
}

/// Formfunktion S(x) = Σ_k w[k] · B_{k,n}(x) mit n = Anzahl Gewichte − 1.
///
/// Ein einzelnes Gewicht ergibt die degenerierte konstante Formfunktion
/// (Grad 0); leere Gewichtsvektoren sind eine Vertragsverletzung des
/// Aufrufers.
pub fn shape_function(weights: &[f64], x: f64) -> f64 {
    debug_assert!(!weights.is_empty(), "Formfunktion benötigt mindestens ein Gewicht");
    let n = weights.len() - 1;
    weights
        .iter()
        .enumerate()
        .map(|(k, w)| w * bernstein(k, n, x))
        .sum()
}

/// Erzeugt die Profilkurve einer Oberfläche als geordnete Abtastfolge.
///
/// Für i in 0..=`sample_count`: x = i / sample_count, y = S(x) · C(x).
/// Die Folge wird bei jeder Gewichtsänderung neu erzeugt, nie in-place
/// mutiert.
pub fn generate_curve(weights: &[f64], sample_count: usize) -> Vec<DVec2> {
    debug_assert!(sample_count > 0, "sample_count muss positiv sein");
    let mut samples = Vec::with_capacity(sample_count + 1);
    for i in 0..=sample_count {
        let x = i as f64 / sample_count as f64;
        let y = shape_function(weights, x) * class_function(x);
        samples.push(DVec2::new(x, y));
    }
    samples
}
