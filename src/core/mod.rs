//! Reine Domänenlogik: CST-Mathematik, Profilmodell, Plot-Abbildung, Pick.
//!
//! Kein egui, kein I/O — alles hier ist deterministisch und direkt testbar.

pub mod airfoil;
pub mod cst;
pub mod picking;
pub mod plot;

pub use airfoil::{AirfoilDesign, ControlPoint, PointRef, Surface, SurfaceSide};
pub use plot::PlotViewport;
