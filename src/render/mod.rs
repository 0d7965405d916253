//! Render-Schicht: Profil-Plot und Strömungs-Rasterisierung.

pub mod curve;
pub mod flow;

pub use curve::paint_airfoil_plot;
pub use flow::rasterize_frame;
