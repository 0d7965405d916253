//! Layer-übergreifend genutzte Typen und Konfiguration.

pub mod options;

pub use options::EditorOptions;
