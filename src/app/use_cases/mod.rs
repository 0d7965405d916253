//! Use-Cases: fachliche Operationen auf dem AppState.

pub mod editing;
pub mod view;
