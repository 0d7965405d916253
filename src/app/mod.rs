//! Anwendungsschicht: State, Events, Controller, Use-Cases.

pub mod controller;
pub mod events;
pub mod intent_mapping;
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, EditState};
