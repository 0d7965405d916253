//! CST Airfoil Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod flow;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditState};
pub use core::{AirfoilDesign, ControlPoint, PlotViewport, PointRef, Surface, SurfaceSide};
pub use flow::{ConnectionStatus, FlowConsumer, FlowEvent, FlowFrame, FlowSourceHandle};
pub use shared::EditorOptions;
