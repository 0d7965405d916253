//! UI-Schicht: Panels, Menü, Toolbar und Plot-Input.

pub mod edit_panel;
pub mod flow_panel;
pub mod input;
pub mod menu;
pub mod status;
pub mod toolbar;

pub use edit_panel::render_edit_panel;
pub use flow_panel::FlowPanel;
pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
