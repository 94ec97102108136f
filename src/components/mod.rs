pub mod app;
pub mod consent_overlay;
pub mod controls_panel;
pub mod round_view;
