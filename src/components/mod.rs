pub mod feedback;
pub mod inbox;
pub mod language_switch;
pub mod plot;
pub mod settings_panel;
pub mod sidebar;
pub mod template;
pub mod widgets;
