pub mod modal;
pub mod navigation;
pub mod project_card;
pub mod theme_toggle;
