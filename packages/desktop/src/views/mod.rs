mod menu;
pub use menu::Menu;
