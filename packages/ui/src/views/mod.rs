mod menu_page;
pub use menu_page::MenuPageView;
