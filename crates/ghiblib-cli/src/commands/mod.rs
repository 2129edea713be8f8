pub mod config;
pub mod menu;

pub use menu::run_menu;
