pub mod config_manager;
pub mod display_manager;
