#![cfg_attr(not(test), no_std)]

pub mod managers;
pub mod services;

pub use managers::config_manager::ConfigManager;
pub use managers::display_manager::{DisplayManager, RenderReport};
pub use services::clock_service::WordClockEngine;
pub use services::refresh_policy::RefreshPolicy;
