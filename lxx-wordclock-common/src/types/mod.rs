pub mod config;
pub mod display;
pub mod error;
pub mod grid;
pub mod highlight;
pub mod time;

pub use config::*;
pub use display::*;
pub use error::*;
pub use grid::*;
pub use highlight::*;
pub use time::*;
