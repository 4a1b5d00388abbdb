pub mod grid_renderer;
pub mod time_source;

pub use grid_renderer::*;
pub use time_source::*;
