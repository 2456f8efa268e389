mod aspect_range;
mod aspect_ratio;
mod bars;
mod camera;
mod config;
mod error;
mod fitter;
mod orientation;
mod screen_size;
mod surface;
mod uniform;
mod viewport;
mod viewport_rect;

pub use aspect_range::*;
pub use aspect_ratio::*;
pub use bars::*;
pub use camera::*;
pub use config::*;
pub use error::*;
pub use fitter::*;
pub use orientation::*;
pub use screen_size::*;
pub use surface::*;
pub use uniform::*;
pub use viewport::*;
pub use viewport_rect::*;
