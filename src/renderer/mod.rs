//! CPU rendering module
//!
//! Rasterizes the simulation into a fixed 256x144 RGBA frame; the window
//! layer scales that up to the display.

pub mod raster;
pub mod shapes;
pub mod sprite;
pub mod text;

pub use raster::Renderer;
pub use shapes::Vertex;
pub use sprite::ShipSprite;
