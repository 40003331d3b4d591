mod camera;
mod palette;
mod terrain;

pub use camera::{Camera, CameraError};
pub use palette::{Palette, SKY_RGB};
pub use terrain::{MapGrid, TerrainError, TerrainMaps};
