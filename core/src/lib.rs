// terrain holds the fractal elevation generator, the color ramp, and the
// parameter derivation at the service boundary
pub mod diamond_square;
pub mod error;
pub mod grid;
pub mod params;
pub mod ramp;

pub use diamond_square::DiamondSquare;
pub use error::TerrainError;
pub use grid::ElevationGrid;
pub use params::{GenerationParameters, MAX_SIZE_EXPONENT, size_exponent_for};
pub use ramp::{ColorRamp, random_base_color};

#[cfg(test)]
pub(crate) mod test_rng;
