use crate::TerrainError;

// Largest accepted size exponent: 2^12 + 1 = 4097 per side. Grid memory and
// generation time both grow as 4^exponent, so attacker-controlled
// dimensions must be bounded before allocation.
pub const MAX_SIZE_EXPONENT: u32 = 12;

// Derive the grid size exponent from requested pixel dimensions:
// floor(log2(max(width, height))) - 1. This mapping sits at the boundary
// between the web front end and the generator; the generator itself never
// sees pixel dimensions.
pub fn size_exponent_for(width: u32, height: u32) -> Result<u32, TerrainError> {
    if width == 0 || height == 0 {
        return Err(TerrainError::InvalidDimension(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }

    let largest = width.max(height);
    let floor_log2 = 31 - largest.leading_zeros();
    if floor_log2 < 2 {
        return Err(TerrainError::DegenerateSize(format!(
            "max(width, height) = {largest} leaves no room to subdivide"
        )));
    }

    let exponent = floor_log2 - 1;
    if exponent > MAX_SIZE_EXPONENT {
        return Err(TerrainError::InvalidDimension(format!(
            "dimensions {width}x{height} exceed the supported maximum of {} pixels",
            (1u32 << (MAX_SIZE_EXPONENT + 2)) - 1
        )));
    }

    Ok(exponent)
}

// Everything the generator needs for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub size_exponent: u32,
    pub roughness: f64,
}

impl GenerationParameters {
    pub fn from_dimensions(width: u32, height: u32, roughness: f64) -> Result<Self, TerrainError> {
        Ok(Self {
            size_exponent: size_exponent_for(width, height)?,
            roughness,
        })
    }
}
