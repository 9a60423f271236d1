use thiserror::Error;

// Failures surfaced before or at the start of generation; a grid is never
// returned partially populated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TerrainError {
    // Zero-sized request, or one large enough to blow the memory budget.
    #[error("invalid dimensions: {0}")]
    InvalidDimension(String),

    // Derived size exponent below 1: the grid would have nothing to subdivide.
    #[error("degenerate size: {0}")]
    DegenerateSize(String),

    #[error("operating system random source exhausted")]
    RandomSourceExhaustion,
}
