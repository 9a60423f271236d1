use rand::Rng;

use crate::TerrainError;
use crate::grid::ElevationGrid;

// Fractal heightfield generator using the Diamond–Square algorithm.
// The random source is injected so generation stays reproducible under a
// seeded rng and free of global state.
pub struct DiamondSquare {
    size_exponent: u32,
    roughness: f64,
}

impl DiamondSquare {
    // size_exponent must be at least 1 (side = 2^n + 1, so anything below
    // leaves nothing to subdivide). roughness scales the perturbation
    // amplitude and must be positive.
    pub fn new(size_exponent: u32, roughness: f64) -> Result<Self, TerrainError> {
        if size_exponent < 1 {
            return Err(TerrainError::DegenerateSize(format!(
                "size exponent {size_exponent} leaves nothing to subdivide"
            )));
        }
        assert!(roughness > 0.0, "roughness must be positive");
        Ok(Self {
            size_exponent,
            roughness,
        })
    }

    pub fn side(&self) -> usize {
        (1usize << self.size_exponent) + 1
    }

    // Generate a fully populated side×side grid, consuming O(side²) draws
    // from `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> ElevationGrid {
        let side = self.side();
        let mut grid = ElevationGrid::zeroed(side);

        // Corner seeds; no later pass rewrites a corner.
        grid.set(0, 0, rng.gen_range(0.0..1.0));
        grid.set(0, side - 1, rng.gen_range(0.0..1.0));
        grid.set(side - 1, 0, rng.gen_range(0.0..1.0));
        grid.set(side - 1, side - 1, rng.gen_range(0.0..1.0));

        let mut step = side - 1;
        let mut roughness = self.roughness;

        while step > 1 {
            let half = step / 2;

            // Diamond pass: centre of every step-sized cell gets the corner
            // average plus a perturbation scaled by roughness and step.
            for row in (0..side - 1).step_by(step) {
                for col in (0..side - 1).step_by(step) {
                    let avg = (grid.get(row, col)
                        + grid.get(row + step, col)
                        + grid.get(row, col + step)
                        + grid.get(row + step, col + step))
                        / 4.0;
                    let offset = (rng.gen_range(0.0..1.0) - 0.5) * roughness * step as f64;
                    grid.set(row + half, col + half, avg + offset);
                }
            }

            // Square pass: the remaining half-lattice points. Neighbours at
            // distance `half` are always corner or centre points assigned at
            // this or a coarser step, never other square points of this
            // pass, so reading the grid in place is well ordered. Edge
            // points average only their 2 or 3 in-bounds neighbours.
            for row in (0..side).step_by(half) {
                let first = (row + half) % step;
                for col in (first..side).step_by(step) {
                    let mut sum = 0.0;
                    let mut count = 0;
                    if row >= half {
                        sum += grid.get(row - half, col);
                        count += 1;
                    }
                    if row + half < side {
                        sum += grid.get(row + half, col);
                        count += 1;
                    }
                    if col >= half {
                        sum += grid.get(row, col - half);
                        count += 1;
                    }
                    if col + half < side {
                        sum += grid.get(row, col + half);
                        count += 1;
                    }
                    let offset = (rng.gen_range(0.0..1.0) - 0.5) * roughness * step as f64;
                    grid.set(row, col, sum / count as f64 + offset);
                }
            }

            step = half;
            roughness /= 2.0;
        }

        grid
    }
}
