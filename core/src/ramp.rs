use palette::{Gradient, LinSrgb};
use rand::Rng;

// Fixed-order three-stop color ramp, low to high elevation. The base stop is
// drawn once per request; white and black never vary.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: [LinSrgb; 3],
}

impl ColorRamp {
    // Pure: the same base color always yields the same ramp, so ramps can be
    // reused or cached by value.
    pub fn build(base: LinSrgb) -> Self {
        Self {
            stops: [
                LinSrgb::new(1.0, 1.0, 1.0), // white for low elevation
                base,                        // mid-tone for medium elevation
                LinSrgb::new(0.0, 0.0, 0.0), // black for high elevation
            ],
        }
    }

    pub fn stops(&self) -> &[LinSrgb; 3] {
        &self.stops
    }

    // Evenly spaced gradient over the three stops, ready for lookup-table
    // interpolation by the renderer.
    pub fn gradient(&self) -> Gradient<LinSrgb> {
        Gradient::new(self.stops.to_vec())
    }
}

// Per-request base color, each channel uniform in [0, 1).
pub fn random_base_color<R: Rng>(rng: &mut R) -> LinSrgb {
    LinSrgb::new(
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
    )
}
