// Generates a 257×257 topography and saves a contour-banded PNG
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use render::ContourRenderer;
use terrain::{ColorRamp, DiamondSquare, random_base_color};

fn main() {
    let mut rng = ChaCha8Rng::seed_from_u64(2025);

    let grid = DiamondSquare::new(8, 1.0)
        .expect("valid exponent")
        .generate(&mut rng);
    let ramp = ColorRamp::build(random_base_color(&mut rng));

    let img = ContourRenderer::new(24)
        .expect("valid level count")
        .render(&grid, &ramp, 1024, 768)
        .expect("render failed");

    let path = Path::new("contour_demo.png");
    img.save(path).unwrap();
    println!("Saved contour demo to {:?}", path);
}
