use image::Rgb;
use terrain::ColorRamp;

// The ramp is interpolated into a fixed 256-entry table once per render;
// band colors are then plain lookups.
pub const LOOKUP_TABLE_SIZE: usize = 256;

pub fn build_lookup_table(ramp: &ColorRamp) -> Vec<Rgb<u8>> {
    let gradient = ramp.gradient();
    (0..LOOKUP_TABLE_SIZE)
        .map(|i| {
            let t = i as f32 / (LOOKUP_TABLE_SIZE - 1) as f32;
            let color = gradient.get(t).into_format::<u8>();
            Rgb([color.red, color.green, color.blue])
        })
        .collect()
}

// Table index for a quantile in [0, 1].
pub fn index_for(quantile: f32) -> usize {
    let clamped = quantile.clamp(0.0, 1.0);
    (clamped * (LOOKUP_TABLE_SIZE - 1) as f32).round() as usize
}

#[cfg(test)]
mod tests {
    use image::Rgb;
    use palette::LinSrgb;
    use terrain::ColorRamp;

    use super::{LOOKUP_TABLE_SIZE, build_lookup_table, index_for};

    #[test]
    fn table_spans_white_to_black() {
        let ramp = ColorRamp::build(LinSrgb::new(0.5, 0.2, 0.8));
        let table = build_lookup_table(&ramp);
        assert_eq!(table.len(), LOOKUP_TABLE_SIZE);
        assert_eq!(table[0], Rgb([255, 255, 255]));
        assert_eq!(table[LOOKUP_TABLE_SIZE - 1], Rgb([0, 0, 0]));
    }

    #[test]
    fn table_midpoint_is_the_base_color() {
        let ramp = ColorRamp::build(LinSrgb::new(1.0, 0.0, 0.0));
        let table = build_lookup_table(&ramp);
        // The nearest table entry sits within one interpolation step of the
        // pure base stop.
        let mid = table[index_for(0.5)];
        assert!(mid[0] >= 253);
        assert!(mid[1] <= 2 && mid[2] <= 2);
    }

    #[test]
    fn quantile_indexing_clamps() {
        assert_eq!(index_for(-1.0), 0);
        assert_eq!(index_for(0.0), 0);
        assert_eq!(index_for(1.0), LOOKUP_TABLE_SIZE - 1);
        assert_eq!(index_for(2.0), LOOKUP_TABLE_SIZE - 1);
    }
}
