use rand::RngCore;

// Replays a scripted sequence of uniform draws, repeating the final value
// once the script runs out. Values are encoded so `gen_range(0.0..1.0)`
// reproduces them exactly through rand's [1, 2) mantissa conversion, which
// keeps test expectations bit-precise.
pub(crate) struct ScriptedRng {
    draws: Vec<u64>,
    next: usize,
}

impl ScriptedRng {
    pub(crate) fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "script needs at least one draw");
        Self {
            draws: values.iter().map(|&v| encode_unit_f64(v)).collect(),
            next: 0,
        }
    }
}

// Inverse of the f64 path in rand's UniformFloat::sample_single: the draw is
// `(next_u64() >> 12)` used as a 52-bit mantissa. Only values exactly
// representable with 52 fraction bits survive the round trip.
fn encode_unit_f64(v: f64) -> u64 {
    assert!((0.0..1.0).contains(&v), "draws must lie in [0, 1)");
    ((v * (1u64 << 52) as f64) as u64) << 12
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let index = self.next.min(self.draws.len() - 1);
        self.next += 1;
        self.draws[index]
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::ScriptedRng;

    #[test]
    fn scripted_draws_round_trip_exactly() {
        let mut rng = ScriptedRng::new(&[0.0, 0.25, 0.5, 0.875]);
        assert_eq!(rng.gen_range(0.0..1.0), 0.0);
        assert_eq!(rng.gen_range(0.0..1.0), 0.25);
        assert_eq!(rng.gen_range(0.0..1.0), 0.5);
        assert_eq!(rng.gen_range(0.0..1.0), 0.875);
        // Script exhausted: the last value repeats.
        assert_eq!(rng.gen_range(0.0..1.0), 0.875);
    }
}
