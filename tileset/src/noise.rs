use noise::{NoiseFn, OpenSimplex};

// Seeded 2D coherent noise sampler. Thin wrapper around OpenSimplex that
// applies a fixed coordinate scale before sampling. Stateless beyond the
// seed: equal (seed, scale, x, y) always produces the same value.
pub struct NoiseField {
    simplex: OpenSimplex,
    scale: f64,
}

impl NoiseField {
    pub fn new(seed: u32, scale: f64) -> Self {
        Self {
            simplex: OpenSimplex::new(seed),
            scale,
        }
    }

    // Sample at (x, y). The result lies in [-1, 1].
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x * self.scale, y * self.scale])
    }
}
