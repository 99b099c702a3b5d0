use rand::Rng;
use tracing::debug;

use crate::data::label::LabelFunction;
use crate::data::sample::Sample;

/// Number of distinct values per input: five decimal digits in `[0, 1)`.
const GRID: u32 = 100_000;

/// Produces labelled samples from an owned random source.
///
/// The generator holds its RNG rather than reaching for `thread_rng`, so a
/// seeded `StdRng` gives a reproducible dataset.
pub struct SampleGenerator<R, L> {
    rng: R,
    label: L,
}

impl<R: Rng, L: LabelFunction> SampleGenerator<R, L> {
    pub fn new(rng: R, label: L) -> SampleGenerator<R, L> {
        SampleGenerator { rng, label }
    }

    /// Draws one input uniformly from `{0.00000, 0.00001, ..., 0.99999}`.
    ///
    /// Picking the grid point directly keeps the value strictly below 1.0,
    /// which rounding a uniform float to five places would not.
    pub fn draw_input(&mut self) -> f64 {
        self.rng.gen_range(0..GRID) as f64 / GRID as f64
    }

    /// Returns `n` independent samples. `n == 0` yields an empty vector.
    pub fn generate(&mut self, n: usize) -> Vec<Sample> {
        let mut samples = Vec::with_capacity(n);
        for _ in 0..n {
            let inputs = [self.draw_input(), self.draw_input()];
            let result = self.label.label(inputs[0], inputs[1]);
            samples.push(Sample::new(inputs, result));
        }
        debug!(count = n, "generated samples");
        samples
    }

    /// Gives the random source back, e.g. to continue a seeded stream elsewhere.
    pub fn into_rng(self) -> R {
        self.rng
    }
}
