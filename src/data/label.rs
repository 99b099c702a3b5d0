/// Maps a pair of inputs to the label a network should learn for them.
///
/// Implemented for every `Fn(f64, f64) -> f64`, so plain functions and
/// closures can be handed to the generator directly.
pub trait LabelFunction {
    fn label(&self, a: f64, b: f64) -> f64;
}

impl<F> LabelFunction for F
where
    F: Fn(f64, f64) -> f64,
{
    fn label(&self, a: f64, b: f64) -> f64 {
        self(a, b)
    }
}

/// Inputs at or above this value count as logical `true`.
pub const THRESHOLD: f64 = 0.5;

/// Exclusive-or on thresholded inputs: `1.0` when exactly one input is high.
pub fn xor(a: f64, b: f64) -> f64 {
    if (a >= THRESHOLD) != (b >= THRESHOLD) { 1.0 } else { 0.0 }
}

/// Continuous exclusive-or, `a + b - 2ab`. Agrees with [`xor`] on the corners
/// of the unit square.
pub fn soft_xor(a: f64, b: f64) -> f64 {
    a + b - 2.0 * a * b
}
