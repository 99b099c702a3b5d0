/// One labelled training example, e.g. `inputs = [0.234, 0.892]`, `result = 1.0`.
///
/// Built by [`SampleGenerator`](crate::data::generator::SampleGenerator) or
/// rebuilt by the store on read; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub inputs: [f64; 2],
    pub result: f64,
}

impl Sample {
    pub fn new(inputs: [f64; 2], result: f64) -> Sample {
        Sample { inputs, result }
    }
}
