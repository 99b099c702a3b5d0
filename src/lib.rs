pub mod data;
pub mod math;
pub mod logging;
mod persist;

// Convenience re-exports
pub use data::{
    DatasetConfig, DatasetError, DatasetPurpose, DatasetStore, Datasets, LabelFunction, Sample,
    SampleGenerator,
};
pub use data::label::xor;
pub use math::{Matrix, MatrixError};
