pub mod sample;
pub mod label;
pub mod generator;
pub mod purpose;
pub mod record;
pub mod store;
pub mod datasets;
pub mod error;

pub use sample::Sample;
pub use label::{LabelFunction, xor, soft_xor};
pub use generator::SampleGenerator;
pub use purpose::DatasetPurpose;
pub use record::SampleRecord;
pub use store::DatasetStore;
pub use datasets::{DatasetConfig, Datasets};
pub use error::{ConfigError, DatasetError, Result};
