use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::error::ConfigError;
use crate::data::generator::SampleGenerator;
use crate::data::label::LabelFunction;
use crate::data::purpose::DatasetPurpose;
use crate::data::sample::Sample;
use crate::data::store::DEFAULT_DATA_DIR;

/// Sizes and location for a training/testing dataset pair.
///
/// Every field is optional in JSON; missing fields fall back to the defaults
/// (60 000 training samples, 10 000 testing samples, `data/`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub training_size: Option<usize>,
    pub testing_size: Option<usize>,
    pub data_dir: Option<PathBuf>,
}

impl DatasetConfig {
    pub fn new(training_size: usize, testing_size: usize) -> Self {
        DatasetConfig {
            training_size: Some(training_size),
            testing_size: Some(testing_size),
            data_dir: None,
        }
    }

    /// Requested number of samples for `purpose`.
    pub fn size_for(&self, purpose: DatasetPurpose) -> usize {
        let requested = match purpose {
            DatasetPurpose::Training => self.training_size,
            DatasetPurpose::Testing  => self.testing_size,
        };
        requested.unwrap_or_else(|| purpose.default_size())
    }

    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_deref().unwrap_or_else(|| Path::new(DEFAULT_DATA_DIR))
    }

    /// Deserializes a `DatasetConfig` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<DatasetConfig, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}

/// The training and testing sets produced together for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub training: Vec<Sample>,
    pub testing: Vec<Sample>,
}

impl Datasets {
    /// Generates both sets, training first, with the sizes from `config`.
    pub fn generate<R, L>(config: &DatasetConfig, generator: &mut SampleGenerator<R, L>) -> Datasets
    where
        R: Rng,
        L: LabelFunction,
    {
        let training = generator.generate(config.size_for(DatasetPurpose::Training));
        let testing = generator.generate(config.size_for(DatasetPurpose::Testing));
        info!(training = training.len(), testing = testing.len(), "generated datasets");
        Datasets { training, testing }
    }

    pub fn get(&self, purpose: DatasetPurpose) -> &[Sample] {
        match purpose {
            DatasetPurpose::Training => &self.training,
            DatasetPurpose::Testing  => &self.testing,
        }
    }
}
