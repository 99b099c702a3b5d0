use std::fmt;

use serde::{Deserialize, Serialize};

/// What a dataset is used for. Each purpose maps to one fixed document name
/// inside a [`DatasetStore`](crate::data::store::DatasetStore) root.
///
/// `Default` is `Training`: a store read without an explicit purpose loads the
/// training set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetPurpose {
    #[default]
    Training,
    Testing,
}

impl DatasetPurpose {
    pub const ALL: [DatasetPurpose; 2] = [DatasetPurpose::Training, DatasetPurpose::Testing];

    /// File name of the persisted document for this purpose.
    pub fn file_name(self) -> &'static str {
        match self {
            DatasetPurpose::Training => "training_data.json",
            DatasetPurpose::Testing  => "test_data.json",
        }
    }

    /// Number of samples generated when the caller does not override it.
    pub fn default_size(self) -> usize {
        match self {
            DatasetPurpose::Training => 60_000,
            DatasetPurpose::Testing  => 10_000,
        }
    }
}

impl fmt::Display for DatasetPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetPurpose::Training => write!(f, "training"),
            DatasetPurpose::Testing  => write!(f, "testing"),
        }
    }
}
