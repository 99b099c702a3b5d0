use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::data::datasets::Datasets;
use crate::data::error::{DatasetError, Result};
use crate::data::purpose::DatasetPurpose;
use crate::data::record::{to_records, SampleRecord};
use crate::data::sample::Sample;
use crate::persist::write_replacing;

/// Default directory holding the dataset documents.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Reads and writes one JSON document per [`DatasetPurpose`] under a root
/// directory.
///
/// Writes go through a temporary file in the same directory that is renamed
/// over the destination, so a failed write never leaves a half-written
/// document behind. Concurrent writers to the same purpose are not supported.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    root: PathBuf,
}

impl Default for DatasetStore {
    fn default() -> Self {
        DatasetStore::new(DEFAULT_DATA_DIR)
    }
}

impl DatasetStore {
    /// The root directory must already exist before the first write.
    pub fn new(root: impl Into<PathBuf>) -> DatasetStore {
        DatasetStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Destination document for `purpose`.
    pub fn path_for(&self, purpose: DatasetPurpose) -> PathBuf {
        self.root.join(purpose.file_name())
    }

    pub fn exists(&self, purpose: DatasetPurpose) -> bool {
        self.path_for(purpose).is_file()
    }

    /// Replaces the document for `purpose` with `samples`, numbered by position.
    pub fn write(&self, samples: &[Sample], purpose: DatasetPurpose) -> Result<()> {
        let path = self.path_for(purpose);
        let records = to_records(samples);

        write_replacing(&path, |file| write_pretty(file, &records))
            .map_err(|e| DatasetError::io(&path, e))?;

        info!(%purpose, path = %path.display(), count = samples.len(), "wrote dataset");
        Ok(())
    }

    /// Loads the document for `purpose`, preserving record order and values.
    pub fn read(&self, purpose: DatasetPurpose) -> Result<Vec<Sample>> {
        let path = self.path_for(purpose);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DatasetError::NotFound { purpose, path });
            }
            Err(e) => return Err(DatasetError::io(path, e)),
        };

        let records: Vec<SampleRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| {
                if source.is_io() {
                    DatasetError::io(&path, source.into())
                } else {
                    DatasetError::Parse { path: path.clone(), source }
                }
            })?;

        debug!(%purpose, path = %path.display(), count = records.len(), "read dataset");
        Ok(records.into_iter().map(SampleRecord::into_sample).collect())
    }

    /// Same as `read(DatasetPurpose::default())`, i.e. the training set.
    pub fn read_default(&self) -> Result<Vec<Sample>> {
        self.read(DatasetPurpose::default())
    }

    /// Writes the training set, then the testing set. Stops at the first failure.
    pub fn write_all(&self, datasets: &Datasets) -> Result<()> {
        self.write(&datasets.training, DatasetPurpose::Training)?;
        self.write(&datasets.testing, DatasetPurpose::Testing)
    }

    pub fn read_all(&self) -> Result<Datasets> {
        Ok(Datasets {
            training: self.read(DatasetPurpose::Training)?,
            testing: self.read(DatasetPurpose::Testing)?,
        })
    }
}

/// Serializes `value` with four-space indentation and flushes.
fn write_pretty<T: Serialize>(file: &mut File, value: &T) -> std::io::Result<()> {
    let mut writer = BufWriter::new(file);
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    writer.flush()
}
