// Creates the training and testing documents a network driver later reads.
//
//   cargo run --release                        # 60 000 / 10 000 samples into data/
//   cargo run -- --training-size 400 --seed 7
//   cargo run -- --config datasets.json
use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use xor_samples::data::ConfigError;
use xor_samples::{logging, xor, DatasetConfig, DatasetStore, Datasets, SampleGenerator};

#[derive(Parser)]
#[command(version, about = "Generate labelled XOR datasets")]
struct Cli {
    /// JSON file with `training_size`, `testing_size` and `data_dir`
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Overrides the training set size
    #[arg(long, value_name = "INT")]
    training_size: Option<usize>,
    /// Overrides the testing set size
    #[arg(long, value_name = "INT")]
    testing_size: Option<usize>,
    /// Overrides the output directory
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,
    /// Seed for a reproducible run; OS entropy otherwise
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn dataset_config(&self) -> Result<DatasetConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DatasetConfig::load_json(path)?,
            None => DatasetConfig::default(),
        };
        if self.training_size.is_some() {
            config.training_size = self.training_size;
        }
        if self.testing_size.is_some() {
            config.testing_size = self.testing_size;
        }
        if self.data_dir.is_some() {
            config.data_dir = self.data_dir.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init()?;
    let cli = Cli::parse();
    let config = cli.dataset_config()?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut generator = SampleGenerator::new(rng, xor);
    let datasets = Datasets::generate(&config, &mut generator);

    std::fs::create_dir_all(config.data_dir())?;
    let store = DatasetStore::new(config.data_dir());
    store.write_all(&datasets)?;

    info!(dir = %store.root().display(), "datasets ready");
    Ok(())
}
