//! Binary snapshot format written by `IrisClassifier::save`.
//!
//! A snapshot is a bincode-encoded `ModelSnapshot` holding the fitted tree,
//! the configuration it was fitted with and a little metadata. The format is
//! only read back by `IrisClassifier::load`.
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::error::IrisError;

pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Serialized state of a trained classifier. `M` is the fitted model, borrowed
/// when writing and owned when reading.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelSnapshot<M> {
    pub format_version: u32,
    pub saved_at: DateTime<Utc>,
    pub config: ModelConfig,
    pub num_features: usize,
    pub is_trained: bool,
    pub model: M,
}

impl<M> ModelSnapshot<M> {
    pub fn new(config: ModelConfig, num_features: usize, model: M) -> Self {
        ModelSnapshot {
            format_version: SNAPSHOT_FORMAT_VERSION,
            saved_at: Utc::now(),
            config,
            num_features,
            is_trained: true,
            model,
        }
    }
}

impl<M: Serialize> ModelSnapshot<M> {
    /// Write the snapshot to `path`, creating or truncating the file.
    pub fn write_to(&self, path: &Path) -> Result<(), IrisError> {
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

impl<M: DeserializeOwned> ModelSnapshot<M> {
    /// Read a snapshot from `path`, rejecting unknown format versions and
    /// snapshots that do not carry a trained model.
    pub fn read_from(path: &Path) -> Result<Self, IrisError> {
        // Decoding from an in-memory slice bounds every length prefix by the file size
        let bytes = fs::read(path)?;
        let snapshot: ModelSnapshot<M> = bincode::deserialize(&bytes)?;

        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(IrisError::InvalidSnapshot(format!(
                "unsupported format version {} (expected {})",
                snapshot.format_version, SNAPSHOT_FORMAT_VERSION
            )));
        }
        if !snapshot.is_trained {
            return Err(IrisError::InvalidSnapshot(
                "snapshot does not contain a trained model".to_string(),
            ));
        }
        Ok(snapshot)
    }
}
