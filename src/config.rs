//! Generator configuration
//!
//! The defaults reproduce the fixed fixture. A JSON file may override any
//! subset of fields; missing fields keep their defaults.

use crate::constants::{dataset, output};
use crate::error::{FixtureError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Directory both files are written to
    pub output_dir: PathBuf,
    /// Parquet snapshot file name
    pub snapshot_file: String,
    /// Arrow IPC file name
    pub stream_file: String,
    /// Name of the text column
    pub column: String,
    /// Row values, in order
    pub values: Vec<String>,
    /// Force file contents to stable storage before moving them into place
    pub sync: bool,
    /// Decode the IPC file after writing and compare it with the snapshot
    pub verify: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(output::OUTPUT_DIR),
            snapshot_file: output::SNAPSHOT_FILE.to_string(),
            stream_file: output::STREAM_FILE.to_string(),
            column: dataset::COLUMN_NAME.to_string(),
            values: dataset::VALUES.iter().map(|v| v.to_string()).collect(),
            sync: true,
            verify: true,
        }
    }
}

impl FixtureConfig {
    /// Load a config from a JSON file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: FixtureConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot produce two distinct files
    pub fn validate(&self) -> Result<()> {
        if self.snapshot_file.trim().is_empty() {
            return Err(FixtureError::Config("snapshot_file is empty".to_string()));
        }
        if self.stream_file.trim().is_empty() {
            return Err(FixtureError::Config("stream_file is empty".to_string()));
        }
        if self.snapshot_file == self.stream_file {
            return Err(FixtureError::Config(format!(
                "snapshot_file and stream_file are both '{}'",
                self.snapshot_file
            )));
        }
        if self.column.is_empty() {
            return Err(FixtureError::Config("column name is empty".to_string()));
        }
        if self.values.is_empty() {
            return Err(FixtureError::EmptyDataset);
        }
        Ok(())
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.output_dir.join(&self.snapshot_file)
    }

    pub fn stream_path(&self) -> PathBuf {
        self.output_dir.join(&self.stream_file)
    }
}
