//! Fixture generation pipeline
//!
//! Runs the steps strictly in order: build the table, write the Parquet
//! snapshot, read it back as one batch, write the Arrow IPC file, then
//! decode that file again for the report and, optionally, to check it
//! against the snapshot.

use crate::config::FixtureConfig;
use crate::data::{
    build_dataset, read_snapshot, read_stream, verify_roundtrip, write_snapshot, write_stream,
};
use crate::error::Result;
use crate::timed;
use std::fmt;
use std::path::PathBuf;

/// What a run produced, as read back from the written files
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureReport {
    pub snapshot_path: PathBuf,
    pub snapshot_bytes: u64,
    pub stream_path: PathBuf,
    pub stream_bytes: u64,
    /// Rows decoded from the IPC file
    pub rows: usize,
    /// Record batches decoded from the IPC file
    pub batches: usize,
    pub verified: bool,
}

impl fmt::Display for FixtureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} bytes), {} ({} bytes, {} batch(es)), {} rows{}",
            self.snapshot_path.display(),
            self.snapshot_bytes,
            self.stream_path.display(),
            self.stream_bytes,
            self.batches,
            self.rows,
            if self.verified { ", verified" } else { "" }
        )
    }
}

/// Generate both fixture files
pub fn run(config: &FixtureConfig) -> Result<FixtureReport> {
    profiling::scope!("run");
    config.validate()?;

    let snapshot_path = config.snapshot_path();
    let stream_path = config.stream_path();

    let table = timed!("build dataset", build_dataset(&config.column, &config.values)?);

    let snapshot_bytes = timed!(
        "write snapshot",
        write_snapshot(&table, &snapshot_path, config.sync)?
    );
    log::debug!("wrote {}", snapshot_path.display());

    let reread = timed!("read snapshot", read_snapshot(&snapshot_path)?);

    let stream_bytes = timed!(
        "write stream",
        write_stream(
            &reread.schema,
            std::slice::from_ref(&reread.batch),
            &stream_path,
            config.sync
        )?
    );
    log::debug!("wrote {}", stream_path.display());

    let decoded = timed!("read stream", read_stream(&stream_path)?);
    if config.verify {
        timed!(
            "verify",
            verify_roundtrip(&reread, &decoded, &config.column)?
        );
    }

    Ok(FixtureReport {
        snapshot_path,
        snapshot_bytes,
        stream_path,
        stream_bytes,
        rows: decoded.num_rows(),
        batches: decoded.batches.len(),
        verified: config.verify,
    })
}
