//! Fixture-wide constants and default values
//!
//! Everything the generator writes by default is spelled out here, so the
//! fixture contents can be read at a glance.

/// Dataset defaults
pub mod dataset {
    /// Name of the single text column
    pub const COLUMN_NAME: &str = "str";

    /// The column never holds nulls
    pub const COLUMN_NULLABLE: bool = false;

    /// Row values, in the order they are written
    pub const VALUES: [&str; 8] = [
        "Apple", "thing", "boat", "house", "Guy", "art", "home", "later",
    ];
}

/// Output file defaults
pub mod output {
    /// Directory the fixtures are written to
    pub const OUTPUT_DIR: &str = ".";

    /// Parquet snapshot file name
    pub const SNAPSHOT_FILE: &str = "str.parquet";

    /// Arrow IPC file name
    pub const STREAM_FILE: &str = "str.arrow";

    /// Number of record batches the IPC file must carry
    pub const STREAM_BATCHES: usize = 1;
}

/// Logging defaults
pub mod logging {
    /// Filter used when `RUST_LOG` is unset
    pub const DEFAULT_FILTER: &str = "info";
}
