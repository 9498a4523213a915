pub mod dataset;
pub mod persist;
pub mod snapshot;
pub mod stream;
pub mod verify;

// Re-export key types for convenience
#[allow(unused_imports)]
pub use dataset::{build_dataset, column_as_strings, TableLayout};
pub use snapshot::{read_snapshot, write_snapshot};
pub use stream::{read_stream, write_stream};
pub use verify::verify_roundtrip;
