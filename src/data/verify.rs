use super::dataset::{column_as_strings, TableLayout};
use super::snapshot::Snapshot;
use super::stream::DecodedStream;
use crate::constants::output::STREAM_BATCHES;
use crate::error::{FixtureError, Result};

/// Check that a decoded IPC file matches the snapshot it was framed from:
/// the same Arrow field types, a single record batch, and identical rows
/// in order
pub fn verify_roundtrip(snapshot: &Snapshot, stream: &DecodedStream, column: &str) -> Result<()> {
    profiling::scope!("verify_roundtrip");

    let expected = TableLayout::of(&snapshot.schema);
    let actual = TableLayout::of(&stream.schema);
    if expected != actual {
        return Err(FixtureError::SchemaMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    if stream.batches.len() != STREAM_BATCHES {
        return Err(FixtureError::BatchCount {
            expected: STREAM_BATCHES,
            actual: stream.batches.len(),
        });
    }

    let want = column_as_strings(&snapshot.batch, column)?;
    let got = column_as_strings(&stream.batches[0], column)?;
    for row in 0..want.len().max(got.len()) {
        let w = want.get(row).cloned().flatten();
        let g = got.get(row).cloned().flatten();
        if w != g || row >= want.len() || row >= got.len() {
            return Err(FixtureError::RowMismatch {
                row,
                expected: w,
                actual: g,
            });
        }
    }

    Ok(())
}
