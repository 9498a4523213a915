use super::persist::write_atomically;
use crate::error::Result;
use arrow::compute::concat_batches;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;

/// A Parquet snapshot read back into memory
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Schema as embedded in the file
    pub schema: SchemaRef,
    /// Every row of the file, merged into one batch
    pub batch: RecordBatch,
}

/// Write a table to a Parquet file, replacing any existing one
///
/// The Arrow schema is embedded in the footer metadata next to the Parquet
/// schema, so the snapshot reads back with its exact Arrow types.
pub fn write_snapshot(batch: &RecordBatch, path: &Path, sync: bool) -> Result<u64> {
    profiling::scope!("write_snapshot");

    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    write_atomically(path, sync, |file| {
        let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
        writer.write(batch)?;
        writer.close()?;
        Ok(())
    })
}

/// Read a Parquet snapshot back and merge it into a single batch
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    profiling::scope!("read_snapshot");

    let builder = ParquetRecordBatchReaderBuilder::try_new(File::open(path)?)?;
    let schema = builder.schema().clone();
    let batches = builder
        .build()?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let batch = concat_batches(&schema, &batches)?;
    Ok(Snapshot { schema, batch })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::dataset::{COLUMN_NAME, VALUES};
    use crate::data::dataset::{build_dataset, column_as_strings, TableLayout};
    use arrow::datatypes::DataType;

    #[test]
    fn test_snapshot_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("str.parquet");
        let batch = build_dataset(COLUMN_NAME, &VALUES).unwrap();

        let written = write_snapshot(&batch, &path, true).unwrap();
        assert!(written > 0);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), written);

        let back = read_snapshot(&path).unwrap();
        assert_eq!(TableLayout::of(&back.schema), TableLayout::of(&batch.schema()));
        assert_eq!(
            column_as_strings(&back.batch, COLUMN_NAME).unwrap(),
            column_as_strings(&batch, COLUMN_NAME).unwrap()
        );
    }

    #[test]
    fn test_embedded_schema_is_plain_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("str.parquet");
        write_snapshot(&build_dataset(COLUMN_NAME, &VALUES).unwrap(), &path, false).unwrap();

        // Schema comes from the file footer alone, without decoding any rows
        let builder = ParquetRecordBatchReaderBuilder::try_new(File::open(&path).unwrap()).unwrap();
        let field = builder.schema().field_with_name("str").unwrap();
        assert_eq!(field.data_type(), &DataType::Utf8);
        assert!(!field.is_nullable());
        assert_eq!(builder.metadata().file_metadata().num_rows(), 8);
    }

    #[test]
    fn test_snapshot_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("str.parquet");
        std::fs::write(&path, b"not a parquet file").unwrap();

        let batch = build_dataset(COLUMN_NAME, &VALUES).unwrap();
        write_snapshot(&batch, &path, false).unwrap();

        let back = read_snapshot(&path).unwrap();
        assert_eq!(back.batch.num_rows(), VALUES.len());
    }

    #[test]
    fn test_read_missing_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_snapshot(&dir.path().join("absent.parquet")).is_err());
    }
}
