use super::persist::write_atomically;
use crate::error::Result;
use arrow::datatypes::{Schema, SchemaRef};
use arrow::ipc::reader::FileReader;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// An Arrow IPC file decoded batch by batch
#[derive(Debug, Clone)]
pub struct DecodedStream {
    /// Schema from the file header
    pub schema: SchemaRef,
    /// Record batches in file order
    pub batches: Vec<RecordBatch>,
}

impl DecodedStream {
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(|b| b.num_rows()).sum()
    }
}

/// Encode an Arrow IPC file image: schema header, the batches, then the footer
pub fn encode_stream(schema: &Schema, batches: &[RecordBatch]) -> Result<Vec<u8>> {
    profiling::scope!("encode_stream");

    let mut buf: Vec<u8> = Vec::new();
    {
        let mut writer = FileWriter::try_new(&mut buf, schema)?;
        for batch in batches {
            writer.write(batch)?;
        }
        writer.finish()?;
    }
    Ok(buf)
}

/// Write the batch-framed IPC file, replacing any existing one
///
/// The whole file is encoded in memory first and flushed to disk verbatim.
pub fn write_stream(
    schema: &Schema,
    batches: &[RecordBatch],
    path: &Path,
    sync: bool,
) -> Result<u64> {
    profiling::scope!("write_stream");

    let buf = encode_stream(schema, batches)?;
    write_atomically(path, sync, |file| {
        file.write_all(&buf)?;
        file.flush()?;
        Ok(())
    })
}

/// Decode an IPC file, keeping its record batches as written
pub fn read_stream(path: &Path) -> Result<DecodedStream> {
    profiling::scope!("read_stream");

    let reader = FileReader::try_new(File::open(path)?, None)?;
    let schema = reader.schema();
    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(DecodedStream { schema, batches })
}
