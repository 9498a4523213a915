use crate::constants::dataset::COLUMN_NULLABLE;
use crate::error::{FixtureError, Result};
use arrow::array::{Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::fmt;
use std::sync::Arc;

/// Ordered (column name, Arrow type, nullable) triples of a schema
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub columns: Vec<(String, DataType, bool)>,
}

impl TableLayout {
    /// Capture the physical layout of an Arrow schema
    pub fn of(schema: &Schema) -> Self {
        let columns = schema
            .fields()
            .iter()
            .map(|f| (f.name().clone(), f.data_type().clone(), f.is_nullable()))
            .collect();
        Self { columns }
    }
}

impl fmt::Display for TableLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (name, dtype, nullable)) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:?}", name, dtype)?;
            if !nullable {
                write!(f, " not null")?;
            }
        }
        write!(f, "]")
    }
}

/// Schema of the single text column
pub fn dataset_schema(column: &str) -> Schema {
    Schema::new(vec![Field::new(column, DataType::Utf8, COLUMN_NULLABLE)])
}

/// Build the one-column text table the fixtures are made from
pub fn build_dataset<S: AsRef<str>>(column: &str, values: &[S]) -> Result<RecordBatch> {
    profiling::scope!("build_dataset");

    if values.is_empty() {
        return Err(FixtureError::EmptyDataset);
    }

    let array = StringArray::from_iter_values(values.iter().map(|v| v.as_ref()));
    let batch = RecordBatch::try_new(Arc::new(dataset_schema(column)), vec![Arc::new(array)])?;
    Ok(batch)
}

/// Get a text column's values in row order
pub fn column_as_strings(batch: &RecordBatch, column: &str) -> Result<Vec<Option<String>>> {
    let array = batch
        .column_by_name(column)
        .ok_or_else(|| FixtureError::ColumnNotFound {
            column: column.to_string(),
        })?;

    let strings = array
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| {
            FixtureError::TypeConversion(format!(
                "column '{}' is {:?}, not Utf8",
                column,
                array.data_type()
            ))
        })?;

    Ok(strings
        .iter()
        .map(|opt| opt.map(|s| s.to_string()))
        .collect())
}
