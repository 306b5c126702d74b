use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::records::{SchoolRecord, REQUIRED_COLUMNS};

/// Read the public-schools CSV into a DataFrame, projecting only the
/// columns the pipeline needs and applying the declared dtypes. Rows
/// keep file order; nothing is filtered here.
pub async fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let file = File::open(&path)
        .with_context(|| format!("cannot open {}", path.as_ref().display()))?;

    let columns: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();

    let df = CsvReader::new(file)
        .has_header(true)
        .with_columns(Some(columns))
        .with_dtypes(Option::from(Arc::new(SchoolRecord::raw_schema())))
        .finish()
        .with_context(|| format!("reading {}", path.as_ref().display()))?;

    // Make a missing header its own error instead of a projection quirk.
    for col in REQUIRED_COLUMNS {
        df.column(col)
            .with_context(|| format!("required column {col} missing from input"))?;
    }

    Ok(df)
}
