//! Chicago Public Schools dataset preparation.
//!
//! Loads the cps.csv dataset, cleans it and adds derived columns
//! (grade range, start hour, imputed enrollment rate), computes summary
//! statistics over filtered views, and writes a fixed-format text
//! report next to the dataset.

extern crate serde;

pub mod derive;
pub mod load;
pub mod records;
pub mod report;
pub mod stats;

use std::path::Path;

use anyhow::Result;
use log::info;

/// Run the whole pipeline: load, derive, aggregate, report. Strictly
/// sequential; any stage error aborts the run and nothing is written.
pub async fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let mut df = load::read_csv(&input).await?;
    info!("loaded {} rows from {}", df.height(), input.as_ref().display());

    derive::with_grade_range(&mut df)?;
    derive::with_start_hour(&mut df)?;
    derive::impute_enrollment_rate(&mut df)?;
    info!("derived columns added, frame is {}x{}", df.height(), df.width());

    let summaries = stats::Summaries::from_frame(&df)?;
    report::write_report(&output, &df, &summaries).await?;

    Ok(())
}
