use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use polars::prelude::*;

use crate::records::REPORT_COLUMNS;
use crate::stats::Summaries;

/// Hour labels in the order the report has always listed them.
const REPORT_HOUR_ORDER: [&str; 3] = ["8", "7", "9"];

/// Render the first ten rows of the report projection plus the four
/// summary sections, overwriting any previous report at `path`. The
/// file handle is scoped to this call and closed on every exit path.
pub async fn write_report<P: AsRef<Path>>(
    path: P,
    df: &DataFrame,
    summaries: &Summaries,
) -> Result<()> {
    // Polars reads its table layout from the environment, the same
    // role pandas' display options played.
    std::env::set_var("POLARS_FMT_MAX_COLS", "10");
    std::env::set_var("POLARS_FMT_STR_LEN", "32");

    let head = df.select(REPORT_COLUMNS)?.head(Some(10));

    let mut file = File::create(&path)
        .with_context(|| format!("cannot create {}", path.as_ref().display()))?;

    writeln!(file, "{}", head)?;
    writeln!(file)?;
    writeln!(
        file,
        "College Enrollment Rate for High Schools = {:.2} (sd= {:.2})",
        summaries.hs_enrollment_rate.mean, summaries.hs_enrollment_rate.sd
    )?;
    writeln!(file)?;
    writeln!(
        file,
        "Total Student Count for non-High Schools = {:.2} (sd= {:.2})",
        summaries.non_hs_student_count.mean, summaries.non_hs_student_count.sd
    )?;
    writeln!(file)?;
    writeln!(file, "Distribution of Starting Hours:")?;
    for label in REPORT_HOUR_ORDER {
        let count = summaries.start_hour_counts.get(label).copied().unwrap_or(0);
        writeln!(file, "  {}am: {}", label, count)?;
    }
    writeln!(file)?;
    writeln!(
        file,
        "Number of schools outside Loop: {}",
        summaries.outside_loop
    )?;

    info!("report written to {}", path.as_ref().display());
    Ok(())
}
