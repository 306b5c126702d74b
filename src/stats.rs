use std::collections::BTreeMap;

use polars::prelude::*;
use serde::Serialize;

use crate::records::{LOOP_ZIPS, START_HOUR_LABELS};

/// Mean and sample standard deviation of one numeric column view.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub sd: f64,
}

/// Everything the report needs from the aggregation stage.
#[derive(Debug, Serialize)]
pub struct Summaries {
    pub hs_enrollment_rate: SummaryStats,
    pub non_hs_student_count: SummaryStats,
    pub start_hour_counts: BTreeMap<String, u32>,
    pub outside_loop: usize,
}

impl Summaries {
    pub fn from_frame(df: &DataFrame) -> PolarsResult<Self> {
        Ok(Summaries {
            hs_enrollment_rate: enrollment_rate_high_schools(df)?,
            non_hs_student_count: student_count_non_high_schools(df)?,
            start_hour_counts: start_hour_distribution(df)?,
            outside_loop: outside_loop_count(df)?,
        })
    }
}

/// Mean and Bessel-corrected (N-1) standard deviation, nulls ignored.
/// Polars has no sd for samples smaller than two; those report 0.0 so a
/// single-school group still renders.
pub fn mean_and_sd(series: &Series) -> PolarsResult<SummaryStats> {
    let values = series.cast(&DataType::Float64)?;
    let ca = values.f64()?;
    let mean = ca.mean().unwrap_or(0.0);
    let sd = ca.std(1).filter(|v| v.is_finite()).unwrap_or(0.0);
    Ok(SummaryStats { mean, sd })
}

fn filter_is_high_school(df: &DataFrame, wanted: bool) -> PolarsResult<DataFrame> {
    let flags = df.column("Is_High_School")?.bool()?;
    let mask = if wanted { flags.clone() } else { !flags };
    df.filter(&mask)
}

/// College enrollment rate over high schools, using the imputed column.
pub fn enrollment_rate_high_schools(df: &DataFrame) -> PolarsResult<SummaryStats> {
    let hs = filter_is_high_school(df, true)?;
    mean_and_sd(hs.column("College_Enrollment_Rate_School")?)
}

/// Total student count over everything that is not a high school.
pub fn student_count_non_high_schools(df: &DataFrame) -> PolarsResult<SummaryStats> {
    let non_hs = filter_is_high_school(df, false)?;
    mean_and_sd(non_hs.column("Student_Count_Total")?)
}

/// Count rows per start-hour label. The three expected labels are
/// always present in the map, zero when nothing matched; rows with a
/// null start hour are not counted.
pub fn start_hour_distribution(df: &DataFrame) -> PolarsResult<BTreeMap<String, u32>> {
    let mut counts: BTreeMap<String, u32> = START_HOUR_LABELS
        .iter()
        .map(|label| (label.to_string(), 0))
        .collect();

    for hour in df.column("School_Start_Hour")?.utf8()?.into_iter().flatten() {
        *counts.entry(hour.to_string()).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Number of schools whose zip falls outside the Loop. A missing zip is
/// not in the Loop set, so it counts as outside.
pub fn outside_loop_count(df: &DataFrame) -> PolarsResult<usize> {
    let zips = df.column("Zip")?.utf8()?;
    let outside = zips
        .into_iter()
        .filter(|zip| match zip {
            Some(z) => !LOOP_ZIPS.contains(z),
            None => true,
        })
        .count();
    Ok(outside)
}
