use polars::prelude::*;

/// Split Grades_Offered_All on commas and append Lowest_Grade and
/// Highest_Grade columns (first and last label). A null or empty grade
/// list yields nulls in both columns; the row itself stays, so every
/// derived column keeps one value per source row.
pub fn with_grade_range(df: &mut DataFrame) -> PolarsResult<()> {
    let grades = df.column("Grades_Offered_All")?.utf8()?;

    let mut lowest: Vec<Option<String>> = Vec::with_capacity(grades.len());
    let mut highest: Vec<Option<String>> = Vec::with_capacity(grades.len());
    for row in grades.into_iter() {
        match row {
            Some(list) if !list.is_empty() => {
                let mut tokens = list.split(',');
                let first = tokens.next();
                let last = tokens.last().or(first);
                lowest.push(first.map(str::to_string));
                highest.push(last.map(str::to_string));
            }
            _ => {
                lowest.push(None);
                highest.push(None);
            }
        }
    }

    df.with_column(Series::new("Lowest_Grade", lowest))?;
    df.with_column(Series::new("Highest_Grade", highest))?;
    Ok(())
}

/// Scan each School_Hours string left to right and record the first
/// '7', '8' or '9' as the start hour. Entries with leading zeros or
/// stray letters still resolve to the right digit; a row with no such
/// digit gets a null rather than being skipped.
pub fn with_start_hour(df: &mut DataFrame) -> PolarsResult<()> {
    let hours = df.column("School_Hours")?.utf8()?;

    let start_hour: Vec<Option<String>> = hours
        .into_iter()
        .map(|row| {
            row.and_then(|text| {
                text.chars()
                    .find(|c| matches!(c, '7' | '8' | '9'))
                    .map(|c| c.to_string())
            })
        })
        .collect();

    df.with_column(Series::new("School_Start_Hour", start_hour))?;
    Ok(())
}

/// Replace missing college enrollment rates with the mean over the
/// originally observed values. FillNullStrategy::Mean computes that
/// mean once, before any value is replaced.
pub fn impute_enrollment_rate(df: &mut DataFrame) -> PolarsResult<()> {
    let filled = df
        .column("College_Enrollment_Rate_School")?
        .fill_null(FillNullStrategy::Mean)?;
    df.with_column(filled)?;
    Ok(())
}
