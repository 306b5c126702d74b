use std::path::Path;

use polars::prelude::*;
use school_data_prep::{derive, load};

fn write_fixture(path: &Path) {
    let mut wtr = csv::Writer::from_path(path).unwrap();
    wtr.write_record([
        "School_ID",
        "Short_Name",
        "Is_High_School",
        "Zip",
        "Student_Count_Total",
        "College_Enrollment_Rate_School",
        "Grades_Offered_All",
        "School_Hours",
    ])
    .unwrap();
    wtr.write_record([
        "609674",
        "LANE TECH HS",
        "true",
        "60618",
        "4500",
        "50.0",
        "9,10,11,12",
        "8:00 AM - 3:15 PM",
    ])
    .unwrap();
    wtr.write_record([
        "610038",
        "BATEMAN",
        "false",
        "60625",
        "100",
        "",
        "PK,K,1,2,3",
        "07:45 AM - 02:45 PM",
    ])
    .unwrap();
    wtr.write_record([
        "610281",
        "BURBANK",
        "false",
        "60634",
        "200",
        "",
        "K,1,2,3,4,5,6,7,8",
        "Varies",
    ])
    .unwrap();
    wtr.flush().unwrap();
}

#[tokio::test]
async fn full_pipeline_produces_expected_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cps.csv");
    let output = dir.path().join("data_prep.txt");
    write_fixture(&input);

    school_data_prep::run(&input, &output).await.unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("LANE TECH HS"));
    assert!(text.contains("College Enrollment Rate for High Schools = 50.00 (sd= 0.00)"));
    assert!(text.contains("Total Student Count for non-High Schools = 150.00 (sd= 70.71)"));
    assert!(text.contains("Distribution of Starting Hours:"));
    assert!(text.contains("  8am: 1"));
    assert!(text.contains("  7am: 1"));
    assert!(text.contains("  9am: 0"));
    assert!(text.contains("Number of schools outside Loop: 3"));
}

#[tokio::test]
async fn derived_columns_stay_aligned_with_the_frame() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cps.csv");
    write_fixture(&input);

    let mut df = load::read_csv(&input).await.unwrap();
    let rows = df.height();
    derive::with_grade_range(&mut df).unwrap();
    derive::with_start_hour(&mut df).unwrap();
    derive::impute_enrollment_rate(&mut df).unwrap();

    assert_eq!(df.height(), rows);
    for col in ["Lowest_Grade", "Highest_Grade", "School_Start_Hour"] {
        assert_eq!(df.column(col).unwrap().len(), rows);
    }
    // "Varies" has no start digit: null, not a dropped entry
    let hours = df.column("School_Start_Hour").unwrap();
    assert_eq!(hours.utf8().unwrap().get(2), None);

    // both missing rates got the single observed value
    let rates = df
        .column("College_Enrollment_Rate_School")
        .unwrap()
        .f64()
        .unwrap();
    assert_eq!(rates.null_count(), 0);
    assert!((rates.get(1).unwrap() - 50.0).abs() < 1e-9);
    assert!((rates.get(2).unwrap() - 50.0).abs() < 1e-9);
}

#[tokio::test]
async fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = load::read_csv(dir.path().join("nope.csv")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn missing_required_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.csv");
    let mut wtr = csv::Writer::from_path(&input).unwrap();
    wtr.write_record(["School_ID", "Short_Name"]).unwrap();
    wtr.write_record(["609674", "LANE TECH HS"]).unwrap();
    wtr.flush().unwrap();

    assert!(load::read_csv(&input).await.is_err());
}

#[tokio::test]
async fn report_is_not_written_when_input_is_bad() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("data_prep.txt");

    let result = school_data_prep::run(dir.path().join("nope.csv"), &output).await;
    assert!(result.is_err());
    assert!(!output.exists());
}
