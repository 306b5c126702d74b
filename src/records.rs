use std::collections::HashSet;

use lazy_static::lazy_static;
use polars::prelude::{DataType, Field, Schema};

/// Columns read from cps.csv; everything else in the file is ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "School_ID",
    "Short_Name",
    "Is_High_School",
    "Zip",
    "Student_Count_Total",
    "College_Enrollment_Rate_School",
    "Grades_Offered_All",
    "School_Hours",
];

/// Projection printed in the head-of-table section of the report.
pub const REPORT_COLUMNS: [&str; 9] = [
    "School_ID",
    "Short_Name",
    "Is_High_School",
    "Zip",
    "Student_Count_Total",
    "College_Enrollment_Rate_School",
    "Lowest_Grade",
    "Highest_Grade",
    "School_Start_Hour",
];

/// Start hours schools actually open at; anything else in School_Hours
/// is noise.
pub const START_HOUR_LABELS: [&str; 3] = ["7", "8", "9"];

lazy_static! {
    /// Zip codes of the Loop neighborhood, the downtown core the
    /// "outside Loop" count is measured against.
    pub static ref LOOP_ZIPS: HashSet<&'static str> = HashSet::from([
        "60601", "60602", "60603", "60604", "60605", "60606", "60607", "60616",
    ]);
}

pub struct SchoolRecord {}

impl SchoolRecord {
    pub fn raw_schema() -> Schema {
        Schema::from_iter(vec![
            Field::new("School_ID", DataType::Int64),
            Field::new("Short_Name", DataType::Utf8),
            Field::new("Is_High_School", DataType::Boolean),
            // Zip stays text so leading digits survive and set
            // membership checks work.
            Field::new("Zip", DataType::Utf8),
            Field::new("Student_Count_Total", DataType::Int64),
            Field::new("College_Enrollment_Rate_School", DataType::Float64),
            Field::new("Grades_Offered_All", DataType::Utf8),
            Field::new("School_Hours", DataType::Utf8),
        ])
    }
}
