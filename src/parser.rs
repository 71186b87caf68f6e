//! CSV readers for course and semester records.
//!
//! Fields are trimmed. Numbers that are missing, fail to parse, or are not
//! finite become zero, which makes the record invalid rather than failing
//! the whole file. A header row missing one of the expected columns is an
//! error.

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::grading::{CourseRecord, GradingScale, SemesterRecord};

#[derive(Debug, Deserialize)]
struct CourseRow {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    credit_hours: Option<u32>,
    #[serde(default)]
    grade: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SemesterRow {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    gpa: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    credit_hours: Option<u32>,
}

const COURSE_COLUMNS: &[&str] = &["name", "credit_hours", "grade"];
const SEMESTER_COLUMNS: &[&str] = &["name", "gpa", "credit_hours"];

fn reader<R: Read>(input: R, columns: &[&str]) -> Result<csv::Reader<R>> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = rdr.headers()?;
    let missing: Vec<&str> = columns
        .iter()
        .copied()
        .filter(|c| !headers.iter().any(|h| h == *c))
        .collect();
    if !missing.is_empty() {
        bail!(
            "missing column(s) {} (expected header {})",
            missing.join(", "),
            columns.join(",")
        );
    }

    Ok(rdr)
}

/// Parses `name,credit_hours,grade` rows.
///
/// # Errors
///
/// Returns an error if the input is not readable CSV or a column is missing.
pub fn parse_courses<R: Read>(input: R) -> Result<Vec<CourseRecord>> {
    let mut rdr = reader(input, COURSE_COLUMNS)?;
    let mut courses = Vec::new();

    for result in rdr.deserialize() {
        let row: CourseRow = result?;
        courses.push(CourseRecord {
            name: row.name,
            credit_hours: row.credit_hours.unwrap_or(0),
            letter_grade: row.grade.filter(|g| !g.is_empty()),
        });
    }

    Ok(courses)
}

/// Parses `name,gpa,credit_hours` rows.
///
/// # Errors
///
/// Returns an error if the input is not readable CSV or a column is missing.
pub fn parse_semesters<R: Read>(input: R) -> Result<Vec<SemesterRecord>> {
    let mut rdr = reader(input, SEMESTER_COLUMNS)?;
    let mut semesters = Vec::new();

    for result in rdr.deserialize() {
        let row: SemesterRow = result?;
        semesters.push(SemesterRecord {
            name: row.name,
            gpa: row.gpa.filter(|g| g.is_finite()).unwrap_or(0.0),
            credit_hours: row.credit_hours.unwrap_or(0),
        });
    }

    Ok(semesters)
}

#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_courses(path: &Path) -> Result<Vec<CourseRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open courses file {}", path.display()))?;
    let courses = parse_courses(file)
        .with_context(|| format!("failed to parse courses file {}", path.display()))?;
    debug!(count = courses.len(), "Courses loaded");
    Ok(courses)
}

#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_semesters(path: &Path) -> Result<Vec<SemesterRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open semesters file {}", path.display()))?;
    let semesters = parse_semesters(file)
        .with_context(|| format!("failed to parse semesters file {}", path.display()))?;
    debug!(count = semesters.len(), "Semesters loaded");
    Ok(semesters)
}

/// Logs a warning for each graded course whose letter the scale does not
/// know. Such courses still count, as an `F`. Returns how many were found.
pub fn warn_unknown_grades(courses: &[CourseRecord], scale: &GradingScale) -> usize {
    let mut unknown = 0;
    for course in courses {
        if let Some(grade) = course.grade() {
            if scale.lookup(grade).is_none() {
                warn!(course = %course.name, grade, "Unknown letter grade, counting as F");
                unknown += 1;
            }
        }
    }
    unknown
}
