//! Record and result types shared by the grading pipeline.

use serde::{Deserialize, Serialize};

use crate::grading::aggregate::Weighted;
use crate::grading::scale::GradingScale;

/// A single course entered for the current semester.
///
/// Grade points are not stored; they are resolved from `letter_grade`
/// through a [`GradingScale`] each time they are needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    pub credit_hours: u32,
    pub letter_grade: Option<String>,
}

impl CourseRecord {
    pub fn new(name: &str, credit_hours: u32, letter_grade: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            credit_hours,
            letter_grade: letter_grade.map(str::to_string),
        }
    }

    /// The letter grade, with blank selections treated as ungraded.
    pub fn grade(&self) -> Option<&str> {
        self.letter_grade
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }

    pub fn is_graded(&self) -> bool {
        self.grade().is_some()
    }

    /// Grade points for the current letter grade; ungraded courses score 0.
    pub fn grade_points(&self, scale: &GradingScale) -> f64 {
        self.grade().map_or(0.0, |g| scale.points_for(g))
    }

    /// Whether the course counts towards the semester GPA.
    ///
    /// Requires a name, at least one credit hour and a grade. An `F` is a
    /// grade and counts; an empty selection does not.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.credit_hours > 0 && self.is_graded()
    }

    /// Pairs the course with its resolved grade points.
    pub fn graded<'a>(&'a self, scale: &GradingScale) -> GradedCourse<'a> {
        GradedCourse {
            course: self,
            points: self.grade_points(scale),
        }
    }
}

/// A course borrowed together with the points its grade resolved to.
#[derive(Debug, Clone, Copy)]
pub struct GradedCourse<'a> {
    pub course: &'a CourseRecord,
    pub points: f64,
}

impl Weighted for GradedCourse<'_> {
    fn weight(&self) -> f64 {
        self.course.credit_hours as f64
    }

    fn value(&self) -> f64 {
        self.points
    }
}

/// A previously completed semester used in the cumulative GPA.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemesterRecord {
    pub name: String,
    pub gpa: f64,
    pub credit_hours: u32,
}

impl SemesterRecord {
    pub fn new(name: &str, gpa: f64, credit_hours: u32) -> Self {
        Self {
            name: name.to_string(),
            gpa,
            credit_hours,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.credit_hours > 0
            && self.gpa.is_finite()
            && self.gpa > 0.0
    }
}

impl Weighted for SemesterRecord {
    fn weight(&self) -> f64 {
        self.credit_hours as f64
    }

    fn value(&self) -> f64 {
        self.gpa
    }
}

/// The semester being calculated right now, folded into the cumulative GPA
/// as one extra record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CurrentSemester {
    pub gpa: f64,
    pub credit_hours: f64,
}

impl CurrentSemester {
    pub fn new(gpa: f64, credit_hours: f64) -> Self {
        Self { gpa, credit_hours }
    }

    /// Builds the current semester from a semester-GPA aggregate.
    pub fn from_aggregate(result: &AggregateResult) -> Self {
        Self {
            gpa: result.value,
            credit_hours: result.total_weight,
        }
    }

    pub fn is_included(&self) -> bool {
        self.gpa > 0.0 && self.credit_hours > 0.0
    }
}

impl Weighted for CurrentSemester {
    fn weight(&self) -> f64 {
        self.credit_hours
    }

    fn value(&self) -> f64 {
        self.gpa
    }
}

/// Outcome of a weighted average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    pub value: f64,
    pub total_points: f64,
    pub total_weight: f64,
    pub included_count: usize,
}
