//! Grade-point arithmetic.
//!
//! Letter grades are resolved to points through a [`GradingScale`], combined
//! into credit-weighted averages for a semester GPA and a cumulative GPA, and
//! classified into an academic [`Standing`].

pub mod aggregate;
pub mod calculator;
pub mod scale;
pub mod standing;
pub mod types;

pub use aggregate::{Weighted, cumulative_gpa, semester_gpa, weighted_average};
pub use calculator::{Calculator, CalculatorState, Summary};
pub use scale::{GradingScale, GradingScaleEntry};
pub use standing::{
    Classification, Standing, StandingBand, StandingClassifier, StandingReport, Tone, classify,
    progress_percentage,
};
pub use types::{AggregateResult, CourseRecord, CurrentSemester, GradedCourse, SemesterRecord};
