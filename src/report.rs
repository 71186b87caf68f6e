//! Academic performance report export.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::grading::{GradingScale, Standing, StandingClassifier, Summary};

/// Placeholder used when no student name is supplied.
pub const DEFAULT_STUDENT_NAME: &str = "Student Name";

/// The values handed to the report renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub student_name: String,
    pub gpa: f64,
    pub cgpa: f64,
    pub total_credits: f64,
    pub generated_at: DateTime<Utc>,
}

impl ReportSummary {
    pub fn from_summary(summary: &Summary, student_name: Option<&str>) -> Self {
        Self {
            student_name: student_name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(DEFAULT_STUDENT_NAME)
                .to_string(),
            gpa: summary.gpa(),
            cgpa: summary.cgpa(),
            total_credits: summary.total_credits(),
            generated_at: Utc::now(),
        }
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

fn standing_line(classifier: &StandingClassifier, gpa: f64) -> String {
    let report = classifier.report(gpa);
    format!(
        "{:.2} / {:.1} ({}, {:.1}%)",
        gpa, report.max_gpa, report.status, report.progress_percentage
    )
}

/// Renders the report as Markdown: the student's results followed by the
/// grading scale they were computed with.
pub fn build_report(
    report: &ReportSummary,
    scale: &GradingScale,
    classifier: &StandingClassifier,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Academic Performance Report");
    let _ = writeln!(
        output,
        "Generated for {} on {}",
        report.student_name,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Results");
    let _ = writeln!(
        output,
        "- Semester GPA: {}",
        standing_line(classifier, report.gpa)
    );
    let _ = writeln!(
        output,
        "- Cumulative GPA: {}",
        standing_line(classifier, report.cgpa)
    );
    let _ = writeln!(output, "- Total credits: {}", report.total_credits);

    if report.gpa == 0.0 && report.cgpa == 0.0 {
        let _ = writeln!(output);
        let _ = writeln!(output, "No graded courses or semesters were entered.");
    } else if classifier.classify(report.cgpa.max(report.gpa)).status == Standing::Fail {
        let _ = writeln!(output);
        let _ = writeln!(output, "Standing is below the passing threshold.");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Grading Scale");
    let _ = writeln!(output, "| Grade | Points | Standing | Range |");
    let _ = writeln!(output, "|-------|--------|----------|-------|");
    for entry in scale.entries() {
        let _ = writeln!(
            output,
            "| {} | {:.2} | {} | {} |",
            entry.letter_grade, entry.points, entry.label, entry.display_range
        );
    }

    output
}
