use gpa_calc::grading::{
    Calculator, CalculatorState, CourseRecord, CurrentSemester, SemesterRecord, Standing, classify,
};
use gpa_calc::parser::{load_courses, load_semesters};
use gpa_calc::report::{ReportSummary, build_report};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_two_courses_just_below_excellent() {
    let calculator = Calculator::default();
    let courses = vec![
        CourseRecord::new("Math", 3, Some("A")),
        CourseRecord::new("Phys", 4, Some("B+")),
    ];

    let result = calculator.semester_gpa(&courses);
    assert!(approx(result.total_points, 25.32));
    assert_eq!(result.total_weight, 7.0);
    assert!((result.value - 3.62).abs() < 0.005);
    assert_eq!(calculator.standing(result.value).status, Standing::Good);
}

#[test]
fn test_unnamed_course_is_excluded() {
    let result = Calculator::default().semester_gpa(&[CourseRecord::new("", 3, Some("A"))]);
    assert_eq!(result.value, 0.0);
    assert_eq!(result.included_count, 0);
}

#[test]
fn test_cumulative_with_current_semester() {
    let calculator = Calculator::default();
    let semesters = vec![SemesterRecord::new("Fall", 3.5, 15)];

    let result = calculator.cumulative_gpa(&semesters, Some(CurrentSemester::new(3.8, 16.0)));
    assert!(approx(result.value, 113.3 / 31.0));
    assert_eq!(result.included_count, 2);
    assert_eq!(calculator.standing(result.value).status, Standing::Good);
}

#[test]
fn test_exact_boundary_is_excellent() {
    assert_eq!(classify(3.67).status, Standing::Excellent);
}

#[test]
fn test_negative_gpa_fails_without_panicking() {
    let classification = classify(-1.0);
    assert_eq!(classification.status, Standing::Fail);
    assert_eq!(classification.percentage, 10.0);
}

#[test]
fn test_fixture_pipeline() {
    let courses = load_courses(&fixture("courses.csv")).expect("Failed to load courses");
    let semesters = load_semesters(&fixture("semesters.csv")).expect("Failed to load semesters");
    assert_eq!(courses.len(), 5);
    assert_eq!(semesters.len(), 4);

    let calculator = Calculator::default();
    let summary = calculator.recompute(&CalculatorState::new(courses, semesters));

    assert!(approx(summary.gpa(), 25.32 / 7.0));
    assert_eq!(summary.semester.included_count, 2);

    let expected_cgpa = (3.5 * 15.0 + 3.1 * 18.0 + 25.32) / 40.0;
    assert!(approx(summary.cgpa(), expected_cgpa));
    assert_eq!(summary.total_credits(), 40.0);
    assert_eq!(summary.cumulative.included_count, 3);
    assert_eq!(summary.cumulative_standing.status, Standing::Good);

    let report = ReportSummary::from_summary(&summary, Some("Jules Moreno"));
    let text = build_report(&report, calculator.scale(), calculator.classifier());
    assert!(text.contains("Generated for Jules Moreno"));
    assert!(text.contains("- Total credits: 40"));
}
