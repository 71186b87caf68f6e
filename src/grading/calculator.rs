use serde::Serialize;
use tracing::debug;

use crate::grading::aggregate::{cumulative_gpa, semester_gpa};
use crate::grading::scale::GradingScale;
use crate::grading::standing::{StandingClassifier, StandingReport};
use crate::grading::types::{AggregateResult, CourseRecord, CurrentSemester, SemesterRecord};

/// The records being edited: this semester's courses and earlier semesters.
///
/// Both collections always hold at least one record, mirroring a form that
/// never lets its last row be deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub courses: Vec<CourseRecord>,
    pub semesters: Vec<SemesterRecord>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            courses: vec![CourseRecord::default()],
            semesters: vec![SemesterRecord::default()],
        }
    }
}

impl CalculatorState {
    /// Builds a state from loaded records, padding empty collections with a
    /// blank record.
    pub fn new(mut courses: Vec<CourseRecord>, mut semesters: Vec<SemesterRecord>) -> Self {
        if courses.is_empty() {
            courses.push(CourseRecord::default());
        }
        if semesters.is_empty() {
            semesters.push(SemesterRecord::default());
        }
        Self { courses, semesters }
    }

    /// Appends a blank course and returns its index.
    pub fn add_course(&mut self) -> usize {
        self.courses.push(CourseRecord::default());
        self.courses.len() - 1
    }

    /// Removes the course at `index`. Returns `false` when the index is out
    /// of range or the course is the last one left.
    pub fn remove_course(&mut self, index: usize) -> bool {
        if self.courses.len() <= 1 || index >= self.courses.len() {
            return false;
        }
        self.courses.remove(index);
        true
    }

    pub fn add_semester(&mut self) -> usize {
        self.semesters.push(SemesterRecord::default());
        self.semesters.len() - 1
    }

    pub fn remove_semester(&mut self, index: usize) -> bool {
        if self.semesters.len() <= 1 || index >= self.semesters.len() {
            return false;
        }
        self.semesters.remove(index);
        true
    }
}

/// Result of a full recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub semester: AggregateResult,
    pub semester_standing: StandingReport,
    pub cumulative: AggregateResult,
    pub cumulative_standing: StandingReport,
}

impl Summary {
    pub fn gpa(&self) -> f64 {
        self.semester.value
    }

    pub fn cgpa(&self) -> f64 {
        self.cumulative.value
    }

    /// Credits behind the cumulative GPA, current semester included.
    pub fn total_credits(&self) -> f64 {
        self.cumulative.total_weight
    }
}

/// Grade-point engine bound to one grading scale and one set of standing
/// bands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    scale: GradingScale,
    classifier: StandingClassifier,
}

impl Calculator {
    pub fn new(scale: GradingScale, classifier: StandingClassifier) -> Self {
        Self { scale, classifier }
    }

    pub fn scale(&self) -> &GradingScale {
        &self.scale
    }

    pub fn classifier(&self) -> &StandingClassifier {
        &self.classifier
    }

    pub fn semester_gpa(&self, courses: &[CourseRecord]) -> AggregateResult {
        semester_gpa(courses, &self.scale)
    }

    pub fn cumulative_gpa(
        &self,
        semesters: &[SemesterRecord],
        current: Option<CurrentSemester>,
    ) -> AggregateResult {
        cumulative_gpa(semesters, current)
    }

    pub fn standing(&self, gpa: f64) -> StandingReport {
        self.classifier.report(gpa)
    }

    /// Recomputes every derived value from `state`.
    ///
    /// Pure; call it after each edit. The semester GPA computed from
    /// `state.courses` is folded into the cumulative GPA.
    pub fn recompute(&self, state: &CalculatorState) -> Summary {
        let semester = self.semester_gpa(&state.courses);
        let current = CurrentSemester::from_aggregate(&semester);
        let cumulative = self.cumulative_gpa(&state.semesters, Some(current));

        debug!(
            gpa = semester.value,
            credits = semester.total_weight,
            courses = semester.included_count,
            cgpa = cumulative.value,
            total_credits = cumulative.total_weight,
            semesters = cumulative.included_count,
            "Recomputed summary"
        );

        Summary {
            semester,
            semester_standing: self.standing(semester.value),
            cumulative,
            cumulative_standing: self.standing(cumulative.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::scale::GradingScaleEntry;
    use crate::grading::standing::Standing;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_state_has_one_blank_record_each() {
        let state = CalculatorState::default();
        assert_eq!(state.courses.len(), 1);
        assert_eq!(state.semesters.len(), 1);
    }

    #[test]
    fn test_blank_state_recomputes_to_zero() {
        let summary = Calculator::default().recompute(&CalculatorState::default());
        assert_eq!(summary.gpa(), 0.0);
        assert_eq!(summary.cgpa(), 0.0);
        assert_eq!(summary.total_credits(), 0.0);
        assert_eq!(summary.semester_standing.status, Standing::Fail);
        assert_eq!(summary.cumulative.included_count, 0);
    }

    #[test]
    fn test_cannot_remove_last_record() {
        let mut state = CalculatorState::default();
        assert!(!state.remove_course(0));
        assert!(!state.remove_semester(0));

        let idx = state.add_course();
        assert_eq!(idx, 1);
        assert!(!state.remove_course(5));
        assert!(state.remove_course(0));
        assert_eq!(state.courses.len(), 1);

        state.add_semester();
        assert!(state.remove_semester(1));
        assert_eq!(state.semesters.len(), 1);
    }

    #[test]
    fn test_new_pads_empty_collections() {
        let state = CalculatorState::new(vec![], vec![]);
        assert_eq!(state.courses, vec![CourseRecord::default()]);
        assert_eq!(state.semesters, vec![SemesterRecord::default()]);
    }

    #[test]
    fn test_recompute_folds_current_semester() {
        let state = CalculatorState::new(
            vec![
                CourseRecord::new("Math", 3, Some("A")),
                CourseRecord::new("Phys", 4, Some("B+")),
            ],
            vec![SemesterRecord::new("Fall", 3.5, 15)],
        );

        let summary = Calculator::default().recompute(&state);
        assert!(approx(summary.gpa(), 25.32 / 7.0));
        assert_eq!(summary.semester_standing.status, Standing::Good);

        let expected = (3.5 * 15.0 + 25.32) / 22.0;
        assert!(approx(summary.cgpa(), expected));
        assert_eq!(summary.total_credits(), 22.0);
        assert_eq!(summary.cumulative.included_count, 2);
    }

    #[test]
    fn test_editing_grade_changes_points_immediately() {
        let calculator = Calculator::default();
        let mut state = CalculatorState::new(vec![CourseRecord::new("Math", 3, Some("C"))], vec![]);
        assert_eq!(calculator.recompute(&state).gpa(), 2.0);

        state.courses[0].letter_grade = Some("A".to_string());
        assert_eq!(calculator.recompute(&state).gpa(), 4.0);
    }

    #[test]
    fn test_all_a_minus_is_excellent() {
        let courses = vec![
            CourseRecord::new("Seminar", 1, Some("A-")),
            CourseRecord::new("Thesis", 6, Some("A-")),
        ];
        let calculator = Calculator::default();
        let gpa = calculator.semester_gpa(&courses).value;
        assert!(gpa < 3.67, "average {gpa} should round below the threshold");
        assert_eq!(calculator.standing(gpa).status, Standing::Excellent);
    }

    #[test]
    fn test_injected_scale() {
        let scale = GradingScale::new(vec![
            GradingScaleEntry::new("HD", 7.0, "High distinction", "85-100"),
            GradingScaleEntry::new("P", 4.0, "Pass", "50-64"),
            GradingScaleEntry::new("N", 0.0, "Fail", "0-49"),
        ]);
        let calculator = Calculator::new(scale, StandingClassifier::default());
        let courses = vec![
            CourseRecord::new("Math", 2, Some("HD")),
            CourseRecord::new("Phys", 2, Some("P")),
        ];

        assert_eq!(calculator.semester_gpa(&courses).value, 5.5);
        assert_eq!(calculator.scale().max_points(), 7.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let state = CalculatorState::new(
            vec![
                CourseRecord::new("Math", 3, Some("B-")),
                CourseRecord::new("Art", 2, Some("C+")),
            ],
            vec![SemesterRecord::new("Fall", 2.9, 14)],
        );
        let calculator = Calculator::default();
        assert_eq!(calculator.recompute(&state), calculator.recompute(&state));
    }
}
