use crate::grading::scale::GradingScale;
use crate::grading::types::{AggregateResult, CourseRecord, CurrentSemester, SemesterRecord};

/// A record that contributes `value` to a weighted average with `weight`.
pub trait Weighted {
    fn weight(&self) -> f64;
    fn value(&self) -> f64;
}

/// `(weight, value)` pairs.
impl Weighted for (f64, f64) {
    fn weight(&self) -> f64 {
        self.0
    }

    fn value(&self) -> f64 {
        self.1
    }
}

impl<T: Weighted + ?Sized> Weighted for &T {
    fn weight(&self) -> f64 {
        (**self).weight()
    }

    fn value(&self) -> f64 {
        (**self).value()
    }
}

/// Computes the weighted average of the records accepted by `is_valid`.
///
/// Rejected records contribute nothing. When the accepted weights sum to
/// zero the average is `0.0` rather than a division by zero.
pub fn weighted_average<I, F>(records: I, is_valid: F) -> AggregateResult
where
    I: IntoIterator,
    I::Item: Weighted,
    F: Fn(&I::Item) -> bool,
{
    let mut total_points = 0.0;
    let mut total_weight = 0.0;
    let mut included_count = 0usize;

    for record in records.into_iter().filter(|r| is_valid(r)) {
        total_points += record.weight() * record.value();
        total_weight += record.weight();
        included_count += 1;
    }

    let value = if total_weight > 0.0 {
        total_points / total_weight
    } else {
        0.0
    };

    AggregateResult {
        value,
        total_points,
        total_weight,
        included_count,
    }
}

/// Credit-weighted GPA of one semester's courses.
pub fn semester_gpa(courses: &[CourseRecord], scale: &GradingScale) -> AggregateResult {
    weighted_average(courses.iter().map(|c| c.graded(scale)), |g| {
        g.course.is_valid()
    })
}

/// One input to the cumulative GPA: a prior semester or the current one.
#[derive(Debug, Clone, Copy)]
pub enum CumulativeEntry<'a> {
    Prior(&'a SemesterRecord),
    Current(CurrentSemester),
}

impl CumulativeEntry<'_> {
    pub fn is_valid(&self) -> bool {
        match self {
            CumulativeEntry::Prior(s) => s.is_valid(),
            CumulativeEntry::Current(c) => c.is_included(),
        }
    }
}

impl Weighted for CumulativeEntry<'_> {
    fn weight(&self) -> f64 {
        match self {
            CumulativeEntry::Prior(s) => s.weight(),
            CumulativeEntry::Current(c) => c.weight(),
        }
    }

    fn value(&self) -> f64 {
        match self {
            CumulativeEntry::Prior(s) => s.value(),
            CumulativeEntry::Current(c) => c.value(),
        }
    }
}

/// Credit-weighted GPA across prior semesters, optionally including the
/// current semester as one more record.
///
/// `included_count` is the number of valid prior semesters plus one when
/// the current semester was folded in.
pub fn cumulative_gpa(
    semesters: &[SemesterRecord],
    current: Option<CurrentSemester>,
) -> AggregateResult {
    let entries = semesters
        .iter()
        .map(CumulativeEntry::Prior)
        .chain(current.map(CumulativeEntry::Current));

    weighted_average(entries, CumulativeEntry::is_valid)
}
