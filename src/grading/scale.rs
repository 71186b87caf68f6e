use serde::Serialize;

/// One row of a grading scale: a letter grade and the points it is worth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradingScaleEntry {
    pub letter_grade: String,
    pub points: f64,
    pub label: String,
    pub display_range: String,
}

impl GradingScaleEntry {
    pub fn new(letter_grade: &str, points: f64, label: &str, display_range: &str) -> Self {
        Self {
            letter_grade: letter_grade.to_string(),
            points,
            label: label.to_string(),
            display_range: display_range.to_string(),
        }
    }
}

/// The default scale, highest grade first.
static DEFAULT_SCALE: &[(&str, f64, &str, &str)] = &[
    ("A", 4.00, "Excellent", "86-100%"),
    ("A-", 3.67, "Excellent", "82-85%"),
    ("B+", 3.33, "Good", "78-81%"),
    ("B", 3.00, "Good", "74-77%"),
    ("B-", 2.67, "Good", "70-73%"),
    ("C+", 2.33, "Satisfactory", "66-69%"),
    ("C", 2.00, "Satisfactory", "62-65%"),
    ("C-", 1.67, "Satisfactory", "58-61%"),
    ("D+", 1.33, "Poor but passing", "54-57%"),
    ("D", 1.00, "Poor but passing", "50-53%"),
    ("F", 0.00, "Fail", "Below 50%"),
];

/// An immutable, ordered mapping from letter grade to grade points.
///
/// Lookups are total: an unrecognized letter resolves to the lowest entry
/// of the scale (the `F` row of the default scale), so a half-filled form
/// still produces a provisional GPA. Use [`GradingScale::lookup`] when the
/// caller needs to tell an unknown grade apart from a real `F`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingScale {
    entries: Vec<GradingScaleEntry>,
    fallback: GradingScaleEntry,
}

impl GradingScale {
    /// Builds a scale from `entries`, sorted highest points first.
    ///
    /// The lowest-scoring entry becomes the fallback for unknown grades. An
    /// empty list yields a scale whose fallback is a synthetic `F` at 0.00.
    pub fn new(mut entries: Vec<GradingScaleEntry>) -> Self {
        entries.sort_by(|a, b| b.points.total_cmp(&a.points));

        let fallback = entries
            .last()
            .cloned()
            .unwrap_or_else(|| GradingScaleEntry::new("F", 0.0, "Fail", "Below 50%"));

        Self { entries, fallback }
    }

    /// Returns the entry for `letter_grade`, if the scale defines it.
    pub fn lookup(&self, letter_grade: &str) -> Option<&GradingScaleEntry> {
        self.entries.iter().find(|e| e.letter_grade == letter_grade)
    }

    /// Returns the entry for `letter_grade`, falling back to the lowest entry.
    pub fn entry_for(&self, letter_grade: &str) -> &GradingScaleEntry {
        self.lookup(letter_grade).unwrap_or(&self.fallback)
    }

    pub fn points_for(&self, letter_grade: &str) -> f64 {
        self.entry_for(letter_grade).points
    }

    pub fn entries(&self) -> impl Iterator<Item = &GradingScaleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest point value on the scale; the denominator of progress bars.
    pub fn max_points(&self) -> f64 {
        self.entries.first().map(|e| e.points).unwrap_or(0.0)
    }
}

impl Default for GradingScale {
    fn default() -> Self {
        Self::new(
            DEFAULT_SCALE
                .iter()
                .map(|&(grade, points, label, range)| {
                    GradingScaleEntry::new(grade, points, label, range)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points() {
        let scale = GradingScale::default();
        assert_eq!(scale.points_for("A"), 4.00);
        assert_eq!(scale.points_for("A-"), 3.67);
        assert_eq!(scale.points_for("B+"), 3.33);
        assert_eq!(scale.points_for("B"), 3.00);
        assert_eq!(scale.points_for("B-"), 2.67);
        assert_eq!(scale.points_for("C+"), 2.33);
        assert_eq!(scale.points_for("C"), 2.00);
        assert_eq!(scale.points_for("C-"), 1.67);
        assert_eq!(scale.points_for("D+"), 1.33);
        assert_eq!(scale.points_for("D"), 1.00);
        assert_eq!(scale.points_for("F"), 0.00);
    }

    #[test]
    fn test_default_has_eleven_strictly_decreasing_entries() {
        let scale = GradingScale::default();
        assert_eq!(scale.len(), 11);

        let points: Vec<f64> = scale.entries().map(|e| e.points).collect();
        for pair in points.windows(2) {
            assert!(pair[0] > pair[1], "{} should exceed {}", pair[0], pair[1]);
        }
        assert_eq!(scale.max_points(), 4.0);
    }

    #[test]
    fn test_unknown_grade_falls_back_to_f() {
        let scale = GradingScale::default();
        assert_eq!(scale.points_for("Z"), 0.0);
        assert_eq!(scale.points_for(""), 0.0);
        assert_eq!(scale.points_for("b+"), 0.0);
        assert_eq!(scale.entry_for("A+").letter_grade, "F");
        assert_eq!(scale.entry_for("A+").label, "Fail");
    }

    #[test]
    fn test_lookup_distinguishes_unknown_from_f() {
        let scale = GradingScale::default();
        assert!(scale.lookup("F").is_some());
        assert!(scale.lookup("E").is_none());
    }

    #[test]
    fn test_entry_metadata() {
        let scale = GradingScale::default();
        let entry = scale.entry_for("D+");
        assert_eq!(entry.label, "Poor but passing");
        assert_eq!(entry.display_range, "54-57%");
    }

    #[test]
    fn test_custom_scale_is_sorted_and_uses_lowest_as_fallback() {
        let scale = GradingScale::new(vec![
            GradingScaleEntry::new("Fail", 0.0, "Fail", "0-49"),
            GradingScaleEntry::new("Pass", 5.0, "Pass", "50-100"),
        ]);

        assert_eq!(scale.max_points(), 5.0);
        assert_eq!(scale.entries().next().unwrap().letter_grade, "Pass");
        assert_eq!(scale.points_for("Pass"), 5.0);
        assert_eq!(scale.entry_for("A").letter_grade, "Fail");
    }

    #[test]
    fn test_empty_scale_still_total() {
        let scale = GradingScale::new(vec![]);
        assert!(scale.is_empty());
        assert_eq!(scale.points_for("A"), 0.0);
        assert_eq!(scale.max_points(), 0.0);
    }
}
