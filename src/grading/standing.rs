use serde::Serialize;
use std::fmt;

/// Slack applied to band thresholds so that an average which should land
/// exactly on a boundary (all `A-` courses, say) is not pushed below it by
/// floating-point rounding.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Default denominator of the progress bar.
pub const DEFAULT_MAX_GPA: f64 = 4.0;

/// Minimum GPA rendered as a success rather than a warning.
pub const MINIMUM_GOOD_STANDING: f64 = 2.0;

/// Academic standing band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Standing {
    Fail,
    PoorButPassing,
    Satisfactory,
    Good,
    Excellent,
}

impl Standing {
    pub fn label(&self) -> &'static str {
        match self {
            Standing::Excellent => "Excellent",
            Standing::Good => "Good",
            Standing::Satisfactory => "Satisfactory",
            Standing::PoorButPassing => "Poor but Passing",
            Standing::Fail => "Fail",
        }
    }

    /// Colour/severity tag used by displays.
    pub fn tone(&self) -> Tone {
        match self {
            Standing::Excellent => Tone::Secondary,
            Standing::Good => Tone::Primary,
            Standing::Satisfactory => Tone::Accent,
            Standing::PoorButPassing => Tone::Warning,
            Standing::Fail => Tone::Destructive,
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Secondary,
    Primary,
    Accent,
    Warning,
    Destructive,
}

/// A lower GPA bound and what a GPA at or above it is classified as.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandingBand {
    pub min_gpa: f64,
    pub standing: Standing,
    pub percentage: f64,
}

static DEFAULT_BANDS: &[StandingBand] = &[
    StandingBand {
        min_gpa: 3.67,
        standing: Standing::Excellent,
        percentage: 100.0,
    },
    StandingBand {
        min_gpa: 3.00,
        standing: Standing::Good,
        percentage: 85.0,
    },
    StandingBand {
        min_gpa: 2.00,
        standing: Standing::Satisfactory,
        percentage: 60.0,
    },
    StandingBand {
        min_gpa: 1.00,
        standing: Standing::PoorButPassing,
        percentage: 35.0,
    },
];

/// Banded classification of a GPA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub status: Standing,
    pub percentage: f64,
}

/// Everything a display needs to render a GPA: the coarse badge and the
/// continuous progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandingReport {
    pub gpa: f64,
    pub status: Standing,
    pub label: &'static str,
    pub tone: Tone,
    pub percentage: f64,
    pub progress_percentage: f64,
    pub max_gpa: f64,
    pub meets_minimum: bool,
}

/// Maps a GPA to a standing band.
///
/// | GPA >= | Standing         | Percentage |
/// |--------|------------------|------------|
/// | 3.67   | Excellent        | 100        |
/// | 3.00   | Good             | 85         |
/// | 2.00   | Satisfactory     | 60         |
/// | 1.00   | Poor but Passing | 35         |
/// | else   | Fail             | 10         |
///
/// Bands are checked top-down and the first match wins. Anything below the
/// lowest band, including negative and NaN input, is a fail.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingClassifier {
    bands: Vec<StandingBand>,
    fail_percentage: f64,
    max_gpa: f64,
}

impl StandingClassifier {
    pub fn new(mut bands: Vec<StandingBand>, fail_percentage: f64, max_gpa: f64) -> Self {
        bands.sort_by(|a, b| b.min_gpa.total_cmp(&a.min_gpa));
        Self {
            bands,
            fail_percentage,
            max_gpa,
        }
    }

    pub fn max_gpa(&self) -> f64 {
        self.max_gpa
    }

    pub fn bands(&self) -> &[StandingBand] {
        &self.bands
    }

    pub fn classify(&self, gpa: f64) -> Classification {
        self.bands
            .iter()
            .find(|band| gpa + BOUNDARY_EPSILON >= band.min_gpa)
            .map(|band| Classification {
                status: band.standing,
                percentage: band.percentage,
            })
            .unwrap_or(Classification {
                status: Standing::Fail,
                percentage: self.fail_percentage,
            })
    }

    pub fn progress_percentage(&self, gpa: f64) -> f64 {
        progress_percentage(gpa, self.max_gpa)
    }

    pub fn report(&self, gpa: f64) -> StandingReport {
        let Classification { status, percentage } = self.classify(gpa);
        StandingReport {
            gpa,
            status,
            label: status.label(),
            tone: status.tone(),
            percentage,
            progress_percentage: self.progress_percentage(gpa),
            max_gpa: self.max_gpa,
            meets_minimum: gpa + BOUNDARY_EPSILON >= MINIMUM_GOOD_STANDING,
        }
    }
}

impl Default for StandingClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_BANDS.to_vec(), 10.0, DEFAULT_MAX_GPA)
    }
}

/// Classifies `gpa` against the default bands.
pub fn classify(gpa: f64) -> Classification {
    StandingClassifier::default().classify(gpa)
}

/// Share of `max_gpa` reached by `gpa`, as a percentage. Not clamped; a
/// non-positive `max_gpa` yields 0.
pub fn progress_percentage(gpa: f64, max_gpa: f64) -> f64 {
    if max_gpa <= 0.0 {
        0.0
    } else {
        (gpa / max_gpa) * 100.0
    }
}
