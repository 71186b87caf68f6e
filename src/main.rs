//! CLI entry point for the GPA calculator.
//!
//! Provides subcommands for computing a semester GPA from a course list,
//! rolling prior semesters into a cumulative GPA, classifying a raw GPA,
//! printing the grading scale, and exporting a report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gpa_calc::grading::{
    Calculator, CalculatorState, CourseRecord, CurrentSemester, SemesterRecord,
    progress_percentage,
};
use gpa_calc::output::{log_result, print_json, print_pretty, write_report};
use gpa_calc::parser::{load_courses, load_semesters, warn_unknown_grades};
use gpa_calc::report::{ReportSummary, build_report};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gpa_calc")]
#[command(about = "Semester GPA and cumulative GPA calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the semester GPA from a course list
    Gpa {
        /// CSV with columns name,credit_hours,grade
        #[arg(short, long)]
        courses: PathBuf,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Calculate the cumulative GPA across semesters
    Cgpa {
        /// CSV of previous semesters with columns name,gpa,credit_hours
        #[arg(short, long)]
        semesters: PathBuf,

        /// Optional: current semester courses, folded in as one more semester
        #[arg(short, long)]
        courses: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the academic standing for a GPA
    Classify {
        #[arg(value_name = "GPA", allow_negative_numbers = true)]
        gpa: f64,

        /// Denominator of the progress percentage [default: top of the scale]
        #[arg(long)]
        max_gpa: Option<f64>,
    },
    /// Print the grading scale
    Scale {
        /// Print the scale as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Export a Markdown report of GPA, CGPA and total credits
    Report {
        #[arg(short, long)]
        courses: Option<PathBuf>,

        #[arg(short, long)]
        semesters: Option<PathBuf>,

        #[arg(long)]
        student_name: Option<String>,

        #[arg(short, long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gpa_calc.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gpa_calc.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let calculator = Calculator::default();

    match cli.command {
        Commands::Gpa { courses, json } => {
            let courses = load_courses(&courses)?;
            warn_unknown_grades(&courses, calculator.scale());

            let result = calculator.semester_gpa(&courses);
            let standing = calculator.standing(result.value);
            log_result("semester", &result, &standing);

            if json {
                print_json(&serde_json::json!({ "result": result, "standing": standing }))?;
            } else {
                println!(
                    "Semester GPA {:.2} over {} credits from {} courses: {}",
                    result.value, result.total_weight, result.included_count, standing.label
                );
            }
        }
        Commands::Cgpa {
            semesters,
            courses,
            json,
        } => {
            let semesters = load_semesters(&semesters)?;
            let current = match courses {
                Some(path) => {
                    let courses = load_courses(&path)?;
                    warn_unknown_grades(&courses, calculator.scale());
                    let semester = calculator.semester_gpa(&courses);
                    info!(
                        gpa = semester.value,
                        credits = semester.total_weight,
                        "Including current semester"
                    );
                    Some(CurrentSemester::from_aggregate(&semester))
                }
                None => None,
            };

            let result = calculator.cumulative_gpa(&semesters, current);
            let standing = calculator.standing(result.value);
            log_result("cumulative", &result, &standing);

            if json {
                print_json(&serde_json::json!({ "result": result, "standing": standing }))?;
            } else {
                println!(
                    "Cumulative GPA {:.2} over {} credits from {} semesters: {}",
                    result.value, result.total_weight, result.included_count, standing.label
                );
            }
        }
        Commands::Classify { gpa, max_gpa } => {
            let max_gpa = max_gpa.unwrap_or(calculator.classifier().max_gpa());
            let classification = calculator.classifier().classify(gpa);
            println!(
                "{:.2}: {} ({}%), progress {:.1}% of {}",
                gpa,
                classification.status,
                classification.percentage,
                progress_percentage(gpa, max_gpa),
                max_gpa
            );
        }
        Commands::Scale { json } => {
            let entries: Vec<_> = calculator.scale().entries().collect();
            if json {
                print_json(&entries)?;
            } else {
                for entry in entries {
                    println!(
                        "{:<3} {:.2}  {:<17} {}",
                        entry.letter_grade, entry.points, entry.label, entry.display_range
                    );
                }
            }
        }
        Commands::Report {
            courses,
            semesters,
            student_name,
            out,
        } => {
            let courses: Vec<CourseRecord> = match courses {
                Some(path) => load_courses(&path)?,
                None => Vec::new(),
            };
            let semesters: Vec<SemesterRecord> = match semesters {
                Some(path) => load_semesters(&path)?,
                None => Vec::new(),
            };
            warn_unknown_grades(&courses, calculator.scale());

            let state = CalculatorState::new(courses, semesters);
            let summary = calculator.recompute(&state);
            print_pretty(&summary);

            let report = ReportSummary::from_summary(&summary, student_name.as_deref());
            let text = build_report(&report, calculator.scale(), calculator.classifier());
            write_report(&out, &text)?;

            info!(
                gpa = %format!("{:.2}", report.gpa),
                cgpa = %format!("{:.2}", report.cgpa),
                total_credits = report.total_credits,
                "Report exported"
            );
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
