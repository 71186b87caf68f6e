pub mod grading;
pub mod output;
pub mod parser;
pub mod report;
