//! examrep-core — Exam record validation and per-instructor reporting.
//!
//! This crate defines the driving-school domain model, the parser that turns
//! raw JSON records into validated exams, and the report builder that
//! aggregates them per instructor.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod statistics;

pub use config::{load_config, Config, Locale};
pub use error::{ExamError, LoadError, RecordError, ScoreError};
pub use model::{Exam, HasIdentity, Instructor, Participant, Person, Score, Student};
pub use parser::{collect_records, collect_results, parse_one_result, Collection};
pub use report::{build, ExamReport};
