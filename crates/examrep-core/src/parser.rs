//! JSON exam record parser and batch collector.
//!
//! Turns raw records from a results file into validated [`Exam`]s. A bad
//! record never aborts the batch: it is logged with its 1-based position and
//! skipped.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{LoadError, RecordError};
use crate::model::{Exam, Instructor, Student};

/// Outcome of collecting a batch of records.
#[derive(Debug, Default)]
pub struct Collection {
    /// Successfully validated exams, in input order.
    pub exams: Vec<Exam>,
    /// Records that were skipped.
    pub rejected: Vec<RejectedRecord>,
}

/// A record that failed to parse.
#[derive(Debug, Clone)]
pub struct RejectedRecord {
    /// 1-based position in the input array.
    pub position: usize,
    pub error: RecordError,
}

/// Convert one raw record into a validated exam.
pub fn parse_one_result(doc: &Value) -> Result<Exam, RecordError> {
    let doc = as_object(doc, "record")?;

    let student_doc = object_field(doc, "student")?;
    let student = Student::new(
        string_field(student_doc, "student", "name")?,
        integer_field(student_doc, "student", "age")?,
        score_field(student_doc, "student", "score")?,
    )?;

    let instructor_doc = object_field(doc, "instructor")?;
    let instructor = Instructor::new(
        string_field(instructor_doc, "instructor", "name")?,
        integer_field(instructor_doc, "instructor", "age")?,
        string_field(instructor_doc, "instructor", "car")?,
    );

    let date = match doc.get("date") {
        Some(Value::String(s)) => s.as_str(),
        Some(_) => {
            return Err(RecordError::InvalidType {
                path: "date".into(),
                expected: "a string",
            })
        }
        None => {
            return Err(RecordError::MissingField {
                path: "date".into(),
            })
        }
    };

    let exam = Exam::new(instructor, student, date)?;
    tracing::debug!("adding exam result: {exam}");
    Ok(exam)
}

/// Parse every record, keeping the valid ones and logging the rest.
pub fn collect_records(records: &[Value]) -> Collection {
    let mut collection = Collection::default();

    for (idx, record) in records.iter().enumerate() {
        let position = idx + 1;
        match parse_one_result(record) {
            Ok(exam) => collection.exams.push(exam),
            Err(error) => {
                tracing::error!("error reading record {position}: {error}");
                collection.rejected.push(RejectedRecord { position, error });
            }
        }
    }

    collection
}

/// Load the results file and collect its exams.
///
/// If the file cannot be read or is not a JSON array, the failure is logged
/// and an empty collection is returned.
pub fn collect_results(path: &Path) -> Collection {
    tracing::debug!("collecting results from {}", path.display());

    match load_records(path) {
        Ok(records) => {
            let collection = collect_records(&records);
            let invalid = collection
                .rejected
                .iter()
                .filter(|r| r.error.is_validation())
                .count();
            tracing::debug!(
                "collected {} exam(s), rejected {} ({} failed validation)",
                collection.exams.len(),
                collection.rejected.len(),
                invalid
            );
            collection
        }
        Err(e) => {
            tracing::error!("error reading exam results: {e}");
            Collection::default()
        }
    }
}

/// Read the raw record array from a results file.
pub fn load_records(path: &Path) -> Result<Vec<Value>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(records) => Ok(records),
        _ => Err(LoadError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, RecordError> {
    value.as_object().ok_or_else(|| RecordError::NotAnObject {
        path: path.to_string(),
    })
}

fn object_field<'a>(
    doc: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Map<String, Value>, RecordError> {
    let value = doc.get(key).ok_or_else(|| RecordError::MissingField {
        path: key.to_string(),
    })?;
    as_object(value, key)
}

fn lookup<'a>(
    section: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<&'a Value, RecordError> {
    section.get(key).ok_or_else(|| RecordError::MissingField {
        path: format!("{parent}.{key}"),
    })
}

fn string_field<'a>(
    section: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<&'a str, RecordError> {
    lookup(section, parent, key)?
        .as_str()
        .ok_or_else(|| RecordError::InvalidType {
            path: format!("{parent}.{key}"),
            expected: "a string",
        })
}

fn integer_field(
    section: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<i64, RecordError> {
    lookup(section, parent, key)?
        .as_i64()
        .ok_or_else(|| RecordError::InvalidType {
            path: format!("{parent}.{key}"),
            expected: "an integer",
        })
}

/// Scores may arrive as integers, floats (truncated toward zero) or strings
/// holding an integer.
fn score_field(section: &Map<String, Value>, parent: &str, key: &str) -> Result<i64, RecordError> {
    let value = lookup(section, parent, key)?;
    let coerced = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_float)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    coerced.ok_or_else(|| RecordError::InvalidType {
        path: format!("{parent}.{key}"),
        expected: "an integer",
    })
}

fn truncate_float(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    // i64::MAX is not representable as f64; the upper bound is exclusive.
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}
