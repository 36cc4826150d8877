//! Per-instructor text report.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{Config, Locale};
use crate::model::Exam;
use crate::parser::collect_results;
use crate::statistics::{group_by_instructor, InstructorStats};

/// Exam counts and average scores, one entry per instructor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamReport {
    /// Instructor groups in first-seen order.
    pub instructors: Vec<InstructorStats>,
    pub locale: Locale,
}

impl ExamReport {
    pub fn from_exams(exams: &[Exam], locale: Locale) -> Self {
        Self {
            instructors: group_by_instructor(exams),
            locale,
        }
    }

    /// Render the report, one newline-terminated line per instructor.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for stats in &self.instructors {
            let line = match self.locale {
                Locale::Ru => format!(
                    "{}: количество экзаменов = {}, средняя оценка = {:.3}\n",
                    stats.fio,
                    stats.count,
                    stats.average()
                ),
                Locale::En => format!(
                    "{}: exams = {}, average score = {:.3}\n",
                    stats.fio,
                    stats.count,
                    stats.average()
                ),
            };
            out.push_str(&line);
        }
        out
    }

    /// Write the rendered report, creating or truncating the file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.render())
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}

/// Collect exams from `source`, build the report and write it to `report`.
///
/// An unreadable source yields an empty report; only a failure to write the
/// report is returned as an error.
pub fn build(source: &Path, report: &Path, config: &Config) -> Result<ExamReport> {
    let collection = collect_results(source);
    let exam_report = ExamReport::from_exams(&collection.exams, config.locale);
    exam_report.save(report)?;

    tracing::info!(
        "report written to {}: {} instructor(s), {} exam(s), {} record(s) skipped",
        report.display(),
        exam_report.instructors.len(),
        collection.exams.len(),
        collection.rejected.len()
    );

    Ok(exam_report)
}
