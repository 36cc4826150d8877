//! Per-instructor aggregate statistics.
//!
//! Exams are grouped by the instructor's full name, so two instructors who
//! share a name end up in the same group. Groups keep the order in which each
//! name was first seen.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Exam, HasIdentity};

/// Exam count and score total for one instructor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructorStats {
    pub fio: String,
    pub count: usize,
    pub score_sum: u64,
}

impl InstructorStats {
    fn new(fio: &str) -> Self {
        Self {
            fio: fio.to_string(),
            count: 0,
            score_sum: 0,
        }
    }

    fn record(&mut self, score: u8) {
        self.count += 1;
        self.score_sum += u64::from(score);
    }

    /// Arithmetic mean of the recorded scores, or 0.0 for an empty group.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.score_sum as f64 / self.count as f64
    }
}

/// Group exams by instructor name, in first-seen order.
pub fn group_by_instructor(exams: &[Exam]) -> Vec<InstructorStats> {
    let mut groups: Vec<InstructorStats> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for exam in exams {
        let fio = exam.instructor().fio();
        let slot = *index.entry(fio).or_insert_with(|| {
            groups.push(InstructorStats::new(fio));
            groups.len() - 1
        });
        groups[slot].record(exam.student().score().value());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Instructor, Student};

    fn exam(instructor: &str, car: &str, score: i64) -> Exam {
        Exam::new(
            Instructor::new(instructor, 40, car),
            Student::new("Student", 20, score).unwrap(),
            "01-02-2020T09:30",
        )
        .unwrap()
    }

    #[test]
    fn average_of_group() {
        let groups = group_by_instructor(&[exam("Ivanov", "Lada", 5), exam("Ivanov", "Lada", 3)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].score_sum, 8);
        assert!((groups[0].average() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn first_seen_order() {
        let groups = group_by_instructor(&[
            exam("Petrov", "Lada", 2),
            exam("Ivanov", "Kia", 5),
            exam("Petrov", "Lada", 4),
            exam("Sidorov", "VW", 1),
        ]);
        let names: Vec<_> = groups.iter().map(|g| g.fio.as_str()).collect();
        assert_eq!(names, vec!["Petrov", "Ivanov", "Sidorov"]);
        assert_eq!(groups[0].count, 2);
    }

    #[test]
    fn same_name_different_instructors_merge() {
        let groups = group_by_instructor(&[exam("Ivanov", "Lada", 5), exam("Ivanov", "Kia", 2)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count, 2);
    }

    #[test]
    fn empty_input() {
        assert!(group_by_instructor(&[]).is_empty());
        assert_eq!(InstructorStats::new("x").average(), 0.0);
    }
}
