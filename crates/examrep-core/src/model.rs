//! Core data model types for examrep.
//!
//! A driving-school exam links one [`Instructor`], one [`Student`] and the
//! point in time it took place. Identity fields are set once at construction
//! and never change afterwards; the student's score is the only mutable field
//! and every assignment goes through validation.
//!
//! Fields are private, so assigning to them outside this crate is rejected at
//! compile time:
//!
//! ```compile_fail
//! use examrep_core::model::Person;
//!
//! let mut person = Person::new("First Last Name", 10);
//! person.fio = "New Name".to_string();
//! ```
//!
//! The same holds for the participants of an exam:
//!
//! ```compile_fail
//! use examrep_core::model::{Exam, Instructor, Student};
//!
//! let instructor = Instructor::new("Inst", 30, "Car");
//! let student = Student::new("Name", 20, 5).unwrap();
//! let mut exam = Exam::new(instructor.clone(), student, "11-11-2011T11:11").unwrap();
//! exam.instructor = instructor;
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{ExamError, ScoreError};

/// Format of exam dates in the results file (24-hour clock).
pub const EXAM_DATE_FORMAT: &str = "%d-%m-%YT%H:%M";

/// Lowest permitted score.
pub const MIN_SCORE: i64 = 1;
/// Highest permitted score.
pub const MAX_SCORE: i64 = 5;

/// Attributes shared by everyone taking part in an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    fio: String,
    age: i64,
}

impl Person {
    /// Create a person. Neither field is validated.
    pub fn new(fio: impl Into<String>, age: i64) -> Self {
        Self {
            fio: fio.into(),
            age,
        }
    }

    /// Full name.
    pub fn fio(&self) -> &str {
        &self.fio
    }

    /// Age in years.
    pub fn age(&self) -> i64 {
        self.age
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person({}, age={})", self.fio, self.age)
    }
}

/// Anything carrying a full name and an age.
pub trait HasIdentity {
    fn person(&self) -> &Person;

    fn fio(&self) -> &str {
        self.person().fio()
    }

    fn age(&self) -> i64 {
        self.person().age()
    }
}

impl HasIdentity for Person {
    fn person(&self) -> &Person {
        self
    }
}

/// A driving-school instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instructor {
    #[serde(flatten)]
    person: Person,
    car: String,
}

impl Instructor {
    /// Create an instructor. No field is validated.
    pub fn new(fio: impl Into<String>, age: i64, car: impl Into<String>) -> Self {
        Self {
            person: Person::new(fio, age),
            car: car.into(),
        }
    }

    /// Identifier of the car the instructor examines in.
    pub fn car(&self) -> &str {
        &self.car
    }
}

impl HasIdentity for Instructor {
    fn person(&self) -> &Person {
        &self.person
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Instructor({}, age={}, car={})",
            self.fio(),
            self.age(),
            self.car
        )
    }
}

/// An exam score, always within 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Validate `value` against the 1-5 range.
    pub fn new(value: i64) -> Result<Self, ScoreError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(ScoreError { value });
        }
        // In range, so the narrowing cast is lossless.
        Ok(Self(value as u8))
    }

    /// The score as a plain number.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A driving-school student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    score: Score,
}

impl Student {
    /// Create a student, failing if `score` is outside 1-5.
    pub fn new(fio: impl Into<String>, age: i64, score: i64) -> Result<Self, ScoreError> {
        Ok(Self {
            person: Person::new(fio, age),
            score: Score::new(score)?,
        })
    }

    /// Current exam score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Replace the score. On error the previous score is kept.
    pub fn set_score(&mut self, value: i64) -> Result<(), ScoreError> {
        self.score = Score::new(value)?;
        Ok(())
    }
}

impl HasIdentity for Student {
    fn person(&self) -> &Person {
        &self.person
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student({}, age={}, score={})",
            self.fio(),
            self.age(),
            self.score
        )
    }
}

/// An exam slot whose kind is only known at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Participant {
    Person(Person),
    Instructor(Instructor),
    Student(Student),
}

impl Participant {
    /// Name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Participant::Person(_) => "Person",
            Participant::Instructor(_) => "Instructor",
            Participant::Student(_) => "Student",
        }
    }
}

impl From<Person> for Participant {
    fn from(p: Person) -> Self {
        Participant::Person(p)
    }
}

impl From<Instructor> for Participant {
    fn from(i: Instructor) -> Self {
        Participant::Instructor(i)
    }
}

impl From<Student> for Participant {
    fn from(s: Student) -> Self {
        Participant::Student(s)
    }
}

/// Result of one driving exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exam {
    instructor: Instructor,
    student: Student,
    date: NaiveDateTime,
}

impl Exam {
    /// Create an exam, parsing `date` as `DD-MM-YYYYTHH:MM`.
    pub fn new(instructor: Instructor, student: Student, date: &str) -> Result<Self, ExamError> {
        let date = parse_exam_date(date)?;
        Ok(Self {
            instructor,
            student,
            date,
        })
    }

    /// Create an exam from untyped slots, checking each holds the right kind.
    pub fn from_participants(
        instructor: impl Into<Participant>,
        student: impl Into<Participant>,
        date: &str,
    ) -> Result<Self, ExamError> {
        let instructor = match instructor.into() {
            Participant::Instructor(i) => i,
            other => {
                return Err(ExamError::Property {
                    slot: "instructor",
                    expected: "Instructor",
                    found: other.kind(),
                })
            }
        };
        let student = match student.into() {
            Participant::Student(s) => s,
            other => {
                return Err(ExamError::Property {
                    slot: "student",
                    expected: "Student",
                    found: other.kind(),
                })
            }
        };
        Self::new(instructor, student, date)
    }

    /// Instructor who conducted the exam.
    pub fn instructor(&self) -> &Instructor {
        &self.instructor
    }

    /// Student who took the exam.
    pub fn student(&self) -> &Student {
        &self.student
    }

    /// When the exam took place.
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exam({}, {}, date={})",
            self.instructor, self.student, self.date
        )
    }
}

fn parse_exam_date(value: &str) -> Result<NaiveDateTime, ExamError> {
    NaiveDateTime::parse_from_str(value, EXAM_DATE_FORMAT).map_err(|e| ExamError::Date {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
