//! Read-only reports over the in-memory tables
//!
//! Joins are nested linear scans; nothing is indexed.

use serde::Serialize;

use crate::models::{Course, Professor, Student};
use crate::storage::Storage;

/// Descriptive statistics of marks within one course
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CourseStats {
    /// Mean marks, rounded to 3 decimals; 0.0 for an empty course
    pub average: f64,
    /// Median marks, rounded to 3 decimals; 0.0 for an empty course
    pub median: f64,
    /// Number of students counted
    pub count: usize,
}

/// A professor, their course (if it exists) and the students enrolled in it
#[derive(Debug, Clone, PartialEq)]
pub struct ProfessorReport {
    pub professor: Professor,
    pub course: Option<Course>,
    pub students: Vec<Student>,
}

/// Service for reports and statistics
pub struct ReportService<'a> {
    storage: &'a Storage,
}

impl<'a> ReportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Average and median marks of the students enrolled in `course_id`
    pub fn stats_for_course(&self, course_id: &str) -> CourseStats {
        let marks: Vec<f64> = self
            .students_in(course_id)
            .into_iter()
            .map(|s| s.marks)
            .collect();

        CourseStats {
            average: round3(mean(&marks)),
            median: round3(median(&marks)),
            count: marks.len(),
        }
    }

    /// Students enrolled in `course_id`, in stored order
    pub fn report_by_course(&self, course_id: &str) -> Vec<Student> {
        self.students_in(course_id).into_iter().cloned().collect()
    }

    /// For each professor with this id: their course and its students
    pub fn report_by_professor(&self, professor_id: &str) -> Vec<ProfessorReport> {
        self.storage
            .professors
            .rows()
            .iter()
            .filter(|p| p.professor_id == professor_id)
            .map(|professor| ProfessorReport {
                professor: professor.clone(),
                course: self.storage.courses.find(&professor.course_id).cloned(),
                students: self.report_by_course(&professor.course_id),
            })
            .collect()
    }

    /// The student with this email, if any
    pub fn report_by_student(&self, email: &str) -> Option<Student> {
        self.storage.students.find(email).cloned()
    }

    fn students_in(&self, course_id: &str) -> Vec<&'a Student> {
        self.storage
            .students
            .rows()
            .iter()
            .filter(|s| s.course_id == course_id)
            .collect()
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Round to 3 decimals from the exact binary value, so `1.0005` (stored just
/// below the halfway point) becomes `1.0`.
fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}
