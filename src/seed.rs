//! Sample data
//!
//! Three courses, a professor for each (with a login), and five students.
//! Seeding skips records whose identifier already exists, so it is safe to
//! run repeatedly.

use tracing::info;

use crate::error::GradeResult;
use crate::models::{Course, Professor, Student};
use crate::services::{AuthService, CourseService, ProfessorService, StudentService};
use crate::storage::Storage;

/// Password given to every seeded professor login
pub const DEFAULT_PASSWORD: &str = "Welcome12#_";

/// Role given to every seeded professor login
pub const PROFESSOR_ROLE: &str = "professor";

/// How many records a seeding run actually inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub courses: usize,
    pub professors: usize,
    pub logins: usize,
    pub students: usize,
}

fn sample_courses() -> Vec<Course> {
    vec![
        Course::new("DATA200", "Data Science")
            .with_description("Provides insight about DS and Python")
            .with_credits(3),
        Course::new("CS101", "Intro CS")
            .with_description("Programming fundamentals")
            .with_credits(4),
        Course::new("STAT150", "Statistics I")
            .with_description("Descriptive & inferential stats")
            .with_credits(3),
    ]
}

fn sample_professors() -> Vec<Professor> {
    vec![
        Professor::new("jhulan@mycsu.edu", "Jhulan Goswami", "Senior Professor", "DATA200"),
        Professor::new("kapil@mycsu.edu", "Kapil Dev", "Professor", "CS101"),
        Professor::new("kumble@mycsu.edu", "Anil Kumble", "Associate Prof.", "STAT150"),
    ]
}

fn sample_students() -> Vec<Student> {
    vec![
        Student::new("smriti.mandhana@mycsu.edu", "Smriti", "Mandhana", "DATA200", "A", 95.0),
        Student::new("harmanpreet.kaur@mycsu.edu", "Harmanpreet", "Kaur", "CS101", "B+", 88.0),
        Student::new("mithali.raj@mycsu.edu", "Mithali", "Raj", "STAT150", "A-", 91.0),
        Student::new("virat.kohli@mycsu.edu", "Virat", "Kohli", "DATA200", "A", 97.0),
        Student::new("rohit.sharma@mycsu.edu", "Rohit", "Sharma", "CS101", "B", 84.0),
    ]
}

/// Populate the sample data set, optionally emptying every table first
pub fn seed_sample_data(storage: &mut Storage, reset: bool) -> GradeResult<SeedSummary> {
    if reset {
        storage.reset_all()?;
    }

    let mut summary = SeedSummary::default();

    {
        let mut courses = CourseService::new(storage);
        for course in sample_courses() {
            if courses.get(&course.course_id).is_none() {
                courses.add(course)?;
                summary.courses += 1;
            }
        }
    }

    for professor in sample_professors() {
        let id = professor.professor_id.clone();

        let mut professors = ProfessorService::new(storage);
        if professors.get(&id).is_some() {
            continue;
        }
        professors.add(professor)?;
        summary.professors += 1;

        let mut auth = AuthService::new(storage);
        if auth.get(&id).is_none() {
            auth.register_user(&id, DEFAULT_PASSWORD, PROFESSOR_ROLE)?;
            summary.logins += 1;
        }
    }

    {
        let mut students = StudentService::new(storage);
        for student in sample_students() {
            if students.get(&student.email_address).is_none() {
                students.add(student)?;
                summary.students += 1;
            }
        }
    }

    info!(
        courses = summary.courses,
        professors = summary.professors,
        logins = summary.logins,
        students = summary.students,
        "Seeded sample data"
    );

    Ok(summary)
}
