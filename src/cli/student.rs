//! Student CLI commands

use clap::Subcommand;

use crate::display::student::{format_student_details, format_student_list};
use crate::error::{GradeError, GradeResult};
use crate::models::{parse_marks, Student, StudentFilter, StudentSortKey, StudentUpdate};
use crate::services::StudentService;
use crate::storage::Storage;

use super::parse_key_val;

/// Student subcommands
#[derive(Subcommand)]
pub enum StudentCommands {
    /// Enroll a new student
    Add {
        /// Email address (unique)
        email: String,
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Course ID
        #[arg(short, long)]
        course: String,
        /// Letter grade
        #[arg(short, long, default_value = "")]
        grade: String,
        /// Marks; anything unparseable becomes 0
        #[arg(short, long, default_value = "0")]
        marks: String,
    },
    /// List all students
    List,
    /// Show a student's details
    Show {
        /// Email address
        email: String,
    },
    /// Update fields by name, e.g. `--set marks=97 --set grade=A+`
    Update {
        /// Email address
        email: String,
        /// FIELD=VALUE (email_address, first_name, last_name, course_id, grade, marks)
        #[arg(short, long = "set", value_parser = parse_key_val)]
        set: Vec<(String, String)>,
    },
    /// Delete a student
    Delete {
        /// Email address
        email: String,
    },
    /// Search students; all given criteria must match
    Search {
        /// Course ID
        #[arg(short, long)]
        course: Option<String>,
        /// Email suffix, e.g. "@mycsu.edu"
        #[arg(short, long)]
        email_suffix: Option<String>,
        /// Substring of first or last name (case-insensitive)
        #[arg(short, long)]
        name: Option<String>,
        /// Minimum marks (inclusive)
        #[arg(long)]
        min_marks: Option<f64>,
        /// Maximum marks (inclusive)
        #[arg(long)]
        max_marks: Option<f64>,
    },
    /// Sort the student file in place
    Sort {
        /// Attribute to sort by (email_address, first_name, last_name, course_id, grade, marks)
        #[arg(default_value = "last_name")]
        key: String,
        /// Sort descending
        #[arg(short, long)]
        reverse: bool,
    },
}

/// Handle a student command
pub fn handle_student_command(storage: &mut Storage, cmd: StudentCommands) -> GradeResult<()> {
    let mut service = StudentService::new(storage);

    match cmd {
        StudentCommands::Add {
            email,
            first_name,
            last_name,
            course,
            grade,
            marks,
        } => {
            let student = Student::new(
                email,
                first_name,
                last_name,
                course,
                grade,
                parse_marks(&marks),
            );
            let label = student.to_string();
            service.add(student)?;
            println!("Added student: {}", label);
        }

        StudentCommands::List => {
            println!("{}", format_student_list(service.list()));
        }

        StudentCommands::Show { email } => {
            let student = service
                .get(&email)
                .ok_or_else(|| GradeError::student_not_found(&email))?;
            println!("{}", format_student_details(student));
        }

        StudentCommands::Update { email, set } => {
            let update = StudentUpdate::from_pairs(set);
            if update.is_empty() {
                println!("No known fields specified. Use --set FIELD=VALUE.");
                return Ok(());
            }

            if !service.update(&email, &update)? {
                return Err(GradeError::student_not_found(&email));
            }
            let current = update.email_address.as_deref().unwrap_or(&email);
            if let Some(student) = service.get(current) {
                println!("Updated student: {}", student);
            }
        }

        StudentCommands::Delete { email } => {
            if !service.delete(&email)? {
                return Err(GradeError::student_not_found(&email));
            }
            println!("Deleted student: {}", email);
        }

        StudentCommands::Search {
            course,
            email_suffix,
            name,
            min_marks,
            max_marks,
        } => {
            let filter = StudentFilter {
                course_id: course,
                email_suffix,
                name_contains: name,
                min_marks,
                max_marks,
            };
            let (found, elapsed) = service.search(|s| filter.matches(s));
            println!("{}", format_student_list(&found));
            println!(
                "Found {} student(s) in {:.6}s",
                found.len(),
                elapsed.as_secs_f64()
            );
        }

        StudentCommands::Sort { key, reverse } => {
            let sort_key: StudentSortKey = key.parse().map_err(GradeError::Validation)?;
            let elapsed = service.sort(sort_key, reverse)?;
            println!("{}", format_student_list(service.list()));
            println!("Sorted by {} in {:.6}s", key, elapsed.as_secs_f64());
        }
    }

    Ok(())
}
