//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod course;
pub mod demo;
pub mod professor;
pub mod report;
pub mod student;
pub mod user;

pub use course::{handle_course_command, CourseCommands};
pub use demo::run_demo;
pub use professor::{handle_professor_command, ProfessorCommands};
pub use report::{handle_audit_command, handle_report_command, handle_stats_command, ReportCommands};
pub use student::{handle_student_command, StudentCommands};
pub use user::{handle_user_command, UserCommands};

/// Parse a `field=value` argument
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    Ok((key.trim().to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("marks=97").unwrap(),
            ("marks".to_string(), "97".to_string())
        );
        assert_eq!(
            parse_key_val("description=a=b").unwrap(),
            ("description".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("marks").is_err());
    }
}
