//! Report, statistics and audit CLI commands

use clap::Subcommand;

use crate::display::report::{format_audit_entries, format_professor_report, format_stats};
use crate::display::student::{format_student_details, format_student_list};
use crate::error::{GradeError, GradeResult};
use crate::services::ReportService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Students enrolled in a course
    Course {
        /// Course ID
        course_id: String,
    },
    /// A professor's course and its students
    Professor {
        /// Professor ID
        professor_id: String,
    },
    /// A single student's record
    Student {
        /// Email address
        email: String,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> GradeResult<()> {
    let reports = ReportService::new(storage);

    match cmd {
        ReportCommands::Course { course_id } => {
            let students = reports.report_by_course(&course_id);
            println!("Students in {}:", course_id);
            println!("{}", format_student_list(&students));
        }

        ReportCommands::Professor { professor_id } => {
            let found = reports.report_by_professor(&professor_id);
            if found.is_empty() {
                return Err(GradeError::professor_not_found(&professor_id));
            }
            for report in &found {
                println!("{}", format_professor_report(report));
            }
        }

        ReportCommands::Student { email } => {
            let student = reports
                .report_by_student(&email)
                .ok_or_else(|| GradeError::student_not_found(&email))?;
            println!("{}", format_student_details(&student));
        }
    }

    Ok(())
}

/// Print average and median marks for each course given
pub fn handle_stats_command(storage: &Storage, course_ids: &[String]) -> GradeResult<()> {
    let reports = ReportService::new(storage);
    for course_id in course_ids {
        println!("{}", format_stats(course_id, &reports.stats_for_course(course_id)));
    }
    Ok(())
}

/// Print the most recent audit entries
pub fn handle_audit_command(storage: &Storage, limit: usize) -> GradeResult<()> {
    let entries = storage.audit().read_recent(limit)?;
    println!("{}", format_audit_entries(&entries));
    Ok(())
}
