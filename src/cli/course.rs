//! Course CLI commands

use clap::Subcommand;

use crate::display::course::{format_course_details, format_course_list};
use crate::error::{GradeError, GradeResult};
use crate::models::{parse_credits, Course, CourseUpdate};
use crate::services::CourseService;
use crate::storage::Storage;

use super::parse_key_val;

/// Course subcommands
#[derive(Subcommand)]
pub enum CourseCommands {
    /// Create a new course
    Add {
        /// Course ID (unique), e.g. "DATA200"
        course_id: String,
        /// Course name
        name: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Credit hours; anything unparseable is left blank
        #[arg(short, long)]
        credits: Option<String>,
    },
    /// List all courses
    List,
    /// Show a course's details
    Show {
        /// Course ID
        course_id: String,
    },
    /// Update fields by name, e.g. `--set description="Basics of CS"`
    Update {
        /// Course ID
        course_id: String,
        /// FIELD=VALUE (course_id, course_name, description, credits)
        #[arg(short, long = "set", value_parser = parse_key_val)]
        set: Vec<(String, String)>,
    },
    /// Delete a course
    Delete {
        /// Course ID
        course_id: String,
    },
}

/// Handle a course command
pub fn handle_course_command(storage: &mut Storage, cmd: CourseCommands) -> GradeResult<()> {
    let mut service = CourseService::new(storage);

    match cmd {
        CourseCommands::Add {
            course_id,
            name,
            description,
            credits,
        } => {
            let mut course = Course::new(course_id, name).with_description(description);
            course.credits = credits.as_deref().and_then(parse_credits);
            let label = course.to_string();
            service.add(course)?;
            println!("Added course: {}", label);
        }

        CourseCommands::List => {
            println!("{}", format_course_list(service.list()));
        }

        CourseCommands::Show { course_id } => {
            let course = service
                .get(&course_id)
                .ok_or_else(|| GradeError::course_not_found(&course_id))?;
            println!("{}", format_course_details(course));
        }

        CourseCommands::Update { course_id, set } => {
            let update = CourseUpdate::from_pairs(set);
            if update.is_empty() {
                println!("No known fields specified. Use --set FIELD=VALUE.");
                return Ok(());
            }

            if !service.update(&course_id, &update)? {
                return Err(GradeError::course_not_found(&course_id));
            }
            let current = update.course_id.as_deref().unwrap_or(&course_id);
            println!("Updated course: {}", current);
        }

        CourseCommands::Delete { course_id } => {
            if !service.delete(&course_id)? {
                return Err(GradeError::course_not_found(&course_id));
            }
            println!("Deleted course: {}", course_id);
        }
    }

    Ok(())
}
