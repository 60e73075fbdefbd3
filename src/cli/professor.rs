//! Professor CLI commands

use clap::Subcommand;

use crate::display::professor::{format_professor_details, format_professor_list};
use crate::error::{GradeError, GradeResult};
use crate::models::{Professor, ProfessorUpdate};
use crate::services::ProfessorService;
use crate::storage::Storage;

use super::parse_key_val;

/// Professor subcommands
#[derive(Subcommand)]
pub enum ProfessorCommands {
    /// Add a professor
    Add {
        /// Professor ID (unique, conventionally an email)
        professor_id: String,
        /// Full name
        name: String,
        /// Academic rank
        #[arg(short, long, default_value = "Professor")]
        rank: String,
        /// Course taught
        #[arg(short, long)]
        course: String,
    },
    /// List all professors
    List,
    /// Show a professor's details
    Show {
        /// Professor ID
        professor_id: String,
    },
    /// Update fields by name, e.g. `--set rank="Associate Professor"`
    Update {
        /// Professor ID
        professor_id: String,
        /// FIELD=VALUE (professor_id, name, rank, course_id)
        #[arg(short, long = "set", value_parser = parse_key_val)]
        set: Vec<(String, String)>,
    },
    /// Delete a professor
    Delete {
        /// Professor ID
        professor_id: String,
    },
}

/// Handle a professor command
pub fn handle_professor_command(storage: &mut Storage, cmd: ProfessorCommands) -> GradeResult<()> {
    let mut service = ProfessorService::new(storage);

    match cmd {
        ProfessorCommands::Add {
            professor_id,
            name,
            rank,
            course,
        } => {
            service.add(Professor::new(&professor_id, &name, rank, course))?;
            println!("Added professor: {} ({})", name, professor_id);
        }

        ProfessorCommands::List => {
            println!("{}", format_professor_list(service.list()));
        }

        ProfessorCommands::Show { professor_id } => {
            let professor = service
                .get(&professor_id)
                .ok_or_else(|| GradeError::professor_not_found(&professor_id))?;
            println!("{}", format_professor_details(professor));
        }

        ProfessorCommands::Update { professor_id, set } => {
            let update = ProfessorUpdate::from_pairs(set);
            if update.is_empty() {
                println!("No known fields specified. Use --set FIELD=VALUE.");
                return Ok(());
            }

            if !service.update(&professor_id, &update)? {
                return Err(GradeError::professor_not_found(&professor_id));
            }
            let current = update.professor_id.as_deref().unwrap_or(&professor_id);
            println!("Updated professor: {}", current);
        }

        ProfessorCommands::Delete { professor_id } => {
            if !service.delete(&professor_id)? {
                return Err(GradeError::professor_not_found(&professor_id));
            }
            println!("Deleted professor: {}", professor_id);
        }
    }

    Ok(())
}
