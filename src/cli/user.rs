//! Login account CLI commands

use clap::Subcommand;

use crate::error::{GradeError, GradeResult};
use crate::services::AuthService;
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a login
    Register {
        /// User ID (unique, conventionally an email)
        user_id: String,
        /// Password
        password: String,
        /// Role, e.g. "professor" or "student"
        #[arg(short, long, default_value = "student")]
        role: String,
    },
    /// Check a user's password
    Login {
        /// User ID
        user_id: String,
        /// Password
        password: String,
    },
    /// Change a user's password
    Passwd {
        /// User ID
        user_id: String,
        /// New password
        new_password: String,
    },
    /// List registered users
    List,
}

/// Handle a user command
pub fn handle_user_command(storage: &mut Storage, cmd: UserCommands) -> GradeResult<()> {
    let mut service = AuthService::new(storage);

    match cmd {
        UserCommands::Register {
            user_id,
            password,
            role,
        } => {
            service.register_user(&user_id, &password, &role)?;
            println!("Registered user: {} ({})", user_id, role);
        }

        UserCommands::Login { user_id, password } => {
            if !service.login(&user_id, &password) {
                return Err(GradeError::Validation(format!(
                    "Login failed for {}",
                    user_id
                )));
            }
            println!("Login successful: {}", user_id);
        }

        UserCommands::Passwd {
            user_id,
            new_password,
        } => {
            if !service.change_password(&user_id, &new_password)? {
                return Err(GradeError::user_not_found(&user_id));
            }
            println!("Password changed: {}", user_id);
        }

        UserCommands::List => {
            let users = service.list();
            if users.is_empty() {
                println!("No users registered.");
            }
            for user in users {
                println!("{}  [{}]", user.user_id, user.role);
            }
        }
    }

    Ok(())
}
