//! login.csv mapping
//!
//! The ciphertext lives in a column named `password`.

use crate::models::LoginUser;

use super::csv_io::{Row, TabularRecord};

impl TabularRecord for LoginUser {
    const ENTITY: &'static str = "User";
    const HEADERS: &'static [&'static str] = &["user_id", "password", "role"];

    fn from_row(row: &Row<'_>) -> Self {
        Self {
            user_id: row.get("user_id").to_string(),
            password_enc: row.get("password").to_string(),
            role: row.get("role").to_string(),
        }
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.user_id.clone(),
            self.password_enc.clone(),
            self.role.clone(),
        ]
    }

    fn identifier(&self) -> &str {
        &self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchemaPolicy;
    use crate::storage::Table;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_ciphertext_stored_in_password_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("login.csv");

        let mut table: Table<LoginUser> = Table::new(path.clone(), SchemaPolicy::Repair);
        table.push(LoginUser::new("kapil@mycsu.edu", "FA0=", "professor"));
        table.save().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "user_id,password,role\nkapil@mycsu.edu,FA0=,professor\n"
        );

        let mut reloaded: Table<LoginUser> = Table::new(path, SchemaPolicy::Repair);
        reloaded.load().unwrap();
        assert_eq!(reloaded.find("kapil@mycsu.edu").unwrap().password_enc, "FA0=");
    }
}
