//! professors.csv mapping

use crate::models::Professor;

use super::csv_io::{Row, TabularRecord};

impl TabularRecord for Professor {
    const ENTITY: &'static str = "Professor";
    const HEADERS: &'static [&'static str] = &["professor_id", "name", "rank", "course_id"];

    fn from_row(row: &Row<'_>) -> Self {
        Self {
            professor_id: row.get("professor_id").to_string(),
            name: row.get("name").to_string(),
            rank: row.get("rank").to_string(),
            course_id: row.get("course_id").to_string(),
        }
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.professor_id.clone(),
            self.name.clone(),
            self.rank.clone(),
            self.course_id.clone(),
        ]
    }

    fn identifier(&self) -> &str {
        &self.professor_id
    }
}
