//! courses.csv mapping

use crate::models::{parse_credits, Course};

use super::csv_io::{Row, TabularRecord};

impl TabularRecord for Course {
    const ENTITY: &'static str = "Course";
    const HEADERS: &'static [&'static str] = &["course_id", "course_name", "description", "credits"];

    fn from_row(row: &Row<'_>) -> Self {
        Self {
            course_id: row.get("course_id").to_string(),
            course_name: row.get("course_name").to_string(),
            description: row.get("description").to_string(),
            credits: parse_credits(row.get("credits")),
        }
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.course_id.clone(),
            self.course_name.clone(),
            self.description.clone(),
            self.credits.map(|c| c.to_string()).unwrap_or_default(),
        ]
    }

    fn identifier(&self) -> &str {
        &self.course_id
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
    fn test_missing_credits_written_blank() {
        let course = Course::new("CS101", "Intro CS").with_description("Basics, mostly");
        assert_eq!(
            course.to_row(),
            vec!["CS101", "Intro CS", "Basics, mostly", ""]
        );
    }

    #[test]
    fn test_malformed_credits_read_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("courses.csv");
        fs::write(
            &path,
            "course_id,course_name,description,credits\n\
             DATA200,Data Science,\"Intro DS, Python\",3\n\
             CS101,Intro CS,,four\n",
        )
        .unwrap();

        let mut table: Table<Course> = Table::new(path, SchemaPolicy::Repair);
        table.load().unwrap();

        let data = table.find("DATA200").unwrap();
        assert_eq!(data.description, "Intro DS, Python");
        assert_eq!(data.credits, Some(3));
        assert_eq!(table.find("CS101").unwrap().credits, None);
    }
}
