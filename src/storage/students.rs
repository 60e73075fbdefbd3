//! students.csv mapping

use crate::models::{parse_marks, Student};

use super::csv_io::{Row, TabularRecord};

impl TabularRecord for Student {
    const ENTITY: &'static str = "Student";
    const HEADERS: &'static [&'static str] = &[
        "email_address",
        "first_name",
        "last_name",
        "course_id",
        "grade",
        "marks",
    ];

    fn from_row(row: &Row<'_>) -> Self {
        Self {
            email_address: row.get("email_address").to_string(),
            first_name: row.get("first_name").to_string(),
            last_name: row.get("last_name").to_string(),
            course_id: row.get("course_id").to_string(),
            grade: row.get("grade").to_string(),
            marks: parse_marks(row.get("marks")),
        }
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.email_address.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.course_id.clone(),
            self.grade.clone(),
            self.marks.to_string(),
        ]
    }

    fn identifier(&self) -> &str {
        &self.email_address
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
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.csv");

        let mut table: Table<Student> = Table::new(path.clone(), SchemaPolicy::Repair);
        table.load().unwrap();
        table.push(Student::new("smriti.mandhana@mycsu.edu", "Smriti", "Mandhana", "DATA200", "A", 95.0));
        table.push(Student::new("rohit.sharma@mycsu.edu", "Rohit", "Sharma", "CS101", "B", 84.5));
        table.save().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("email_address,first_name,last_name,course_id,grade,marks\n"));
        assert!(contents.contains("smriti.mandhana@mycsu.edu,Smriti,Mandhana,DATA200,A,95\n"));

        let mut reloaded: Table<Student> = Table::new(path, SchemaPolicy::Repair);
        reloaded.load().unwrap();
        assert_eq!(reloaded.rows(), table.rows());
    }

    #[test]
    fn test_malformed_marks_read_as_zero() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.csv");
        fs::write(
            &path,
            "email_address,first_name,last_name,course_id,grade,marks\n\
             a@x.edu,A,One,C1,B,not-a-number\n\
             b@x.edu,B,Two,C1,C,\n\
             c@x.edu,C,Three\n",
        )
        .unwrap();

        let mut table: Table<Student> = Table::new(path, SchemaPolicy::Repair);
        table.load().unwrap();

        assert_eq!(table.len(), 3);
        assert!(table.rows().iter().all(|s| s.marks == 0.0));
        assert_eq!(table.find("c@x.edu").unwrap().grade, "");
    }
}
