//! In-memory entity table backed by one delimited file
//!
//! The whole collection lives in memory in file order. Every save rewrites
//! the entire file; there is no incremental append.

use std::path::{Path, PathBuf};

use crate::config::SchemaPolicy;
use crate::error::{GradeError, GradeResult};

use super::csv_io::{ensure_schema, read_records, write_records, SchemaStatus, TabularRecord};

/// An ordered collection of records and the file that persists it
#[derive(Debug)]
pub struct Table<T> {
    path: PathBuf,
    policy: SchemaPolicy,
    rows: Vec<T>,
}

impl<T: TabularRecord> Table<T> {
    /// Create an empty table for `path`; nothing is read until [`load`](Self::load)
    pub fn new(path: PathBuf, policy: SchemaPolicy) -> Self {
        Self {
            path,
            policy,
            rows: Vec::new(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check or repair the header row of the backing file
    pub fn ensure_schema(&self) -> GradeResult<SchemaStatus> {
        ensure_schema(&self.path, T::HEADERS, self.policy)
    }

    /// Replace the in-memory rows with the file's contents
    pub fn load(&mut self) -> GradeResult<()> {
        self.ensure_schema()?;
        self.rows = read_records(&self.path)?;
        Ok(())
    }

    /// Rewrite the backing file from the in-memory rows.
    ///
    /// The header is checked first, so under [`SchemaPolicy::Strict`] a file
    /// whose header was changed since loading is left alone.
    pub fn save(&self) -> GradeResult<()> {
        self.ensure_schema()?;
        write_records(&self.path, &self.rows)
    }

    /// All rows in order
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Mutable access to the row list
    pub fn rows_mut(&mut self) -> &mut Vec<T> {
        &mut self.rows
    }

    /// Whether a row with this identifier exists
    pub fn contains(&self, id: &str) -> bool {
        self.rows.iter().any(|row| row.identifier() == id)
    }

    /// First row with this identifier
    pub fn find(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.identifier() == id)
    }

    /// First row with this identifier, mutably
    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.identifier() == id)
    }

    /// Check that the row `current_id` may be renamed to `new_id`
    pub fn check_identifier(&self, current_id: &str, new_id: &str) -> GradeResult<()> {
        if new_id.trim().is_empty() {
            return Err(GradeError::Validation(format!(
                "{} identifier must not be empty",
                T::ENTITY
            )));
        }
        if new_id != current_id && self.contains(new_id) {
            return Err(GradeError::Duplicate {
                entity_type: T::ENTITY,
                identifier: new_id.to_string(),
            });
        }
        Ok(())
    }

    /// Append a row (no uniqueness check; services enforce that)
    pub fn push(&mut self, row: T) {
        self.rows.push(row);
    }

    /// Remove every row with this identifier, returning how many went
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.identifier() != id);
        before - self.rows.len()
    }

    /// Drop every row (in memory only)
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;
    use tempfile::TempDir;

    fn create_test_table() -> (TempDir, Table<Course>) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("courses.csv");
        let table = Table::new(path, SchemaPolicy::Repair);
        (temp_dir, table)
    }

    #[test]
    fn test_empty_load_creates_file() {
        let (_temp_dir, mut table) = create_test_table();
        table.load().unwrap();
        assert!(table.is_empty());
        assert!(table.path().exists());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (_temp_dir, mut table) = create_test_table();
        table.load().unwrap();

        table.push(Course::new("STAT150", "Statistics I"));
        table.push(Course::new("CS101", "Intro CS").with_credits(4));
        table.push(Course::new("DATA200", "Data Science"));
        table.save().unwrap();

        let mut reloaded: Table<Course> = Table::new(table.path().to_path_buf(), SchemaPolicy::Repair);
        reloaded.load().unwrap();

        let ids: Vec<_> = reloaded.rows().iter().map(|c| c.course_id.as_str()).collect();
        assert_eq!(ids, vec!["STAT150", "CS101", "DATA200"]);
        assert_eq!(reloaded.find("CS101").unwrap().credits, Some(4));
    }

    #[test]
    fn test_find_and_remove() {
        let (_temp_dir, mut table) = create_test_table();
        table.push(Course::new("CS101", "Intro CS"));
        table.push(Course::new("CS102", "More CS"));

        assert!(table.contains("CS101"));
        table.find_mut("CS102").unwrap().course_name = "Data Structures".into();
        assert_eq!(table.find("CS102").unwrap().course_name, "Data Structures");

        assert_eq!(table.remove("CS101"), 1);
        assert_eq!(table.remove("CS101"), 0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_check_identifier() {
        let (_temp_dir, mut table) = create_test_table();
        table.push(Course::new("CS101", "Intro CS"));
        table.push(Course::new("CS102", "More CS"));

        assert!(table.check_identifier("CS101", "CS110").is_ok());
        assert!(table.check_identifier("CS101", "CS101").is_ok());
        assert!(matches!(
            table.check_identifier("CS101", "CS102"),
            Err(GradeError::Duplicate { entity_type: "Course", .. })
        ));
        assert!(matches!(
            table.check_identifier("CS101", " "),
            Err(GradeError::Validation(_))
        ));
    }

    #[test]
    fn test_strict_save_refuses_changed_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("courses.csv");
        let mut table: Table<Course> = Table::new(path.clone(), SchemaPolicy::Strict);
        table.load().unwrap();

        std::fs::write(&path, "id,title\nX1,Edited elsewhere\n").unwrap();
        table.push(Course::new("CS101", "Intro CS"));

        assert!(matches!(table.save(), Err(GradeError::Schema { .. })));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "id,title\nX1,Edited elsewhere\n"
        );
    }
}
