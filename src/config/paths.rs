//! Path management for CheckMyGrade
//!
//! All data files live side by side in a single base directory. The base
//! directory is the current working directory unless the caller passes an
//! explicit one (the CLI's `--data-dir` flag).

use std::path::PathBuf;

use crate::error::GradeError;

/// Manages all paths used by CheckMyGrade
#[derive(Debug, Clone)]
pub struct GradePaths {
    /// Directory holding every data file
    base_dir: PathBuf,
}

impl GradePaths {
    /// Paths rooted at the current working directory
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
        }
    }

    /// Create GradePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to students.csv
    pub fn students_file(&self) -> PathBuf {
        self.base_dir.join("students.csv")
    }

    /// Path to courses.csv
    pub fn courses_file(&self) -> PathBuf {
        self.base_dir.join("courses.csv")
    }

    /// Path to professors.csv
    pub fn professors_file(&self) -> PathBuf {
        self.base_dir.join("professors.csv")
    }

    /// Path to login.csv
    pub fn login_file(&self) -> PathBuf {
        self.base_dir.join("login.csv")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("checkmygrade.json")
    }

    /// Path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// The four entity files, in students/courses/professors/login order
    pub fn data_files(&self) -> [PathBuf; 4] {
        [
            self.students_file(),
            self.courses_file(),
            self.professors_file(),
            self.login_file(),
        ]
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), GradeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GradeError::Io(format!("Failed to create data directory: {}", e)))
    }
}

impl Default for GradePaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_working_directory() {
        let paths = GradePaths::new();
        assert_eq!(paths.base_dir(), &PathBuf::from("."));
        assert_eq!(paths.students_file(), PathBuf::from("./students.csv"));
    }

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GradePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.login_file(), temp_dir.path().join("login.csv"));
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("checkmygrade.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("term").join("fall");
        let paths = GradePaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
