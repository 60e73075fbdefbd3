//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::diff::generate_diff;

/// Kind of mutation recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        };
        f.write_str(label)
    }
}

/// Entity tables that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Student,
    Course,
    Professor,
    LoginUser,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EntityType::Student => "Student",
            EntityType::Course => "Course",
            EntityType::Professor => "Professor",
            EntityType::LoginUser => "LoginUser",
        };
        f.write_str(label)
    }
}

/// One line of audit.log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the mutation happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Identifier of the affected record (email, course id, ...)
    pub entity_id: String,

    /// Display label, e.g. a student's full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Record state before an update or delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    /// Record state after a create or update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Changed fields, for updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for a newly added record
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Create, entity_type, entity_id, entity_name);
        entry.after = serde_json::to_value(entity).ok();
        entry
    }

    /// Entry for a modified record; the diff summary is computed from the states
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Update, entity_type, entity_id, entity_name);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        entry.diff_summary = match (&entry.before, &entry.after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };
        entry
    }

    /// Entry for a removed record
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Delete, entity_type, entity_id, entity_name);
        entry.before = serde_json::to_value(entity).ok();
        entry
    }

    /// One- or two-line rendering for terminal output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Student};

    fn sam(marks: f64) -> Student {
        Student::new("sam@mycsu.edu", "Sam", "Carpenter", "DATA200", "A", marks)
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(EntityType::LoginUser.to_string(), "LoginUser");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Student,
            "sam@mycsu.edu",
            Some("Sam Carpenter".into()),
            &sam(96.0),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["marks"], 96.0);
    }

    #[test]
    fn test_update_entry_computes_diff() {
        let entry = AuditEntry::update(
            EntityType::Student,
            "sam@mycsu.edu",
            None,
            &sam(96.0),
            &sam(97.0),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.diff_summary.as_deref(), Some("marks: 96.0 -> 97.0"));
    }

    #[test]
    fn test_delete_entry() {
        let course = Course::new("CS101", "Intro CS");
        let entry = AuditEntry::delete(EntityType::Course, "CS101", None, &course);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let course = Course::new("CS101", "Intro CS");
        let entry = AuditEntry::create(EntityType::Course, "CS101", None, &course);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entity_type\":\"course\""));

        let parsed: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.entity_type, EntityType::Course);
        assert_eq!(parsed.entity_id, "CS101");
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Student,
            "sam@mycsu.edu",
            Some("Sam Carpenter".into()),
            &sam(96.0),
            &sam(97.0),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Student sam@mycsu.edu (Sam Carpenter)"));
        assert!(formatted.contains("Changes: marks: 96.0 -> 97.0"));
    }
}
