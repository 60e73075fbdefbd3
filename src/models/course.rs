//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::coerce::parse_credits;

/// A course, keyed by course id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier, e.g. "DATA200"
    pub course_id: String,

    pub course_name: String,

    #[serde(default)]
    pub description: String,

    /// Credit hours, if known
    #[serde(default)]
    pub credits: Option<i32>,
}

impl Course {
    /// Create a course with no description or credits
    pub fn new(course_id: impl Into<String>, course_name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            course_name: course_name.into(),
            description: String::new(),
            credits: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_credits(mut self, credits: i32) -> Self {
        self.credits = Some(credits);
        self
    }

    /// Apply every field present in `update`, returning true if anything changed
    pub fn apply(&mut self, update: &CourseUpdate) -> bool {
        let before = self.clone();

        if let Some(course_id) = &update.course_id {
            self.course_id = course_id.clone();
        }
        if let Some(course_name) = &update.course_name {
            self.course_name = course_name.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(credits) = update.credits {
            self.credits = credits;
        }

        *self != before
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.course_id, self.course_name)
    }
}

/// Updatable course fields, addressable by their column name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    CourseId,
    CourseName,
    Description,
    Credits,
}

impl FromStr for CourseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "course_id" => Ok(Self::CourseId),
            "course_name" => Ok(Self::CourseName),
            "description" => Ok(Self::Description),
            "credits" => Ok(Self::Credits),
            other => Err(format!("Unknown course field: {}", other)),
        }
    }
}

/// A partial update to a course.
///
/// `credits` is doubly optional: `None` leaves it alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseUpdate {
    /// New identifier; the service rejects empty or taken ids
    pub course_id: Option<String>,
    pub course_name: Option<String>,
    pub description: Option<String>,
    pub credits: Option<Option<i32>>,
}

impl CourseUpdate {
    /// Build an update from `field=value` pairs, ignoring unknown names
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut update = Self::default();
        for (key, value) in pairs {
            if let Ok(field) = key.as_ref().parse::<CourseField>() {
                update.set(field, value.into());
            }
        }
        update
    }

    /// Set one field from its textual value; unparseable credits clear the field
    pub fn set(&mut self, field: CourseField, value: String) {
        match field {
            CourseField::CourseId => self.course_id = Some(value),
            CourseField::CourseName => self.course_name = Some(value),
            CourseField::Description => self.description = Some(value),
            CourseField::Credits => self.credits = Some(parse_credits(&value)),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn credits(mut self, credits: Option<i32>) -> Self {
        self.credits = Some(credits);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let course = Course::new("CS101", "Intro CS")
            .with_description("Basics")
            .with_credits(4);
        assert_eq!(course.description, "Basics");
        assert_eq!(course.credits, Some(4));
        assert_eq!(course.to_string(), "CS101: Intro CS");
    }

    #[test]
    fn test_apply_update() {
        let mut course = Course::new("CS101", "Intro CS").with_credits(4);
        assert!(course.apply(&CourseUpdate::default().description("Basics of CS")));
        assert_eq!(course.description, "Basics of CS");
        assert_eq!(course.credits, Some(4));

        assert!(course.apply(&CourseUpdate::default().credits(None)));
        assert_eq!(course.credits, None);
    }

    #[test]
    fn test_from_pairs() {
        let update = CourseUpdate::from_pairs([
            ("credits", "3"),
            ("course_id", "STAT151"),
            ("description", "Stats"),
            ("room", "B12"),
        ]);
        assert_eq!(update.credits, Some(Some(3)));
        assert_eq!(update.course_id.as_deref(), Some("STAT151"));
        assert_eq!(update.description.as_deref(), Some("Stats"));
        assert!(update.course_name.is_none());

        let malformed = CourseUpdate::from_pairs([("credits", "lots")]);
        assert_eq!(malformed.credits, Some(None));
    }
}
