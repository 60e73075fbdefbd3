//! Professor model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A professor teaching one course, keyed by professor id (an email address)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    /// Unique identifier
    pub professor_id: String,

    pub name: String,

    /// Academic rank, e.g. "Senior Professor"
    pub rank: String,

    /// Course taught (not checked against courses.csv)
    pub course_id: String,
}

impl Professor {
    pub fn new(
        professor_id: impl Into<String>,
        name: impl Into<String>,
        rank: impl Into<String>,
        course_id: impl Into<String>,
    ) -> Self {
        Self {
            professor_id: professor_id.into(),
            name: name.into(),
            rank: rank.into(),
            course_id: course_id.into(),
        }
    }

    /// Apply every field present in `update`, returning true if anything changed
    pub fn apply(&mut self, update: &ProfessorUpdate) -> bool {
        let before = self.clone();

        if let Some(professor_id) = &update.professor_id {
            self.professor_id = professor_id.clone();
        }
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(rank) = &update.rank {
            self.rank = rank.clone();
        }
        if let Some(course_id) = &update.course_id {
            self.course_id = course_id.clone();
        }

        *self != before
    }
}

impl fmt::Display for Professor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.rank)
    }
}

/// Updatable professor fields, addressable by their column name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfessorField {
    ProfessorId,
    Name,
    Rank,
    CourseId,
}

impl FromStr for ProfessorField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "professor_id" => Ok(Self::ProfessorId),
            "name" => Ok(Self::Name),
            "rank" => Ok(Self::Rank),
            "course_id" => Ok(Self::CourseId),
            other => Err(format!("Unknown professor field: {}", other)),
        }
    }
}

/// A partial update to a professor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessorUpdate {
    /// New identifier; the service rejects empty or taken ids
    pub professor_id: Option<String>,
    pub name: Option<String>,
    pub rank: Option<String>,
    pub course_id: Option<String>,
}

impl ProfessorUpdate {
    /// Build an update from `field=value` pairs, ignoring unknown names
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut update = Self::default();
        for (key, value) in pairs {
            if let Ok(field) = key.as_ref().parse::<ProfessorField>() {
                update.set(field, value.into());
            }
        }
        update
    }

    pub fn set(&mut self, field: ProfessorField, value: String) {
        match field {
            ProfessorField::ProfessorId => self.professor_id = Some(value),
            ProfessorField::Name => self.name = Some(value),
            ProfessorField::Rank => self.rank = Some(value),
            ProfessorField::CourseId => self.course_id = Some(value),
        }
    }

    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
