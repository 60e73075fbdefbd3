//! Student model
//!
//! A student's enrollment in one course together with their grade and marks.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::coerce::{finite_marks, parse_marks};

/// A student record, keyed by email address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier
    pub email_address: String,

    pub first_name: String,

    pub last_name: String,

    /// Course the student is enrolled in (not checked against courses.csv)
    pub course_id: String,

    /// Free-text letter grade, e.g. "A-"
    pub grade: String,

    /// Numeric marks; always finite
    pub marks: f64,
}

impl Student {
    /// Create a new student
    pub fn new(
        email_address: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_id: impl Into<String>,
        grade: impl Into<String>,
        marks: f64,
    ) -> Self {
        Self {
            email_address: email_address.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            course_id: course_id.into(),
            grade: grade.into(),
            marks: finite_marks(marks),
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Apply every field present in `update`, returning true if anything changed
    pub fn apply(&mut self, update: &StudentUpdate) -> bool {
        let before = self.clone();

        if let Some(email_address) = &update.email_address {
            self.email_address = email_address.clone();
        }
        if let Some(first_name) = &update.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(course_id) = &update.course_id {
            self.course_id = course_id.clone();
        }
        if let Some(grade) = &update.grade {
            self.grade = grade.clone();
        }
        if let Some(marks) = update.marks {
            self.marks = finite_marks(marks);
        }

        *self != before
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name(), self.email_address)
    }
}

/// Updatable student fields, addressable by their column name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    EmailAddress,
    FirstName,
    LastName,
    CourseId,
    Grade,
    Marks,
}

impl FromStr for StudentField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "email_address" => Ok(Self::EmailAddress),
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            "course_id" => Ok(Self::CourseId),
            "grade" => Ok(Self::Grade),
            "marks" => Ok(Self::Marks),
            other => Err(format!("Unknown student field: {}", other)),
        }
    }
}

/// A partial update to a student. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentUpdate {
    /// New identifier; the service rejects empty or taken addresses
    pub email_address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub course_id: Option<String>,
    pub grade: Option<String>,
    pub marks: Option<f64>,
}

impl StudentUpdate {
    /// Build an update from `field=value` pairs.
    ///
    /// Unknown field names are ignored; marks are coerced leniently.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut update = Self::default();
        for (key, value) in pairs {
            let Ok(field) = key.as_ref().parse::<StudentField>() else {
                continue;
            };
            update.set(field, value.into());
        }
        update
    }

    /// Set one field from its textual value
    pub fn set(&mut self, field: StudentField, value: String) {
        match field {
            StudentField::EmailAddress => self.email_address = Some(value),
            StudentField::FirstName => self.first_name = Some(value),
            StudentField::LastName => self.last_name = Some(value),
            StudentField::CourseId => self.course_id = Some(value),
            StudentField::Grade => self.grade = Some(value),
            StudentField::Marks => self.marks = Some(parse_marks(&value)),
        }
    }

    pub fn email_address(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = Some(email_address.into());
        self
    }

    pub fn marks(mut self, marks: f64) -> Self {
        self.marks = Some(marks);
        self
    }

    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn course_id(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    /// True if no field would be touched
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Attributes a student list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentSortKey {
    EmailAddress,
    FirstName,
    LastName,
    CourseId,
    Grade,
    Marks,
}

impl StudentSortKey {
    /// Compare two students on this attribute
    pub fn compare(&self, a: &Student, b: &Student) -> Ordering {
        match self {
            Self::EmailAddress => a.email_address.cmp(&b.email_address),
            Self::FirstName => a.first_name.cmp(&b.first_name),
            Self::LastName => a.last_name.cmp(&b.last_name),
            Self::CourseId => a.course_id.cmp(&b.course_id),
            Self::Grade => a.grade.cmp(&b.grade),
            Self::Marks => a.marks.total_cmp(&b.marks),
        }
    }
}

impl FromStr for StudentSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "email_address" | "email" => Ok(Self::EmailAddress),
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            "course_id" | "course" => Ok(Self::CourseId),
            "grade" => Ok(Self::Grade),
            "marks" => Ok(Self::Marks),
            other => Err(format!("Cannot sort students by '{}'", other)),
        }
    }
}

/// Declarative student search criteria; every set criterion must match
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub course_id: Option<String>,
    /// Matches the end of the email address, e.g. "@mycsu.edu"
    pub email_suffix: Option<String>,
    /// Case-insensitive substring of first or last name
    pub name_contains: Option<String>,
    pub min_marks: Option<f64>,
    pub max_marks: Option<f64>,
}

impl StudentFilter {
    /// Whether a student satisfies every set criterion
    pub fn matches(&self, student: &Student) -> bool {
        if let Some(course_id) = &self.course_id {
            if &student.course_id != course_id {
                return false;
            }
        }
        if let Some(suffix) = &self.email_suffix {
            if !student.email_address.ends_with(suffix.as_str()) {
                return false;
            }
        }
        if let Some(needle) = &self.name_contains {
            let needle = needle.to_lowercase();
            if !student.first_name.to_lowercase().contains(&needle)
                && !student.last_name.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if self.min_marks.is_some_and(|min| student.marks < min) {
            return false;
        }
        if self.max_marks.is_some_and(|max| student.marks > max) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sam() -> Student {
        Student::new("sam@mycsu.edu", "Sam", "Carpenter", "DATA200", "A", 96.0)
    }

    #[test]
    fn test_new_student() {
        let student = sam();
        assert_eq!(student.full_name(), "Sam Carpenter");
        assert_eq!(student.to_string(), "Sam Carpenter <sam@mycsu.edu>");
    }

    #[test]
    fn test_non_finite_marks_become_zero() {
        let student = Student::new("x@y.edu", "X", "Y", "C", "F", f64::NAN);
        assert_eq!(student.marks, 0.0);
    }

    #[test]
    fn test_apply_update() {
        let mut student = sam();
        let changed = student.apply(&StudentUpdate::default().marks(97.0).grade("A+"));

        assert!(changed);
        assert_eq!(student.marks, 97.0);
        assert_eq!(student.grade, "A+");
        assert_eq!(student.first_name, "Sam");
    }

    #[test]
    fn test_apply_noop_update() {
        let mut student = sam();
        assert!(!student.apply(&StudentUpdate::default()));
        assert!(!student.apply(&StudentUpdate::default().marks(96.0)));
    }

    #[test]
    fn test_from_pairs_coerces_and_ignores_unknown() {
        let update = StudentUpdate::from_pairs([
            ("marks", "97"),
            ("grade", "A+"),
            ("email_address", "other@mycsu.edu"),
            ("favourite_colour", "blue"),
        ]);

        assert_eq!(update.marks, Some(97.0));
        assert_eq!(update.grade.as_deref(), Some("A+"));
        assert_eq!(update.email_address.as_deref(), Some("other@mycsu.edu"));
        assert!(update.first_name.is_none());
    }

    #[test]
    fn test_from_pairs_malformed_marks() {
        let update = StudentUpdate::from_pairs([("marks", "ninety")]);
        assert_eq!(update.marks, Some(0.0));
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("marks".parse::<StudentSortKey>(), Ok(StudentSortKey::Marks));
        assert_eq!(
            "last_name".parse::<StudentSortKey>(),
            Ok(StudentSortKey::LastName)
        );
        assert!("shoe_size".parse::<StudentSortKey>().is_err());
    }

    #[test]
    fn test_sort_key_compare() {
        let a = Student::new("a@x.edu", "Ann", "Zed", "C1", "B", 80.0);
        let b = Student::new("b@x.edu", "Bob", "Abe", "C1", "A", 90.0);

        assert_eq!(StudentSortKey::Marks.compare(&a, &b), Ordering::Less);
        assert_eq!(StudentSortKey::LastName.compare(&a, &b), Ordering::Greater);
        assert_eq!(StudentSortKey::CourseId.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_filter() {
        let student = sam();

        let by_course = StudentFilter {
            course_id: Some("DATA200".into()),
            ..Default::default()
        };
        assert!(by_course.matches(&student));

        let by_domain = StudentFilter {
            email_suffix: Some("@student.edu".into()),
            ..Default::default()
        };
        assert!(!by_domain.matches(&student));

        let by_name_and_range = StudentFilter {
            name_contains: Some("carp".into()),
            min_marks: Some(90.0),
            max_marks: Some(100.0),
            ..Default::default()
        };
        assert!(by_name_and_range.matches(&student));

        let too_high = StudentFilter {
            min_marks: Some(97.0),
            ..Default::default()
        };
        assert!(!too_high.matches(&student));
    }
}
