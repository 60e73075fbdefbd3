//! Student service
//!
//! CRUD, search and sort over the in-memory student table. Every mutation
//! rewrites students.csv before returning.

use std::time::{Duration, Instant};

use tracing::info;

use crate::audit::EntityType;
use crate::error::{GradeError, GradeResult};
use crate::models::coerce::finite_marks;
use crate::models::{Student, StudentSortKey, StudentUpdate};
use crate::storage::Storage;

/// Service for student management
pub struct StudentService<'a> {
    storage: &'a mut Storage,
}

impl<'a> StudentService<'a> {
    /// Create a new student service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Add a student; the email address must be non-empty and unused
    pub fn add(&mut self, mut student: Student) -> GradeResult<()> {
        if student.email_address.trim().is_empty() {
            return Err(GradeError::Validation(
                "Student email must not be empty".into(),
            ));
        }

        if self.storage.students.contains(&student.email_address) {
            return Err(GradeError::Duplicate {
                entity_type: "Student",
                identifier: student.email_address,
            });
        }

        student.marks = finite_marks(student.marks);
        self.storage.students.push(student.clone());
        self.storage.students.save()?;

        self.storage.log_create(
            EntityType::Student,
            student.email_address.clone(),
            Some(student.full_name()),
            &student,
        );

        info!(email = %student.email_address, "Added student");
        Ok(())
    }

    /// Remove the student with this email. Returns false if there was none.
    pub fn delete(&mut self, email: &str) -> GradeResult<bool> {
        let Some(existing) = self.storage.students.find(email).cloned() else {
            return Ok(false);
        };

        self.storage.students.remove(email);
        self.storage.students.save()?;

        self.storage.log_delete(
            EntityType::Student,
            email,
            Some(existing.full_name()),
            &existing,
        );

        info!(email, "Deleted student");
        Ok(true)
    }

    /// Apply `update` to the student with this email.
    ///
    /// Returns false if no such student exists. A new email address must be
    /// non-empty and unused. A matching student is persisted even when the
    /// update changes nothing.
    pub fn update(&mut self, email: &str, update: &StudentUpdate) -> GradeResult<bool> {
        if !self.storage.students.contains(email) {
            return Ok(false);
        }
        if let Some(new_id) = &update.email_address {
            self.storage.students.check_identifier(email, new_id)?;
        }

        let Some(student) = self.storage.students.find_mut(email) else {
            return Ok(false);
        };

        let before = student.clone();
        let changed = student.apply(update);
        let after = student.clone();

        self.storage.students.save()?;

        if changed {
            self.storage.log_update(
                EntityType::Student,
                after.email_address.clone(),
                Some(after.full_name()),
                &before,
                &after,
            );
            info!(email, new_email = %after.email_address, "Updated student");
        }

        Ok(true)
    }

    /// Linear scan for students matching `predicate`, with the scan's duration
    pub fn search<F>(&self, predicate: F) -> (Vec<Student>, Duration)
    where
        F: Fn(&Student) -> bool,
    {
        let start = Instant::now();
        let result = self
            .storage
            .students
            .rows()
            .iter()
            .filter(|s| predicate(*s))
            .cloned()
            .collect();
        (result, start.elapsed())
    }

    /// Stable in-place sort of the whole table, persisted in the new order.
    ///
    /// Returns how long the sort itself took.
    pub fn sort(&mut self, key: StudentSortKey, reverse: bool) -> GradeResult<Duration> {
        let start = Instant::now();
        let rows = self.storage.students.rows_mut();
        if reverse {
            rows.sort_by(|a, b| key.compare(b, a));
        } else {
            rows.sort_by(|a, b| key.compare(a, b));
        }
        let elapsed = start.elapsed();

        self.storage.students.save()?;
        Ok(elapsed)
    }

    /// Get a student by email
    pub fn get(&self, email: &str) -> Option<&Student> {
        self.storage.students.find(email)
    }

    /// All students in stored order
    pub fn list(&self) -> &[Student] {
        self.storage.students.rows()
    }

    pub fn count(&self) -> usize {
        self.storage.students.len()
    }
}
