//! Course service

use tracing::info;

use crate::audit::EntityType;
use crate::error::{GradeError, GradeResult};
use crate::models::{Course, CourseUpdate};
use crate::storage::Storage;

/// Service for course management
pub struct CourseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CourseService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Add a course; the course id must be non-empty and unused
    pub fn add(&mut self, course: Course) -> GradeResult<()> {
        if course.course_id.trim().is_empty() {
            return Err(GradeError::Validation("course_id must not be empty".into()));
        }

        if self.storage.courses.contains(&course.course_id) {
            return Err(GradeError::Duplicate {
                entity_type: "Course",
                identifier: course.course_id,
            });
        }

        self.storage.courses.push(course.clone());
        self.storage.courses.save()?;

        self.storage.log_create(
            EntityType::Course,
            course.course_id.clone(),
            Some(course.course_name.clone()),
            &course,
        );

        info!(course_id = %course.course_id, "Added course");
        Ok(())
    }

    /// Remove the course with this id. Students and professors that
    /// reference it are left alone.
    pub fn delete(&mut self, course_id: &str) -> GradeResult<bool> {
        let Some(existing) = self.storage.courses.find(course_id).cloned() else {
            return Ok(false);
        };

        self.storage.courses.remove(course_id);
        self.storage.courses.save()?;

        self.storage.log_delete(
            EntityType::Course,
            course_id,
            Some(existing.course_name.clone()),
            &existing,
        );

        info!(course_id, "Deleted course");
        Ok(true)
    }

    /// Apply `update` to the course with this id; false if there is none.
    ///
    /// A new `course_id` must be non-empty and not taken by another course.
    pub fn update(&mut self, course_id: &str, update: &CourseUpdate) -> GradeResult<bool> {
        if !self.storage.courses.contains(course_id) {
            return Ok(false);
        }
        if let Some(new_id) = &update.course_id {
            self.storage.courses.check_identifier(course_id, new_id)?;
        }

        let Some(course) = self.storage.courses.find_mut(course_id) else {
            return Ok(false);
        };

        let before = course.clone();
        let changed = course.apply(update);
        let after = course.clone();

        self.storage.courses.save()?;

        if changed {
            self.storage.log_update(
                EntityType::Course,
                after.course_id.clone(),
                Some(after.course_name.clone()),
                &before,
                &after,
            );
            info!(course_id, new_course_id = %after.course_id, "Updated course");
        }

        Ok(true)
    }

    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.storage.courses.find(course_id)
    }

    pub fn list(&self) -> &[Course] {
        self.storage.courses.rows()
    }

    pub fn count(&self) -> usize {
        self.storage.courses.len()
    }
}
