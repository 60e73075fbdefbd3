//! Professor service

use tracing::info;

use crate::audit::EntityType;
use crate::error::{GradeError, GradeResult};
use crate::models::{Professor, ProfessorUpdate};
use crate::storage::Storage;

/// Service for professor management
pub struct ProfessorService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ProfessorService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Add a professor; the professor id must be non-empty and unused
    pub fn add(&mut self, professor: Professor) -> GradeResult<()> {
        if professor.professor_id.trim().is_empty() {
            return Err(GradeError::Validation(
                "professor_id must not be empty".into(),
            ));
        }

        if self.storage.professors.contains(&professor.professor_id) {
            return Err(GradeError::Duplicate {
                entity_type: "Professor",
                identifier: professor.professor_id,
            });
        }

        self.storage.professors.push(professor.clone());
        self.storage.professors.save()?;

        self.storage.log_create(
            EntityType::Professor,
            professor.professor_id.clone(),
            Some(professor.name.clone()),
            &professor,
        );

        info!(professor_id = %professor.professor_id, "Added professor");
        Ok(())
    }

    /// Remove the professor with this id. Their login, if any, is kept.
    pub fn delete(&mut self, professor_id: &str) -> GradeResult<bool> {
        let Some(existing) = self.storage.professors.find(professor_id).cloned() else {
            return Ok(false);
        };

        self.storage.professors.remove(professor_id);
        self.storage.professors.save()?;

        self.storage.log_delete(
            EntityType::Professor,
            professor_id,
            Some(existing.name.clone()),
            &existing,
        );

        info!(professor_id, "Deleted professor");
        Ok(true)
    }

    /// Apply `update` to the professor with this id; false if there is none.
    ///
    /// A new `professor_id` must be non-empty and not taken by another professor.
    pub fn update(&mut self, professor_id: &str, update: &ProfessorUpdate) -> GradeResult<bool> {
        if !self.storage.professors.contains(professor_id) {
            return Ok(false);
        }
        if let Some(new_id) = &update.professor_id {
            self.storage.professors.check_identifier(professor_id, new_id)?;
        }

        let Some(professor) = self.storage.professors.find_mut(professor_id) else {
            return Ok(false);
        };

        let before = professor.clone();
        let changed = professor.apply(update);
        let after = professor.clone();

        self.storage.professors.save()?;

        if changed {
            self.storage.log_update(
                EntityType::Professor,
                after.professor_id.clone(),
                Some(after.name.clone()),
                &before,
                &after,
            );
            info!(professor_id, new_professor_id = %after.professor_id, "Updated professor");
        }

        Ok(true)
    }

    pub fn get(&self, professor_id: &str) -> Option<&Professor> {
        self.storage.professors.find(professor_id)
    }

    pub fn list(&self) -> &[Professor] {
        self.storage.professors.rows()
    }

    pub fn count(&self) -> usize {
        self.storage.professors.len()
    }
}
