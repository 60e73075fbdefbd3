//! Storage layer for CheckMyGrade
//!
//! One delimited file per entity type, each held fully in memory as a
//! [`Table`] and rewritten wholesale on every save. The [`Storage`]
//! coordinator owns the four tables together with the settings-derived
//! cipher and the audit logger.

pub mod courses;
pub mod csv_io;
pub mod logins;
pub mod professors;
pub mod students;
pub mod table;

pub use csv_io::{ensure_schema, read_records, write_records, Row, SchemaStatus, TabularRecord};
pub use table::Table;

use serde::Serialize;
use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{GradePaths, Settings};
use crate::crypto::XorCipher;
use crate::error::GradeResult;
use crate::models::{Course, LoginUser, Professor, Student};

/// Main storage coordinator that provides access to all tables
#[derive(Debug)]
pub struct Storage {
    paths: GradePaths,
    settings: Settings,
    cipher: XorCipher,
    audit: AuditLogger,
    pub students: Table<Student>,
    pub courses: Table<Course>,
    pub professors: Table<Professor>,
    pub logins: Table<LoginUser>,
}

impl Storage {
    /// Create a Storage instance with empty in-memory tables
    pub fn new(paths: GradePaths, settings: Settings) -> GradeResult<Self> {
        paths.ensure_directories()?;

        let policy = settings.schema_policy;
        let cipher = XorCipher::new(settings.cipher_key.as_bytes())?;

        Ok(Self {
            students: Table::new(paths.students_file(), policy),
            courses: Table::new(paths.courses_file(), policy),
            professors: Table::new(paths.professors_file(), policy),
            logins: Table::new(paths.login_file(), policy),
            audit: AuditLogger::new(paths.audit_log()),
            cipher,
            settings,
            paths,
        })
    }

    /// Create a Storage instance and hydrate every table from disk
    pub fn open(paths: GradePaths, settings: Settings) -> GradeResult<Self> {
        let mut storage = Self::new(paths, settings)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &GradePaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Cipher for stored passwords
    pub fn cipher(&self) -> &XorCipher {
        &self.cipher
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> GradeResult<()> {
        self.students.load()?;
        self.courses.load()?;
        self.professors.load()?;
        self.logins.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> GradeResult<()> {
        self.students.save()?;
        self.courses.save()?;
        self.professors.save()?;
        self.logins.save()?;
        Ok(())
    }

    /// Empty every table and rewrite each file header-only
    pub fn reset_all(&mut self) -> GradeResult<()> {
        self.students.clear();
        self.courses.clear();
        self.professors.clear();
        self.logins.clear();
        self.save_all()
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.record(|| AuditEntry::create(entity_type, entity_id, entity_name, entity));
    }

    /// Record an update in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) {
        self.record(|| AuditEntry::update(entity_type, entity_id, entity_name, before, after));
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.record(|| AuditEntry::delete(entity_type, entity_id, entity_name, entity));
    }

    /// Append an entry unless auditing is off.
    ///
    /// Runs after the data file is written; a failed append is only logged.
    fn record(&self, entry: impl FnOnce() -> AuditEntry) {
        if !self.settings.audit_enabled {
            return;
        }
        let entry = entry();
        if let Err(e) = self.audit.log(&entry) {
            warn!(
                error = %e,
                operation = %entry.operation,
                entity_type = %entry.entity_type,
                entity_id = %entry.entity_id,
                "Failed to write audit entry"
            );
        }
    }
}
