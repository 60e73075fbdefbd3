//! CheckMyGrade - flat-file academic records manager
//!
//! This library keeps students, courses, professors and login accounts in
//! one CSV file per entity type, each loaded fully into memory and
//! rewritten wholesale after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory paths and settings
//! - `error`: Custom error types
//! - `models`: Core data models and partial-update types
//! - `crypto`: Reversible password obfuscation
//! - `storage`: CSV tables and the storage coordinator
//! - `audit`: Audit logging system
//! - `services`: CRUD, search, sort, login and reports
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use checkmygrade::config::{GradePaths, Settings};
//! use checkmygrade::storage::Storage;
//!
//! let paths = GradePaths::new();
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths, settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod seed;
pub mod selftest;
pub mod services;
pub mod storage;

pub use error::GradeError;
