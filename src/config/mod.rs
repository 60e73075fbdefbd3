//! Configuration module for CheckMyGrade
//!
//! This module provides configuration management including:
//! - Data file path resolution (relative to the working directory)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::GradePaths;
pub use settings::{SchemaPolicy, Settings};
