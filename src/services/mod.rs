//! Service layer for CheckMyGrade
//!
//! Services wrap the storage tables with validation, persistence after every
//! mutation, audit logging, and read-side reports.

pub mod auth;
pub mod course;
pub mod professor;
pub mod report;
pub mod student;

pub use auth::AuthService;
pub use course::CourseService;
pub use professor::ProfessorService;
pub use report::{CourseStats, ProfessorReport, ReportService};
pub use student::StudentService;
