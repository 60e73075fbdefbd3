//! Core data models for CheckMyGrade
//!
//! Students, courses, professors and login accounts, plus the partial-update
//! types used to modify them by field name.

pub mod coerce;
pub mod course;
pub mod login;
pub mod professor;
pub mod student;

pub use coerce::{parse_credits, parse_marks};
pub use course::{Course, CourseField, CourseUpdate};
pub use login::LoginUser;
pub use professor::{Professor, ProfessorField, ProfessorUpdate};
pub use student::{Student, StudentField, StudentFilter, StudentSortKey, StudentUpdate};
