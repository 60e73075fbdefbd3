//! Display formatting for terminal output
//!
//! List views are rendered as tables; detail views as aligned key/value
//! blocks.

pub mod course;
pub mod professor;
pub mod report;
pub mod student;

pub use course::{format_course_details, format_course_line, format_course_list};
pub use professor::{format_professor_details, format_professor_list};
pub use report::{format_audit_entries, format_professor_report, format_stats};
pub use student::{format_student_details, format_student_list};
