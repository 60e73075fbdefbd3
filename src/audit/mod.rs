//! Audit logging for CheckMyGrade
//!
//! Every successful add, update and delete is appended to `audit.log` as a
//! JSON line carrying the before/after state of the record and a
//! human-readable diff. Login records are serialized without their
//! ciphertext.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
