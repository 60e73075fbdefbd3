//! Report formatting for terminal output

use crate::audit::AuditEntry;
use crate::services::{CourseStats, ProfessorReport};

use super::course::format_course_line;

/// One-line average/median summary for a course
pub fn format_stats(course_id: &str, stats: &CourseStats) -> String {
    format!(
        "{} stats -> average: {}, median: {} ({} student(s))",
        course_id, stats.average, stats.median, stats.count
    )
}

/// Format a professor report: header, course line, then one student per line
pub fn format_professor_report(report: &ProfessorReport) -> String {
    let professor = &report.professor;
    let mut output = format!(
        "{} ({}) - {}\n",
        professor.name, professor.rank, professor.professor_id
    );

    match &report.course {
        Some(course) => output.push_str(&format!("  Course: {}\n", format_course_line(course))),
        None => output.push_str(&format!("  Course: {} (not on file)\n", professor.course_id)),
    }

    if report.students.is_empty() {
        output.push_str("  No students enrolled.");
    } else {
        let lines: Vec<String> = report
            .students
            .iter()
            .map(|s| format!("  - {} {} ({})", s, s.grade, s.marks))
            .collect();
        output.push_str(&lines.join("\n"));
    }

    output
}

/// Format audit entries, one per line, oldest first
pub fn format_audit_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries.".to_string();
    }

    entries
        .iter()
        .map(|e| e.format_human_readable())
        .collect::<Vec<_>>()
        .join("\n")
}
