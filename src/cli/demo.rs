//! Demo flow: reset, seed the sample data, and print a tour of the reports

use std::path::Path;

use crate::display::course::format_course_line;
use crate::display::report::format_stats;
use crate::error::GradeResult;
use crate::models::StudentSortKey;
use crate::seed::seed_sample_data;
use crate::services::{ReportService, StudentService};
use crate::storage::Storage;

const DEMO_COURSES: [&str; 3] = ["DATA200", "CS101", "STAT150"];
const DEMO_PROFESSOR: &str = "kapil@mycsu.edu";

fn absolute(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Run the demo against `storage`. Every data file is emptied first.
pub fn run_demo(storage: &mut Storage) -> GradeResult<()> {
    seed_sample_data(storage, true)?;

    println!("CSV folder: {}", absolute(storage.paths().base_dir()));
    println!("Files:");
    for file in storage.paths().data_files() {
        println!(" - {}", absolute(&file));
    }

    println!();
    println!("=== Courses ===");
    for course in storage.courses.rows() {
        println!("{}", format_course_line(course));
    }

    println!();
    println!("=== Professors (by course) ===");
    for professor in storage.professors.rows() {
        println!("{} [{}] -> {}", professor.name, professor.rank, professor.course_id);
    }

    println!();
    println!("=== Students ===");
    for s in storage.students.rows() {
        println!("{} | {} | {} ({})", s, s.course_id, s.grade, s.marks);
    }

    let mut students = StudentService::new(storage);
    let (found, search_time) = students.search(|s| s.course_id == "DATA200");
    println!();
    println!(
        "Found {} DATA200 students in {:.6}s",
        found.len(),
        search_time.as_secs_f64()
    );
    let sort_time = students.sort(StudentSortKey::LastName, false)?;
    println!("Sorted by last name in {:.6}s", sort_time.as_secs_f64());

    let reports = ReportService::new(storage);
    println!();
    for course_id in DEMO_COURSES {
        println!("{}", format_stats(course_id, &reports.stats_for_course(course_id)));
    }

    println!();
    println!("=== Report: Students taught by Kapil Dev (CS101) ===");
    for report in reports.report_by_professor(DEMO_PROFESSOR) {
        let course_name = report
            .course
            .as_ref()
            .map(|c| c.course_name.as_str())
            .unwrap_or(report.professor.course_id.as_str());
        println!("Professor: {} | Course: {}", report.professor.name, course_name);
        for s in &report.students {
            println!("  - {}: {} ({})", s.full_name(), s.grade, s.marks);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GradePaths, Settings};
    use tempfile::TempDir;

    #[test]
    fn test_demo_leaves_sorted_seed_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GradePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::open(paths.clone(), Settings::default()).unwrap();

        run_demo(&mut storage).unwrap();
        run_demo(&mut storage).unwrap();

        let reloaded = Storage::open(paths, Settings::default()).unwrap();
        let last_names: Vec<&str> = reloaded
            .students
            .rows()
            .iter()
            .map(|s| s.last_name.as_str())
            .collect();
        assert_eq!(last_names, ["Kaur", "Kohli", "Mandhana", "Raj", "Sharma"]);
        assert_eq!(reloaded.logins.len(), 3);
    }
}
