//! Student display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::Student;

#[derive(Tabled)]
struct StudentRow<'a> {
    #[tabled(rename = "Email")]
    email: &'a str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Course")]
    course: &'a str,
    #[tabled(rename = "Grade")]
    grade: &'a str,
    #[tabled(rename = "Marks")]
    marks: String,
}

/// Format students as a table
pub fn format_student_list(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students found.".to_string();
    }

    let rows: Vec<StudentRow> = students
        .iter()
        .map(|s| StudentRow {
            email: &s.email_address,
            name: s.full_name(),
            course: &s.course_id,
            grade: &s.grade,
            marks: s.marks.to_string(),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push_str(&format!("\n{} student(s)", students.len()));
    output
}

/// Format a single student in detail
pub fn format_student_details(student: &Student) -> String {
    let mut output = String::new();
    output.push_str(&format!("Student: {}\n", student.full_name()));
    output.push_str(&format!("  Email:  {}\n", student.email_address));
    output.push_str(&format!("  Course: {}\n", student.course_id));
    output.push_str(&format!("  Grade:  {}\n", student.grade));
    output.push_str(&format!("  Marks:  {}", student.marks));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_student_list(&[]), "No students found.");
    }

    #[test]
    fn test_list_contains_rows() {
        let students = vec![
            Student::new("smriti@mycsu.edu", "Smriti", "Mandhana", "DATA200", "A", 95.0),
            Student::new("rohit@mycsu.edu", "Rohit", "Sharma", "CS101", "B", 84.5),
        ];
        let output = format_student_list(&students);
        assert!(output.contains("Email"));
        assert!(output.contains("Smriti Mandhana"));
        assert!(output.contains("84.5"));
        assert!(output.ends_with("2 student(s)"));
    }

    #[test]
    fn test_details() {
        let student = Student::new("sam@mycsu.edu", "Sam", "Carpenter", "DATA200", "A", 96.0);
        let output = format_student_details(&student);
        assert!(output.starts_with("Student: Sam Carpenter"));
        assert!(output.contains("Marks:  96"));
    }
}
