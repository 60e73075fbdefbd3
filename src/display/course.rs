//! Course display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::Course;

#[derive(Tabled)]
struct CourseRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Credits")]
    credits: String,
    #[tabled(rename = "Description")]
    description: &'a str,
}

fn credits_label(credits: Option<i32>) -> String {
    credits.map(|c| c.to_string()).unwrap_or_else(|| "-".into())
}

/// Format courses as a table
pub fn format_course_list(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "No courses found.".to_string();
    }

    let rows: Vec<CourseRow> = courses
        .iter()
        .map(|c| CourseRow {
            id: &c.course_id,
            name: &c.course_name,
            credits: credits_label(c.credits),
            description: &c.description,
        })
        .collect();

    Table::new(rows).with(Style::psql()).to_string()
}

/// One-line summary: `DATA200: Data Science (3 cr)`
pub fn format_course_line(course: &Course) -> String {
    match course.credits {
        Some(credits) => format!("{}: {} ({} cr)", course.course_id, course.course_name, credits),
        None => format!("{}: {}", course.course_id, course.course_name),
    }
}

/// Format a single course in detail
pub fn format_course_details(course: &Course) -> String {
    let mut output = String::new();
    output.push_str(&format!("Course: {}\n", course.course_id));
    output.push_str(&format!("  Name:        {}\n", course.course_name));
    output.push_str(&format!("  Credits:     {}\n", credits_label(course.credits)));
    output.push_str(&format!("  Description: {}", course.description));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_line() {
        let course = Course::new("DATA200", "Data Science").with_credits(3);
        assert_eq!(format_course_line(&course), "DATA200: Data Science (3 cr)");

        let course = Course::new("X1", "Unrated");
        assert_eq!(format_course_line(&course), "X1: Unrated");
    }

    #[test]
    fn test_list_and_details() {
        let courses = vec![Course::new("CS101", "Intro CS").with_description("Programming fundamentals")];
        let output = format_course_list(&courses);
        assert!(output.contains("CS101"));
        assert!(output.contains("Programming fundamentals"));

        let details = format_course_details(&courses[0]);
        assert!(details.contains("Credits:     -"));
        assert_eq!(format_course_list(&[]), "No courses found.");
    }
}
