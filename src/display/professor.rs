//! Professor display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::Professor;

#[derive(Tabled)]
struct ProfessorRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Rank")]
    rank: &'a str,
    #[tabled(rename = "Course")]
    course: &'a str,
}

/// Format professors as a table
pub fn format_professor_list(professors: &[Professor]) -> String {
    if professors.is_empty() {
        return "No professors found.".to_string();
    }

    let rows: Vec<ProfessorRow> = professors
        .iter()
        .map(|p| ProfessorRow {
            id: &p.professor_id,
            name: &p.name,
            rank: &p.rank,
            course: &p.course_id,
        })
        .collect();

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format a single professor in detail
pub fn format_professor_details(professor: &Professor) -> String {
    let mut output = String::new();
    output.push_str(&format!("Professor: {}\n", professor.name));
    output.push_str(&format!("  ID:     {}\n", professor.professor_id));
    output.push_str(&format!("  Rank:   {}\n", professor.rank));
    output.push_str(&format!("  Course: {}", professor.course_id));
    output
}
