//! Built-in verification suite
//!
//! Exercises the behavioral guarantees of the library against a throwaway
//! data directory: uniqueness, persistence round trips, the cipher, login,
//! sorting, statistics and the CRUD scenarios. `checkmygrade selftest` runs
//! it and reports one line per check.

use std::path::Path;

use anyhow::{ensure, Context};
use tempfile::TempDir;
use tracing::debug;

use crate::config::{GradePaths, Settings};
use crate::crypto::XorCipher;
use crate::models::{
    Course, CourseUpdate, Professor, ProfessorUpdate, Student, StudentSortKey, StudentUpdate,
};
use crate::services::{AuthService, CourseService, ProfessorService, ReportService, StudentService};
use crate::storage::Storage;

/// Number of synthetic students in the bulk check
pub const BULK_STUDENTS: usize = 1000;

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Diya", "Ishaan", "Kavya", "Rohan", "Sneha", "Vikram", "Ananya", "Arjun", "Meera",
];
const LAST_NAMES: &[&str] = &[
    "Patel", "Sharma", "Iyer", "Reddy", "Gupta", "Nair", "Singh", "Das", "Kulkarni", "Menon",
];

/// Outcome of a single check
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub result: anyhow::Result<()>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

type Check = fn(&Path) -> anyhow::Result<()>;

const CHECKS: &[(&str, Check)] = &[
    ("cipher round trip", check_cipher_round_trip),
    ("register and login", check_register_and_login),
    ("student add/update/delete", check_student_scenario),
    ("course and professor crud", check_course_and_professor_crud),
    ("uniqueness", check_uniqueness),
    ("persistence round trip", check_persistence_round_trip),
    ("bulk load, search, sort, stats", check_bulk),
    ("empty course stats", check_empty_stats),
];

/// Run every check, each in its own subdirectory of a fresh temp dir
pub fn run_selftest() -> anyhow::Result<Vec<CheckOutcome>> {
    let temp_dir = TempDir::new().context("creating selftest directory")?;
    debug!(dir = %temp_dir.path().display(), "Running selftest");

    let outcomes = CHECKS
        .iter()
        .enumerate()
        .map(|(i, (name, check))| {
            let dir = temp_dir.path().join(format!("check{}", i));
            CheckOutcome {
                name: *name,
                result: check(&dir),
            }
        })
        .collect();

    Ok(outcomes)
}

fn open_storage(dir: &Path) -> anyhow::Result<Storage> {
    let paths = GradePaths::with_base_dir(dir.to_path_buf());
    Ok(Storage::open(paths, Settings::default())?)
}

/// Baseline course and professor every scenario starts from
fn open_seeded(dir: &Path) -> anyhow::Result<Storage> {
    let mut storage = open_storage(dir)?;
    CourseService::new(&mut storage).add(
        Course::new("DATA200", "Data Science")
            .with_description("Intro DS/Python")
            .with_credits(3),
    )?;
    ProfessorService::new(&mut storage).add(Professor::new(
        "michael@mycsu.edu",
        "Michael John",
        "Senior Professor",
        "DATA200",
    ))?;
    Ok(storage)
}

fn check_cipher_round_trip(_dir: &Path) -> anyhow::Result<()> {
    let cipher = XorCipher::default();
    for password in ["Welcome12#_", "NewP@ss1", "", "ünïcødé ✓", "a,b\"c\nd"] {
        let ciphertext = cipher.encrypt(password);
        ensure!(!ciphertext.contains(','), "ciphertext contains a delimiter");
        ensure!(
            cipher.decrypt(&ciphertext)? == password,
            "round trip failed for {:?}",
            password
        );
    }
    ensure!(cipher.decrypt("not base64!!").is_err(), "garbage decoded");
    Ok(())
}

fn check_register_and_login(dir: &Path) -> anyhow::Result<()> {
    let mut storage = open_seeded(dir)?;
    let mut auth = AuthService::new(&mut storage);

    auth.register_user("michael@mycsu.edu", "Welcome12#_", "professor")?;
    ensure!(auth.login("michael@mycsu.edu", "Welcome12#_"), "correct password rejected");
    ensure!(!auth.login("michael@mycsu.edu", "wrong"), "wrong password accepted");

    ensure!(auth.change_password("michael@mycsu.edu", "NewP@ss1")?, "password not changed");
    ensure!(!auth.login("michael@mycsu.edu", "Welcome12#_"), "old password still accepted");
    ensure!(auth.login("michael@mycsu.edu", "NewP@ss1"), "new password rejected");
    ensure!(!auth.change_password("nobody@mycsu.edu", "x")?, "changed unknown user");

    let mut reopened = open_storage(dir)?;
    ensure!(
        AuthService::new(&mut reopened).login("michael@mycsu.edu", "NewP@ss1"),
        "new password not persisted"
    );
    Ok(())
}

fn check_student_scenario(dir: &Path) -> anyhow::Result<()> {
    let mut storage = open_seeded(dir)?;

    let mut students = StudentService::new(&mut storage);
    students.add(Student::new("sam@mycsu.edu", "Sam", "Carpenter", "DATA200", "A", 96.0))?;
    ensure!(students.get("sam@mycsu.edu").is_some(), "student not added");

    let update = StudentUpdate::default().marks(97.0).grade("A+");
    ensure!(students.update("sam@mycsu.edu", &update)?, "update found no match");

    let marks = ReportService::new(&storage)
        .report_by_student("sam@mycsu.edu")
        .map(|s| s.marks);
    ensure!(marks == Some(97.0), "marks after update: {:?}", marks);

    ensure!(StudentService::new(&mut storage).delete("sam@mycsu.edu")?, "delete found no match");
    ensure!(
        ReportService::new(&storage).report_by_student("sam@mycsu.edu").is_none(),
        "student still present"
    );
    ensure!(
        open_storage(dir)?.students.find("sam@mycsu.edu").is_none(),
        "deleted student reloaded"
    );
    Ok(())
}

fn check_course_and_professor_crud(dir: &Path) -> anyhow::Result<()> {
    let mut storage = open_seeded(dir)?;

    let mut courses = CourseService::new(&mut storage);
    courses.add(Course::new("CS101", "Intro CS").with_description("Basics").with_credits(4))?;
    ensure!(
        courses.update("CS101", &CourseUpdate::default().description("Basics of CS"))?,
        "course update found no match"
    );
    ensure!(
        courses.get("CS101").map(|c| c.description.as_str()) == Some("Basics of CS"),
        "course description not updated"
    );
    ensure!(courses.delete("CS101")?, "course delete found no match");

    let mut professors = ProfessorService::new(&mut storage);
    professors.add(Professor::new("ada@mycsu.edu", "Ada Lovelace", "Professor", "DATA200"))?;
    ensure!(
        professors.update("ada@mycsu.edu", &ProfessorUpdate::default().rank("Associate Professor"))?,
        "professor update found no match"
    );
    ensure!(professors.delete("ada@mycsu.edu")?, "professor delete found no match");

    let reloaded = open_storage(dir)?;
    ensure!(reloaded.courses.find("CS101").is_none(), "deleted course reloaded");
    ensure!(reloaded.professors.find("ada@mycsu.edu").is_none(), "deleted professor reloaded");
    Ok(())
}

fn check_uniqueness(dir: &Path) -> anyhow::Result<()> {
    let mut storage = open_seeded(dir)?;

    let err = CourseService::new(&mut storage)
        .add(Course::new("DATA200", "Again"))
        .err();
    ensure!(err.is_some_and(|e| e.is_validation()), "duplicate course accepted");
    ensure!(storage.courses.len() == 1, "course count changed");

    let err = ProfessorService::new(&mut storage)
        .add(Professor::new("michael@mycsu.edu", "Again", "", ""))
        .err();
    ensure!(err.is_some_and(|e| e.is_validation()), "duplicate professor accepted");
    ensure!(storage.professors.len() == 1, "professor count changed");

    let mut students = StudentService::new(&mut storage);
    students.add(Student::new("sam@mycsu.edu", "Sam", "C", "DATA200", "A", 96.0))?;
    let err = students
        .add(Student::new("sam@mycsu.edu", "Sam", "D", "DATA200", "B", 80.0))
        .err();
    ensure!(err.is_some_and(|e| e.is_validation()), "duplicate student accepted");
    let err = students.add(Student::new("", "No", "Email", "DATA200", "B", 80.0)).err();
    ensure!(err.is_some_and(|e| e.is_validation()), "empty email accepted");
    ensure!(students.count() == 1, "student count changed");

    let mut auth = AuthService::new(&mut storage);
    auth.register_user("u@mycsu.edu", "pw", "student")?;
    let err = auth.register_user("u@mycsu.edu", "pw2", "student").err();
    ensure!(err.is_some_and(|e| e.is_validation()), "duplicate user accepted");
    ensure!(auth.list().len() == 1, "user count changed");
    Ok(())
}

fn check_persistence_round_trip(dir: &Path) -> anyhow::Result<()> {
    let mut storage = open_seeded(dir)?;
    let mut students = StudentService::new(&mut storage);
    students.add(Student::new("a@mycsu.edu", "Ann", "Lee", "DATA200", "B+", 88.5))?;
    students.add(Student::new("b@mycsu.edu", "Ben, Jr.", "O\"Neil", "DATA200", "C", 71.0))?;
    CourseService::new(&mut storage).add(Course::new("NOCR", "No credits"))?;

    let reloaded = open_storage(dir)?;
    ensure!(reloaded.students.rows() == storage.students.rows(), "students differ after reload");
    ensure!(reloaded.courses.rows() == storage.courses.rows(), "courses differ after reload");
    ensure!(
        reloaded.professors.rows() == storage.professors.rows(),
        "professors differ after reload"
    );
    ensure!(
        reloaded.courses.find("NOCR").is_some_and(|c| c.credits.is_none()),
        "missing credits not preserved"
    );
    Ok(())
}

/// Deterministic pseudo-random sequence so failures are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.next() as usize % items.len()]
    }
}

fn letter_grade(marks: f64) -> &'static str {
    match marks {
        m if m >= 90.0 => "A",
        m if m >= 80.0 => "B",
        m if m >= 70.0 => "C",
        m if m >= 60.0 => "D",
        _ => "F",
    }
}

fn check_bulk(dir: &Path) -> anyhow::Result<()> {
    let mut storage = open_seeded(dir)?;
    let mut rng = Lcg(2024);

    // Bulk rows bypass the service and are saved once
    for i in 0..BULK_STUDENTS {
        let first = rng.pick(FIRST_NAMES);
        let last = rng.pick(LAST_NAMES);
        let marks = (40 + rng.next() % 61) as f64;
        let email = format!("{}.{}{}@student.edu", first.to_lowercase(), last.to_lowercase(), i);
        storage.students.push(Student::new(
            email,
            first,
            last,
            "DATA200",
            letter_grade(marks),
            marks,
        ));
    }
    storage.students.save()?;

    let mut reloaded = open_storage(dir)?;
    ensure!(
        reloaded.students.len() >= BULK_STUDENTS,
        "only {} students reloaded",
        reloaded.students.len()
    );

    let mut students = StudentService::new(&mut reloaded);
    let (found, search_time) = students.search(|s| s.email_address.ends_with("@student.edu"));
    ensure!(!found.is_empty(), "search matched nothing");
    debug!(matched = found.len(), ?search_time, "Bulk search");

    let sort_time = students.sort(StudentSortKey::Marks, true)?;
    debug!(?sort_time, "Bulk sort");
    let marks: Vec<f64> = students.list().iter().map(|s| s.marks).collect();
    ensure!(
        marks.windows(2).all(|w| w[0] >= w[1]),
        "marks are not non-increasing after reverse sort"
    );

    let stats = ReportService::new(&reloaded).stats_for_course("DATA200");
    ensure!(stats.count == BULK_STUDENTS, "stats counted {} students", stats.count);
    ensure!(
        (40.0..=100.0).contains(&stats.average) && (40.0..=100.0).contains(&stats.median),
        "stats out of range: {:?}",
        stats
    );
    Ok(())
}

fn check_empty_stats(dir: &Path) -> anyhow::Result<()> {
    let storage = open_seeded(dir)?;
    let stats = ReportService::new(&storage).stats_for_course("NOPE");
    ensure!(
        stats.average == 0.0 && stats.median == 0.0,
        "empty course stats: {:?}",
        stats
    );
    Ok(())
}
