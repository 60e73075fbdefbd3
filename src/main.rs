use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use checkmygrade::cli::{
    handle_audit_command, handle_course_command, handle_professor_command, handle_report_command,
    handle_stats_command, handle_student_command, handle_user_command, run_demo,
};
use checkmygrade::config::{GradePaths, Settings};
use checkmygrade::logging::{init_logging, Verbosity};
use checkmygrade::seed::seed_sample_data;
use checkmygrade::selftest::run_selftest;
use checkmygrade::storage::Storage;

#[derive(Parser)]
#[command(
    name = "checkmygrade",
    version,
    about = "Flat-file academic records manager",
    long_about = "CheckMyGrade keeps students, courses, professors and logins in plain \
                  CSV files in a data directory. Run without a command for a demo that \
                  resets the data directory, seeds sample records and prints reports."
)]
struct Cli {
    /// Directory holding the CSV files (default: current directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Module selector; `-m tests` runs the verification suite
    #[arg(short = 'm', value_name = "MODULE", hide = true)]
    module: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset the data files, seed sample data and print reports
    Demo,

    /// Add the sample courses, professors and students
    Seed {
        /// Empty every data file first
        #[arg(long)]
        reset: bool,
    },

    /// Run the built-in verification suite in a temporary directory
    Selftest,

    /// Student management commands
    #[command(subcommand)]
    Student(checkmygrade::cli::StudentCommands),

    /// Course management commands
    #[command(subcommand)]
    Course(checkmygrade::cli::CourseCommands),

    /// Professor management commands
    #[command(subcommand, alias = "prof")]
    Professor(checkmygrade::cli::ProfessorCommands),

    /// Login account commands
    #[command(subcommand)]
    User(checkmygrade::cli::UserCommands),

    /// Average and median marks per course
    Stats {
        /// Course IDs
        #[arg(required = true)]
        course_ids: Vec<String>,
    },

    /// Course, professor and student reports
    #[command(subcommand)]
    Report(checkmygrade::cli::ReportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to checkmygrade.json
        #[arg(long)]
        write: bool,
    },
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        match (self.quiet, self.verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Normal,
            (false, 1) => Verbosity::Verbose,
            (false, _) => Verbosity::Trace,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    if let Some(module) = cli.module.as_deref() {
        if module != "tests" {
            bail!("Unknown module '{}'; the only module is 'tests'", module);
        }
        return selftest();
    }

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => GradePaths::with_base_dir(dir),
        None => GradePaths::new(),
    };
    let settings = Settings::load_or_create(&paths)?;
    let open = || Storage::open(paths.clone(), settings.clone());

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Selftest => return selftest(),
        Commands::Config { write } => {
            if write {
                settings.save(&paths)?;
            }
            print_config(&paths, &settings)?;
        }
        Commands::Demo => run_demo(&mut open()?)?,
        Commands::Seed { reset } => {
            let summary = seed_sample_data(&mut open()?, reset)?;
            println!(
                "Seeded {} course(s), {} professor(s), {} login(s), {} student(s)",
                summary.courses, summary.professors, summary.logins, summary.students
            );
        }
        Commands::Student(cmd) => handle_student_command(&mut open()?, cmd)?,
        Commands::Course(cmd) => handle_course_command(&mut open()?, cmd)?,
        Commands::Professor(cmd) => handle_professor_command(&mut open()?, cmd)?,
        Commands::User(cmd) => handle_user_command(&mut open()?, cmd)?,
        Commands::Stats { course_ids } => handle_stats_command(&open()?, &course_ids)?,
        Commands::Report(cmd) => handle_report_command(&open()?, cmd)?,
        Commands::Audit { limit } => handle_audit_command(&open()?, limit)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn selftest() -> Result<ExitCode> {
    let outcomes = run_selftest()?;
    let mut failed = 0;

    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => println!("ok      {}", outcome.name),
            Err(e) => {
                failed += 1;
                println!("FAILED  {}: {:#}", outcome.name, e);
            }
        }
    }

    println!();
    println!("{} passed, {} failed", outcomes.len() - failed, failed);

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_config(paths: &GradePaths, settings: &Settings) -> Result<()> {
    println!("CheckMyGrade Configuration");
    println!("==========================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Students:       {}", paths.students_file().display());
    println!("Courses:        {}", paths.courses_file().display());
    println!("Professors:     {}", paths.professors_file().display());
    println!("Logins:         {}", paths.login_file().display());
    println!("Settings:       {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Schema version: {}", settings.schema_version);
    println!("  Schema policy:  {:?}", settings.schema_policy);
    println!("  Audit enabled:  {}", settings.audit_enabled);

    let audit = checkmygrade::audit::AuditLogger::new(paths.audit_log());
    println!("  Audit entries:  {}", audit.entry_count()?);
    Ok(())
}
