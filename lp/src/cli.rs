//! CLI command definitions and subcommands

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::lesson::{BackgroundKnowledge, DetailLevel, GradeLevel, LessonDuration};

/// Streaming AI lesson plan generator
#[derive(Parser)]
#[command(
    name = "lp",
    about = "Generate lesson plans from a streaming backend",
    version,
    after_help = "Logs are written to: ~/.local/share/lessonplan/logs/lessonplan.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Generate a lesson plan and stream it to stdout
    Generate {
        #[command(flatten)]
        lesson: LessonArgs,
    },

    /// Print the assembled prompt without contacting the backend
    Prompt {
        #[command(flatten)]
        lesson: LessonArgs,
    },

    /// Show logs
    Logs {
        /// Follow log output (like tail -f)
        #[arg(short, long)]
        follow: bool,

        /// Number of lines to show
        #[arg(short, long, default_value = "50")]
        lines: usize,
    },
}

/// Lesson parameters shared by `generate` and `prompt`
#[derive(Args)]
pub struct LessonArgs {
    /// Topic or subject (leave blank for a random lesson)
    #[arg(value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Grade or college level (kindergarten, 1st grade .. 12th grade, college)
    #[arg(short, long, default_value = "kindergarten")]
    pub grade: GradeLevel,

    /// Level of detail (detailed or semi-detailed)
    #[arg(short, long, default_value = "detailed")]
    pub detail: DetailLevel,

    /// Lesson duration (30-60, 60-90, 90-120 minutes, or 2-3 hours)
    #[arg(short = 'D', long, default_value = "30-60 minutes")]
    pub duration: LessonDuration,

    /// Student background knowledge (beginner, intermediate, advanced)
    #[arg(short, long, default_value = "beginner")]
    pub background: BackgroundKnowledge,
}

/// Path to the log file
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lessonplan")
        .join("logs")
        .join("lessonplan.log")
}
