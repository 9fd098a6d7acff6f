//! lessonplan - Streaming AI lesson plan generator
//!
//! CLI entry point for assembling prompts and streaming generated plans.

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use eyre::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use lessonplan::cli::{Cli, Command, LessonArgs, get_log_path};
use lessonplan::config::Config;
use lessonplan::generate::{
    Applied, GenerateClient, RequestOutcome, Submission, SubmissionController,
};
use lessonplan::guard::{TOPIC_MAX_CHARS, TopicInput};
use lessonplan::lesson::{LessonRequest, build_prompt};
use lessonplan::render::StreamPrinter;

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lessonplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Setup tracing subscriber - write to log file, not stdout/stderr
    // (stdout carries the streamed plan)
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("lessonplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("lessonplan loaded config: base_url={}", config.generator.base_url);

    // Dispatch command
    match cli.command {
        Some(Command::Generate { lesson }) => cmd_generate(&config, &lesson).await,
        Some(Command::Prompt { lesson }) => cmd_prompt(&lesson),
        Some(Command::Logs { follow, lines }) => cmd_logs(follow, lines).await,
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

/// Build the request snapshot from CLI arguments, clamping the topic
fn lesson_request(args: &LessonArgs) -> LessonRequest {
    let mut topic = TopicInput::new();
    if topic.assign(args.topic.as_deref().unwrap_or("")) {
        warn!(max_chars = TOPIC_MAX_CHARS, "topic truncated to character limit");
        eprintln!("{}", "You have reached the maximum number of characters.".yellow());
    }

    LessonRequest {
        topic: topic.into_value(),
        grade_level: args.grade,
        detail_level: args.detail,
        duration: args.duration,
        background: args.background,
    }
}

/// Print the assembled prompt without submitting it
fn cmd_prompt(args: &LessonArgs) -> Result<()> {
    let prompt = build_prompt(&lesson_request(args));
    println!("{}", prompt);
    Ok(())
}

/// Generate a lesson plan and stream it to stdout
async fn cmd_generate(config: &Config, args: &LessonArgs) -> Result<()> {
    config.validate()?;

    let request = lesson_request(args);
    let prompt = build_prompt(&request);
    debug!(prompt_chars = prompt.chars().count(), "prompt assembled");

    let client = GenerateClient::from_config(&config.generator).context("Failed to create generation client")?;

    // The controller owns the outcome state; outcomes from a superseded
    // submission would be discarded by the token check
    let mut controller = SubmissionController::new();
    let token = controller.begin();

    let (outcome_tx, mut outcome_rx) = mpsc::channel::<RequestOutcome>(100);

    let submit_handle = tokio::spawn(async move { client.submit(&prompt, &outcome_tx).await });

    let mut printer = StreamPrinter::new(io::stdout());
    while let Some(outcome) = outcome_rx.recv().await {
        if controller.apply(token, outcome.clone()) == Applied::Stale {
            continue;
        }
        match outcome {
            RequestOutcome::Pending => {
                eprintln!("{}", "Generating lesson plan...".dimmed());
            }
            RequestOutcome::Chunk(text) => {
                printer.write_chunk(&text)?;
            }
            RequestOutcome::Done => {
                printer.finish()?;
            }
            RequestOutcome::Failed(failure) => {
                warn!(
                    status = failure.status,
                    limit = ?failure.rate_limit.limit,
                    remaining = ?failure.rate_limit.remaining,
                    reset = ?failure.rate_limit.reset,
                    body = %failure.message,
                    "generation request refused"
                );
            }
        }
    }

    match submit_handle.await.context("Generation task failed")? {
        Ok(Submission::Completed(_)) => {
            info!(chars = controller.text().chars().count(), "lesson plan complete");
            Ok(())
        }
        Ok(Submission::Refused(_)) => {
            eprintln!(
                "{}",
                "You have no API requests remaining today. Try again after 24 hours.".red()
            );
            std::process::exit(1);
        }
        Ok(Submission::Empty) => {
            debug!("empty response body, nothing to show");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, timeout = e.is_timeout(), connect = e.is_connect(), "generation request failed");
            eprintln!("{}", "An error occurred. Please try again.".red());
            std::process::exit(1);
        }
    }
}

/// Show logs
async fn cmd_logs(follow: bool, lines: usize) -> Result<()> {
    let log_path = get_log_path();

    if !log_path.exists() {
        println!("No log file found at: {}", log_path.display());
        println!("Run a generation first.");
        return Ok(());
    }

    if follow {
        println!("Following log file: {} (Ctrl+C to stop)", log_path.display());
        println!();

        // Use tail -f for following
        let mut child = std::process::Command::new("tail")
            .args(["-f", "-n", &lines.to_string()])
            .arg(&log_path)
            .spawn()
            .context("Failed to run tail -f")?;

        child.wait()?;
    } else {
        // Read last N lines
        let file = fs::File::open(&log_path).context("Failed to open log file")?;
        let reader = BufReader::new(file);
        let all_lines: Vec<String> = reader.lines().map_while(Result::ok).collect();

        let start = if all_lines.len() > lines { all_lines.len() - lines } else { 0 };

        for line in &all_lines[start..] {
            println!("{}", line);
        }
    }

    Ok(())
}
