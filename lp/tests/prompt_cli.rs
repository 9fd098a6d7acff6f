//! CLI-level tests for the non-network commands.

use assert_cmd::Command;
use predicates::prelude::*;

fn lp() -> Command {
    Command::cargo_bin("lp").expect("Failed to find lp binary")
}

#[test]
fn test_prompt_contains_grade_and_duration_verbatim() {
    lp().args([
        "prompt",
        "Photosynthesis",
        "--grade",
        "3rd grade",
        "--duration",
        "60-90 minutes",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("3rd Grade")
            .and(predicate::str::contains("60-90 minutes"))
            .and(predicate::str::contains("for a Photosynthesis lesson")),
    );
}

#[test]
fn test_prompt_blank_topic_uses_fallback_phrasing() {
    lp().arg("prompt").assert().success().stdout(
        predicate::str::contains("Please create a complete and Detailed Lesson Plan, appropriate for Kindergarten")
            .and(predicate::str::contains("a list of materials needed")),
    );
}

#[test]
fn test_prompt_semi_detailed_wording() {
    lp().args(["prompt", "Fractions", "--detail", "semi"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Please create a Semi-Detailed Lesson Plan")
                .and(predicate::str::contains("general learning objectives")),
        );
}

#[test]
fn test_over_long_topic_is_truncated_with_a_warning() {
    let topic = "x".repeat(250);
    lp().args(["prompt", &topic])
        .assert()
        .success()
        .stderr(predicate::str::contains("You have reached the maximum number of characters."))
        .stdout(
            predicate::str::contains("x".repeat(200))
                .and(predicate::str::contains("x".repeat(201)).not()),
        );
}

#[test]
fn test_unknown_duration_is_rejected() {
    lp().args(["prompt", "--duration", "45 minutes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown duration"));
}

#[test]
fn test_help_lists_subcommands() {
    lp().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate").and(predicate::str::contains("prompt")));
}
