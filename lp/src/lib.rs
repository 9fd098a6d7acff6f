//! lessonplan - Streaming AI lesson plan generator
//!
//! A small client for a text-completion backend: lesson parameters become a
//! natural-language prompt, the prompt is POSTed to the generation endpoint,
//! and the plan streams back chunk by chunk as it is produced.
//!
//! # Core Concepts
//!
//! - **One submission, one request**: no retries, no timeout by default
//! - **Incremental decoding**: UTF-8 state carries across reads, so
//!   multi-byte characters split over chunk boundaries decode intact
//! - **Explicit outcome state**: every submission walks Pending, Chunk*,
//!   then Done or Failed, owned by a single controller
//! - **Stale generations discarded**: a superseded submission can never
//!   write into the current accumulator
//!
//! # Modules
//!
//! - [`lesson`] - Request parameters and prompt assembly
//! - [`generate`] - Streaming fetch client and outcome state machine
//! - [`guard`] - Topic character-limit guard
//! - [`render`] - Incremental stdout rendering
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod generate;
pub mod guard;
pub mod lesson;
pub mod render;

// Re-export commonly used types
pub use config::{Config, GeneratorConfig};
pub use generate::{
    ApiFailure, Applied, ChunkDecoder, GenerateClient, GenerateError, RateLimitInfo, RequestOutcome, Submission,
    SubmissionController, SubmissionToken,
};
pub use guard::{TOPIC_MAX_CHARS, TopicInput};
pub use lesson::{
    BackgroundKnowledge, DetailLevel, GradeLevel, LessonDuration, LessonRequest, build_prompt,
};
pub use render::StreamPrinter;
