//! Streaming generation client for the lesson plan backend
//!
//! One submission is one POST carrying the assembled prompt. The response
//! body streams back as raw UTF-8 text and is decoded incrementally; every
//! state change is reported as a [`RequestOutcome`].

mod client;
mod decode;
mod error;
mod outcome;
mod session;

pub use client::{GenerateClient, Submission};
pub use decode::ChunkDecoder;
pub use error::GenerateError;
pub use outcome::{ApiFailure, RateLimitInfo, RequestOutcome};
pub use session::{Applied, SubmissionController, SubmissionToken};
