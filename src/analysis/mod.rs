//! Symptom analysis: keyword-scored condition shortlist, care advice,
//! and the remote/local strategy orchestration around them.
//!
//! Leaves first: `catalog` → `scoring` → `recommendations` → strategies
//! (`local`, `remote`) → `orchestrator`.

pub mod catalog;
pub mod local;
pub mod openai;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod recommendations;
pub mod remote;
pub mod scoring;
pub mod types;

pub use catalog::*;
pub use local::*;
pub use openai::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;
pub use recommendations::*;
pub use remote::*;
pub use scoring::*;
pub use types::*;

use thiserror::Error;

/// Failures of the remote strategy. Never surfaced past the orchestrator.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Remote analysis service unreachable at {0}")]
    Connection(String),

    #[error("Remote analysis request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Remote analysis returned error (status {status}): {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Remote analysis returned no message content")]
    EmptyResponse,

    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),
}
