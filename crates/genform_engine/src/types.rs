use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub type RequestId = u64;

/// Format requested from the server; only PDF is produced.
pub const OUTPUT_FORMAT_PDF: &str = "pdf";

/// Body of `POST /api/generate-content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub output_format: String,
}

impl GenerationRequest {
    pub fn pdf(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            output_format: OUTPUT_FORMAT_PDF.to_string(),
        }
    }
}

/// Body returned by the generation service. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub article_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    GenerationCompleted {
        request_id: RequestId,
        result: Result<GenerationResult, ApiError>,
    },
    DownloadCompleted {
        url: String,
        result: Result<PathBuf, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Human-readable message supplied by the server, if it sent one.
    pub fn server_detail(&self) -> Option<&str> {
        match &self.kind {
            FailureKind::HttpStatus { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus { code: u16, detail: Option<String> },
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Persist,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus { code, .. } => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response body"),
            FailureKind::Persist => write!(f, "could not save file"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
