//! Genform engine: HTTP client, file persistence and effect execution.
mod client;
mod engine;
mod persist;
mod types;

pub use client::{
    resolve_url, ClientSettings, GenerationClient, ReqwestGenerationClient, DEFAULT_BASE_URL,
    GENERATE_PATH,
};
pub use engine::{EngineConfig, EngineError, EngineHandle};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError, DOWNLOAD_FILENAME};
pub use types::{
    ApiError, EngineEvent, FailureKind, GenerationRequest, GenerationResult, RequestId,
    OUTPUT_FORMAT_PDF,
};
