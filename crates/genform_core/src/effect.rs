use crate::RequestId;

/// IO requested by `update`; executed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the trimmed topic to the generate-content endpoint.
    Generate { request_id: RequestId, topic: String },
    /// GET the generated file and save it locally.
    Download { url: String },
}
