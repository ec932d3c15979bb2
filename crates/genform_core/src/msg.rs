use crate::{DownloadOutcome, GeneratedContent, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the topic text.
    InputChanged(String),
    /// User pressed the submit control.
    TopicSubmitted,
    /// Engine: the generate request returned a parsed result.
    GenerationSucceeded {
        request_id: RequestId,
        result: GeneratedContent,
    },
    /// Engine: the generate request failed. `detail` is the server's message, if any.
    GenerationFailed {
        request_id: RequestId,
        detail: Option<String>,
    },
    /// User pressed the download control on the success card.
    DownloadClicked,
    /// Engine: the download finished.
    DownloadFinished(DownloadOutcome),
    /// User dismissed the error banner.
    ErrorDismissed,
    /// Render tick.
    Tick,
    NoOp,
}
