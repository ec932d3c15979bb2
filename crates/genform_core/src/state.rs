use std::path::PathBuf;

use crate::view_model::{AppViewModel, SuccessCardView, SUBMIT_BUSY_LABEL, SUBMIT_LABEL};

pub type RequestId = u64;

pub const VALIDATION_MESSAGE: &str = "Please enter a topic";
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate content. Please try again.";
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to download file. Please try again.";
pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Generating,
    Completed,
    Failed,
}

/// Result returned by the generation service, as the form sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedContent {
    pub status: String,
    pub message: String,
    pub download_url: Option<String>,
    pub file_path: Option<String>,
    pub article_content: Option<String>,
}

impl GeneratedContent {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    topic: String,
    status: FormStatus,
    result: Option<GeneratedContent>,
    error: Option<String>,
    saved_download: Option<PathBuf>,
    next_request_id: RequestId,
    in_flight: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let generating = self.is_generating();
        AppViewModel {
            topic: self.topic.clone(),
            status: self.status,
            input_enabled: !generating,
            can_submit: !generating && !self.topic.trim().is_empty(),
            submit_label: if generating {
                SUBMIT_BUSY_LABEL
            } else {
                SUBMIT_LABEL
            },
            error: self.error.clone(),
            success: self.success_card(),
            saved_download: self.saved_download.clone(),
            dirty: self.dirty,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_generating(&self) -> bool {
        self.status == FormStatus::Generating
    }

    pub fn result(&self) -> Option<&GeneratedContent> {
        self.result.as_ref()
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_topic(&mut self, topic: String) {
        if self.topic != topic {
            self.topic = topic;
            self.mark_dirty();
        }
    }

    pub(crate) fn trimmed_topic(&self) -> &str {
        self.topic.trim()
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.mark_dirty();
    }

    pub(crate) fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Clears the previous outcome and allocates the id for the next request.
    pub(crate) fn begin_generation(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        self.status = FormStatus::Generating;
        self.result = None;
        self.error = None;
        self.saved_download = None;
        self.mark_dirty();
        request_id
    }

    /// Returns false (and changes nothing) for a stale or unknown request.
    pub(crate) fn finish_generation(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        true
    }

    pub(crate) fn apply_result(&mut self, result: GeneratedContent) {
        self.status = FormStatus::Completed;
        self.result = Some(result);
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self, detail: Option<String>) {
        self.status = FormStatus::Failed;
        let message = detail
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| GENERATE_FAILED_MESSAGE.to_string());
        self.set_error(message);
    }

    pub(crate) fn download_url(&self) -> Option<&str> {
        self.result
            .as_ref()
            .filter(|r| r.is_success())
            .and_then(|r| r.download_url.as_deref())
    }

    pub(crate) fn record_download(&mut self, outcome: DownloadOutcome) {
        match outcome {
            DownloadOutcome::Saved(path) => {
                self.saved_download = Some(path);
                self.mark_dirty();
            }
            DownloadOutcome::Failed => self.set_error(DOWNLOAD_FAILED_MESSAGE),
        }
    }

    fn success_card(&self) -> Option<SuccessCardView> {
        let result = self.result.as_ref().filter(|r| r.is_success())?;
        Some(SuccessCardView {
            message: result.message.clone(),
            article_content: result.article_content.clone(),
            download_url: result.download_url.clone(),
        })
    }
}
