use std::path::PathBuf;

use crate::FormStatus;

pub const SUBMIT_LABEL: &str = "Generate Content";
pub const SUBMIT_BUSY_LABEL: &str = "Generating Content...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub topic: String,
    pub status: FormStatus,
    pub input_enabled: bool,
    pub can_submit: bool,
    pub submit_label: &'static str,
    /// Error banner text; `None` hides the banner.
    pub error: Option<String>,
    /// Present only for a stored result whose status is "success".
    pub success: Option<SuccessCardView>,
    pub saved_download: Option<PathBuf>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessCardView {
    pub message: String,
    pub article_content: Option<String>,
    pub download_url: Option<String>,
}

impl SuccessCardView {
    pub fn can_download(&self) -> bool {
        self.download_url.is_some()
    }
}
