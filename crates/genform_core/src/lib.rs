//! Genform core: pure form state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, DownloadOutcome, FormStatus, GeneratedContent, RequestId,
    DOWNLOAD_FAILED_MESSAGE, GENERATE_FAILED_MESSAGE, SUCCESS_STATUS, VALIDATION_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, SuccessCardView, SUBMIT_BUSY_LABEL, SUBMIT_LABEL};
