use crate::{AppState, Effect, Msg, VALIDATION_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // Input is disabled while a request is outstanding.
            if !state.is_generating() {
                state.set_topic(text);
            }
            Vec::new()
        }
        Msg::TopicSubmitted => {
            if state.is_generating() {
                return (state, Vec::new());
            }
            let topic = state.trimmed_topic().to_string();
            if topic.is_empty() {
                state.set_error(VALIDATION_MESSAGE);
                return (state, Vec::new());
            }
            let request_id = state.begin_generation();
            vec![Effect::Generate { request_id, topic }]
        }
        Msg::GenerationSucceeded { request_id, result } => {
            if state.finish_generation(request_id) {
                state.apply_result(result);
            }
            Vec::new()
        }
        Msg::GenerationFailed { request_id, detail } => {
            if state.finish_generation(request_id) {
                state.apply_failure(detail);
            }
            Vec::new()
        }
        Msg::DownloadClicked => match state.download_url() {
            Some(url) => vec![Effect::Download {
                url: url.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::DownloadFinished(outcome) => {
            state.record_download(outcome);
            Vec::new()
        }
        Msg::ErrorDismissed => {
            state.dismiss_error();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
