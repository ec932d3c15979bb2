use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use genform_core::{DownloadOutcome, Effect, GeneratedContent, Msg};
use genform_engine::{EngineConfig, EngineError, EngineEvent, EngineHandle, GenerationResult};

use super::app::UiEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, ui_tx: mpsc::Sender<UiEvent>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(config)?;
        let runner = Self { engine };
        runner.spawn_event_loop(ui_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Generate { request_id, topic } => {
                    engine_info!(
                        "Generate request_id={} topic_len={} topic={:?}",
                        request_id,
                        topic.len(),
                        topic
                    );
                    self.engine.generate(request_id, topic);
                }
                Effect::Download { url } => {
                    engine_info!("Download url={}", url);
                    self.engine.download(url);
                }
            }
        }
    }

    fn spawn_event_loop(&self, ui_tx: mpsc::Sender<UiEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                if ui_tx.send(UiEvent::Msg(map_event(event))).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::GenerationCompleted { request_id, result } => match result {
            Ok(body) => Msg::GenerationSucceeded {
                request_id,
                result: map_result(body),
            },
            Err(err) => {
                engine_warn!("Generation {} failed: {}", request_id, err);
                Msg::GenerationFailed {
                    request_id,
                    detail: err.server_detail().map(ToOwned::to_owned),
                }
            }
        },
        EngineEvent::DownloadCompleted { url, result } => match result {
            Ok(path) => Msg::DownloadFinished(DownloadOutcome::Saved(path)),
            Err(err) => {
                engine_warn!("Download {} failed: {}", url, err);
                Msg::DownloadFinished(DownloadOutcome::Failed)
            }
        },
    }
}

fn map_result(body: GenerationResult) -> GeneratedContent {
    GeneratedContent {
        status: body.status,
        message: body.message,
        download_url: body.download_url,
        file_path: body.file_path,
        article_content: body.article_content,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use genform_engine::{ApiError, FailureKind};

    use super::*;

    fn api_error(kind: FailureKind) -> ApiError {
        ApiError {
            kind,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn http_error_detail_is_forwarded() {
        let msg = map_event(EngineEvent::GenerationCompleted {
            request_id: 3,
            result: Err(api_error(FailureKind::HttpStatus {
                code: 500,
                detail: Some("Content generation failed".to_string()),
            })),
        });

        assert_eq!(
            msg,
            Msg::GenerationFailed {
                request_id: 3,
                detail: Some("Content generation failed".to_string()),
            }
        );
    }

    #[test]
    fn network_error_has_no_detail() {
        let msg = map_event(EngineEvent::GenerationCompleted {
            request_id: 1,
            result: Err(api_error(FailureKind::Network)),
        });

        assert_eq!(
            msg,
            Msg::GenerationFailed {
                request_id: 1,
                detail: None,
            }
        );
    }

    #[test]
    fn download_results_map_to_outcomes() {
        let saved = PathBuf::from("downloads/generated-content.pdf");
        let ok = map_event(EngineEvent::DownloadCompleted {
            url: "/api/download/a.pdf".to_string(),
            result: Ok(saved.clone()),
        });
        assert_eq!(ok, Msg::DownloadFinished(DownloadOutcome::Saved(saved)));

        let failed = map_event(EngineEvent::DownloadCompleted {
            url: "/api/download/a.pdf".to_string(),
            result: Err(api_error(FailureKind::Timeout)),
        });
        assert_eq!(failed, Msg::DownloadFinished(DownloadOutcome::Failed));
    }
}
