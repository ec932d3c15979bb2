use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use engine_logging::{engine_error, engine_info, engine_warn};
use thiserror::Error;

use crate::client::{ClientSettings, GenerationClient, ReqwestGenerationClient};
use crate::persist::{AtomicFileWriter, DOWNLOAD_FILENAME};
use crate::{ApiError, EngineEvent, FailureKind, GenerationRequest, RequestId};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub client: ClientSettings,
    pub output_dir: PathBuf,
    pub download_filename: String,
}

impl EngineConfig {
    pub fn default_with_output(output_dir: PathBuf) -> Self {
        Self {
            client: ClientSettings::default(),
            output_dir,
            download_filename: DOWNLOAD_FILENAME.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] ApiError),
}

enum EngineCommand {
    Generate { request_id: RequestId, topic: String },
    Download { url: String },
}

/// Runs requests on a background tokio runtime and hands results back as
/// [`EngineEvent`]s. Cloning shares the same runtime and event queue.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let client = ReqwestGenerationClient::new(config.client)?;
        let writer = AtomicFileWriter::new(config.output_dir);
        Self::with_client(Arc::new(client), writer, config.download_filename)
    }

    pub fn with_client(
        client: Arc<dyn GenerationClient>,
        writer: AtomicFileWriter,
        download_filename: String,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let download_filename = Arc::new(download_filename);

        thread::Builder::new()
            .name("genform-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let writer = writer.clone();
                    let download_filename = download_filename.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        let event =
                            handle_command(client.as_ref(), &writer, &download_filename, command)
                                .await;
                        let _ = event_tx.send(event);
                    });
                }
                engine_info!("Engine command channel closed; shutting down");
            })?;

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn generate(&self, request_id: RequestId, topic: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Generate {
            request_id,
            topic: topic.into(),
        });
    }

    pub fn download(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Download { url: url.into() });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        let rx = self.event_rx.lock().ok()?;
        rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn GenerationClient,
    writer: &AtomicFileWriter,
    download_filename: &str,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::Generate { request_id, topic } => {
            let request = GenerationRequest::pdf(topic);
            let result = client.generate(&request).await;
            match &result {
                Ok(body) => engine_info!(
                    "Generation {} finished: status={} message={:?}",
                    request_id,
                    body.status,
                    body.message
                ),
                Err(err) => engine_warn!("Generation {} failed: {}", request_id, err),
            }
            EngineEvent::GenerationCompleted { request_id, result }
        }
        EngineCommand::Download { url } => {
            let result = match client.download(&url).await {
                Ok(bytes) => writer.write(download_filename, &bytes).map_err(|err| {
                    engine_error!("Failed to save download from {}: {}", url, err);
                    ApiError::new(FailureKind::Persist, err.to_string())
                }),
                Err(err) => {
                    engine_warn!("Download of {} failed: {}", url, err);
                    Err(err)
                }
            };
            if let Ok(path) = &result {
                engine_info!("Saved {} to {:?}", url, path);
            }
            EngineEvent::DownloadCompleted { url, result }
        }
    }
}
