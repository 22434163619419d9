use std::sync::{mpsc, Arc};
use std::thread;

use scout_logging::scout_debug;
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
use crate::{EngineEvent, FetchError, Generation};

enum EngineCommand {
    LoadPage {
        generation: Generation,
        page: u32,
        filters: Vec<(String, String)>,
    },
}

/// Which of a generation's two requests a task is running.
#[derive(Clone, Copy)]
enum Role {
    Primary,
    Probe,
}

impl Role {
    fn label(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Probe => "probe",
        }
    }
}

/// Handle to the fetch worker. Commands go in over a channel; completion
/// events come back out. One `LoadPage` command fans out into the primary
/// request and the page+1 probe, both owned by a cancellation token that
/// the next command (or teardown) cancels.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    shutdown: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings)?);
        let shutdown = CancellationToken::new();
        let worker_shutdown = shutdown.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut in_flight = worker_shutdown.child_token();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::LoadPage {
                        generation,
                        page,
                        filters,
                    } => {
                        // Last write wins: the previous generation's
                        // requests are cancelled before the new ones start.
                        in_flight.cancel();
                        in_flight = worker_shutdown.child_token();

                        spawn_request(
                            &runtime,
                            fetcher.clone(),
                            in_flight.clone(),
                            event_tx.clone(),
                            generation,
                            page,
                            filters.clone(),
                            Role::Primary,
                        );
                        spawn_request(
                            &runtime,
                            fetcher.clone(),
                            in_flight.clone(),
                            event_tx.clone(),
                            generation,
                            page + 1,
                            filters,
                            Role::Probe,
                        );
                    }
                }
            }
            in_flight.cancel();
        });

        Ok(Self {
            cmd_tx,
            event_rx,
            shutdown,
        })
    }

    pub fn load_page(&self, generation: Generation, page: u32, filters: Vec<(String, String)>) {
        let _ = self.cmd_tx.send(EngineCommand::LoadPage {
            generation,
            page,
            filters,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[allow(clippy::too_many_arguments)]
fn spawn_request(
    runtime: &tokio::runtime::Runtime,
    fetcher: Arc<ReqwestFetcher>,
    token: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent>,
    generation: Generation,
    page: u32,
    filters: Vec<(String, String)>,
    role: Role,
) {
    runtime.spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {
                // Intentional cancellation: no event, nothing surfaces.
                scout_debug!(
                    "generation {} {} request for page {} cancelled",
                    generation,
                    role.label(),
                    page
                );
            }
            result = fetcher.fetch_page(page, &filters) => {
                let event = match (role, result) {
                    (Role::Primary, Ok(jobs)) => EngineEvent::PageLoaded { generation, jobs },
                    (Role::Probe, Ok(jobs)) => EngineEvent::ProbeResolved {
                        generation,
                        has_next: !jobs.is_empty(),
                    },
                    (_, Err(error)) => EngineEvent::PageFailed { generation, error },
                };
                let _ = event_tx.send(event);
            }
        }
    });
}
