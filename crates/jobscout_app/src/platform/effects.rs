use jobscout_core::{Effect, FetchFailure, Job, Msg};
use jobscout_engine::{EngineEvent, EngineHandle, FetchError, FetchSettings, JobRecord};
use scout_logging::{scout_info, scout_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        scout_info!("fetch engine starting against {}", settings.base_url);
        let engine = EngineHandle::new(settings)?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadPage {
                    generation,
                    query,
                    page,
                } => {
                    scout_info!(
                        "LoadPage generation={} page={} filters={}",
                        generation,
                        page,
                        query.pairs().len()
                    );
                    self.engine.load_page(generation, page, query.pairs());
                }
            }
        }
    }

    /// Drains finished engine work into core messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageLoaded { generation, jobs } => Msg::PageLoaded {
            generation,
            jobs: jobs.into_iter().map(map_job).collect(),
        },
        EngineEvent::ProbeResolved {
            generation,
            has_next,
        } => Msg::ProbeResolved {
            generation,
            has_next,
        },
        EngineEvent::PageFailed { generation, error } => {
            scout_warn!("generation {} request failed: {}", generation, error);
            Msg::FetchFailed {
                generation,
                failure: map_failure(error),
            }
        }
    }
}

fn map_job(record: JobRecord) -> Job {
    Job {
        id: record.id,
        title: record.title,
        company: record.company,
        company_url: record.company_url,
        location: record.location,
        kind: record.kind,
        url: record.url,
        created_at: record.created_at,
        description: record.description,
        how_to_apply: record.how_to_apply,
    }
}

fn map_failure(error: FetchError) -> FetchFailure {
    FetchFailure::new(error.to_string())
}
