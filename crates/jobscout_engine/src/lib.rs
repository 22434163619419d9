//! JobScout engine: HTTP fetching and request-generation lifecycle.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, PageFetcher, ReqwestFetcher, DEFAULT_BASE_URL};
pub use types::{EngineEvent, FailureKind, FetchError, Generation, JobRecord};
