#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App finished starting up; kick off the first fetch.
    Started,
    /// The search form emitted a (field, value) pair.
    FieldEdited { name: String, value: String },
    /// User asked for the previous page.
    PrevPageClicked,
    /// User asked for the next page.
    NextPageClicked,
    /// The primary page request resolved.
    PageLoaded {
        generation: crate::Generation,
        jobs: Vec<crate::Job>,
    },
    /// The page+1 probe resolved; `has_next` is "probe page was non-empty".
    ProbeResolved {
        generation: crate::Generation,
        has_next: bool,
    },
    /// The primary or probe request failed (never a cancellation).
    FetchFailed {
        generation: crate::Generation,
        failure: crate::FetchFailure,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
