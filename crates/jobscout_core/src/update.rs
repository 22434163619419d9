use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => load_current_page(&mut state),
        Msg::FieldEdited { name, value } => {
            let next = state.query().with_field(&name, &value);
            if next == *state.query() {
                // Same search intent; a fresh-but-equal map must not
                // restart the fetch.
                return (state, Vec::new());
            }
            state.set_query(next);
            load_current_page(&mut state)
        }
        Msg::PrevPageClicked => {
            if state.page() > 1 {
                state.set_page(state.page() - 1);
                load_current_page(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::NextPageClicked => {
            if state.fetch().has_next_page == Some(true) {
                state.set_page(state.page() + 1);
                load_current_page(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::PageLoaded { generation, jobs } => {
            if generation == state.generation() {
                state.apply_jobs(jobs);
            }
            Vec::new()
        }
        Msg::ProbeResolved {
            generation,
            has_next,
        } => {
            if generation == state.generation() {
                state.apply_probe(has_next);
            }
            Vec::new()
        }
        Msg::FetchFailed {
            generation,
            failure,
        } => {
            if generation == state.generation() {
                state.apply_failure(failure);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn load_current_page(state: &mut AppState) -> Vec<Effect> {
    let generation = state.begin_generation();
    vec![Effect::LoadPage {
        generation,
        query: state.query().clone(),
        page: state.page(),
    }]
}
