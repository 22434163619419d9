use std::sync::Once;

use jobscout_core::{update, AppState, Effect, Msg, SearchQuery};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scout_logging::initialize_for_tests);
}

fn started() -> AppState {
    let (state, _effects) = update(AppState::new(), Msg::Started);
    state
}

fn edit(state: AppState, name: &str, value: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FieldEdited {
            name: name.to_string(),
            value: value.to_string(),
        },
    )
}

#[test]
fn started_begins_first_generation() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);

    assert_eq!(state.generation(), 1);
    assert_eq!(state.page(), 1);
    assert!(state.fetch().loading);
    assert!(state.fetch().jobs.is_empty());
    assert_eq!(
        effects,
        vec![Effect::LoadPage {
            generation: 1,
            query: SearchQuery::new(),
            page: 1,
        }]
    );
}

#[test]
fn field_edit_starts_generation_and_resets_page() {
    init_logging();
    let state = started();

    let (state, effects) = edit(state, "description", "ruby");
    let view = state.view();

    assert_eq!(state.generation(), 2);
    assert_eq!(view.page, 1);
    assert!(view.loading);
    assert_eq!(view.job_count, 0);
    assert_eq!(view.error, None);
    assert_eq!(view.has_next_page, None);
    assert_eq!(
        effects,
        vec![Effect::LoadPage {
            generation: 2,
            query: SearchQuery::new().with_field("description", "ruby"),
            page: 1,
        }]
    );
}

#[test]
fn same_value_edit_does_not_refetch() {
    init_logging();
    let state = started();
    let (state, _effects) = edit(state, "location", "berlin");
    assert_eq!(state.generation(), 2);

    // A freshly built but structurally identical query is the same search
    // intent; no new generation, no effect.
    let (state, effects) = edit(state, "location", "berlin");
    assert_eq!(state.generation(), 2);
    assert!(effects.is_empty());
}

#[test]
fn field_names_pass_through_verbatim() {
    init_logging();
    let state = started();

    let (state, effects) = edit(state, "full_time", "true");
    assert_eq!(state.query().get("full_time"), Some("true"));
    assert_eq!(effects.len(), 1);
}

#[test]
fn empty_value_is_kept_not_removed() {
    init_logging();
    let state = started();
    let (state, _effects) = edit(state, "description", "rust");

    // Clearing a field back to "" is still a query change and the empty
    // value keeps riding along, exactly as typed.
    let (state, effects) = edit(state, "description", "");
    assert_eq!(state.query().get("description"), Some(""));
    assert_eq!(effects.len(), 1);
}
