use jobscout_core::{update, AppState, Effect, Msg, SearchQuery};

fn started() -> AppState {
    let (state, _effects) = update(AppState::new(), Msg::Started);
    state
}

fn with_probe(state: AppState, has_next: bool) -> AppState {
    let generation = state.generation();
    let (state, _effects) = update(
        state,
        Msg::ProbeResolved {
            generation,
            has_next,
        },
    );
    state
}

#[test]
fn next_disabled_until_probe_confirms() {
    let state = started();
    assert!(!state.view().next_enabled);

    let (state, effects) = update(state, Msg::NextPageClicked);
    assert_eq!(state.page(), 1);
    assert!(effects.is_empty());
}

#[test]
fn next_advances_when_probe_found_more() {
    let state = with_probe(started(), true);
    assert!(state.view().next_enabled);

    let (state, effects) = update(state, Msg::NextPageClicked);
    assert_eq!(state.page(), 2);
    assert_eq!(state.generation(), 2);
    assert_eq!(
        effects,
        vec![Effect::LoadPage {
            generation: 2,
            query: SearchQuery::new(),
            page: 2,
        }]
    );
}

#[test]
fn prev_disabled_on_first_page() {
    let state = started();
    assert!(!state.view().prev_enabled);

    let (state, effects) = update(state, Msg::PrevPageClicked);
    assert_eq!(state.page(), 1);
    assert!(effects.is_empty());
}

#[test]
fn prev_returns_to_earlier_page() {
    let state = with_probe(started(), true);
    let (state, _effects) = update(state, Msg::NextPageClicked);
    assert_eq!(state.page(), 2);

    let (state, effects) = update(state, Msg::PrevPageClicked);
    assert_eq!(state.page(), 1);
    assert_eq!(effects.len(), 1);
}

#[test]
fn page_moves_keep_the_query() {
    let state = started();
    let (state, _effects) = update(
        state,
        Msg::FieldEdited {
            name: "description".to_string(),
            value: "ruby".to_string(),
        },
    );
    let state = with_probe(state, true);

    let (state, effects) = update(state, Msg::NextPageClicked);
    assert_eq!(state.page(), 2);
    assert_eq!(state.query().get("description"), Some("ruby"));
    assert_eq!(
        effects,
        vec![Effect::LoadPage {
            generation: 3,
            query: SearchQuery::new().with_field("description", "ruby"),
            page: 2,
        }]
    );
}

#[test]
fn query_edit_resets_page_back_to_one() {
    let state = with_probe(started(), true);
    let (state, _effects) = update(state, Msg::NextPageClicked);
    let state = with_probe(state, true);
    let (state, _effects) = update(state, Msg::NextPageClicked);
    assert_eq!(state.page(), 3);

    let (state, _effects) = update(
        state,
        Msg::FieldEdited {
            name: "location".to_string(),
            value: "remote".to_string(),
        },
    );
    assert_eq!(state.page(), 1);
}

#[test]
fn empty_probe_on_first_page_disables_next() {
    // Empty query, page 1, probe for page 2 came back with nothing.
    let state = with_probe(started(), false);
    let view = state.view();

    assert_eq!(view.has_next_page, Some(false));
    assert!(!view.next_enabled);
}
