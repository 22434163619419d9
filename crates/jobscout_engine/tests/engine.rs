use std::time::Duration;

use jobscout_engine::{EngineEvent, EngineHandle, FailureKind, FetchSettings};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> FetchSettings {
    FetchSettings {
        base_url: format!("{}/positions.json", server.uri()),
        ..FetchSettings::default()
    }
}

fn job(id: &str) -> serde_json::Value {
    json!({ "id": id, "title": format!("Job {id}") })
}

async fn mock_page(server: &MockServer, page: u32, body: serde_json::Value, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/positions.json"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_delay(delay).set_body_json(body))
        .mount(server)
        .await;
}

/// Polls the engine's event channel until `expected` events arrived or the
/// budget ran out.
async fn drain_events(engine: &EngineHandle, expected: usize, budget: Duration) -> Vec<EngineEvent> {
    let started = tokio::time::Instant::now();
    let mut events = Vec::new();
    while events.len() < expected && started.elapsed() < budget {
        while let Some(event) = engine.try_recv() {
            events.push(event);
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    events
}

fn generation_of(event: &EngineEvent) -> u64 {
    match event {
        EngineEvent::PageLoaded { generation, .. } => *generation,
        EngineEvent::ProbeResolved { generation, .. } => *generation,
        EngineEvent::PageFailed { generation, .. } => *generation,
    }
}

#[tokio::test]
async fn primary_and_probe_resolve_independently() {
    let server = MockServer::start().await;
    mock_page(&server, 3, json!([job("a"), job("b")]), Duration::ZERO).await;
    mock_page(&server, 4, json!([]), Duration::ZERO).await;

    let engine = EngineHandle::new(settings_for(&server)).expect("engine");
    engine.load_page(7, 3, vec![("description".to_string(), "ruby".to_string())]);

    let events = drain_events(&engine, 2, Duration::from_secs(3)).await;
    assert_eq!(events.len(), 2);

    let jobs = events.iter().find_map(|event| match event {
        EngineEvent::PageLoaded { jobs, .. } => Some(jobs.clone()),
        _ => None,
    });
    assert_eq!(jobs.expect("primary resolved").len(), 2);

    let has_next = events.iter().find_map(|event| match event {
        EngineEvent::ProbeResolved { has_next, .. } => Some(*has_next),
        _ => None,
    });
    assert_eq!(has_next, Some(false));
}

#[tokio::test]
async fn probe_reports_more_pages() {
    let server = MockServer::start().await;
    mock_page(&server, 1, json!([job("a")]), Duration::ZERO).await;
    mock_page(&server, 2, json!([job("b")]), Duration::ZERO).await;

    let engine = EngineHandle::new(settings_for(&server)).expect("engine");
    engine.load_page(1, 1, Vec::new());

    let events = drain_events(&engine, 2, Duration::from_secs(3)).await;
    let has_next = events.iter().find_map(|event| match event {
        EngineEvent::ProbeResolved { has_next, .. } => Some(*has_next),
        _ => None,
    });
    assert_eq!(has_next, Some(true));
}

#[tokio::test]
async fn superseded_generation_emits_no_events() {
    let server = MockServer::start().await;
    // Generation 1's pages answer slowly; generation 2's immediately.
    mock_page(&server, 1, json!([job("old")]), Duration::from_millis(400)).await;
    mock_page(&server, 2, json!([job("old2")]), Duration::from_millis(400)).await;
    mock_page(&server, 5, json!([job("new")]), Duration::ZERO).await;
    mock_page(&server, 6, json!([]), Duration::ZERO).await;

    let engine = EngineHandle::new(settings_for(&server)).expect("engine");
    engine.load_page(1, 1, Vec::new());
    tokio::time::sleep(Duration::from_millis(50)).await;
    engine.load_page(2, 5, Vec::new());

    let events = drain_events(&engine, 2, Duration::from_secs(3)).await;
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| generation_of(event) == 2));

    // Past the point where generation 1 would have answered: still nothing.
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(engine.try_recv().is_none());
}

#[tokio::test]
async fn request_failure_is_reported_per_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/positions.json"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mock_page(&server, 2, json!([]), Duration::ZERO).await;

    let engine = EngineHandle::new(settings_for(&server)).expect("engine");
    engine.load_page(4, 1, Vec::new());

    let events = drain_events(&engine, 2, Duration::from_secs(3)).await;
    let failure = events.iter().find_map(|event| match event {
        EngineEvent::PageFailed { error, .. } => Some(error.kind.clone()),
        _ => None,
    });
    assert_eq!(failure, Some(FailureKind::HttpStatus(500)));

    // The probe is independent and still resolves.
    assert!(events
        .iter()
        .any(|event| matches!(event, EngineEvent::ProbeResolved { has_next: false, .. })));
}
