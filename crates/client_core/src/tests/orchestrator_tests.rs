use super::*;
use std::{collections::VecDeque, time::Duration};

use async_trait::async_trait;
use shared::domain::Person;

use crate::loader::parse_people;

const PARK_FAMILY: &str = r#"{"people":[
    {"name":"Jo","lname":"Park","relation":"Sister"},
    {"name":"Al","lname":"Parker","relation":"Friend"}
]}"#;

/// Serves a fixed document, sleeping for the next queued delay on each load.
struct ScriptedSource {
    body: std::sync::Mutex<String>,
    delays: std::sync::Mutex<VecDeque<Duration>>,
    loads: AtomicUsize,
}

impl ScriptedSource {
    fn new(body: &str) -> Self {
        Self {
            body: std::sync::Mutex::new(body.to_string()),
            delays: std::sync::Mutex::new(VecDeque::new()),
            loads: AtomicUsize::new(0),
        }
    }

    fn with_delays(self, delays: &[u64]) -> Self {
        *self.delays.lock().expect("delays") =
            delays.iter().copied().map(Duration::from_millis).collect();
        self
    }

    fn set_body(&self, body: &str) {
        *self.body.lock().expect("body") = body.to_string();
    }
}

#[async_trait]
impl PeopleSource for ScriptedSource {
    async fn load_people(&self) -> Result<Vec<Person>, LoadError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let delay = self.delays.lock().expect("delays").pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let body = self.body.lock().expect("body").clone();
        parse_people(body.as_bytes(), "scripted")
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

fn cells(document: &DirectoryDocument) -> Vec<[String; 3]> {
    document
        .list
        .entries()
        .iter()
        .map(|entry| entry.cells.clone())
        .collect()
}

#[tokio::test]
async fn renders_filtered_sorted_people_with_header() {
    let orchestrator = QueryOrchestrator::new(Arc::new(ScriptedSource::new(PARK_FAMILY)));

    let outcome = orchestrator.run_query("par").await.expect("query");

    assert!(matches!(outcome, QueryOutcome::Rendered { rows: 2, .. }));
    let document = orchestrator.document().await;
    assert_eq!(
        cells(&document),
        vec![
            ["Last Name", "First Name", "Relation"].map(String::from),
            ["Park", "Jo", "Sister"].map(String::from),
            ["Parker", "Al", "Friend"].map(String::from),
        ]
    );
}

#[tokio::test]
async fn empty_dataset_renders_header_only() {
    let orchestrator = QueryOrchestrator::new(Arc::new(ScriptedSource::new(r#"{"people":[]}"#)));

    let outcome = orchestrator.run_query("").await.expect("query");

    assert!(matches!(
        outcome,
        QueryOutcome::Rendered {
            rows: 0,
            populated_selectors: false,
            ..
        }
    ));
    let document = orchestrator.document().await;
    assert_eq!(document.list.len(), 1);
    assert!(document.list.entries()[0].is_header());
    assert!(document.selectors.first_names.options().is_empty());
    assert!(document.selectors.last_names.options().is_empty());
}

#[tokio::test]
async fn selectors_are_populated_once_from_first_result() {
    let orchestrator = QueryOrchestrator::new(Arc::new(ScriptedSource::new(PARK_FAMILY)));

    orchestrator.run_query("").await.expect("first query");
    orchestrator.run_query("").await.expect("second query");
    orchestrator.run_query("jo").await.expect("third query");

    let document = orchestrator.document().await;
    let first: Vec<&str> = document
        .selectors
        .first_names
        .options()
        .iter()
        .map(|option| option.value.as_str())
        .collect();
    let last: Vec<&str> = document
        .selectors
        .last_names
        .options()
        .iter()
        .map(|option| option.value.as_str())
        .collect();
    assert_eq!(first, vec!["Jo", "Al"]);
    assert_eq!(last, vec!["Park", "Parker"]);
    assert_eq!(document.list.len(), 2);
}

#[tokio::test]
async fn every_query_reloads_the_dataset() {
    let source = Arc::new(ScriptedSource::new(PARK_FAMILY));
    let orchestrator = QueryOrchestrator::new(source.clone());

    orchestrator.run_query("").await.expect("first query");
    source.set_body(r#"{"people":[{"name":"Ann","lname":"Lee","relation":"Aunt"}]}"#);
    orchestrator.run_query("").await.expect("second query");

    assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    let document = orchestrator.document().await;
    assert_eq!(document.list.entries()[1].cells[0], "Lee");
}

#[tokio::test]
async fn load_failure_keeps_last_render() {
    let source = Arc::new(ScriptedSource::new(PARK_FAMILY));
    let orchestrator = QueryOrchestrator::new(source.clone());
    orchestrator.run_query("").await.expect("first query");

    source.set_body("{\"people\":");
    let err = orchestrator.run_query("al").await.unwrap_err();

    assert!(matches!(err, LoadError::Parse { .. }));
    let document = orchestrator.document().await;
    assert_eq!(document.list.len(), 3);
    assert_eq!(document.last_rendered_seq(), Some(1));
    assert_eq!(orchestrator.state(), QueryState::Idle);
}

#[tokio::test]
async fn state_is_loading_while_tickets_are_outstanding() {
    let orchestrator = QueryOrchestrator::new(Arc::new(ScriptedSource::new(PARK_FAMILY)));
    assert_eq!(orchestrator.state(), QueryState::Idle);

    let first = orchestrator.issue();
    let second = orchestrator.issue();
    assert_eq!(orchestrator.state(), QueryState::Loading);
    assert!(second.seq() > first.seq());

    orchestrator.complete(first, "").await.expect("first");
    assert_eq!(orchestrator.state(), QueryState::Loading);
    drop(second);
    assert_eq!(orchestrator.state(), QueryState::Idle);
}

#[tokio::test(start_paused = true)]
async fn stale_result_finishing_last_is_discarded() {
    let source = ScriptedSource::new(PARK_FAMILY).with_delays(&[50, 10]);
    let orchestrator = QueryOrchestrator::new(Arc::new(source));

    let (older, newer) = tokio::join!(orchestrator.run_query("p"), orchestrator.run_query("al"));

    let older = older.expect("older query");
    let newer = newer.expect("newer query");
    assert!(matches!(newer, QueryOutcome::Rendered { rows: 1, .. }));
    assert_eq!(
        older,
        QueryOutcome::Superseded {
            seq: older.seq(),
            latest: newer.seq()
        }
    );
    let document = orchestrator.document().await;
    assert_eq!(document.list.len(), 2);
    assert_eq!(document.list.entries()[1].cells[1], "Al");
    assert_eq!(orchestrator.state(), QueryState::Idle);
}

#[tokio::test(start_paused = true)]
async fn in_order_completion_renders_each_result() {
    let source = ScriptedSource::new(PARK_FAMILY).with_delays(&[10, 50]);
    let orchestrator = QueryOrchestrator::new(Arc::new(source));

    let (older, newer) = tokio::join!(orchestrator.run_query("p"), orchestrator.run_query("al"));

    assert!(matches!(older.expect("older"), QueryOutcome::Rendered { rows: 2, .. }));
    assert!(matches!(newer.expect("newer"), QueryOutcome::Rendered { rows: 1, .. }));
    assert_eq!(orchestrator.document().await.list.len(), 2);
}
