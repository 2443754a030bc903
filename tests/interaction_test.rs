use concept_demos::core::interaction::{fetch, gather_fetches, non_blocking_probe};
use concept_demos::core::{Demonstration, Readiness};
use concept_demos::{
    DemoEngine, DemoError, InteractionDemo, InteractionSettings, Narrator, ScriptedSource, Step, TcpProbe,
};
use std::io::Write;
use std::net::TcpListener;
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio_test::{assert_pending, assert_ready_eq};

fn settings() -> InteractionSettings {
    InteractionSettings {
        delay_ms: 1000,
        ..Default::default()
    }
}

fn source_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test(start_paused = true)]
async fn test_full_run_with_scripted_peer() {
    let file = source_file("fn main() {}\n");
    let narrator = Narrator::captured();
    let demo = InteractionDemo::new(file.path(), ScriptedSource::pending(), &settings());

    let report = DemoEngine::new(demo).run(&narrator).await.unwrap();

    assert_eq!(report.blocking.bytes, 13);
    assert_eq!(report.blocking.chars, 13);
    assert_eq!(report.non_blocking.connect, Readiness::WouldBlock);
    assert_eq!(report.non_blocking.first_read, None);
    assert_eq!(report.sync_call.result, "Y result");
    assert_eq!(report.asynchronous.results, vec!["OK", "OK"]);

    let headers: Vec<usize> = ["1)", "2)", "3)", "4)"]
        .iter()
        .map(|h| narrator.position(h).unwrap())
        .collect();
    assert!(headers.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test(start_paused = true)]
async fn test_phases_run_strictly_in_order() {
    let file = source_file("x");
    let narrator = Narrator::captured();
    let mut demo = InteractionDemo::new(file.path(), ScriptedSource::pending(), &settings());

    demo.run(&narrator).await.unwrap();

    let callee = narrator.position("Y: started work").unwrap();
    let result = narrator.position("sync_call result: Y result").unwrap();
    let first_request = narrator.position("[1] Request sent").unwrap();
    assert!(callee < result);
    assert!(result < first_request);
}

#[tokio::test(start_paused = true)]
async fn test_failed_lookup_stops_after_phase_two_header() {
    let file = source_file("x");
    let narrator = Narrator::captured();
    let source = ScriptedSource::unresolvable("nowhere.invalid", 80);
    let mut demo = InteractionDemo::new(file.path(), source, &settings());

    let result = demo.run(&narrator).await;

    assert!(matches!(result, Err(DemoError::ResolveError { .. })));
    assert_eq!(
        narrator.lines(),
        vec![
            "1) Synchronous blocking (reading a file)",
            "Read this file, length: 1 characters (1 bytes)",
            "",
            "2) Synchronous non-blocking (non-blocking socket)",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_tasks_suspend_together() {
    let narrator = Narrator::captured();
    let report = gather_fetches(2, Duration::from_secs(1), &narrator)
        .await
        .unwrap();

    let sent: Vec<usize> = ["[1] Request sent", "[2] Request sent"]
        .iter()
        .map(|l| narrator.position(l).unwrap())
        .collect();
    let received: Vec<usize> = ["[1] Response received", "[2] Response received"]
        .iter()
        .map(|l| narrator.position(l).unwrap())
        .collect();

    assert!(sent.iter().max() < received.iter().min());
    assert_eq!(narrator.lines().last().unwrap(), "Results: OK, OK");
    // Concurrent suspension: one delay, not two.
    assert!(report.elapsed_ms < 2 * report.delay_ms);
}

#[tokio::test(start_paused = true)]
async fn test_more_tasks_still_take_one_delay() {
    let narrator = Narrator::captured();
    let report = gather_fetches(5, Duration::from_millis(200), &narrator)
        .await
        .unwrap();

    assert_eq!(report.results.len(), 5);
    assert!(report.elapsed_ms >= 200);
    assert!(report.elapsed_ms < 400);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_suspends_only_at_its_timer() {
    let narrator = Narrator::captured();
    let mut task = tokio_test::task::spawn(fetch(1, Duration::from_millis(500), narrator.clone()));

    assert_pending!(task.poll());
    assert_eq!(narrator.lines(), vec!["  [1] Request sent..."]);

    tokio::time::advance(Duration::from_millis(500)).await;
    assert!(task.is_woken());
    assert_ready_eq!(task.poll(), "OK".to_string());
    assert_eq!(narrator.lines().len(), 2);
}

#[test]
fn test_loopback_connect_never_waits() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let mut probe = TcpProbe::from_addr(listener.local_addr().unwrap());
    let narrator = Narrator::captured();

    let report = non_blocking_probe(&mut probe, 1024, &narrator).unwrap();

    // The handshake may or may not finish immediately; nothing was sent.
    assert!(matches!(
        report.connect,
        Readiness::Ready | Readiness::WouldBlock
    ));
    assert_eq!(report.first_read, None);
    drop(listener);
}

#[test]
fn test_immediate_data_is_reported() {
    let mut source = ScriptedSource::new()
        .connect(Step::Ready(Vec::new()))
        .read(Step::Ready(b"hello".to_vec()));
    let narrator = Narrator::captured();

    let report = non_blocking_probe(&mut source, 1024, &narrator).unwrap();

    assert_eq!(report.first_read.as_deref(), Some(&b"hello"[..]));
    assert_eq!(narrator.lines().last().unwrap(), "Data right away: 5 bytes");
}

#[test]
fn test_report_serializes_readiness_in_snake_case() {
    let value = serde_json::to_value(Readiness::WouldBlock).unwrap();
    assert_eq!(value, serde_json::json!("would_block"));
}
