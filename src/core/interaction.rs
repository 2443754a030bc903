//! Blocking vs non-blocking calls, synchronous vs asynchronous interactions.
//!
//! Four phases, run in order by [`InteractionDemo`]:
//! 1. a blocking read of a file,
//! 2. a non-blocking connect and read that may report "would block",
//! 3. a synchronous call where the caller waits for the callee's value,
//! 4. tasks on a single-threaded cooperative scheduler, each suspended on a
//!    timer while the others run, joined in submission order.

use crate::config::InteractionSettings;
use crate::core::narrator::Narrator;
use crate::domain::model::{
    AsyncReport, BlockingReadReport, InteractionReport, NonBlockingReport, Readiness,
    SyncCallReport,
};
use crate::domain::ports::{Demonstration, NonBlockingSource};
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task::{JoinHandle, LocalSet};
use tokio::time::Instant;

/// Turns the "would block" signal into `Ok(None)`; every other error is kept.
fn unless_would_block<T>(result: io::Result<T>) -> io::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
        Err(e) => Err(e),
    }
}

/// Reads `path` to the end. Does not return before every byte is in memory.
pub fn blocking_read(path: &Path, narrator: &Narrator) -> Result<BlockingReadReport> {
    tracing::debug!("Blocking read of {}", path.display());
    let data = std::fs::read_to_string(path)?;

    let report = BlockingReadReport {
        path: path.display().to_string(),
        bytes: data.len(),
        chars: data.chars().count(),
    };
    narrator.say(format!(
        "Read this file, length: {} characters ({} bytes)",
        report.chars, report.bytes
    ));
    Ok(report)
}

/// Connects and reads once without ever waiting.
///
/// The source's one-off setup (a name lookup for a real socket) runs first
/// and any failure there is returned. A connect or read that cannot finish
/// immediately is narrated and replaced by a placeholder; any other error is
/// returned.
pub fn non_blocking_probe<S>(
    source: &mut S,
    read_buffer: usize,
    narrator: &Narrator,
) -> Result<NonBlockingReport>
where
    S: NonBlockingSource + ?Sized,
{
    source.prepare()?;
    let target = source.target();

    let connect = match unless_would_block(source.try_connect())? {
        Some(()) => {
            narrator.say(format!("Connected to {} without waiting", target));
            Readiness::Ready
        }
        None => {
            narrator.say("Connection is being established, but the thread is not blocked");
            Readiness::WouldBlock
        }
    };

    let mut buf = vec![0u8; read_buffer];
    let first_read = unless_would_block(source.try_read(&mut buf))?.map(|n| buf[..n].to_vec());

    match &first_read {
        Some(data) => narrator.say(format!("Data right away: {} bytes", data.len())),
        None => narrator.say("Data right away: None"),
    }
    tracing::debug!(?connect, got_data = first_read.is_some(), "Probed {}", target);

    Ok(NonBlockingReport {
        target,
        connect,
        first_read,
    })
}

/// Runs `callee` and hands back its value. The caller makes no progress in
/// between.
pub fn sync_call<T>(callee: impl FnOnce() -> T) -> T {
    callee()
}

pub fn callee_y(narrator: &Narrator) -> String {
    narrator.say("  Y: started work");
    "Y result".to_string()
}

/// One unit of asynchronous work. The timed sleep is its only suspension point.
pub async fn fetch(id: usize, delay: Duration, narrator: Narrator) -> String {
    narrator.say(format!("  [{}] Request sent...", id));
    tracing::debug!(task = id, ?delay, "Suspending");
    tokio::time::sleep(delay).await;
    narrator.say(format!("  [{}] Response received", id));
    "OK".to_string()
}

/// Spawns `count` fetches on a [`LocalSet`] and awaits them in submission order.
///
/// Every task runs on the current thread; they overlap only because each one
/// yields while it sleeps, so the whole batch takes about one `delay`.
pub async fn gather_fetches(
    count: usize,
    delay: Duration,
    narrator: &Narrator,
) -> Result<AsyncReport> {
    let started = Instant::now();
    let local = LocalSet::new();

    let results = local
        .run_until(async {
            let handles: Vec<JoinHandle<String>> = (1..=count)
                .map(|id| tokio::task::spawn_local(fetch(id, delay, narrator.clone())))
                .collect();

            let mut results = Vec::with_capacity(handles.len());
            for handle in handles {
                results.push(handle.await?);
            }
            Ok::<_, DemoError>(results)
        })
        .await?;

    let elapsed = started.elapsed();
    narrator.say(format!("Results: {}", results.join(", ")));
    tracing::debug!(?elapsed, tasks = count, "All fetches joined");

    Ok(AsyncReport {
        results,
        delay_ms: delay.as_millis() as u64,
        elapsed_ms: elapsed.as_millis() as u64,
    })
}

pub struct InteractionDemo<S: NonBlockingSource> {
    source_path: PathBuf,
    source: S,
    read_buffer: usize,
    tasks: usize,
    delay: Duration,
}

impl<S: NonBlockingSource> InteractionDemo<S> {
    pub fn new(source_path: impl Into<PathBuf>, source: S, settings: &InteractionSettings) -> Self {
        Self {
            source_path: source_path.into(),
            source,
            read_buffer: settings.read_buffer,
            tasks: settings.tasks,
            delay: Duration::from_millis(settings.delay_ms),
        }
    }
}

#[async_trait(?Send)]
impl<S: NonBlockingSource> Demonstration for InteractionDemo<S> {
    type Report = InteractionReport;

    fn title(&self) -> &str {
        "Blocking vs non-blocking, synchronous vs asynchronous"
    }

    async fn run(&mut self, narrator: &Narrator) -> Result<InteractionReport> {
        narrator.say("1) Synchronous blocking (reading a file)");
        let blocking = blocking_read(&self.source_path, narrator)?;
        narrator.blank();

        narrator.say("2) Synchronous non-blocking (non-blocking socket)");
        let non_blocking = non_blocking_probe(&mut self.source, self.read_buffer, narrator)?;
        narrator.blank();

        narrator.say("3) Synchronous interaction (sync_call)");
        let result = sync_call(|| callee_y(narrator));
        narrator.say(format!("sync_call result: {}", result));
        narrator.blank();

        narrator.say("4) Asynchronous non-blocking interaction (tasks on one thread)");
        let asynchronous = gather_fetches(self.tasks, self.delay, narrator).await?;
        narrator.blank();

        Ok(InteractionReport {
            blocking,
            non_blocking,
            sync_call: SyncCallReport { result },
            asynchronous,
        })
    }
}
