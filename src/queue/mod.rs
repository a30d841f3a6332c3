//! Bounded worker queue.
//!
//! Drains a task list with a fixed number of cooperative workers. Each
//! worker pops the front task, runs the handler on it, and sleeps a fixed
//! delay before taking the next, which caps the aggregate request rate at
//! roughly `concurrency / delay` requests per second. The queue itself
//! never retries: per-task failure handling, including giving up, lives
//! entirely in the handler, which signals "nothing to keep" with `None`.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use log::info;

use crate::config::PROGRESS_LOG_INTERVAL;

/// Runs `handler` over `tasks` with `concurrency` workers.
///
/// Every task is consumed exactly once. `None` handler results are dropped;
/// the rest are collected in completion order, which is unspecified when
/// workers race. A shared counter logs progress on every 20th completed
/// task. Returns once all workers have drained the list and finished their
/// in-flight task; there is no cancellation.
pub async fn run_queue<T, R, F, Fut>(
    tasks: Vec<T>,
    concurrency: usize,
    delay: Duration,
    handler: F,
) -> Vec<R>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Option<R>>,
{
    let total = tasks.len();
    let queue = Mutex::new(VecDeque::from(tasks));
    let results = Mutex::new(Vec::new());
    let done = AtomicUsize::new(0);

    let workers = (0..concurrency.max(1)).map(|_| {
        let queue = &queue;
        let results = &results;
        let done = &done;
        let handler = &handler;
        async move {
            loop {
                // The guard must not be held across the await below.
                let task = queue.lock().unwrap().pop_front();
                let Some(task) = task else { break };

                if let Some(result) = handler(task).await {
                    results.lock().unwrap().push(result);
                }

                let finished = done.fetch_add(1, Ordering::SeqCst) + 1;
                if finished % PROGRESS_LOG_INTERVAL == 0 {
                    info!("  {finished}/{total}");
                }

                tokio::time::sleep(delay).await;
            }
        }
    });

    futures::future::join_all(workers).await;

    results.into_inner().unwrap()
}
