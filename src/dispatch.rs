//! Bounded task dispatch shared by both pipeline stages
//!
//! Both stages fan independent units of work out to concurrent tasks and
//! collect results in completion order: the crawl stage runs one task per
//! calendar day under a fixed worker limit, the scrape stage runs one task
//! per URL with the limit set to the batch size. Tasks are spawned so a
//! panic in one unit is caught at the task boundary, logged with the unit's
//! label, and surfaced as `None` while its siblings keep running.

use futures::stream::{self, StreamExt};
use std::future::Future;

/// Runs labeled tasks with at most `limit` in flight at once
///
/// Returns one `(label, result)` pair per input task, in completion order.
/// A task that panics yields `None`.
///
/// # Arguments
///
/// * `limit` - Maximum number of tasks in flight (clamped to at least 1)
/// * `tasks` - Label and future for each unit of work; the label identifies
///   the unit (a date or a URL) in diagnostics
pub async fn run_bounded<T, F>(limit: usize, tasks: Vec<(String, F)>) -> Vec<(String, Option<T>)>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    stream::iter(tasks)
        .map(|(label, task)| async move {
            match tokio::spawn(task).await {
                Ok(value) => (label, Some(value)),
                Err(e) => {
                    tracing::error!("Task for {} failed: {}", label, e);
                    (label, None)
                }
            }
        })
        .buffer_unordered(limit.max(1))
        .collect()
        .await
}
