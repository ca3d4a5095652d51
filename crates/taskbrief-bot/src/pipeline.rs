/*
[INPUT]:  TaskSource seam, SlackClient, destination channel, anchor date
[OUTPUT]: One published digest per run, failures logged and contained
[POS]:    Orchestration layer - fetch -> classify -> compose -> publish
[UPDATE]: When the run sequence or degraded-mode behavior changes
*/

use crate::classify::classify;
use crate::compose::compose;
use chrono::NaiveDate;
use taskbrief_adapter::{MessageRef, SlackClient, Task, TaskSource};
use tracing::{debug, error, info, warn};

/// Run one digest cycle. Every failure is handled here: a fetch failure
/// degrades to an empty task list, a publish failure ends the run after
/// logging. Returns the posted message identity when publishing succeeded.
pub async fn run_digest(
    source: &dyn TaskSource,
    slack: &SlackClient,
    channel_id: &str,
    anchor: NaiveDate,
) -> Option<MessageRef> {
    let tasks = fetch_tasks_or_empty(source).await;
    let buckets = classify(&tasks, anchor);
    debug!(
        completed_today = buckets.completed_today.len(),
        overdue = buckets.overdue.len(),
        due_tomorrow = buckets.due_tomorrow.len(),
        "tasks classified"
    );

    let digest = compose(&buckets);
    match slack.post_message(channel_id, &digest.text, &digest.blocks).await {
        Ok(posted) => {
            info!(channel = %posted.channel, ts = %posted.ts, "digest posted");
            Some(posted)
        }
        Err(err) => {
            error!(error = %err, channel = channel_id, "digest publish failed");
            None
        }
    }
}

/// Fetch tasks, consciously discarding failures: an empty list is a safe
/// degraded state for classification and composition.
pub async fn fetch_tasks_or_empty(source: &dyn TaskSource) -> Vec<Task> {
    match source.fetch().await {
        Ok(tasks) => {
            debug!(count = tasks.len(), "tasks fetched");
            tasks
        }
        Err(err) => {
            warn!(error = %err, "task fetch failed; continuing with empty list");
            Vec::new()
        }
    }
}
