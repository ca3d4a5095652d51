/*
[INPUT]:  Task-providing backends (Todoist in production, stubs in tests)
[OUTPUT]: A uniform async fetch seam for the digest pipeline
[POS]:    Seam layer - task source abstraction
[UPDATE]: When the pipeline needs more than a one-shot fetch
*/

use crate::error::Result;
use crate::todoist::{Task, TodoistClient};
use async_trait::async_trait;

/// Anything that can produce the current task list
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Fetch the current task list
    async fn fetch(&self) -> Result<Vec<Task>>;
}

#[async_trait]
impl TaskSource for TodoistClient {
    async fn fetch(&self) -> Result<Vec<Task>> {
        self.active_tasks().await
    }
}
