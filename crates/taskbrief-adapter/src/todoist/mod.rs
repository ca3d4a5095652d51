/*
[INPUT]:  Todoist REST configuration and task models
[OUTPUT]: Typed task-fetch client
[POS]:    Todoist layer - task source adapter
[UPDATE]: When adding new endpoints or changing task models
*/

pub mod client;
pub mod models;

pub use client::TodoistClient;
pub use models::{Due, Task};
