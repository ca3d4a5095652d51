/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public taskbrief adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod client;
pub mod error;
pub mod slack;
pub mod source;
pub mod todoist;

// Re-export shared HTTP building blocks
pub use client::ClientConfig;
pub use error::{AdapterError, Result};

// Re-export commonly used types from todoist
pub use todoist::{Due, Task, TodoistClient};

// Re-export commonly used types from slack
pub use slack::{
    Block,
    BlockActionsPayload,
    Element,
    InteractionPayload,
    MessageRef,
    ModalView,
    SlackClient,
    Text,
    ViewSubmissionPayload,
};

// Re-export the task source seam
pub use source::TaskSource;
