/*
[INPUT]:  Slack Web API configuration, block models, interaction payloads
[OUTPUT]: Typed messaging client and event types
[POS]:    Slack layer - messaging platform adapter
[UPDATE]: When adding new Web API methods or payload types
*/

pub mod blocks;
pub mod chat;
pub mod client;
pub mod events;
pub mod views;

pub use blocks::{Block, Element, Text};
pub use chat::MessageRef;
pub use client::SlackClient;
pub use events::{
    ActionInvocation, BlockActionsPayload, InteractionPayload, MessageFragment,
    ViewSubmissionPayload,
};
pub use views::ModalView;
