/*
[INPUT]:  block_actions and view_submission payloads from the platform
[OUTPUT]: An opened comment modal, then the original digest updated in place
[POS]:    Core logic - two-step comment protocol (Idle -> FormOpen -> Resolved)
[UPDATE]: When the modal schema, context fields, or merge format change
*/

use crate::compose::digest_blocks;
use serde::{Deserialize, Serialize};
use taskbrief_adapter::{
    Block, BlockActionsPayload, Element, ModalView, SlackClient, ViewSubmissionPayload,
};
use tracing::{error, info, warn};

pub const COMMENT_CALLBACK_ID: &str = "comment_modal";
pub const COMMENT_BLOCK_ID: &str = "comment_block";
pub const COMMENT_INPUT_ID: &str = "comment_input";

const COMMENT_HEADER: &str = "*User Comment:*";

/// The opaque context round-tripped through the platform between the two
/// protocol steps. Built verbatim from the originating message and never
/// re-derived; the service keeps no state of its own between steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentContext {
    pub channel: String,
    pub message_ts: String,
    pub original_text: String,
}

impl CommentContext {
    /// Capture the originating message identity and body from a button click
    pub fn from_action(payload: &BlockActionsPayload) -> Self {
        Self {
            channel: payload.container.channel_id.clone(),
            message_ts: payload.message.ts.clone(),
            original_text: payload.message.text.clone(),
        }
    }

    /// Serialize into the modal's private_metadata slot
    pub fn to_metadata(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from private_metadata returned at submission time
    pub fn from_metadata(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// New message body: the original text followed by the comment section.
    /// The original text is carried unchanged.
    pub fn annotated_text(&self, comment: &str) -> String {
        format!("{}\n\n{COMMENT_HEADER}\n{comment}", self.original_text)
    }
}

/// Build the comment-entry modal seeded with the serialized context
pub fn comment_modal(context: &CommentContext) -> serde_json::Result<ModalView> {
    Ok(ModalView::new(
        COMMENT_CALLBACK_ID,
        "Add Comment",
        "Submit",
        context.to_metadata()?,
        vec![Block::input(
            COMMENT_BLOCK_ID,
            "Comment",
            Element::plain_text_input(COMMENT_INPUT_ID, true),
        )],
    ))
}

/// Step 1 (Idle -> FormOpen): open the comment modal for a clicked digest.
/// Runs after the transport ack; a failure here is logged and abandoned.
pub async fn open_comment_modal(slack: &SlackClient, payload: &BlockActionsPayload) {
    let context = CommentContext::from_action(payload);
    let view = match comment_modal(&context) {
        Ok(view) => view,
        Err(err) => {
            error!(error = %err, ts = %context.message_ts, "context serialization failed");
            return;
        }
    };
    match slack.open_view(&payload.trigger_id, &view).await {
        Ok(()) => {
            info!(channel = %context.channel, ts = %context.message_ts, "comment modal opened");
        }
        Err(err) => {
            error!(error = %err, ts = %context.message_ts, "comment modal open failed");
        }
    }
}

/// Step 2 (FormOpen -> Resolved): merge the submitted comment back into the
/// original digest. Last submission wins; there is no conflict detection.
pub async fn apply_comment(slack: &SlackClient, payload: &ViewSubmissionPayload) {
    let context = match CommentContext::from_metadata(&payload.view.private_metadata) {
        Ok(context) => context,
        Err(err) => {
            error!(error = %err, "invalid interaction context in submission");
            return;
        }
    };
    let Some(comment) = payload.view.input_value(COMMENT_BLOCK_ID, COMMENT_INPUT_ID) else {
        warn!(channel = %context.channel, ts = %context.message_ts, "submission without comment value");
        return;
    };

    // Resend the digest layout so the comment button survives the update
    // and the flow stays re-enterable.
    let body = context.annotated_text(comment);
    let blocks = digest_blocks(&body);
    match slack
        .update_message(&context.channel, &context.message_ts, &body, &blocks)
        .await
    {
        Ok(updated) => {
            info!(channel = %updated.channel, ts = %updated.ts, "comment merged into digest");
        }
        Err(err) => {
            error!(error = %err, channel = %context.channel, ts = %context.message_ts, "digest update failed");
        }
    }
}
