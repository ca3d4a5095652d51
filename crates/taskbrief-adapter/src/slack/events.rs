/*
[INPUT]:  Interactivity callback JSON from the Slack events transport
[OUTPUT]: Tag-dispatched payload types for the two interaction steps
[POS]:    Slack layer - inbound interaction payload models
[UPDATE]: When handling new interaction types or payload fields
*/

use serde::Deserialize;
use std::collections::HashMap;

/// An inbound interactivity payload, dispatched on its `type` tag
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionPayload {
    BlockActions(BlockActionsPayload),
    ViewSubmission(ViewSubmissionPayload),
    #[serde(other)]
    Unknown,
}

/// A button click on a published message
#[derive(Debug, Clone, Deserialize)]
pub struct BlockActionsPayload {
    /// Short-lived handle required by views.open
    pub trigger_id: String,
    pub container: Container,
    pub message: MessageFragment,
    #[serde(default)]
    pub actions: Vec<ActionInvocation>,
}

/// Where the interaction originated
#[derive(Debug, Clone, Deserialize)]
pub struct Container {
    pub channel_id: String,
}

/// The originating message as the platform reports it at click time
#[derive(Debug, Clone, Deserialize)]
pub struct MessageFragment {
    pub ts: String,
    #[serde(default)]
    pub text: String,
}

/// One activated element within a block_actions payload
#[derive(Debug, Clone, Deserialize)]
pub struct ActionInvocation {
    pub action_id: String,
}

/// A submitted modal
#[derive(Debug, Clone, Deserialize)]
pub struct ViewSubmissionPayload {
    pub view: SubmittedView,
}

/// The view carried by a view_submission payload
#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedView {
    #[serde(default)]
    pub callback_id: String,
    /// Returned verbatim as it was set at views.open time
    #[serde(default)]
    pub private_metadata: String,
    #[serde(default)]
    pub state: ViewState,
}

/// Submitted input state, keyed by block_id then action_id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub values: HashMap<String, HashMap<String, StateValue>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateValue {
    #[serde(default)]
    pub value: Option<String>,
}

impl SubmittedView {
    /// Look up a submitted input value by block and action id
    pub fn input_value(&self, block_id: &str, action_id: &str) -> Option<&str> {
        self.state
            .values
            .get(block_id)
            .and_then(|actions| actions.get(action_id))
            .and_then(|state| state.value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_actions_payload_parses() {
        let json = r#"{
            "type": "block_actions",
            "trigger_id": "13345224609.738474920.8088930838d88f008e0",
            "user": { "id": "U061F7AUR" },
            "container": { "type": "message", "channel_id": "C024BE91L", "message_ts": "1712345678.000100" },
            "message": { "ts": "1712345678.000100", "text": "*Overdue Tasks:*\n * Pay rent (due 2024-01-01)\n" },
            "actions": [ { "action_id": "add_comment", "block_id": "b1", "type": "button" } ]
        }"#;

        let payload: InteractionPayload = serde_json::from_str(json).unwrap();
        match payload {
            InteractionPayload::BlockActions(action) => {
                assert_eq!(action.container.channel_id, "C024BE91L");
                assert_eq!(action.message.ts, "1712345678.000100");
                assert!(action.message.text.starts_with("*Overdue Tasks:*"));
                assert_eq!(action.actions[0].action_id, "add_comment");
            }
            other => panic!("Expected BlockActions, got {other:?}"),
        }
    }

    #[test]
    fn test_view_submission_payload_parses() {
        let json = r#"{
            "type": "view_submission",
            "view": {
                "callback_id": "comment_modal",
                "private_metadata": "{\"channel\":\"C024BE91L\",\"message_ts\":\"1712345678.000100\",\"original_text\":\"No tasks to display.\"}",
                "state": {
                    "values": {
                        "comment_block": {
                            "comment_input": { "type": "plain_text_input", "value": "LGTM" }
                        }
                    }
                }
            }
        }"#;

        let payload: InteractionPayload = serde_json::from_str(json).unwrap();
        match payload {
            InteractionPayload::ViewSubmission(submission) => {
                assert_eq!(submission.view.callback_id, "comment_modal");
                assert_eq!(
                    submission.view.input_value("comment_block", "comment_input"),
                    Some("LGTM")
                );
            }
            other => panic!("Expected ViewSubmission, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_payload_type_tolerated() {
        let json = r#"{ "type": "shortcut", "trigger_id": "t" }"#;
        let payload: InteractionPayload = serde_json::from_str(json).unwrap();
        assert!(matches!(payload, InteractionPayload::Unknown));
    }

    #[test]
    fn test_missing_input_value_is_none() {
        let view = SubmittedView {
            callback_id: "comment_modal".to_string(),
            private_metadata: String::new(),
            state: ViewState::default(),
        };
        assert_eq!(view.input_value("comment_block", "comment_input"), None);
    }
}
