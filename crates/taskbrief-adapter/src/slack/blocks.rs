/*
[INPUT]:  Block Kit JSON schema (the subset taskbrief renders)
[OUTPUT]: Typed block structures with serialization support
[POS]:    Data layer - outbound message layout types
[UPDATE]: When the digest layout or modal inputs need new block kinds
*/

use serde::{Deserialize, Serialize};

/// A text object, either `mrkdwn` or `plain_text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl Text {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            kind: "mrkdwn".to_string(),
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: "plain_text".to_string(),
            text: text.into(),
        }
    }
}

/// An interactive element inside a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    #[serde(rename = "button")]
    Button { text: Text, action_id: String },
    #[serde(rename = "plain_text_input")]
    PlainTextInput {
        action_id: String,
        #[serde(default)]
        multiline: bool,
    },
}

impl Element {
    pub fn button(label: impl Into<String>, action_id: impl Into<String>) -> Self {
        Element::Button {
            text: Text::plain(label),
            action_id: action_id.into(),
        }
    }

    pub fn plain_text_input(action_id: impl Into<String>, multiline: bool) -> Self {
        Element::PlainTextInput {
            action_id: action_id.into(),
            multiline,
        }
    }
}

/// A layout block (the subset used by digests and the comment modal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    #[serde(rename = "section")]
    Section { text: Text },
    #[serde(rename = "actions")]
    Actions { elements: Vec<Element> },
    #[serde(rename = "input")]
    Input {
        block_id: String,
        label: Text,
        element: Element,
    },
}

impl Block {
    pub fn section(text: Text) -> Self {
        Block::Section { text }
    }

    pub fn actions(elements: Vec<Element>) -> Self {
        Block::Actions { elements }
    }

    pub fn input(block_id: impl Into<String>, label: impl Into<String>, element: Element) -> Self {
        Block::Input {
            block_id: block_id.into(),
            label: Text::plain(label),
            element,
        }
    }
}
