/*
[INPUT]:  Classified task buckets
[OUTPUT]: Digest body text plus block layout carrying the comment affordance
[POS]:    Core logic - pure digest rendering
[UPDATE]: When section labels, ordering, or the affordance change
*/

use crate::classify::Buckets;
use taskbrief_adapter::{Block, Element, Task, Text};

/// Action id of the comment affordance on every digest
pub const COMMENT_ACTION_ID: &str = "add_comment";

/// Body used when all buckets are empty
pub const EMPTY_DIGEST_TEXT: &str = "No tasks to display.";

/// A composed digest, ready to publish
#[derive(Debug, Clone, PartialEq)]
pub struct Digest {
    pub text: String,
    pub blocks: Vec<Block>,
}

/// Render the digest body and blocks. Pure: the same buckets always
/// produce an identical digest. Empty buckets are omitted with their
/// headers; sections keep a fixed order.
pub fn compose(buckets: &Buckets) -> Digest {
    let mut text = String::new();

    push_section(&mut text, "*Completed Today:*", &buckets.completed_today, false);
    push_section(&mut text, "*Overdue Tasks:*", &buckets.overdue, true);
    push_section(&mut text, "*Tasks for Tomorrow:*", &buckets.due_tomorrow, false);

    if text.is_empty() {
        text.push_str(EMPTY_DIGEST_TEXT);
    }

    let blocks = digest_blocks(&text);
    Digest { text, blocks }
}

/// Block layout for a digest body: the rendered section plus the comment
/// affordance. Also used when a comment is merged back, so the button
/// survives every update and the flow can be re-entered.
pub fn digest_blocks(text: &str) -> Vec<Block> {
    vec![
        Block::section(Text::mrkdwn(text)),
        Block::actions(vec![Element::button("Add Comment", COMMENT_ACTION_ID)]),
    ]
}

fn push_section(out: &mut String, header: &str, tasks: &[Task], with_due: bool) {
    if tasks.is_empty() {
        return;
    }
    out.push_str(header);
    out.push('\n');
    for task in tasks {
        match task.due_date().filter(|_| with_due) {
            Some(due) => {
                out.push_str(&format!(" * {} (due {})\n", task.content, due.format("%Y-%m-%d")));
            }
            None => {
                out.push_str(&format!(" * {}\n", task.content));
            }
        }
    }
}
