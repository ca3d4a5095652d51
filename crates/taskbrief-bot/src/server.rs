/*
[INPUT]:  Trigger requests and Slack interactivity callbacks over HTTP
[OUTPUT]: Digest runs and spawned interaction work, acked before the work runs
[POS]:    Transport layer - axum router and handlers
[UPDATE]: When adding routes or changing ack semantics
*/

use crate::classify::anchor_date;
use crate::compose::COMMENT_ACTION_ID;
use crate::interaction::{COMMENT_CALLBACK_ID, apply_comment, open_comment_modal};
use crate::pipeline::run_digest;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use taskbrief_adapter::{InteractionPayload, SlackClient, TaskSource};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Shared handler state; every triggering event is otherwise independent
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn TaskSource>,
    pub slack: Arc<SlackClient>,
    pub channel_id: String,
    pub utc_offset_minutes: i32,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/digest", post(trigger_digest))
        .route("/slack/interactions", post(slack_interactions))
        .with_state(state)
}

/// Serve until the shutdown token fires
pub async fn run(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let local_addr = listener.local_addr()?;
    info!("taskbrief listening on http://{local_addr}");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

/// Run one digest cycle synchronously; the run is complete regardless of
/// publish outcome (best-effort notifier).
async fn trigger_digest(State(state): State<AppState>) -> impl IntoResponse {
    let anchor = anchor_date(state.utc_offset_minutes);
    run_digest(
        state.source.as_ref(),
        &state.slack,
        &state.channel_id,
        anchor,
    )
    .await;
    Json(serde_json::json!({
        "status": "ok"
    }))
}

#[derive(Deserialize)]
struct InteractionForm {
    payload: String,
}

/// Slack interactivity callback. The 200 response is the ack and must go
/// out before any slow call, so the business work is spawned.
async fn slack_interactions(
    State(state): State<AppState>,
    Form(form): Form<InteractionForm>,
) -> StatusCode {
    let payload: InteractionPayload = match serde_json::from_str(&form.payload) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(error = %err, "unparseable interaction payload");
            return StatusCode::OK;
        }
    };

    match payload {
        InteractionPayload::BlockActions(action) => {
            if !action
                .actions
                .iter()
                .any(|invocation| invocation.action_id == COMMENT_ACTION_ID)
            {
                debug!("ignoring block_actions without the comment affordance");
                return StatusCode::OK;
            }
            let slack = state.slack.clone();
            tokio::spawn(async move {
                open_comment_modal(&slack, &action).await;
            });
        }
        InteractionPayload::ViewSubmission(submission) => {
            if submission.view.callback_id != COMMENT_CALLBACK_ID {
                debug!(callback_id = %submission.view.callback_id, "ignoring unrelated view submission");
                return StatusCode::OK;
            }
            let slack = state.slack.clone();
            tokio::spawn(async move {
                apply_comment(&slack, &submission).await;
            });
        }
        InteractionPayload::Unknown => {
            debug!("ignoring unhandled interaction payload type");
        }
    }
    StatusCode::OK
}
