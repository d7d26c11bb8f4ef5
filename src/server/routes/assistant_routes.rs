//! Runnable routes for the research report pipeline
//!
//! The pipeline is exposed the generic "runnable" way: one path with
//! `invoke`, `batch` and `stream` variants plus its input/output schemas.
//! Pipeline failures are opaque to the caller (HTTP 500); the cause only
//! shows up in the server log.

use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures_util::{future::join_all, stream, Stream, StreamExt};
use schemars::{schema::RootSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::convert::Infallible;
use uuid::Uuid;

use crate::models::ResearchInput;
use crate::server::ServerAppState;

/// Request body for `/invoke` and `/stream`
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    pub input: ResearchInput,
}

/// Request body for `/batch`
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub inputs: Vec<ResearchInput>,
}

#[derive(Debug, Serialize)]
pub struct RunMetadata {
    pub run_id: Uuid,
    pub feedback_tokens: Vec<Value>,
}

/// Response body for `/invoke`
#[derive(Debug, Serialize)]
pub struct InvokeResponse {
    pub output: String,
    pub metadata: RunMetadata,
}

#[derive(Debug, Serialize)]
pub struct BatchMetadata {
    pub run_ids: Vec<Uuid>,
}

/// Response body for `/batch`
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub output: Vec<String>,
    pub metadata: BatchMetadata,
}

/// Error type for the runnable handlers. The cause is logged by the handler,
/// never sent to the caller.
pub struct RunError;

impl IntoResponse for RunError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "Internal Server Error" })),
        )
            .into_response()
    }
}

/// Routes mounted under the pipeline's path
pub fn runnable_routes() -> Router<ServerAppState> {
    Router::new()
        .route("/invoke", post(invoke_handler))
        .route("/batch", post(batch_handler))
        .route("/stream", post(stream_handler))
        .route("/input_schema", get(input_schema_handler))
        .route("/output_schema", get(output_schema_handler))
}

/// Run the pipeline once
pub async fn invoke_handler(
    State(state): State<ServerAppState>,
    Json(req): Json<InvokeRequest>,
) -> Result<Json<InvokeResponse>, RunError> {
    let run_id = Uuid::new_v4();
    log::debug!("[server] invoke {} with input: {:?}", run_id, req.input);

    match state.assistant.run_with_id(run_id, &req.input).await {
        Ok(output) => Ok(Json(InvokeResponse {
            output,
            metadata: RunMetadata {
                run_id,
                feedback_tokens: Vec::new(),
            },
        })),
        Err(e) => {
            log::error!("[server] Run {} failed: {}", run_id, e);
            Err(RunError)
        }
    }
}

/// Run the pipeline for every input concurrently; any failure fails the batch
pub async fn batch_handler(
    State(state): State<ServerAppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, RunError> {
    let run_ids: Vec<Uuid> = req.inputs.iter().map(|_| Uuid::new_v4()).collect();
    log::debug!("[server] batch of {} input(s)", req.inputs.len());

    let handles: Vec<_> = req
        .inputs
        .into_iter()
        .zip(run_ids.iter().copied())
        .map(|(input, run_id)| {
            let assistant = state.assistant.clone();
            tokio::spawn(async move { assistant.run_with_id(run_id, &input).await })
        })
        .collect();

    let results = join_all(handles).await;

    let mut output = Vec::with_capacity(results.len());
    for (result, run_id) in results.into_iter().zip(run_ids.iter()) {
        match result {
            Ok(Ok(report)) => output.push(report),
            Ok(Err(e)) => {
                log::error!("[server] Batch run {} failed: {}", run_id, e);
                return Err(RunError);
            }
            Err(e) => {
                log::error!("[server] Batch run {} panicked: {}", run_id, e);
                return Err(RunError);
            }
        }
    }

    Ok(Json(BatchResponse {
        output,
        metadata: BatchMetadata { run_ids },
    }))
}

/// Server-sent events: `metadata`, then the report as one `data` event and
/// `end`, or a single `error` event
pub async fn stream_handler(
    State(state): State<ServerAppState>,
    Json(req): Json<InvokeRequest>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let run_id = Uuid::new_v4();
    let assistant = state.assistant.clone();
    let input = req.input;

    let metadata = Event::default()
        .event("metadata")
        .data(json!({ "run_id": run_id }).to_string());

    let outcome = stream::once(async move {
        match assistant.run_with_id(run_id, &input).await {
            Ok(report) => vec![
                Event::default()
                    .event("data")
                    .data(Value::String(report).to_string()),
                Event::default().event("end"),
            ],
            Err(e) => {
                log::error!("[server] Streamed run {} failed: {}", run_id, e);
                vec![Event::default().event("error").data(
                    json!({ "status_code": 500, "message": "Internal Server Error" }).to_string(),
                )]
            }
        }
    })
    .flat_map(stream::iter);

    Sse::new(
        stream::once(async move { metadata })
            .chain(outcome)
            .map(Ok::<_, Infallible>),
    )
}

/// JSON schema of [`ResearchInput`], derived from the type
pub async fn input_schema_handler() -> Json<RootSchema> {
    Json(schema_for!(ResearchInput))
}

/// The report is a plain string
pub async fn output_schema_handler() -> Json<RootSchema> {
    Json(schema_for!(String))
}
