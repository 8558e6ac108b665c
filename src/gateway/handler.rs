use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::constants::JUDGE_STATUS_HEADER;
use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::pipeline::EvaluationRequest;
use crate::scoring::MergeStrategy;

/// Query-string options for `POST /score`.
#[derive(Debug, Default, Deserialize)]
pub struct ScoreParams {
    pub strategy: Option<String>,
}

impl ScoreParams {
    fn merge_strategy(&self) -> Result<Option<MergeStrategy>, GatewayError> {
        self.strategy
            .as_deref()
            .map(str::parse::<MergeStrategy>)
            .transpose()
            .map_err(GatewayError::from)
    }
}

#[instrument(skip(state, params, body), fields(evaluation_id = tracing::field::Empty))]
pub async fn score_handler(
    State(state): State<HandlerState>,
    params: Result<Query<ScoreParams>, QueryRejection>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let Query(params) = params.map_err(|e| {
        GatewayError::InvalidRequest(format!("bad query string: {}", e.body_text()))
    })?;
    let request = parse_evaluation_request(&body)?;
    let strategy = params.merge_strategy()?;

    debug!(
        query_len = request.query.len(),
        response_len = request.response.len(),
        "Scoring request"
    );

    let evaluation = state.engine.evaluate(&request, strategy).await;
    tracing::Span::current().record("evaluation_id", tracing::field::display(&evaluation.id));

    let status = evaluation.outcome.status();
    let report = evaluation.report();

    let mut headers = HeaderMap::new();
    headers.insert(JUDGE_STATUS_HEADER, HeaderValue::from_static(status));

    Ok((StatusCode::OK, headers, Json(report)).into_response())
}

/// Parses `{"query": string, "response": string}`; other fields are ignored.
pub(crate) fn parse_evaluation_request(body: &[u8]) -> Result<EvaluationRequest, GatewayError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| GatewayError::InvalidRequest(format!("body is not valid JSON: {e}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| GatewayError::InvalidRequest("body must be a JSON object".to_string()))?;

    let field = |name: &str| -> Result<String, GatewayError> {
        match object.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(GatewayError::InvalidRequest(format!(
                "`{name}` must be a string"
            ))),
            None => Err(GatewayError::InvalidRequest(format!(
                "missing required field `{name}`"
            ))),
        }
    };

    Ok(EvaluationRequest {
        query: field("query")?,
        response: field("response")?,
    })
}
