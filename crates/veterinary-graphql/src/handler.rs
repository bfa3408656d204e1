//! GraphQL execution entry point and axum handler.
//!
//! This module provides:
//! - [`execute`] - runs one GraphQL request against the shared schema
//! - `POST /graphql` - the axum handler wrapping [`execute`]
//!
//! The response body always carries both `data` and `errors`, and request
//! parsing failures are turned into the same envelope.

use std::sync::Arc;

use async_graphql::dynamic::Schema;
use async_graphql::{Request, Response, Variables};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response as HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::GraphQLError;

/// State shared across GraphQL handlers.
#[derive(Clone)]
pub struct GraphQLState {
    /// Schema built at startup.
    pub schema: Arc<Schema>,
}

impl GraphQLState {
    /// Wraps a built schema for use as axum state.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self {
            schema: Arc::new(schema),
        }
    }
}

/// GraphQL request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLRequest {
    /// The GraphQL query string.
    pub query: String,

    /// Optional operation name for multi-operation documents.
    #[serde(
        rename = "operationName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_name: Option<String>,

    /// Optional variables for the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

impl GraphQLRequest {
    /// Creates a request with only a query document.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
        }
    }

    /// Sets the variables of the request.
    #[must_use]
    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Sets the operation to execute.
    #[must_use]
    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }
}

/// GraphQL response body.
///
/// `data` is always present (possibly `null`) and `errors` is always an
/// array, empty when execution produced no errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLResponse {
    pub data: serde_json::Value,
    pub errors: Vec<serde_json::Value>,
}

impl GraphQLResponse {
    /// Returns `true` if execution produced no errors.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<Response> for GraphQLResponse {
    fn from(resp: Response) -> Self {
        let data = serde_json::to_value(&resp.data).unwrap_or(serde_json::Value::Null);

        // ServerError serializes message, locations, path and extensions
        let errors = resp
            .errors
            .iter()
            .map(|e| {
                serde_json::to_value(e)
                    .unwrap_or_else(|_| serde_json::json!({ "message": e.message }))
            })
            .collect();

        Self { data, errors }
    }
}

/// Executes a GraphQL request against the schema.
///
/// Field failures never abort the response; they are reported in `errors`
/// while sibling fields keep their data.
pub async fn execute(schema: &Schema, request: GraphQLRequest) -> GraphQLResponse {
    let mut gql_request = Request::new(&request.query);

    if let Some(op_name) = request.operation_name {
        gql_request = gql_request.operation_name(op_name);
    }

    if let Some(vars) = request.variables {
        gql_request = gql_request.variables(Variables::from_json(vars));
    }

    debug!(query = %request.query, "Executing GraphQL query");
    let response = schema.execute(gql_request).await;

    GraphQLResponse::from(response)
}

/// Handles POST requests to the GraphQL endpoint.
///
/// Always answers `200 OK` with `application/json` once the body parses;
/// a body that is not a GraphQL request gets a `400` error envelope.
pub async fn graphql_handler(
    State(state): State<GraphQLState>,
    headers: HeaderMap,
    payload: Result<Json<GraphQLRequest>, JsonRejection>,
) -> HttpResponse {
    // Extract request ID from headers (set by middleware)
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(request_id, error = %rejection, "Rejected GraphQL request body");
            return error_response(GraphQLError::InvalidRequest(rejection.body_text()));
        }
    };

    debug!(request_id, "Processing GraphQL request");

    let response = execute(&state.schema, request).await;
    if !response.is_ok() {
        debug!(
            request_id,
            errors = response.errors.len(),
            "GraphQL request completed with errors"
        );
    }

    json_response(StatusCode::OK, response)
}

/// Creates an error response envelope from a GraphQLError.
fn error_response(error: GraphQLError) -> HttpResponse {
    let status = StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    json_response(status, error.to_response_body())
}

fn json_response(status: StatusCode, body: impl Serialize) -> HttpResponse {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
