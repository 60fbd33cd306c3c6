//! Axum extractor for validated orders
//!
//! `ValidatedOrder` parses the request body into an [`OrderDraft`], runs the
//! order schema over it, and hands handlers the normalized draft.

use super::handlers::OrderApiState;
use crate::core::{OrderDraft, ValidationResult};
use axum::{
    Json,
    extract::{FromRef, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Why an incoming order was turned away
#[derive(Debug)]
pub enum OrderRejection {
    /// Body is not JSON or does not have the order shape
    InvalidJson(String),
    /// Body has the right shape but fails the schema
    Validation(ValidationResult),
}

impl IntoResponse for OrderRejection {
    fn into_response(self) -> Response {
        match self {
            OrderRejection::InvalidJson(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Invalid JSON",
                    "details": details
                })),
            )
                .into_response(),
            OrderRejection::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "Validation failed",
                    "errors": errors
                })),
            )
                .into_response(),
        }
    }
}

/// An order that passed the schema, with text fields normalized
pub struct ValidatedOrder(pub OrderDraft);

impl ValidatedOrder {
    pub fn into_inner(self) -> OrderDraft {
        self.0
    }
}

impl std::ops::Deref for ValidatedOrder {
    type Target = OrderDraft;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequest<S> for ValidatedOrder
where
    S: Send + Sync,
    OrderApiState: FromRef<S>,
{
    type Rejection = OrderRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(draft) = Json::<OrderDraft>::from_request(req, state)
            .await
            .map_err(|e| OrderRejection::InvalidJson(e.body_text()))?;

        let api = OrderApiState::from_ref(state);
        let errors = api.schema.validate(&draft);
        if !errors.is_valid() {
            tracing::debug!(errors = %errors, "Rejecting invalid order");
            return Err(OrderRejection::Validation(errors));
        }

        Ok(ValidatedOrder(api.schema.normalize(&draft)))
    }
}
