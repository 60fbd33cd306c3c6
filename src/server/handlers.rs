//! HTTP handlers for the order endpoint

use super::extractor::ValidatedOrder;
use crate::core::{OrderSchema, Size, confirmation_message};
use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Number of acknowledgements kept by default
pub const RECENT_ORDERS: usize = 64;

/// Application state shared across handlers
#[derive(Clone)]
pub struct OrderApiState {
    pub schema: Arc<OrderSchema>,
    recent: Arc<RwLock<VecDeque<OrderAck>>>,
    capacity: usize,
}

impl OrderApiState {
    pub fn new(schema: OrderSchema) -> Self {
        Self::with_capacity(schema, RECENT_ORDERS)
    }

    /// State that keeps at most `capacity` recent acknowledgements
    pub fn with_capacity(schema: OrderSchema, capacity: usize) -> Self {
        Self {
            schema: Arc::new(schema),
            recent: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Most recent acknowledgements, oldest first
    pub fn orders(&self) -> Vec<OrderAck> {
        self.recent
            .read()
            .map(|recent| recent.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn record(&self, ack: OrderAck) {
        match self.recent.write() {
            Ok(mut recent) => {
                if self.capacity == 0 {
                    return;
                }
                while recent.len() >= self.capacity {
                    recent.pop_front();
                }
                recent.push_back(ack);
            }
            Err(_) => tracing::error!(order_id = %ack.id, "Order log lock poisoned"),
        }
    }
}

impl Default for OrderApiState {
    fn default() -> Self {
        Self::new(OrderSchema::default())
    }
}

/// Response for an accepted order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAck {
    pub id: Uuid,
    pub message: String,
    pub customer: String,
    pub size: Size,
    pub toppings: Vec<String>,
    pub received_at: DateTime<Utc>,
}

/// POST /api/order
pub async fn place_order(
    State(state): State<OrderApiState>,
    order: ValidatedOrder,
) -> Result<(StatusCode, Json<OrderAck>), StatusCode> {
    let order = order.into_inner();
    // The extractor already ran the size rule
    let size = order.size().ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;

    let ack = OrderAck {
        id: Uuid::new_v4(),
        message: confirmation_message(&order.full_name, size, order.topping_count()),
        customer: order.full_name.clone(),
        size,
        toppings: order.toppings.iter().cloned().collect(),
        received_at: Utc::now(),
    };

    tracing::info!(order_id = %ack.id, size = %size, toppings = ack.toppings.len(), "Order received");
    state.record(ack.clone());

    Ok((StatusCode::CREATED, Json(ack)))
}
