//! Outbound order submission
//!
//! The form controller only knows the [`OrderGateway`] trait. The HTTP
//! implementation posts the draft as JSON and treats any 2xx as acknowledged.

use crate::config::FormConfig;
use crate::core::draft::OrderDraft;
use crate::core::error::TransportError;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Sends a validated order to wherever orders are taken
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Deliver one order; `Ok` means the receiver acknowledged it
    async fn place_order(&self, order: &OrderDraft) -> Result<(), TransportError>;
}

/// Posts orders to an HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOrderGateway {
    /// Create a gateway for `endpoint` with a request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &FormConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.endpoint.clone(), config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn place_order(&self, order: &OrderDraft) -> Result<(), TransportError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting order");

        let response = self
            .client
            .post(&self.endpoint)
            .json(order)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "Order acknowledged");
            Ok(())
        } else {
            Err(TransportError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl<G: OrderGateway + ?Sized> OrderGateway for std::sync::Arc<G> {
    async fn place_order(&self, order: &OrderDraft) -> Result<(), TransportError> {
        (**self).place_order(order).await
    }
}
