//! # Bloom Pizza
//!
//! A validated pizza order form, independent of any rendering layer.
//!
//! ## Features
//!
//! - **Typed Draft**: full name, size and a set of catalog toppings
//! - **Declarative Schema**: one rule set for live per-field feedback and submit-time checks
//! - **Submit Lifecycle**: at most one order in flight, draft kept on failure for retry
//! - **Pluggable Delivery**: `OrderGateway` trait with a `reqwest` implementation
//! - **Order Endpoint**: an axum router that validates incoming orders with the same schema
//! - **Configuration-Based**: endpoint, timeout and rule variants from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bloom_pizza::prelude::*;
//!
//! let config = FormConfig::default_config();
//! let gateway = HttpOrderGateway::from_config(&config)?;
//! let mut form = OrderForm::new(config);
//!
//! form.update_field(FieldChange::FullName("Alice Smith".into()));
//! form.update_field(FieldChange::Size("L".into()));
//! form.update_field(FieldChange::Topping { id: "1".into(), checked: true });
//!
//! if form.is_submittable() {
//!     match form.submit(&gateway).await {
//!         Ok(confirmation) => println!("{}", confirmation.message),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

pub mod config;
pub mod core;
pub mod gateway;
pub mod server;

/// Install a `tracing` subscriber filtered by `RUST_LOG` (default `info`)
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Banner, Confirmation, Field, FieldChange, FieldState, FormView, OrderDraft, OrderForm,
        PendingOrder, Size, Topping, ToppingCatalog,
    };

    // === Validation ===
    pub use crate::core::validation::{FieldRules, OrderSchema, ValidationResult};

    // === Errors ===
    pub use crate::core::{ConfigError, FormError, TransportError};

    // === Config ===
    pub use crate::config::{FormConfig, ValidationMode};

    // === Delivery ===
    pub use crate::gateway::{HttpOrderGateway, OrderGateway};

    // === Server ===
    pub use crate::server::{OrderAck, OrderApiState, build_order_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
