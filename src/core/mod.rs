//! Core module containing the order form types and controller

pub mod catalog;
pub mod draft;
pub mod error;
pub mod form;
pub mod validation;

pub use catalog::{Size, Topping, ToppingCatalog};
pub use draft::{Field, FieldChange, OrderDraft};
pub use error::{ConfigError, FormError, TransportError};
pub use form::{
    Banner, Confirmation, FieldState, FormView, ORDER_FAILED, OrderForm, PendingOrder,
    confirmation_message,
};
pub use validation::{OrderSchema, ValidationResult};
