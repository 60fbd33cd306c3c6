//! Order form controller
//!
//! [`OrderForm`] owns the draft, tracks which fields the user has touched,
//! keeps the current field errors, and drives the submit lifecycle:
//!
//! 1. [`OrderForm::begin_submit`] validates the whole draft and marks a
//!    submission as in flight (at most one at a time).
//! 2. [`PendingOrder::send`] performs the single outbound call without
//!    borrowing the form, so the in-flight state stays observable.
//! 3. [`OrderForm::finish`] applies the outcome: clear on success, keep the
//!    draft on failure.
//!
//! [`OrderForm::submit`] runs all three steps.

use super::catalog::{Size, ToppingCatalog};
use super::draft::{Field, FieldChange, OrderDraft};
use super::error::{FormError, TransportError};
use super::validation::{OrderSchema, ValidationResult};
use crate::config::{FormConfig, ValidationMode};
use crate::gateway::OrderGateway;
use serde::Serialize;
use std::collections::BTreeMap;

/// Notice shown when the order could not be delivered
pub const ORDER_FAILED: &str = "Order Failed!";

/// Per-field interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FieldState {
    /// Not edited since the form was created or last reset
    #[default]
    Untouched,
    /// Edited at least once; `valid` reflects the latest edit
    Touched { valid: bool },
}

impl FieldState {
    pub fn is_touched(&self) -> bool {
        matches!(self, FieldState::Touched { .. })
    }
}

/// Banner shown after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Banner {
    Success(String),
    Failure(String),
}

/// Acknowledged order summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub customer: String,
    pub size: Size,
    pub topping_count: usize,
    pub message: String,
}

impl Confirmation {
    /// Summary for an order that passed the schema
    pub fn new(customer: impl Into<String>, size: Size, topping_count: usize) -> Self {
        let customer = customer.into();
        let message = confirmation_message(&customer, size, topping_count);
        Self {
            customer,
            size,
            topping_count,
            message,
        }
    }
}

/// "Thank you for your order, {name}! Your {size} pizza with {toppings} is on the way."
pub fn confirmation_message(customer: &str, size: Size, topping_count: usize) -> String {
    let toppings = match topping_count {
        0 => "no toppings".to_string(),
        1 => "1 topping".to_string(),
        n => format!("{} toppings", n),
    };
    format!(
        "Thank you for your order, {}! Your {} pizza with {} is on the way.",
        customer,
        size.spoken_name(),
        toppings
    )
}

/// A validated order waiting for its single outbound call
#[derive(Debug, Clone)]
pub struct PendingOrder {
    id: u64,
    order: OrderDraft,
    confirmation: Confirmation,
}

impl PendingOrder {
    /// Submission this handle belongs to
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The payload that will be sent; size carries its canonical code
    pub fn order(&self) -> &OrderDraft {
        &self.order
    }

    /// Send the order through `gateway`, once
    pub async fn send<G>(&self, gateway: &G) -> Result<(), TransportError>
    where
        G: OrderGateway + ?Sized,
    {
        gateway.place_order(&self.order).await
    }
}

/// One topping checkbox as a renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToppingOption {
    pub id: &'static str,
    pub name: &'static str,
    pub checked: bool,
}

/// Everything a rendering layer needs, as one serializable snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub draft: OrderDraft,
    pub errors: ValidationResult,
    pub field_states: BTreeMap<Field, FieldState>,
    pub toppings: Vec<ToppingOption>,
    pub submittable: bool,
    pub submitting: bool,
    pub banner: Option<Banner>,
}

/// Order form controller
#[derive(Debug, Clone)]
pub struct OrderForm {
    config: FormConfig,
    schema: OrderSchema,
    catalog: ToppingCatalog,
    draft: OrderDraft,
    field_states: BTreeMap<Field, FieldState>,
    errors: ValidationResult,
    next_submission: u64,
    in_flight: Option<u64>,
    banner: Option<Banner>,
}

impl OrderForm {
    /// Empty form using the schema described by `config`
    pub fn new(config: FormConfig) -> Self {
        let schema = OrderSchema::from_config(&config);
        Self::with_schema(config, schema)
    }

    /// Empty form with an explicit schema
    pub fn with_schema(config: FormConfig, schema: OrderSchema) -> Self {
        Self {
            config,
            schema,
            catalog: ToppingCatalog::standard(),
            draft: OrderDraft::new(),
            field_states: BTreeMap::new(),
            errors: ValidationResult::new(),
            next_submission: 1,
            in_flight: None,
            banner: None,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn schema(&self) -> &OrderSchema {
        &self.schema
    }

    pub fn catalog(&self) -> &ToppingCatalog {
        &self.catalog
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Errors currently shown to the user
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        self.field_states.get(&field).copied().unwrap_or_default()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True once any field has been edited
    pub fn is_dirty(&self) -> bool {
        self.field_states.values().any(FieldState::is_touched)
    }

    /// Whole-draft validation, without changing displayed errors
    pub fn validate(&self) -> ValidationResult {
        self.schema.validate(&self.draft)
    }

    /// Single-field validation, without changing displayed errors
    pub fn validate_field(&self, field: Field) -> Option<String> {
        self.schema.validate_field(field, &self.draft)
    }

    /// Whether the submit control is enabled
    ///
    /// Requires a schema-valid, edited draft and no submission in flight.
    pub fn is_submittable(&self) -> bool {
        !self.is_submitting() && self.is_dirty() && self.schema.is_valid(&self.draft)
    }

    /// Apply one user edit
    ///
    /// Edits are always accepted. The edited field becomes touched and its
    /// validity is recomputed. With [`ValidationMode::OnChange`] its displayed
    /// error is refreshed; with [`ValidationMode::OnSubmit`] a displayed error
    /// is only cleared once the field becomes valid.
    pub fn update_field(&mut self, change: FieldChange) -> &OrderDraft {
        let field = change.field();
        self.draft.update_field(change, &self.catalog);

        let error = self.schema.validate_field(field, &self.draft);
        self.field_states.insert(
            field,
            FieldState::Touched {
                valid: error.is_none(),
            },
        );
        match self.config.validation_mode {
            ValidationMode::OnChange => self.errors.set(field, error),
            ValidationMode::OnSubmit if error.is_none() => self.errors.set(field, None),
            ValidationMode::OnSubmit => {}
        }

        tracing::trace!(field = %field, valid = !self.errors.has_error(field), "Field updated");
        &self.draft
    }

    /// Apply an edit given as a raw input event
    pub fn update_input(
        &mut self,
        name: &str,
        value: impl Into<String>,
        checked: bool,
    ) -> Result<&OrderDraft, FormError> {
        let change = FieldChange::from_input(name, value, checked)?;
        Ok(self.update_field(change))
    }

    /// Validate the whole draft and mark a submission as in flight
    ///
    /// On failure every field error is surfaced and nothing is marked in
    /// flight.
    pub fn begin_submit(&mut self) -> Result<PendingOrder, FormError> {
        if self.is_submitting() {
            return Err(FormError::SubmissionInFlight);
        }

        let result = self.schema.validate(&self.draft);
        for field in Field::ALL {
            self.field_states.insert(
                field,
                FieldState::Touched {
                    valid: !result.has_error(field),
                },
            );
        }
        self.errors = result.clone();

        let size = match self.draft.size() {
            Some(size) if result.is_valid() => size,
            _ => {
                tracing::debug!(errors = %result, "Order rejected by schema");
                return Err(FormError::Validation(result));
            }
        };

        let customer = self.schema.normalize(&self.draft).full_name;
        let confirmation = Confirmation::new(customer, size, self.draft.topping_count());

        let mut order = self.draft.clone();
        order.size = size.code().to_string();

        let id = self.next_submission;
        self.next_submission += 1;
        self.in_flight = Some(id);

        Ok(PendingOrder {
            id,
            order,
            confirmation,
        })
    }

    /// Apply the outcome of a pending order's call
    ///
    /// Only the handle of the submission currently in flight is accepted; a
    /// stale or already finished handle leaves the form untouched.
    pub fn finish(
        &mut self,
        pending: PendingOrder,
        outcome: Result<(), TransportError>,
    ) -> Result<Confirmation, FormError> {
        if self.in_flight != Some(pending.id) {
            tracing::warn!(submission = pending.id, "Ignoring outcome of a stale submission");
            return Err(FormError::StaleSubmission { id: pending.id });
        }
        self.in_flight = None;

        match outcome {
            Ok(()) => {
                let confirmation = pending.confirmation;
                tracing::info!(
                    size = %confirmation.size,
                    toppings = confirmation.topping_count,
                    "Order placed"
                );
                self.reset();
                self.banner = Some(Banner::Success(confirmation.message.clone()));
                Ok(confirmation)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Order failed");
                self.banner = Some(Banner::Failure(ORDER_FAILED.to_string()));
                Err(FormError::Transport(err))
            }
        }
    }

    /// Validate, send once through `gateway`, and apply the outcome
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<Confirmation, FormError>
    where
        G: OrderGateway + ?Sized,
    {
        let pending = self.begin_submit()?;
        let outcome = pending.send(gateway).await;
        self.finish(pending, outcome)
    }

    /// Back to an empty, untouched form; the banner is left as is
    pub fn reset(&mut self) {
        self.draft = OrderDraft::new();
        self.field_states.clear();
        self.errors.clear();
    }

    /// Snapshot for rendering
    pub fn view(&self) -> FormView {
        FormView {
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            field_states: Field::ALL
                .into_iter()
                .map(|f| (f, self.field_state(f)))
                .collect(),
            toppings: self
                .catalog
                .entries()
                .iter()
                .map(|t| ToppingOption {
                    id: t.id,
                    name: t.name,
                    checked: self.draft.toppings.contains(t.id),
                })
                .collect(),
            submittable: self.is_submittable(),
            submitting: self.is_submitting(),
            banner: self.banner.clone(),
        }
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new(FormConfig::default_config())
    }
}
