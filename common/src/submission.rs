//! Submit gate for order creation.
//!
//! `Idle -> Sending -> Idle`. Validation happens on the way in; a second
//! submit while one is outstanding is refused instead of fired concurrently.

use crate::error::SubmitError;
use crate::model::order::Order;
use crate::selection::Selection;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitGate {
    #[default]
    Idle,
    Sending,
}

impl SubmitGate {
    /// Validates `selection` and, if it can be sent, moves to `Sending`.
    ///
    /// The gate is left unchanged on error, so a validation failure never
    /// blocks the next attempt.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InFlight`] while a previous order is outstanding, or
    /// [`SubmitError::Validation`] when the selection is incomplete.
    pub fn begin(&mut self, selection: &Selection) -> Result<Order, SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::InFlight);
        }

        let order = Order::from_selection(selection)?;
        *self = Self::Sending;
        Ok(order)
    }

    /// Returns to `Idle` once the request has resolved, whatever the outcome.
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

/// Maps the HTTP status of the order response. The body is never inspected.
///
/// # Errors
///
/// [`SubmitError::Rejected`] for anything outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected(status))
    }
}
