//! Error kinds for the load and submit paths.
//!
//! Details are kept for the console log; the UI collapses every variant into a
//! short generic notice.

use thiserror::Error;

/// Failure while fetching or decoding one of the read-only lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never produced a readable body.
    #[error("transport error: {0}")]
    Transport(String),
    /// The body was read but did not have the expected shape.
    #[error("unexpected response format: {0}")]
    Format(String),
}

/// Local precondition failure; no request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no salesperson selected")]
    MissingSalesperson,
    #[error("no articles selected")]
    NoArticles,
}

/// Failure of an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("invalid order: {0}")]
    Validation(#[from] ValidationError),
    /// A previous submission has not resolved yet.
    #[error("an order is already being sent")]
    InFlight,
    /// Network failure or body serialization failure.
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered outside the 2xx range.
    #[error("order rejected with status {0}")]
    Rejected(u16),
}
