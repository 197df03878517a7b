//! Request-list state machines.
//!
//! Each controller owns an in-memory collection, at most one selected
//! entity, and a single tagged modal field, so two modals can never be
//! open at once by construction. Failed operations are surfaced through
//! both the returned `Result` and `last_error()` for the view layer;
//! nothing is swallowed into a log.

mod rental;
mod withdrawal;

pub use rental::{ActiveModal, RentalInbox};
pub use withdrawal::{WithdrawalHistory, WithdrawalInbox, WithdrawalModal};

use crate::error::OpError;
use crate::forms::FormError;
use std::fmt;

/// Why a confirm-submission did not go through.
#[derive(Debug)]
pub enum SubmitError {
    /// Client-side validation blocked the submission; no call was issued.
    Form(FormError),
    /// The backend call failed; the modal stays open so the user can retry.
    Op(OpError),
    /// No entity is selected (modal flow not started).
    NoSelection,
    /// A submission is already in flight.
    InFlight,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Form(err) => write!(f, "{}", err),
            SubmitError::Op(err) => write!(f, "{}", err),
            SubmitError::NoSelection => write!(f, "no request selected"),
            SubmitError::InFlight => write!(f, "a submission is already in progress"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Form(err) => Some(err),
            SubmitError::Op(err) => Some(err),
            SubmitError::NoSelection | SubmitError::InFlight => None,
        }
    }
}

impl From<FormError> for SubmitError {
    fn from(err: FormError) -> Self {
        SubmitError::Form(err)
    }
}

impl From<OpError> for SubmitError {
    fn from(err: OpError) -> Self {
        SubmitError::Op(err)
    }
}
