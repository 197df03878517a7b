//! REST transport for the phongtro backend.
//!
//! Thin blocking wrappers over the marketplace endpoints: every non-file
//! response arrives in the `{success, message, data}` envelope, errors keep
//! the server-provided message so upper layers can surface it verbatim.

mod client;
mod dto;
mod endpoints;
mod error;

pub use client::ApiClient;
pub use dto::{
    AcceptRequestBody, ApproveWithdrawalBody, CreateRentalRequestBody, CreateWithdrawalBody,
    RejectRequestBody, RejectWithdrawalBody,
};
pub use endpoints::agreements::AgreementFile;
pub use endpoints::rentals::RentalFilter;
pub use endpoints::withdrawals::WithdrawalFilter;
pub use error::{Error, Result};
