//! Operation-trait implementations over the REST transport.
//!
//! These let the core controllers drive the real backend. Transport errors
//! collapse into the controllers' `OpError` surface, keeping the server
//! message intact for display.

use crate::client::{RentalsHandle, WithdrawalsHandle};
use phongtro_api::{AcceptRequestBody, ApproveWithdrawalBody, RejectRequestBody, RejectWithdrawalBody};
use phongtro_core::forms::{AcceptPayload, ApprovePayload};
use phongtro_core::{OpError, RentalOps, WithdrawalOps};
use phongtro_types::{RentalRequest, RequestId, WithdrawalId, WithdrawalRequest};

fn op_error(err: phongtro_api::Error) -> OpError {
    match err {
        err if err.is_not_found() => OpError::NotFound(err.to_string()),
        phongtro_api::Error::Api(msg) => OpError::Api(msg),
        phongtro_api::Error::Status { status, message } => {
            OpError::Api(format!("{} ({})", message, status))
        }
        phongtro_api::Error::Transport(err) => OpError::Transport(err.to_string()),
        phongtro_api::Error::Decode(err) => OpError::Decode(err.to_string()),
        phongtro_api::Error::MissingData => {
            OpError::Decode("envelope carried no data".to_string())
        }
        phongtro_api::Error::Config(msg) => OpError::Api(msg),
    }
}

impl RentalOps for RentalsHandle {
    fn fetch_pending(&self) -> Result<Vec<RentalRequest>, OpError> {
        let filter = phongtro_api::RentalFilter::new().status("pending").limit(100);
        self.api.list_rental_requests(&filter).map_err(op_error)
    }

    fn fetch_detail(&self, id: &RequestId) -> Result<RentalRequest, OpError> {
        self.api.rental_request(id).map_err(op_error)
    }

    fn accept(&self, id: &RequestId, payload: &AcceptPayload) -> Result<(), OpError> {
        let body = AcceptRequestBody {
            response_message: payload.response_message.clone(),
            start_date: payload.start_date,
            end_date: payload.end_date,
            rent: payload.rent,
            deposit: payload.deposit,
        };
        self.api.accept_rental_request(id, &body).map_err(op_error)
    }

    fn reject(&self, id: &RequestId, message: &str) -> Result<(), OpError> {
        let body = RejectRequestBody {
            response_message: message.to_string(),
        };
        self.api.reject_rental_request(id, &body).map_err(op_error)
    }
}

impl WithdrawalOps for WithdrawalsHandle {
    fn fetch_pending(&self) -> Result<Vec<WithdrawalRequest>, OpError> {
        let filter = phongtro_api::WithdrawalFilter::new().status("pending");
        self.api.list_withdrawal_requests(&filter).map_err(op_error)
    }

    fn fetch_mine(&self) -> Result<Vec<WithdrawalRequest>, OpError> {
        self.api.my_withdrawal_requests().map_err(op_error)
    }

    fn fetch_detail(&self, id: &WithdrawalId) -> Result<WithdrawalRequest, OpError> {
        self.api.withdrawal_request(id).map_err(op_error)
    }

    fn approve(&self, id: &WithdrawalId, payload: &ApprovePayload) -> Result<(), OpError> {
        let body = ApproveWithdrawalBody {
            deduction_amount: payload.deduction_amount,
            deduction_reason: payload.deduction_reason.clone(),
            response_note: payload.response_note.clone(),
        };
        self.api
            .approve_withdrawal_request(id, &body)
            .map_err(op_error)
    }

    fn reject(&self, id: &WithdrawalId, note: &str) -> Result<(), OpError> {
        let body = RejectWithdrawalBody {
            response_note: note.to_string(),
        };
        self.api
            .reject_withdrawal_request(id, &body)
            .map_err(op_error)
    }

    fn cancel(&self, id: &WithdrawalId) -> Result<(), OpError> {
        self.api.cancel_withdrawal_request(id).map_err(op_error)
    }
}
