//! Backend collaborator seams.
//!
//! Controllers are generic over these traits; the SDK provides the real
//! REST-backed implementations and the testing crate provides scripted
//! mocks. All calls are synchronous request/response; the client never has
//! more than one mutating call in flight.

use crate::error::OpError;
use crate::forms::{AcceptPayload, ApprovePayload};
use phongtro_types::{RentalRequest, RequestId, WithdrawalId, WithdrawalRequest};

/// Landlord-side operations on rental requests.
pub trait RentalOps {
    /// Pending requests for the landlord's rooms.
    fn fetch_pending(&self) -> Result<Vec<RentalRequest>, OpError>;

    /// Full detail for one request.
    fn fetch_detail(&self, id: &RequestId) -> Result<RentalRequest, OpError>;

    fn accept(&self, id: &RequestId, payload: &AcceptPayload) -> Result<(), OpError>;

    fn reject(&self, id: &RequestId, message: &str) -> Result<(), OpError>;
}

/// Operations on withdrawal requests (landlord decisions, tenant history
/// and cancellation).
pub trait WithdrawalOps {
    fn fetch_pending(&self) -> Result<Vec<WithdrawalRequest>, OpError>;

    fn fetch_mine(&self) -> Result<Vec<WithdrawalRequest>, OpError>;

    fn fetch_detail(&self, id: &WithdrawalId) -> Result<WithdrawalRequest, OpError>;

    fn approve(&self, id: &WithdrawalId, payload: &ApprovePayload) -> Result<(), OpError>;

    fn reject(&self, id: &WithdrawalId, note: &str) -> Result<(), OpError>;

    fn cancel(&self, id: &WithdrawalId) -> Result<(), OpError>;
}

// Controllers take their collaborator by value; a shared reference works
// too (all operations are &self), which lets callers keep inspecting the
// collaborator they handed over.
impl<T: RentalOps + ?Sized> RentalOps for &T {
    fn fetch_pending(&self) -> Result<Vec<RentalRequest>, OpError> {
        (**self).fetch_pending()
    }

    fn fetch_detail(&self, id: &RequestId) -> Result<RentalRequest, OpError> {
        (**self).fetch_detail(id)
    }

    fn accept(&self, id: &RequestId, payload: &AcceptPayload) -> Result<(), OpError> {
        (**self).accept(id, payload)
    }

    fn reject(&self, id: &RequestId, message: &str) -> Result<(), OpError> {
        (**self).reject(id, message)
    }
}

impl<T: WithdrawalOps + ?Sized> WithdrawalOps for &T {
    fn fetch_pending(&self) -> Result<Vec<WithdrawalRequest>, OpError> {
        (**self).fetch_pending()
    }

    fn fetch_mine(&self) -> Result<Vec<WithdrawalRequest>, OpError> {
        (**self).fetch_mine()
    }

    fn fetch_detail(&self, id: &WithdrawalId) -> Result<WithdrawalRequest, OpError> {
        (**self).fetch_detail(id)
    }

    fn approve(&self, id: &WithdrawalId, payload: &ApprovePayload) -> Result<(), OpError> {
        (**self).approve(id, payload)
    }

    fn reject(&self, id: &WithdrawalId, note: &str) -> Result<(), OpError> {
        (**self).reject(id, note)
    }

    fn cancel(&self, id: &WithdrawalId) -> Result<(), OpError> {
        (**self).cancel(id)
    }
}
