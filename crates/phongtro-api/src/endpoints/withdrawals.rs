use crate::client::ApiClient;
use crate::dto::{ApproveWithdrawalBody, CreateWithdrawalBody, RejectWithdrawalBody};
use crate::error::Result;
use phongtro_types::{WithdrawalId, WithdrawalRequest};

/// Query filter for the withdrawal-request collection.
#[derive(Debug, Clone, Default)]
pub struct WithdrawalFilter {
    status: Option<String>,
}

impl WithdrawalFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub(crate) fn query(&self) -> String {
        match &self.status {
            Some(status) => format!("?status={}", status),
            None => String::new(),
        }
    }
}

impl ApiClient {
    /// Withdrawal requests against the landlord's rooms.
    pub fn list_withdrawal_requests(
        &self,
        filter: &WithdrawalFilter,
    ) -> Result<Vec<WithdrawalRequest>> {
        self.get_json(&format!("/api/withdrawal-requests{}", filter.query()))
    }

    /// The authenticated tenant's own withdrawal requests.
    pub fn my_withdrawal_requests(&self) -> Result<Vec<WithdrawalRequest>> {
        self.get_json("/api/withdrawal-requests/mine")
    }

    pub fn withdrawal_request(&self, id: &WithdrawalId) -> Result<WithdrawalRequest> {
        self.get_json(&format!("/api/withdrawal-requests/{}", id))
    }

    pub fn create_withdrawal_request(&self, body: &CreateWithdrawalBody) -> Result<WithdrawalRequest> {
        self.post_json("/api/withdrawal-requests", body)
    }

    pub fn approve_withdrawal_request(
        &self,
        id: &WithdrawalId,
        body: &ApproveWithdrawalBody,
    ) -> Result<()> {
        self.post_unit(&format!("/api/withdrawal-requests/{}/approve", id), body)
    }

    pub fn reject_withdrawal_request(
        &self,
        id: &WithdrawalId,
        body: &RejectWithdrawalBody,
    ) -> Result<()> {
        self.post_unit(&format!("/api/withdrawal-requests/{}/reject", id), body)
    }

    pub fn cancel_withdrawal_request(&self, id: &WithdrawalId) -> Result<()> {
        self.post_empty(&format!("/api/withdrawal-requests/{}/cancel", id))
    }
}
