use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use phongtro_api::{
    AgreementFile, ApiClient, CreateRentalRequestBody, CreateWithdrawalBody, RentalFilter,
    WithdrawalFilter,
};
use phongtro_core::forms::{CreateRentalPayload, CreateWithdrawalPayload};
use phongtro_types::{AgreementId, RentalRequest, RequestId, RoomId, WithdrawalId, WithdrawalRequest};

pub struct Client {
    inner: Arc<ApiClient>,
}

impl Client {
    pub fn connect(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::connect_verbose(base_url, access_token, false)
    }

    pub fn connect_verbose(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        verbose: bool,
    ) -> Result<Self> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(Error::InvalidInput("access token is empty".to_string()));
        }
        let api = ApiClient::new(base_url, access_token)?.with_verbose(verbose);
        Ok(Self {
            inner: Arc::new(api),
        })
    }

    pub fn rentals(&self) -> RentalsHandle {
        RentalsHandle {
            api: self.inner.clone(),
        }
    }

    pub fn withdrawals(&self) -> WithdrawalsHandle {
        WithdrawalsHandle {
            api: self.inner.clone(),
        }
    }

    pub fn agreements(&self) -> AgreementsHandle {
        AgreementsHandle {
            api: self.inner.clone(),
        }
    }
}

/// Rental-request operations.
pub struct RentalsHandle {
    pub(crate) api: Arc<ApiClient>,
}

impl RentalsHandle {
    /// Pending requests addressed to the landlord.
    pub fn pending(&self) -> Result<Vec<RentalRequest>> {
        let filter = RentalFilter::new().status("pending").limit(100);
        Ok(self.api.list_rental_requests(&filter)?)
    }

    /// Requests in any status, optionally capped.
    pub fn list(&self, status: Option<&str>, limit: usize) -> Result<Vec<RentalRequest>> {
        let mut filter = RentalFilter::new().limit(limit);
        if let Some(status) = status {
            filter = filter.status(status);
        }
        Ok(self.api.list_rental_requests(&filter)?)
    }

    /// The authenticated tenant's own requests.
    pub fn mine(&self) -> Result<Vec<RentalRequest>> {
        Ok(self.api.my_rental_requests()?)
    }

    pub fn get(&self, id: &RequestId) -> Result<RentalRequest> {
        Ok(self.api.rental_request(id)?)
    }

    /// Tenant-side request creation.
    pub fn create(&self, room: &RoomId, payload: &CreateRentalPayload) -> Result<RentalRequest> {
        let body = CreateRentalRequestBody {
            room: room.clone(),
            start_date: payload.start_date,
            end_date: payload.end_date,
            guest_count: payload.guest_count,
            proposed_rent: payload.proposed_rent,
            message: payload.message.clone(),
        };
        Ok(self.api.create_rental_request(&body)?)
    }

    /// Tenant withdraws their own pending request.
    pub fn cancel(&self, id: &RequestId) -> Result<()> {
        Ok(self.api.cancel_rental_request(id)?)
    }
}

/// Withdrawal-request operations.
pub struct WithdrawalsHandle {
    pub(crate) api: Arc<ApiClient>,
}

impl WithdrawalsHandle {
    pub fn pending(&self) -> Result<Vec<WithdrawalRequest>> {
        let filter = WithdrawalFilter::new().status("pending");
        Ok(self.api.list_withdrawal_requests(&filter)?)
    }

    pub fn mine(&self) -> Result<Vec<WithdrawalRequest>> {
        Ok(self.api.my_withdrawal_requests()?)
    }

    pub fn get(&self, id: &WithdrawalId) -> Result<WithdrawalRequest> {
        Ok(self.api.withdrawal_request(id)?)
    }

    pub fn create(&self, payload: &CreateWithdrawalPayload) -> Result<WithdrawalRequest> {
        let body = CreateWithdrawalBody {
            amount: payload.amount,
            request_type: payload.request_type,
            reason: payload.reason.clone(),
            vnpay_info: payload.vnpay_info.clone(),
        };
        Ok(self.api.create_withdrawal_request(&body)?)
    }
}

/// Signed-agreement file operations.
pub struct AgreementsHandle {
    api: Arc<ApiClient>,
}

impl AgreementsHandle {
    pub fn download(&self, id: &AgreementId) -> Result<AgreementFile> {
        Ok(self.api.download_agreement(id)?)
    }

    /// Download and write to `dir`, returning the written path.
    pub fn download_to(&self, id: &AgreementId, dir: &Path) -> Result<std::path::PathBuf> {
        let file = self.download(id)?;
        let path = dir.join(&file.filename);
        std::fs::write(&path, &file.bytes)
            .map_err(|err| Error::Internal(anyhow::Error::new(err)))?;
        Ok(path)
    }
}
