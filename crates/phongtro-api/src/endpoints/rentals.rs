use crate::client::ApiClient;
use crate::dto::{AcceptRequestBody, CreateRentalRequestBody, RejectRequestBody};
use crate::error::Result;
use phongtro_types::{RentalRequest, RequestId};

/// Query filter for the rental-request collection.
#[derive(Debug, Clone, Default)]
pub struct RentalFilter {
    status: Option<String>,
    limit: Option<usize>,
}

impl RentalFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn query(&self) -> String {
        let mut params = Vec::new();
        if let Some(status) = &self.status {
            params.push(format!("status={}", status));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

impl ApiClient {
    /// Rental requests addressed to the landlord's rooms.
    pub fn list_rental_requests(&self, filter: &RentalFilter) -> Result<Vec<RentalRequest>> {
        self.get_json(&format!("/api/rental-requests{}", filter.query()))
    }

    /// The authenticated tenant's own rental requests.
    pub fn my_rental_requests(&self) -> Result<Vec<RentalRequest>> {
        self.get_json("/api/rental-requests/mine")
    }

    pub fn rental_request(&self, id: &RequestId) -> Result<RentalRequest> {
        self.get_json(&format!("/api/rental-requests/{}", id))
    }

    pub fn create_rental_request(&self, body: &CreateRentalRequestBody) -> Result<RentalRequest> {
        self.post_json("/api/rental-requests", body)
    }

    pub fn accept_rental_request(&self, id: &RequestId, body: &AcceptRequestBody) -> Result<()> {
        self.post_unit(&format!("/api/rental-requests/{}/accept", id), body)
    }

    pub fn reject_rental_request(&self, id: &RequestId, body: &RejectRequestBody) -> Result<()> {
        self.post_unit(&format!("/api/rental-requests/{}/reject", id), body)
    }

    /// Tenant withdraws their own pending request.
    pub fn cancel_rental_request(&self, id: &RequestId) -> Result<()> {
        self.post_empty(&format!("/api/rental-requests/{}/cancel", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_empty() {
        assert_eq!(RentalFilter::new().query(), "");
    }

    #[test]
    fn test_filter_query_combines_params() {
        let filter = RentalFilter::new().status("pending").limit(50);
        assert_eq!(filter.query(), "?status=pending&limit=50");
    }
}
