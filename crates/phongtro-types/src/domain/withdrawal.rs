use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::WithdrawalId;
use super::rental::{RoomRef, TenantRef};

/// Lifecycle status of a deposit-withdrawal request.
///
/// `Pending` is the only status from which the tenant may cancel or the
/// landlord may approve/reject. `Approved` moves to `Processing` and then
/// `Completed`/`Failed` through the backend settlement process without
/// further client action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalStatus {
    Pending,
    Approved,
    Processing,
    Completed,
    Rejected,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// Kind of withdrawal the tenant is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalType {
    DepositRefund,
    EarlyTermination,
}

/// Payout destination provided by the tenant at creation, immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VnpayInfo {
    pub bank_code: String,
    pub account_number: String,
    pub account_name: String,
}

/// Landlord decision details, populated only after approve/reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandlordResponse {
    /// Amount withheld from the requested sum, in VND.
    #[serde(default)]
    pub deduction_amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deduction_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_note: Option<String>,
}

/// Settlement record written by the backend payout process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProcessing {
    /// External transaction reference from the payment gateway.
    pub transaction_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Tenant-initiated request to refund or release a deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub id: WithdrawalId,
    pub tenant: TenantRef,
    pub room: RoomRef,
    /// Requested amount in VND.
    pub amount: i64,
    pub request_type: WithdrawalType,
    pub reason: String,
    pub status: WithdrawalStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landlord_response: Option<LandlordResponse>,
    pub vnpay_info: VnpayInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_processing: Option<PaymentProcessing>,

    pub created_at: DateTime<Utc>,
}

impl WithdrawalRequest {
    /// Approve/reject (landlord) and cancel (tenant) are valid only while
    /// the request is pending.
    pub fn is_actionable(&self) -> bool {
        self.status == WithdrawalStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "wd-1",
            "tenant": {"id": "t-1", "fullName": "Trần Thị Bích"},
            "room": {"id": "r-2", "title": "Phòng 202", "baseRent": 4200000},
            "amount": 4200000,
            "requestType": "deposit_refund",
            "reason": "Hết hạn hợp đồng",
            "status": "pending",
            "vnpayInfo": {"bankCode": "VCB", "accountNumber": "0123456789", "accountName": "TRAN THI BICH"},
            "createdAt": "2025-07-15T02:00:00Z"
        }"#
    }

    #[test]
    fn test_decode_pending_withdrawal() {
        let req: WithdrawalRequest = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(req.request_type, WithdrawalType::DepositRefund);
        assert!(req.is_actionable());
        assert!(req.landlord_response.is_none());
        assert!(req.payment_processing.is_none());
    }

    #[test]
    fn test_only_pending_is_actionable() {
        for (wire, actionable) in [
            ("pending", true),
            ("approved", false),
            ("processing", false),
            ("completed", false),
            ("rejected", false),
            ("failed", false),
            ("cancelled", false),
            ("settling", false),
        ] {
            let json = sample_json().replace("\"pending\"", &format!("\"{wire}\""));
            let req: WithdrawalRequest = serde_json::from_str(&json).unwrap();
            assert_eq!(req.is_actionable(), actionable, "status {wire}");
        }
    }

    #[test]
    fn test_decode_landlord_response_defaults() {
        let resp: LandlordResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.deduction_amount, 0);
        assert!(resp.deduction_reason.is_none());
    }
}
