//! Request bodies and the backend response envelope.

use chrono::NaiveDate;
use phongtro_types::{RoomId, VnpayInfo, WithdrawalType};
use serde::{Deserialize, Serialize};

/// Every non-file endpoint wraps its payload in this envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptRequestBody {
    pub response_message: String,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Fixed to the room's listed pricing; the form never edits these.
    pub rent: i64,
    pub deposit: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequestBody {
    pub response_message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequestBody {
    pub room: RoomId,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub guest_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_rent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveWithdrawalBody {
    pub deduction_amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectWithdrawalBody {
    pub response_note: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWithdrawalBody {
    pub amount: i64,
    pub request_type: WithdrawalType,
    pub reason: String,
    pub vnpay_info: VnpayInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decodes_success_with_data() {
        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"success": true, "data": [1, 2]}"#).unwrap();
        assert!(env.success);
        assert_eq!(env.data, Some(vec![1, 2]));
        assert!(env.message.is_none());
    }

    #[test]
    fn test_envelope_decodes_failure_without_data() {
        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"success": false, "message": "Yêu cầu không tồn tại"}"#)
                .unwrap();
        assert!(!env.success);
        assert_eq!(env.message.as_deref(), Some("Yêu cầu không tồn tại"));
        assert!(env.data.is_none());
    }

    #[test]
    fn test_accept_body_serializes_camel_case() {
        let body = AcceptRequestBody {
            response_message: "ok".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_date: None,
            rent: 3_500_000,
            deposit: 3_500_000,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["responseMessage"], "ok");
        assert_eq!(json["startDate"], "2025-09-01");
        assert_eq!(json["rent"], 3_500_000);
        assert!(json.get("endDate").is_none());
    }

    #[test]
    fn test_approve_body_omits_empty_optionals() {
        let body = ApproveWithdrawalBody {
            deduction_amount: 0,
            deduction_reason: None,
            response_note: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["deductionAmount"], 0);
        assert!(json.get("deductionReason").is_none());
        assert!(json.get("responseNote").is_none());
    }
}
