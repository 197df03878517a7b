use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{AccommodationId, AgreementId, ConfirmationId, RequestId, RoomId, TenantId};

/// Lifecycle status of a rental request.
///
/// `Pending` is the only non-terminal state; `Accepted`, `Rejected` and
/// `Withdrawn` are terminal. Values the backend adds later decode as
/// `Unknown` instead of failing the whole collection, and are presented
/// like `Pending` without being actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    Pending,
    Accepted,
    Rejected,
    /// Tenant withdrew the request before the landlord responded.
    Withdrawn,
    #[serde(other)]
    Unknown,
}

impl RentalStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected | Self::Withdrawn)
    }
}

/// Display priority assigned by the backend (defaults to `Normal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    High,
    #[default]
    Normal,
    Low,
}

/// Tenant display data resolved by the backend alongside the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRef {
    pub id: TenantId,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Room display data, including the fixed pricing the accept flow is
/// bound to (price is not negotiable through the client).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRef {
    pub id: RoomId,
    pub title: String,
    /// Monthly rent in VND.
    pub base_rent: i64,
    /// Deposit in VND.
    #[serde(default)]
    pub deposit: i64,
}

// ==========================================
// Confirmation (signed-agreement record)
// ==========================================

/// Whether the tenant has confirmed the signed agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationStatus {
    Pending,
    Confirmed,
    #[serde(other)]
    Unknown,
}

/// Payment state on a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Backend record representing the signed-agreement step that gates
/// payment, referenced by a rental request once accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalConfirmation {
    pub id: ConfirmationId,
    pub status: ConfirmationStatus,
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_confirmed_at: Option<DateTime<Utc>>,
    /// Downloadable signed-agreement file, once generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement: Option<AgreementId>,
}

impl RentalConfirmation {
    /// Whether payment on this confirmation has completed.
    ///
    /// Three independent fields indicate this across backend schema
    /// versions; any one of them set means paid.
    pub fn is_paid(&self) -> bool {
        self.payment_completed_at.is_some()
            || self.final_confirmed_at.is_some()
            || self.payment_status == PaymentStatus::Completed
    }
}

// ==========================================
// Rental request
// ==========================================

/// Tenant-initiated request to rent a room.
///
/// Created by the tenant, transitioned exactly once out of `Pending` by
/// the landlord (accept/reject) or back by the tenant (withdraw). The
/// record itself persists server-side after a transition; only the
/// client's pending collection drops it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub id: RequestId,
    pub status: RentalStatus,
    pub tenant: TenantRef,
    pub room: RoomRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<AccommodationId>,

    pub proposed_start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_end_date: Option<NaiveDate>,
    pub guest_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_rent: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default)]
    pub priority: Priority,

    /// Landlord response, immutable once set (no edit operation exists).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub viewed_by_landlord: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewed_at: Option<DateTime<Utc>>,

    /// Present only after acceptance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<RentalConfirmation>,

    pub created_at: DateTime<Utc>,
}

impl RentalRequest {
    /// The landlord can accept or reject iff the request is still pending.
    pub fn is_actionable(&self) -> bool {
        self.status == RentalStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "req-1",
            "status": "pending",
            "tenant": {"id": "t-1", "fullName": "Nguyễn Văn An"},
            "room": {"id": "r-1", "title": "Phòng 101", "baseRent": 3500000, "deposit": 3500000},
            "proposedStartDate": "2025-09-01",
            "guestCount": 2,
            "createdAt": "2025-08-01T08:30:00Z"
        }"#
    }

    #[test]
    fn test_decode_minimal_request() {
        let req: RentalRequest = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(req.status, RentalStatus::Pending);
        assert_eq!(req.priority, Priority::Normal);
        assert!(req.is_actionable());
        assert!(!req.viewed_by_landlord);
        assert!(req.confirmation.is_none());
    }

    #[test]
    fn test_unknown_status_does_not_fail_decoding() {
        let json = sample_json().replace("\"pending\"", "\"on_hold\"");
        let req: RentalRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.status, RentalStatus::Unknown);
        assert!(!req.is_actionable());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!RentalStatus::Pending.is_terminal());
        assert!(RentalStatus::Accepted.is_terminal());
        assert!(RentalStatus::Rejected.is_terminal());
        assert!(RentalStatus::Withdrawn.is_terminal());
        assert!(!RentalStatus::Unknown.is_terminal());
    }

    #[test]
    fn test_paid_indicator_alternatives() {
        let mut confirmation = RentalConfirmation {
            id: ConfirmationId::new("c-1"),
            status: ConfirmationStatus::Confirmed,
            payment_status: PaymentStatus::Pending,
            payment_completed_at: None,
            final_confirmed_at: None,
            agreement: None,
        };
        assert!(!confirmation.is_paid());

        confirmation.payment_status = PaymentStatus::Completed;
        assert!(confirmation.is_paid());

        confirmation.payment_status = PaymentStatus::Pending;
        confirmation.final_confirmed_at = Some(Utc::now());
        assert!(confirmation.is_paid());

        confirmation.final_confirmed_at = None;
        confirmation.payment_completed_at = Some(Utc::now());
        assert!(confirmation.is_paid());
    }
}
