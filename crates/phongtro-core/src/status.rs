//! The single status-to-presentation table.
//!
//! Every view (console tables, TUI cards, detail panes) derives its status
//! text and color from here; no per-view label tables exist.

use phongtro_types::{Priority, RentalConfirmation, RentalStatus, WithdrawalStatus};

/// Semantic color of a badge, mapped to concrete colors by each renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Amber,
    Green,
    Red,
    Gray,
    Blue,
}

/// Display label, color and optional progress sub-label for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: Tone,
    pub sub_label: Option<&'static str>,
}

impl StatusBadge {
    const fn new(label: &'static str, tone: Tone) -> Self {
        Self {
            label,
            tone,
            sub_label: None,
        }
    }

    const fn with_sub(label: &'static str, tone: Tone, sub_label: &'static str) -> Self {
        Self {
            label,
            tone,
            sub_label: Some(sub_label),
        }
    }
}

/// Classify a rental request status for display.
///
/// For accepted requests the sub-label reports workflow progress from the
/// nested confirmation record, checked in strict priority order: paid
/// indicators win over "awaiting payment", which wins over "awaiting tenant
/// confirmation", which wins over "email pending" (no confirmation yet).
/// The ordering tells landlords how far the move-in has progressed without
/// extra requests.
///
/// Total over all inputs; statuses this client does not know present like
/// `Pending`.
pub fn rental_badge(status: RentalStatus, confirmation: Option<&RentalConfirmation>) -> StatusBadge {
    match status {
        RentalStatus::Pending | RentalStatus::Unknown => {
            StatusBadge::new("Chờ phản hồi", Tone::Amber)
        }
        RentalStatus::Accepted => {
            let sub = match confirmation {
                Some(c) if c.is_paid() => "Đã thanh toán",
                Some(c) if c.status == phongtro_types::ConfirmationStatus::Confirmed => {
                    "Chờ thanh toán"
                }
                Some(_) => "Chờ khách xác nhận",
                None => "Chờ gửi email xác nhận",
            };
            StatusBadge::with_sub("Đã chấp nhận", Tone::Green, sub)
        }
        RentalStatus::Rejected => StatusBadge::new("Đã từ chối", Tone::Red),
        RentalStatus::Withdrawn => StatusBadge::new("Đã rút yêu cầu", Tone::Gray),
    }
}

/// Classify a withdrawal request status for display.
pub fn withdrawal_badge(status: WithdrawalStatus) -> StatusBadge {
    match status {
        WithdrawalStatus::Pending | WithdrawalStatus::Unknown => {
            StatusBadge::new("Chờ xử lý", Tone::Amber)
        }
        WithdrawalStatus::Approved => StatusBadge::new("Đã duyệt", Tone::Blue),
        WithdrawalStatus::Processing => StatusBadge::new("Đang chuyển tiền", Tone::Blue),
        WithdrawalStatus::Completed => StatusBadge::new("Đã hoàn tất", Tone::Green),
        WithdrawalStatus::Rejected => StatusBadge::new("Đã từ chối", Tone::Red),
        WithdrawalStatus::Failed => StatusBadge::new("Chuyển tiền thất bại", Tone::Red),
        WithdrawalStatus::Cancelled => StatusBadge::new("Đã hủy", Tone::Gray),
    }
}

/// Classify a request priority for display.
pub fn priority_badge(priority: Priority) -> StatusBadge {
    match priority {
        Priority::Urgent => StatusBadge::new("Khẩn cấp", Tone::Red),
        Priority::High => StatusBadge::new("Ưu tiên cao", Tone::Amber),
        Priority::Normal => StatusBadge::new("Bình thường", Tone::Blue),
        Priority::Low => StatusBadge::new("Thấp", Tone::Gray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use phongtro_types::{ConfirmationId, ConfirmationStatus, PaymentStatus};

    fn confirmation(
        status: ConfirmationStatus,
        payment_status: PaymentStatus,
    ) -> RentalConfirmation {
        RentalConfirmation {
            id: ConfirmationId::new("c-1"),
            status,
            payment_status,
            payment_completed_at: None,
            final_confirmed_at: None,
            agreement: None,
        }
    }

    #[test]
    fn test_every_rental_status_has_a_label() {
        for status in [
            RentalStatus::Pending,
            RentalStatus::Accepted,
            RentalStatus::Rejected,
            RentalStatus::Withdrawn,
            RentalStatus::Unknown,
        ] {
            let badge = rental_badge(status, None);
            assert!(!badge.label.is_empty());
        }
    }

    #[test]
    fn test_every_withdrawal_status_has_a_label() {
        for status in [
            WithdrawalStatus::Pending,
            WithdrawalStatus::Approved,
            WithdrawalStatus::Processing,
            WithdrawalStatus::Completed,
            WithdrawalStatus::Rejected,
            WithdrawalStatus::Failed,
            WithdrawalStatus::Cancelled,
            WithdrawalStatus::Unknown,
        ] {
            let badge = withdrawal_badge(status);
            assert!(!badge.label.is_empty());
        }
    }

    #[test]
    fn test_unknown_presents_like_pending() {
        assert_eq!(
            rental_badge(RentalStatus::Unknown, None),
            rental_badge(RentalStatus::Pending, None)
        );
        assert_eq!(
            withdrawal_badge(WithdrawalStatus::Unknown),
            withdrawal_badge(WithdrawalStatus::Pending)
        );
    }

    #[test]
    fn test_paid_takes_precedence_over_confirmation_state() {
        // Tenant has not even confirmed, but a completed-payment timestamp
        // exists; the paid indicator must still win.
        let mut c = confirmation(ConfirmationStatus::Pending, PaymentStatus::Pending);
        c.payment_completed_at = Some(Utc::now());

        let badge = rental_badge(RentalStatus::Accepted, Some(&c));
        assert_eq!(badge.sub_label, Some("Đã thanh toán"));
    }

    #[test]
    fn test_confirmed_without_payment_awaits_payment() {
        let c = confirmation(ConfirmationStatus::Confirmed, PaymentStatus::Pending);
        let badge = rental_badge(RentalStatus::Accepted, Some(&c));
        assert_eq!(badge.sub_label, Some("Chờ thanh toán"));
    }

    #[test]
    fn test_unconfirmed_awaits_tenant() {
        let c = confirmation(ConfirmationStatus::Pending, PaymentStatus::Pending);
        let badge = rental_badge(RentalStatus::Accepted, Some(&c));
        assert_eq!(badge.sub_label, Some("Chờ khách xác nhận"));
    }

    #[test]
    fn test_no_confirmation_means_email_pending() {
        let badge = rental_badge(RentalStatus::Accepted, None);
        assert_eq!(badge.sub_label, Some("Chờ gửi email xác nhận"));
    }

    #[test]
    fn test_only_accepted_carries_a_sub_label() {
        let c = confirmation(ConfirmationStatus::Confirmed, PaymentStatus::Completed);
        for status in [
            RentalStatus::Pending,
            RentalStatus::Rejected,
            RentalStatus::Withdrawn,
        ] {
            assert_eq!(rental_badge(status, Some(&c)).sub_label, None);
        }
    }
}
