//! Pre-submit validation for the accept/reject/approve/create flows.
//!
//! Validation runs before any network call; a `FormError` blocks the
//! submission entirely. Forms hold raw user input, `validate` produces the
//! payload the backend collaborators send.

use chrono::NaiveDate;
use phongtro_types::{RoomRef, VnpayInfo, WithdrawalType};
use std::fmt;

/// Canned landlord rejection reasons. The last entry switches the form to
/// free-text mode, where the custom reason becomes mandatory.
pub const REJECT_REASONS: [&str; 6] = [
    "Phòng đã có người thuê",
    "Thời gian thuê không phù hợp",
    "Số lượng người ở vượt quy định",
    "Hồ sơ chưa đủ thông tin",
    "Phòng đang bảo trì",
    OTHER_REASON,
];

pub const OTHER_REASON: &str = "Lý do khác";

/// A validation failure that blocks submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingResponseMessage,
    MissingStartDate,
    MissingReason,
    /// "Lý do khác" selected but no custom reason typed.
    MissingCustomReason,
    MissingResponseNote,
    MissingRequestType,
    NegativeDeduction,
    DeductionExceedsAmount { deduction: i64, requested: i64 },
    /// Deduction is positive but no reason for it was given.
    MissingDeductionReason,
    InvalidAmount,
    MissingBankInfo,
    InvalidGuestCount,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingResponseMessage => write!(f, "a response message is required"),
            FormError::MissingStartDate => write!(f, "a start date is required"),
            FormError::MissingReason => write!(f, "a rejection reason is required"),
            FormError::MissingCustomReason => {
                write!(f, "\"{}\" requires a custom reason", OTHER_REASON)
            }
            FormError::MissingResponseNote => write!(f, "a response note is required"),
            FormError::MissingRequestType => write!(f, "a withdrawal type is required"),
            FormError::NegativeDeduction => write!(f, "deduction cannot be negative"),
            FormError::DeductionExceedsAmount {
                deduction,
                requested,
            } => write!(
                f,
                "deduction ({}) exceeds the requested amount ({})",
                deduction, requested
            ),
            FormError::MissingDeductionReason => {
                write!(f, "a reason is required when deducting from the deposit")
            }
            FormError::InvalidAmount => write!(f, "amount must be positive"),
            FormError::MissingBankInfo => {
                write!(f, "bank code, account number and account name are required")
            }
            FormError::InvalidGuestCount => write!(f, "guest count must be at least 1"),
        }
    }
}

impl std::error::Error for FormError {}

// ==========================================
// Landlord: accept a rental request
// ==========================================

/// Landlord accept form. Pricing is not part of the input: rent and deposit
/// are fixed to the room's listed values and only displayed for reference.
#[derive(Debug, Clone, Default)]
pub struct AcceptForm {
    pub response_message: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Validated accept payload; `rent`/`deposit` are copied from the room so
/// the backend records the terms that were offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptPayload {
    pub response_message: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub rent: i64,
    pub deposit: i64,
}

impl AcceptForm {
    pub fn validate(&self, room: &RoomRef) -> Result<AcceptPayload, FormError> {
        let message = self.response_message.trim();
        if message.is_empty() {
            return Err(FormError::MissingResponseMessage);
        }
        let start_date = self.start_date.ok_or(FormError::MissingStartDate)?;

        Ok(AcceptPayload {
            response_message: message.to_string(),
            start_date,
            end_date: self.end_date,
            rent: room.base_rent,
            deposit: room.deposit,
        })
    }
}

// ==========================================
// Landlord: reject a rental request
// ==========================================

/// Landlord reject form: a canned reason plus an optional note, or a
/// mandatory free-text reason when "Lý do khác" is chosen.
#[derive(Debug, Clone, Default)]
pub struct RejectForm {
    pub selected_reason: String,
    pub note: String,
}

impl RejectForm {
    /// Compose the final rejection message.
    pub fn validate(&self) -> Result<String, FormError> {
        let reason = self.selected_reason.trim();
        let note = self.note.trim();

        if reason.is_empty() {
            return Err(FormError::MissingReason);
        }
        if reason == OTHER_REASON {
            if note.is_empty() {
                return Err(FormError::MissingCustomReason);
            }
            return Ok(note.to_string());
        }
        Ok(format!("{}. {}", reason, note).trim().to_string())
    }
}

// ==========================================
// Landlord: approve a withdrawal request
// ==========================================

#[derive(Debug, Clone, Default)]
pub struct ApprovalForm {
    pub deduction_amount: i64,
    pub deduction_reason: String,
    pub response_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovePayload {
    pub deduction_amount: i64,
    pub deduction_reason: Option<String>,
    pub response_note: Option<String>,
}

impl ApprovalForm {
    /// `requested` is the amount on the withdrawal request; a deduction may
    /// equal it (full withholding) but never exceed it.
    pub fn validate(&self, requested: i64) -> Result<ApprovePayload, FormError> {
        if self.deduction_amount < 0 {
            return Err(FormError::NegativeDeduction);
        }
        if self.deduction_amount > requested {
            return Err(FormError::DeductionExceedsAmount {
                deduction: self.deduction_amount,
                requested,
            });
        }
        let reason = self.deduction_reason.trim();
        if self.deduction_amount > 0 && reason.is_empty() {
            return Err(FormError::MissingDeductionReason);
        }

        let note = self.response_note.trim();
        Ok(ApprovePayload {
            deduction_amount: self.deduction_amount,
            deduction_reason: (!reason.is_empty()).then(|| reason.to_string()),
            response_note: (!note.is_empty()).then(|| note.to_string()),
        })
    }
}

// ==========================================
// Tenant: create requests
// ==========================================

#[derive(Debug, Clone, Default)]
pub struct CreateWithdrawalForm {
    pub amount: i64,
    pub request_type: Option<WithdrawalType>,
    pub reason: String,
    pub bank_code: String,
    pub account_number: String,
    pub account_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWithdrawalPayload {
    pub amount: i64,
    pub request_type: WithdrawalType,
    pub reason: String,
    pub vnpay_info: VnpayInfo,
}

impl CreateWithdrawalForm {
    pub fn validate(&self) -> Result<CreateWithdrawalPayload, FormError> {
        if self.amount <= 0 {
            return Err(FormError::InvalidAmount);
        }
        let request_type = self.request_type.ok_or(FormError::MissingRequestType)?;
        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(FormError::MissingReason);
        }
        let bank_code = self.bank_code.trim();
        let account_number = self.account_number.trim();
        let account_name = self.account_name.trim();
        if bank_code.is_empty() || account_number.is_empty() || account_name.is_empty() {
            return Err(FormError::MissingBankInfo);
        }

        Ok(CreateWithdrawalPayload {
            amount: self.amount,
            request_type,
            reason: reason.to_string(),
            vnpay_info: VnpayInfo {
                bank_code: bank_code.to_string(),
                account_number: account_number.to_string(),
                account_name: account_name.to_string(),
            },
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateRentalForm {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub guest_count: u32,
    pub proposed_rent: Option<i64>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRentalPayload {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub guest_count: u32,
    pub proposed_rent: Option<i64>,
    pub message: Option<String>,
}

impl CreateRentalForm {
    pub fn validate(&self) -> Result<CreateRentalPayload, FormError> {
        let start_date = self.start_date.ok_or(FormError::MissingStartDate)?;
        if self.guest_count == 0 {
            return Err(FormError::InvalidGuestCount);
        }
        let message = self.message.trim();

        Ok(CreateRentalPayload {
            start_date,
            end_date: self.end_date,
            guest_count: self.guest_count,
            proposed_rent: self.proposed_rent,
            message: (!message.is_empty()).then(|| message.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phongtro_types::RoomId;

    fn room() -> RoomRef {
        RoomRef {
            id: RoomId::new("r-1"),
            title: "Phòng 101".to_string(),
            base_rent: 3_500_000,
            deposit: 3_500_000,
        }
    }

    #[test]
    fn test_accept_blocked_without_message() {
        let form = AcceptForm {
            response_message: "".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: None,
        };
        assert_eq!(
            form.validate(&room()),
            Err(FormError::MissingResponseMessage)
        );
    }

    #[test]
    fn test_accept_blocked_without_start_date() {
        let form = AcceptForm {
            response_message: "ok".to_string(),
            start_date: None,
            end_date: None,
        };
        assert_eq!(form.validate(&room()), Err(FormError::MissingStartDate));
    }

    #[test]
    fn test_accept_whitespace_message_is_missing() {
        let form = AcceptForm {
            response_message: "   ".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: None,
        };
        assert_eq!(
            form.validate(&room()),
            Err(FormError::MissingResponseMessage)
        );
    }

    #[test]
    fn test_accept_copies_fixed_pricing_from_room() {
        let form = AcceptForm {
            response_message: "Hẹn gặp bạn ngày nhận phòng".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: None,
        };
        let payload = form.validate(&room()).unwrap();
        assert_eq!(payload.rent, 3_500_000);
        assert_eq!(payload.deposit, 3_500_000);
        assert_eq!(payload.start_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn test_reject_other_reason_requires_note() {
        let form = RejectForm {
            selected_reason: OTHER_REASON.to_string(),
            note: "".to_string(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingCustomReason));
    }

    #[test]
    fn test_reject_other_reason_uses_note_verbatim() {
        let form = RejectForm {
            selected_reason: OTHER_REASON.to_string(),
            note: "Phòng sẽ ngừng cho thuê".to_string(),
        };
        assert_eq!(form.validate().unwrap(), "Phòng sẽ ngừng cho thuê");
    }

    #[test]
    fn test_reject_canned_reason_with_empty_note_is_allowed() {
        let form = RejectForm {
            selected_reason: "Phòng đã có người thuê".to_string(),
            note: "".to_string(),
        };
        assert_eq!(form.validate().unwrap(), "Phòng đã có người thuê.");
    }

    #[test]
    fn test_reject_canned_reason_appends_note() {
        let form = RejectForm {
            selected_reason: "Hồ sơ chưa đủ thông tin".to_string(),
            note: "Vui lòng bổ sung CCCD".to_string(),
        };
        assert_eq!(
            form.validate().unwrap(),
            "Hồ sơ chưa đủ thông tin. Vui lòng bổ sung CCCD"
        );
    }

    #[test]
    fn test_reject_empty_reason_blocked() {
        let form = RejectForm::default();
        assert_eq!(form.validate(), Err(FormError::MissingReason));
    }

    #[test]
    fn test_approval_deduction_over_amount_blocked() {
        let form = ApprovalForm {
            deduction_amount: 4_200_001,
            deduction_reason: "Hư hỏng nội thất".to_string(),
            response_note: String::new(),
        };
        assert_eq!(
            form.validate(4_200_000),
            Err(FormError::DeductionExceedsAmount {
                deduction: 4_200_001,
                requested: 4_200_000,
            })
        );
    }

    #[test]
    fn test_approval_deduction_equal_to_amount_is_boundary_allowed() {
        let form = ApprovalForm {
            deduction_amount: 4_200_000,
            deduction_reason: "Nợ tiền điện nước".to_string(),
            response_note: String::new(),
        };
        let payload = form.validate(4_200_000).unwrap();
        assert_eq!(payload.deduction_amount, 4_200_000);
    }

    #[test]
    fn test_approval_positive_deduction_requires_reason() {
        let form = ApprovalForm {
            deduction_amount: 100_000,
            deduction_reason: " ".to_string(),
            response_note: String::new(),
        };
        assert_eq!(form.validate(500_000), Err(FormError::MissingDeductionReason));
    }

    #[test]
    fn test_approval_zero_deduction_needs_no_reason() {
        let form = ApprovalForm::default();
        let payload = form.validate(500_000).unwrap();
        assert_eq!(payload.deduction_amount, 0);
        assert_eq!(payload.deduction_reason, None);
        assert_eq!(payload.response_note, None);
    }

    #[test]
    fn test_create_withdrawal_requires_bank_info() {
        let form = CreateWithdrawalForm {
            amount: 1_000_000,
            request_type: Some(WithdrawalType::DepositRefund),
            reason: "Hết hạn hợp đồng".to_string(),
            bank_code: "VCB".to_string(),
            account_number: String::new(),
            account_name: "NGUYEN VAN AN".to_string(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingBankInfo));
    }

    #[test]
    fn test_create_rental_requires_guests() {
        let form = CreateRentalForm {
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1),
            guest_count: 0,
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::InvalidGuestCount));
    }
}
