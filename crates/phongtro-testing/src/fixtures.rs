//! Sample entities with fixed timestamps.
//!
//! Builders return fully-populated records so tests only override what
//! they assert on.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use phongtro_types::{
    ConfirmationId, ConfirmationStatus, PaymentStatus, Priority, RentalConfirmation,
    RentalRequest, RentalStatus, RequestId, RoomId, RoomRef, TenantId, TenantRef, VnpayInfo,
    WithdrawalId, WithdrawalRequest, WithdrawalStatus, WithdrawalType,
};

pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 3, 0, 0).unwrap()
}

pub fn tenant() -> TenantRef {
    TenantRef {
        id: TenantId::new("tenant-1"),
        full_name: "Nguyễn Văn An".to_string(),
        phone: Some("0901234567".to_string()),
    }
}

pub fn room() -> RoomRef {
    RoomRef {
        id: RoomId::new("room-1"),
        title: "Phòng 101 - Nhà trọ Bình An".to_string(),
        base_rent: 3_500_000,
        deposit: 3_500_000,
    }
}

pub fn pending_rental(id: &str) -> RentalRequest {
    RentalRequest {
        id: RequestId::new(id),
        status: RentalStatus::Pending,
        tenant: tenant(),
        room: room(),
        accommodation: None,
        proposed_start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        proposed_end_date: None,
        guest_count: 2,
        proposed_rent: None,
        message: Some("Mình muốn xem phòng cuối tuần".to_string()),
        priority: Priority::Normal,
        response_message: None,
        responded_at: None,
        viewed_by_landlord: false,
        viewed_at: None,
        confirmation: None,
        created_at: created_at(),
    }
}

pub fn accepted_rental(id: &str, confirmation: Option<RentalConfirmation>) -> RentalRequest {
    let mut request = pending_rental(id);
    request.status = RentalStatus::Accepted;
    request.response_message = Some("Hẹn gặp bạn ngày nhận phòng".to_string());
    request.responded_at = Some(Utc.with_ymd_and_hms(2025, 7, 2, 9, 30, 0).unwrap());
    request.confirmation = confirmation;
    request
}

pub fn confirmation_unconfirmed() -> RentalConfirmation {
    RentalConfirmation {
        id: ConfirmationId::new("conf-1"),
        status: ConfirmationStatus::Pending,
        payment_status: PaymentStatus::Pending,
        payment_completed_at: None,
        final_confirmed_at: None,
        agreement: None,
    }
}

pub fn confirmation_confirmed() -> RentalConfirmation {
    RentalConfirmation {
        status: ConfirmationStatus::Confirmed,
        ..confirmation_unconfirmed()
    }
}

pub fn confirmation_paid() -> RentalConfirmation {
    RentalConfirmation {
        status: ConfirmationStatus::Confirmed,
        payment_status: PaymentStatus::Completed,
        payment_completed_at: Some(Utc.with_ymd_and_hms(2025, 7, 3, 7, 15, 0).unwrap()),
        ..confirmation_unconfirmed()
    }
}

pub fn pending_withdrawal(id: &str, amount: i64) -> WithdrawalRequest {
    WithdrawalRequest {
        id: WithdrawalId::new(id),
        tenant: tenant(),
        room: room(),
        amount,
        request_type: WithdrawalType::DepositRefund,
        reason: "Hết hạn hợp đồng".to_string(),
        status: WithdrawalStatus::Pending,
        landlord_response: None,
        vnpay_info: VnpayInfo {
            bank_code: "VCB".to_string(),
            account_number: "0123456789".to_string(),
            account_name: "NGUYEN VAN AN".to_string(),
        },
        payment_processing: None,
        created_at: created_at(),
    }
}

pub fn cancelled_withdrawal(id: &str, amount: i64) -> WithdrawalRequest {
    let mut request = pending_withdrawal(id, amount);
    request.status = WithdrawalStatus::Cancelled;
    request
}
