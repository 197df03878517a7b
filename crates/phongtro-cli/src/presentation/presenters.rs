//! Build display models from domain entities.
//!
//! All status text comes from the core classifier and all values go through
//! the vi-VN formatters, so every surface shows identical strings.

use super::view_models::{
    RentalCardView, RentalDetailView, WithdrawalCardView, WithdrawalDetailView,
};
use phongtro_core::format::{format_date, format_datetime, format_vnd};
use phongtro_core::{priority_badge, rental_badge, withdrawal_badge};
use phongtro_types::{RentalRequest, WithdrawalRequest, WithdrawalType};

pub fn present_rental_card(request: &RentalRequest) -> RentalCardView {
    RentalCardView {
        id: request.id.short().to_string(),
        tenant: request.tenant.full_name.clone(),
        room: request.room.title.clone(),
        start_date: format_date(request.proposed_start_date),
        guest_count: request.guest_count,
        rent: format_vnd(request.proposed_rent.unwrap_or(request.room.base_rent)),
        badge: rental_badge(request.status, request.confirmation.as_ref()),
        priority: priority_badge(request.priority),
        unread: !request.viewed_by_landlord,
    }
}

pub fn present_rental_list(requests: &[RentalRequest]) -> Vec<RentalCardView> {
    requests.iter().map(present_rental_card).collect()
}

pub fn present_rental_detail(request: &RentalRequest) -> RentalDetailView {
    let mut fields = vec![
        ("Khách thuê", request.tenant.full_name.clone()),
        ("Phòng", request.room.title.clone()),
        ("Ngày nhận phòng", format_date(request.proposed_start_date)),
    ];
    if let Some(end) = request.proposed_end_date {
        fields.push(("Ngày trả phòng", format_date(end)));
    }
    fields.push(("Số người ở", request.guest_count.to_string()));
    fields.push(("Giá phòng", format_vnd(request.room.base_rent)));
    fields.push(("Tiền cọc", format_vnd(request.room.deposit)));
    if let Some(rent) = request.proposed_rent {
        fields.push(("Giá đề xuất", format_vnd(rent)));
    }
    if let Some(phone) = &request.tenant.phone {
        fields.push(("Điện thoại", phone.clone()));
    }
    fields.push(("Gửi lúc", format_datetime(&request.created_at)));
    if let Some(responded_at) = &request.responded_at {
        fields.push(("Phản hồi lúc", format_datetime(responded_at)));
    }

    RentalDetailView {
        id: request.id.to_string(),
        badge: rental_badge(request.status, request.confirmation.as_ref()),
        priority: priority_badge(request.priority),
        fields,
        message: request.message.clone(),
        response_message: request.response_message.clone(),
        agreement_id: request
            .confirmation
            .as_ref()
            .and_then(|c| c.agreement.as_ref())
            .map(|id| id.to_string()),
    }
}

pub fn withdrawal_kind(kind: WithdrawalType) -> &'static str {
    match kind {
        WithdrawalType::DepositRefund => "Hoàn tiền cọc",
        WithdrawalType::EarlyTermination => "Kết thúc sớm",
    }
}

pub fn present_withdrawal_card(request: &WithdrawalRequest) -> WithdrawalCardView {
    WithdrawalCardView {
        id: request.id.short().to_string(),
        tenant: request.tenant.full_name.clone(),
        room: request.room.title.clone(),
        amount: format_vnd(request.amount),
        kind: withdrawal_kind(request.request_type),
        badge: withdrawal_badge(request.status),
        created_at: format_date(request.created_at.date_naive()),
    }
}

pub fn present_withdrawal_list(requests: &[WithdrawalRequest]) -> Vec<WithdrawalCardView> {
    requests.iter().map(present_withdrawal_card).collect()
}

pub fn present_withdrawal_detail(request: &WithdrawalRequest) -> WithdrawalDetailView {
    let mut fields = vec![
        ("Khách thuê", request.tenant.full_name.clone()),
        ("Phòng", request.room.title.clone()),
        ("Loại yêu cầu", withdrawal_kind(request.request_type).to_string()),
        ("Số tiền", format_vnd(request.amount)),
        ("Ngân hàng", request.vnpay_info.bank_code.clone()),
        (
            "Số tài khoản",
            format!(
                "{} ({})",
                request.vnpay_info.account_number, request.vnpay_info.account_name
            ),
        ),
        ("Gửi lúc", format_datetime(&request.created_at)),
    ];

    if let Some(response) = &request.landlord_response {
        fields.push(("Khấu trừ", format_vnd(response.deduction_amount)));
        if let Some(reason) = &response.deduction_reason {
            fields.push(("Lý do khấu trừ", reason.clone()));
        }
        fields.push((
            "Thực nhận",
            format_vnd(request.amount - response.deduction_amount),
        ));
    }
    if let Some(settlement) = &request.payment_processing {
        fields.push(("Mã giao dịch", settlement.transaction_ref.clone()));
        if let Some(completed_at) = &settlement.completed_at {
            fields.push(("Chuyển tiền lúc", format_datetime(completed_at)));
        }
    }

    WithdrawalDetailView {
        id: request.id.to_string(),
        badge: withdrawal_badge(request.status),
        fields,
        reason: request.reason.clone(),
        response_note: request
            .landlord_response
            .as_ref()
            .and_then(|r| r.response_note.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phongtro_core::Tone;
    use phongtro_testing::fixtures;

    #[test]
    fn test_rental_card_uses_classifier_and_locale_formats() {
        let card = present_rental_card(&fixtures::pending_rental("req-64fa0c2e9b"));
        assert_eq!(card.id, "req-64fa");
        assert_eq!(card.badge.label, "Chờ phản hồi");
        assert_eq!(card.badge.tone, Tone::Amber);
        assert_eq!(card.start_date, "01/09/2025");
        assert_eq!(card.rent, "3.500.000 ₫");
        assert!(card.unread);
    }

    #[test]
    fn test_rental_detail_shows_confirmation_progress() {
        let request = fixtures::accepted_rental("req-1", Some(fixtures::confirmation_confirmed()));
        let detail = present_rental_detail(&request);
        assert_eq!(detail.badge.label, "Đã chấp nhận");
        assert_eq!(detail.badge.sub_label, Some("Chờ thanh toán"));
        assert_eq!(detail.response_message.as_deref(), Some("Hẹn gặp bạn ngày nhận phòng"));
    }

    #[test]
    fn test_withdrawal_detail_computes_net_payout() {
        let mut request = fixtures::pending_withdrawal("wd-1", 4_200_000);
        request.landlord_response = Some(phongtro_types::LandlordResponse {
            deduction_amount: 200_000,
            deduction_reason: Some("Nợ tiền điện".to_string()),
            response_note: None,
        });
        let detail = present_withdrawal_detail(&request);
        let net = detail
            .fields
            .iter()
            .find(|(label, _)| *label == "Thực nhận")
            .unwrap();
        assert_eq!(net.1, "4.000.000 ₫");
    }
}
