//! Controller behavior against scripted collaborators: modal exclusivity,
//! blocked submissions, pending-list removal, and error surfacing.

use chrono::NaiveDate;
use phongtro_core::{
    AcceptForm, ActiveModal, ApprovalForm, OTHER_REASON, RejectForm, RentalInbox, SubmitError,
    WithdrawalHistory, WithdrawalInbox, WithdrawalModal,
};
use phongtro_testing::fixtures;
use phongtro_testing::{MockRentalOps, MockWithdrawalOps};
use phongtro_types::{RentalStatus, RequestId, WithdrawalId};

fn accept_form() -> AcceptForm {
    AcceptForm {
        response_message: "Hẹn gặp bạn ngày nhận phòng".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 9, 1),
        end_date: None,
    }
}

#[test]
fn test_refresh_loads_pending_requests() {
    let mock = MockRentalOps::new(vec![
        fixtures::pending_rental("req-1"),
        fixtures::pending_rental("req-2"),
    ]);
    let mut inbox = RentalInbox::new(&mock);

    inbox.refresh().unwrap();
    assert_eq!(inbox.requests().len(), 2);
    assert_eq!(inbox.modal(), ActiveModal::None);
}

#[test]
fn test_view_details_fetches_and_opens_modal() {
    let mock = MockRentalOps::new(vec![fixtures::pending_rental("req-1")]);
    let mut inbox = RentalInbox::new(&mock);
    inbox.refresh().unwrap();

    inbox.view_details(&RequestId::new("req-1")).unwrap();
    assert_eq!(inbox.modal(), ActiveModal::Details);
    assert_eq!(inbox.selected().unwrap().id.as_str(), "req-1");
    assert!(mock.calls().contains(&"fetch_detail:req-1".to_string()));
}

#[test]
fn test_view_details_failure_is_surfaced() {
    let mut mock = MockRentalOps::new(vec![fixtures::pending_rental("req-1")]);
    mock.fail_detail = true;
    let mut inbox = RentalInbox::new(&mock);
    inbox.refresh().unwrap();

    let result = inbox.view_details(&RequestId::new("req-1"));
    assert!(result.is_err());
    assert_eq!(inbox.modal(), ActiveModal::None);
    assert!(inbox.last_error().unwrap().contains("connection refused"));
}

#[test]
fn test_begin_accept_uses_loaded_list_without_refetch() {
    let mock = MockRentalOps::new(vec![fixtures::pending_rental("req-1")]);
    let mut inbox = RentalInbox::new(&mock);
    inbox.refresh().unwrap();

    assert!(inbox.begin_accept(&RequestId::new("req-1")));
    assert_eq!(inbox.modal(), ActiveModal::Accept);
    assert_eq!(inbox.selected().unwrap().id.as_str(), "req-1");
    assert!(!mock.calls().iter().any(|c| c.starts_with("fetch_detail")));
}

#[test]
fn test_begin_accept_refuses_unknown_and_non_pending() {
    let accepted = fixtures::accepted_rental("req-2", None);
    let mock = MockRentalOps::new(vec![fixtures::pending_rental("req-1"), accepted]);
    let mut inbox = RentalInbox::new(&mock);
    inbox.refresh().unwrap();

    assert!(!inbox.begin_accept(&RequestId::new("missing")));
    assert!(!inbox.begin_accept(&RequestId::new("req-2")));
    assert_eq!(inbox.modal(), ActiveModal::None);
}

#[test]
fn test_confirm_accept_blocked_by_validation_issues_no_call() {
    let mock = MockRentalOps::new(vec![fixtures::pending_rental("req-1")]);
    let mut inbox = RentalInbox::new(&mock);
    inbox.refresh().unwrap();
    inbox.begin_accept(&RequestId::new("req-1"));

    let form = AcceptForm {
        response_message: String::new(),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        end_date: None,
    };
    let result = inbox.confirm_accept(&form);
    assert!(matches!(result, Err(SubmitError::Form(_))));
    assert_eq!(inbox.modal(), ActiveModal::Accept);
    assert!(!mock.calls().iter().any(|c| c.starts_with("accept")));
    assert!(inbox.last_error().is_some());
}

#[test]
fn test_confirm_accept_success_removes_from_pending_and_closes() {
    let mock = MockRentalOps::new(vec![
        fixtures::pending_rental("req-1"),
        fixtures::pending_rental("req-2"),
    ]);
    let mut inbox = RentalInbox::new(&mock);
    inbox.refresh().unwrap();
    inbox.begin_accept(&RequestId::new("req-1"));

    inbox.confirm_accept(&accept_form()).unwrap();

    // Rent comes from the room's fixed pricing.
    assert!(mock.calls().contains(&"accept:req-1:3500000".to_string()));
    assert_eq!(inbox.requests().len(), 1);
    assert_eq!(inbox.requests()[0].id.as_str(), "req-2");
    assert_eq!(inbox.modal(), ActiveModal::None);
    assert!(inbox.selected().is_none());
    assert!(inbox.last_error().is_none());
}

#[test]
fn test_confirm_accept_failure_keeps_modal_open_for_retry() {
    let mut mock = MockRentalOps::new(vec![fixtures::pending_rental("req-1")]);
    mock.fail_accept = true;
    let mut inbox = RentalInbox::new(&mock);
    inbox.refresh().unwrap();
    inbox.begin_accept(&RequestId::new("req-1"));

    let result = inbox.confirm_accept(&accept_form());
    assert!(matches!(result, Err(SubmitError::Op(_))));
    assert_eq!(inbox.modal(), ActiveModal::Accept);
    assert_eq!(inbox.requests().len(), 1);
    assert!(inbox.last_error().unwrap().contains("connection refused"));
    assert!(!inbox.is_submitting());
}

#[test]
fn test_confirm_reject_composes_canned_reason_message() {
    let mock = MockRentalOps::new(vec![fixtures::pending_rental("req-1")]);
    let mut inbox = RentalInbox::new(&mock);
    inbox.refresh().unwrap();
    inbox.begin_reject(&RequestId::new("req-1"));

    let form = RejectForm {
        selected_reason: "Phòng đã có người thuê".to_string(),
        note: String::new(),
    };
    inbox.confirm_reject(&form).unwrap();

    assert!(
        mock.calls()
            .contains(&"reject:req-1:Phòng đã có người thuê.".to_string())
    );
    assert!(inbox.requests().is_empty());
    assert_eq!(inbox.modal(), ActiveModal::None);
}

#[test]
fn test_confirm_reject_other_without_text_is_blocked() {
    let mock = MockRentalOps::new(vec![fixtures::pending_rental("req-1")]);
    let mut inbox = RentalInbox::new(&mock);
    inbox.refresh().unwrap();
    inbox.begin_reject(&RequestId::new("req-1"));

    let form = RejectForm {
        selected_reason: OTHER_REASON.to_string(),
        note: "  ".to_string(),
    };
    let result = inbox.confirm_reject(&form);
    assert!(matches!(result, Err(SubmitError::Form(_))));
    assert!(!mock.calls().iter().any(|c| c.starts_with("reject")));
}

#[test]
fn test_confirm_without_selection() {
    let mock = MockRentalOps::new(vec![]);
    let mut inbox = RentalInbox::new(&mock);

    let result = inbox.confirm_accept(&accept_form());
    assert!(matches!(result, Err(SubmitError::NoSelection)));
}

#[test]
fn test_close_modal_clears_selection_and_error() {
    let mut mock = MockRentalOps::new(vec![fixtures::pending_rental("req-1")]);
    mock.fail_accept = true;
    let mut inbox = RentalInbox::new(&mock);
    inbox.refresh().unwrap();
    inbox.begin_accept(&RequestId::new("req-1"));
    let _ = inbox.confirm_accept(&accept_form());

    inbox.close_modal();
    assert_eq!(inbox.modal(), ActiveModal::None);
    assert!(inbox.selected().is_none());
    assert!(inbox.last_error().is_none());
}

// ==========================================
// Withdrawals
// ==========================================

#[test]
fn test_approve_boundary_deduction_equal_to_amount() {
    let mock = MockWithdrawalOps::new(vec![fixtures::pending_withdrawal("wd-1", 4_200_000)], vec![]);
    let mut inbox = WithdrawalInbox::new(&mock);
    inbox.refresh().unwrap();
    inbox.begin_approve(&WithdrawalId::new("wd-1"));

    let form = ApprovalForm {
        deduction_amount: 4_200_000,
        deduction_reason: "Nợ tiền điện nước".to_string(),
        response_note: String::new(),
    };
    inbox.confirm_approve(&form).unwrap();

    assert!(mock.calls().contains(&"approve:wd-1:4200000".to_string()));
    assert!(inbox.requests().is_empty());
    assert_eq!(inbox.modal(), WithdrawalModal::None);
}

#[test]
fn test_approve_deduction_over_amount_issues_no_call() {
    let mock = MockWithdrawalOps::new(vec![fixtures::pending_withdrawal("wd-1", 4_200_000)], vec![]);
    let mut inbox = WithdrawalInbox::new(&mock);
    inbox.refresh().unwrap();
    inbox.begin_approve(&WithdrawalId::new("wd-1"));

    let form = ApprovalForm {
        deduction_amount: 4_200_001,
        deduction_reason: "Hư hỏng nội thất".to_string(),
        response_note: String::new(),
    };
    let result = inbox.confirm_approve(&form);
    assert!(matches!(result, Err(SubmitError::Form(_))));
    assert!(!mock.calls().iter().any(|c| c.starts_with("approve")));
    assert_eq!(inbox.requests().len(), 1);
    assert_eq!(inbox.modal(), WithdrawalModal::Approve);
}

#[test]
fn test_withdrawal_reject_requires_note() {
    let mock = MockWithdrawalOps::new(vec![fixtures::pending_withdrawal("wd-1", 1_000_000)], vec![]);
    let mut inbox = WithdrawalInbox::new(&mock);
    inbox.refresh().unwrap();
    inbox.begin_reject(&WithdrawalId::new("wd-1"));

    assert!(matches!(
        inbox.confirm_reject("  "),
        Err(SubmitError::Form(_))
    ));

    inbox.confirm_reject("Chưa đến hạn trả cọc").unwrap();
    assert!(
        mock.calls()
            .contains(&"reject:wd-1:Chưa đến hạn trả cọc".to_string())
    );
    assert!(inbox.requests().is_empty());
}

#[test]
fn test_history_cancel_only_pending_and_requires_refetch() {
    let mock = MockWithdrawalOps::new(
        vec![],
        vec![
            fixtures::pending_withdrawal("wd-1", 1_000_000),
            fixtures::cancelled_withdrawal("wd-2", 2_000_000),
        ],
    );
    let mut history = WithdrawalHistory::new(&mock);
    history.refresh().unwrap();

    // Terminal entries cannot be cancelled again.
    assert!(history.cancel(&WithdrawalId::new("wd-2")).is_err());
    assert!(!mock.calls().iter().any(|c| c.starts_with("cancel")));

    history.cancel(&WithdrawalId::new("wd-1")).unwrap();
    assert!(mock.calls().contains(&"cancel:wd-1".to_string()));

    // The history list updates only on an explicit refetch.
    assert_eq!(history.requests().len(), 2);
    history.refresh().unwrap();
    assert_eq!(history.requests().len(), 2);
}

#[test]
fn test_landlord_transition_does_not_touch_tenant_history() {
    // Same entity visible in both collections; approving from the inbox
    // must leave the independently-loaded history untouched.
    let entity = fixtures::pending_withdrawal("wd-1", 500_000);
    let mock = MockWithdrawalOps::new(vec![entity.clone()], vec![entity]);
    let mut inbox = WithdrawalInbox::new(&mock);
    let mut history = WithdrawalHistory::new(&mock);
    inbox.refresh().unwrap();
    history.refresh().unwrap();

    inbox.begin_approve(&WithdrawalId::new("wd-1"));
    inbox.confirm_approve(&ApprovalForm::default()).unwrap();

    assert!(inbox.requests().is_empty());
    assert_eq!(history.requests().len(), 1);
}

#[test]
fn test_unknown_status_entry_is_listed_but_never_actionable() {
    let mut odd = fixtures::pending_rental("req-1");
    odd.status = RentalStatus::Unknown;
    let mock = MockRentalOps::new(vec![odd]);
    let mut inbox = RentalInbox::new(&mock);
    inbox.refresh().unwrap();

    assert_eq!(inbox.requests().len(), 1);
    assert!(!inbox.begin_accept(&RequestId::new("req-1")));
    assert!(!inbox.begin_reject(&RequestId::new("req-1")));
}
