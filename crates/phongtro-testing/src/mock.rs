//! Scripted in-memory collaborators.
//!
//! Each mock serves entities from a fixed collection, records every call,
//! and can be told to fail specific operations. Controllers are handed a
//! shared reference so tests keep access to the call log.

use phongtro_core::forms::{AcceptPayload, ApprovePayload};
use phongtro_core::{OpError, RentalOps, WithdrawalOps};
use phongtro_types::{RentalRequest, RequestId, WithdrawalId, WithdrawalRequest};
use std::cell::RefCell;

fn backend_down() -> OpError {
    OpError::Transport("connection refused".to_string())
}

pub struct MockRentalOps {
    pub pending: Vec<RentalRequest>,
    pub fail_fetch: bool,
    pub fail_detail: bool,
    pub fail_accept: bool,
    pub fail_reject: bool,
    calls: RefCell<Vec<String>>,
}

impl MockRentalOps {
    pub fn new(pending: Vec<RentalRequest>) -> Self {
        Self {
            pending,
            fail_fetch: false,
            fail_detail: false,
            fail_accept: false,
            fail_reject: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl RentalOps for MockRentalOps {
    fn fetch_pending(&self) -> Result<Vec<RentalRequest>, OpError> {
        self.record("fetch_pending".to_string());
        if self.fail_fetch {
            return Err(backend_down());
        }
        Ok(self.pending.clone())
    }

    fn fetch_detail(&self, id: &RequestId) -> Result<RentalRequest, OpError> {
        self.record(format!("fetch_detail:{}", id));
        if self.fail_detail {
            return Err(backend_down());
        }
        self.pending
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| OpError::NotFound(format!("rental request {}", id)))
    }

    fn accept(&self, id: &RequestId, payload: &AcceptPayload) -> Result<(), OpError> {
        self.record(format!("accept:{}:{}", id, payload.rent));
        if self.fail_accept {
            return Err(backend_down());
        }
        Ok(())
    }

    fn reject(&self, id: &RequestId, message: &str) -> Result<(), OpError> {
        self.record(format!("reject:{}:{}", id, message));
        if self.fail_reject {
            return Err(backend_down());
        }
        Ok(())
    }
}

pub struct MockWithdrawalOps {
    pub pending: Vec<WithdrawalRequest>,
    pub mine: Vec<WithdrawalRequest>,
    pub fail_fetch: bool,
    pub fail_approve: bool,
    pub fail_reject: bool,
    pub fail_cancel: bool,
    calls: RefCell<Vec<String>>,
}

impl MockWithdrawalOps {
    pub fn new(pending: Vec<WithdrawalRequest>, mine: Vec<WithdrawalRequest>) -> Self {
        Self {
            pending,
            mine,
            fail_fetch: false,
            fail_approve: false,
            fail_reject: false,
            fail_cancel: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl WithdrawalOps for MockWithdrawalOps {
    fn fetch_pending(&self) -> Result<Vec<WithdrawalRequest>, OpError> {
        self.record("fetch_pending".to_string());
        if self.fail_fetch {
            return Err(backend_down());
        }
        Ok(self.pending.clone())
    }

    fn fetch_mine(&self) -> Result<Vec<WithdrawalRequest>, OpError> {
        self.record("fetch_mine".to_string());
        if self.fail_fetch {
            return Err(backend_down());
        }
        Ok(self.mine.clone())
    }

    fn fetch_detail(&self, id: &WithdrawalId) -> Result<WithdrawalRequest, OpError> {
        self.record(format!("fetch_detail:{}", id));
        self.pending
            .iter()
            .chain(self.mine.iter())
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| OpError::NotFound(format!("withdrawal request {}", id)))
    }

    fn approve(&self, id: &WithdrawalId, payload: &ApprovePayload) -> Result<(), OpError> {
        self.record(format!("approve:{}:{}", id, payload.deduction_amount));
        if self.fail_approve {
            return Err(backend_down());
        }
        Ok(())
    }

    fn reject(&self, id: &WithdrawalId, note: &str) -> Result<(), OpError> {
        self.record(format!("reject:{}:{}", id, note));
        if self.fail_reject {
            return Err(backend_down());
        }
        Ok(())
    }

    fn cancel(&self, id: &WithdrawalId) -> Result<(), OpError> {
        self.record(format!("cancel:{}", id));
        if self.fail_cancel {
            return Err(backend_down());
        }
        Ok(())
    }
}
