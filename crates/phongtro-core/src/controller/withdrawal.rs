use super::SubmitError;
use crate::error::OpError;
use crate::forms::ApprovalForm;
use crate::ops::WithdrawalOps;
use phongtro_types::{WithdrawalId, WithdrawalRequest};

/// Which modal the withdrawal inbox currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WithdrawalModal {
    #[default]
    None,
    Details,
    Approve,
    Reject,
}

/// Landlord inbox over pending withdrawal requests.
pub struct WithdrawalInbox<O> {
    ops: O,
    requests: Vec<WithdrawalRequest>,
    selected: Option<WithdrawalRequest>,
    modal: WithdrawalModal,
    submitting: bool,
    last_error: Option<String>,
}

impl<O: WithdrawalOps> WithdrawalInbox<O> {
    pub fn new(ops: O) -> Self {
        Self {
            ops,
            requests: Vec::new(),
            selected: None,
            modal: WithdrawalModal::None,
            submitting: false,
            last_error: None,
        }
    }

    pub fn requests(&self) -> &[WithdrawalRequest] {
        &self.requests
    }

    pub fn selected(&self) -> Option<&WithdrawalRequest> {
        self.selected.as_ref()
    }

    pub fn modal(&self) -> WithdrawalModal {
        self.modal
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn refresh(&mut self) -> Result<(), OpError> {
        match self.ops.fetch_pending() {
            Ok(requests) => {
                self.requests = requests;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn view_details(&mut self, id: &WithdrawalId) -> Result<(), OpError> {
        match self.ops.fetch_detail(id) {
            Ok(detail) => {
                self.selected = Some(detail);
                self.modal = WithdrawalModal::Details;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn begin_approve(&mut self, id: &WithdrawalId) -> bool {
        self.begin(id, WithdrawalModal::Approve)
    }

    pub fn begin_reject(&mut self, id: &WithdrawalId) -> bool {
        self.begin(id, WithdrawalModal::Reject)
    }

    fn begin(&mut self, id: &WithdrawalId, modal: WithdrawalModal) -> bool {
        let Some(request) = self.requests.iter().find(|r| &r.id == id) else {
            return false;
        };
        if !request.is_actionable() {
            return false;
        }
        self.selected = Some(request.clone());
        self.modal = modal;
        true
    }

    /// Validate the deduction against the requested amount, then submit.
    pub fn confirm_approve(&mut self, form: &ApprovalForm) -> Result<(), SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let selected = self.selected.as_ref().ok_or(SubmitError::NoSelection)?;

        let payload = match form.validate(selected.amount) {
            Ok(payload) => payload,
            Err(err) => {
                self.last_error = Some(err.to_string());
                return Err(err.into());
            }
        };

        let id = selected.id.clone();
        self.submitting = true;
        let result = self.ops.approve(&id, &payload);
        self.submitting = false;

        self.finish_transition(&id, result)
    }

    /// Reject with a mandatory note explaining the decision.
    pub fn confirm_reject(&mut self, note: &str) -> Result<(), SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let selected = self.selected.as_ref().ok_or(SubmitError::NoSelection)?;

        let note = note.trim();
        if note.is_empty() {
            let err = crate::forms::FormError::MissingResponseNote;
            self.last_error = Some(err.to_string());
            return Err(err.into());
        }

        let id = selected.id.clone();
        self.submitting = true;
        let result = self.ops.reject(&id, note);
        self.submitting = false;

        self.finish_transition(&id, result)
    }

    pub fn close_modal(&mut self) {
        self.modal = WithdrawalModal::None;
        self.selected = None;
        self.last_error = None;
    }

    fn finish_transition(
        &mut self,
        id: &WithdrawalId,
        result: Result<(), OpError>,
    ) -> Result<(), SubmitError> {
        match result {
            Ok(()) => {
                self.requests.retain(|r| &r.id != id);
                self.close_modal();
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}

/// Tenant view over their own withdrawal requests.
///
/// A separate collection from the landlord inbox: transitions made there do
/// not update this list; it changes only on an explicit `refresh`.
pub struct WithdrawalHistory<O> {
    ops: O,
    requests: Vec<WithdrawalRequest>,
    last_error: Option<String>,
}

impl<O: WithdrawalOps> WithdrawalHistory<O> {
    pub fn new(ops: O) -> Self {
        Self {
            ops,
            requests: Vec::new(),
            last_error: None,
        }
    }

    pub fn requests(&self) -> &[WithdrawalRequest] {
        &self.requests
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn refresh(&mut self) -> Result<(), OpError> {
        match self.ops.fetch_mine() {
            Ok(requests) => {
                self.requests = requests;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Cancel one of the tenant's own pending requests.
    ///
    /// The list itself is not touched on success; the caller refetches,
    /// matching the rest of the lifecycle (lists update by refetch, not by
    /// proactive cross-updates).
    pub fn cancel(&mut self, id: &WithdrawalId) -> Result<(), SubmitError> {
        let Some(request) = self.requests.iter().find(|r| &r.id == id) else {
            let err = OpError::NotFound(format!("withdrawal request {}", id));
            self.last_error = Some(err.to_string());
            return Err(err.into());
        };
        if !request.is_actionable() {
            let err = OpError::Api("only pending requests can be cancelled".to_string());
            self.last_error = Some(err.to_string());
            return Err(err.into());
        }

        match self.ops.cancel(id) {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}
