use super::SubmitError;
use crate::error::OpError;
use crate::forms::{AcceptForm, RejectForm};
use crate::ops::RentalOps;
use phongtro_types::{RentalRequest, RequestId};

/// Which modal the rental inbox currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveModal {
    #[default]
    None,
    Details,
    Accept,
    Reject,
}

/// Landlord inbox over pending rental requests.
///
/// Holds the pending collection and drives the details/accept/reject modal
/// flow against an injected backend collaborator.
pub struct RentalInbox<O> {
    ops: O,
    requests: Vec<RentalRequest>,
    selected: Option<RentalRequest>,
    modal: ActiveModal,
    submitting: bool,
    last_error: Option<String>,
}

impl<O: RentalOps> RentalInbox<O> {
    pub fn new(ops: O) -> Self {
        Self {
            ops,
            requests: Vec::new(),
            selected: None,
            modal: ActiveModal::None,
            submitting: false,
            last_error: None,
        }
    }

    pub fn requests(&self) -> &[RentalRequest] {
        &self.requests
    }

    pub fn selected(&self) -> Option<&RentalRequest> {
        self.selected.as_ref()
    }

    pub fn modal(&self) -> ActiveModal {
        self.modal
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Last surfaced failure, kept until the next successful operation or
    /// `close_modal`.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the collection from the backend.
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

    /// Fetch full detail and open the details modal.
    pub fn view_details(&mut self, id: &RequestId) -> Result<(), OpError> {
        match self.ops.fetch_detail(id) {
            Ok(detail) => {
                self.selected = Some(detail);
                self.modal = ActiveModal::Details;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Open the accept modal for a request from the loaded list (no
    /// refetch). Returns false for unknown ids and non-pending requests.
    pub fn begin_accept(&mut self, id: &RequestId) -> bool {
        self.begin(id, ActiveModal::Accept)
    }

    /// Open the reject modal, same rules as [`Self::begin_accept`].
    pub fn begin_reject(&mut self, id: &RequestId) -> bool {
        self.begin(id, ActiveModal::Reject)
    }

    fn begin(&mut self, id: &RequestId, modal: ActiveModal) -> bool {
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

    /// Validate and submit the accept transition. Rent and deposit are
    /// taken from the selected request's room, never from user input.
    pub fn confirm_accept(&mut self, form: &AcceptForm) -> Result<(), SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let selected = self.selected.as_ref().ok_or(SubmitError::NoSelection)?;

        let payload = match form.validate(&selected.room) {
            Ok(payload) => payload,
            Err(err) => {
                self.last_error = Some(err.to_string());
                return Err(err.into());
            }
        };

        let id = selected.id.clone();
        self.submitting = true;
        let result = self.ops.accept(&id, &payload);
        self.submitting = false;

        self.finish_transition(&id, result)
    }

    /// Validate and submit the reject transition.
    pub fn confirm_reject(&mut self, form: &RejectForm) -> Result<(), SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let selected = self.selected.as_ref().ok_or(SubmitError::NoSelection)?;

        let message = match form.validate() {
            Ok(message) => message,
            Err(err) => {
                self.last_error = Some(err.to_string());
                return Err(err.into());
            }
        };

        let id = selected.id.clone();
        self.submitting = true;
        let result = self.ops.reject(&id, &message);
        self.submitting = false;

        self.finish_transition(&id, result)
    }

    /// Close whatever modal is open and clear selection and error.
    pub fn close_modal(&mut self) {
        self.modal = ActiveModal::None;
        self.selected = None;
        self.last_error = None;
    }

    /// On success the entity leaves the pending view and the modal closes;
    /// on failure the modal stays open for a manual retry.
    fn finish_transition(&mut self, id: &RequestId, result: Result<(), OpError>) -> Result<(), SubmitError> {
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
