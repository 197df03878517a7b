use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use phongtro_core::forms::{AcceptForm, ApprovalForm, RejectForm};
use phongtro_core::{ActiveModal, REJECT_REASONS, RentalInbox, WithdrawalInbox, WithdrawalModal};
use phongtro_sdk::{Client, RentalsHandle, WithdrawalsHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Rentals,
    Withdrawals,
}

/// Accept-form input buffers; dates are typed as YYYY-MM-DD.
#[derive(Default)]
pub struct AcceptFormState {
    pub message: String,
    pub start_date: String,
    pub end_date: String,
    pub field: usize,
}

impl AcceptFormState {
    const FIELDS: usize = 3;

    fn active_buffer(&mut self) -> &mut String {
        match self.field {
            0 => &mut self.message,
            1 => &mut self.start_date,
            _ => &mut self.end_date,
        }
    }
}

#[derive(Default)]
pub struct RejectFormState {
    pub reason_index: usize,
    pub note: String,
}

/// Approve-form input buffers; the deduction only accepts digits.
#[derive(Default)]
pub struct ApproveFormState {
    pub deduction: String,
    pub reason: String,
    pub note: String,
    pub field: usize,
}

impl ApproveFormState {
    const FIELDS: usize = 3;

    fn active_buffer(&mut self) -> &mut String {
        match self.field {
            0 => &mut self.deduction,
            1 => &mut self.reason,
            _ => &mut self.note,
        }
    }
}

pub struct App {
    pub tab: Tab,
    pub rentals: RentalInbox<RentalsHandle>,
    pub withdrawals: WithdrawalInbox<WithdrawalsHandle>,
    pub rental_cursor: usize,
    pub withdrawal_cursor: usize,
    pub accept_form: AcceptFormState,
    pub reject_form: RejectFormState,
    pub approve_form: ApproveFormState,
    pub withdrawal_note: String,
    /// Input problems the controllers cannot see (unparsable dates/amounts).
    pub input_error: Option<String>,
    /// Transient confirmation line after a successful transition.
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(client: &Client) -> Self {
        Self {
            tab: Tab::Rentals,
            rentals: RentalInbox::new(client.rentals()),
            withdrawals: WithdrawalInbox::new(client.withdrawals()),
            rental_cursor: 0,
            withdrawal_cursor: 0,
            accept_form: AcceptFormState::default(),
            reject_form: RejectFormState::default(),
            approve_form: ApproveFormState::default(),
            withdrawal_note: String::new(),
            input_error: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn refresh(&mut self) {
        let _ = self.rentals.refresh();
        let _ = self.withdrawals.refresh();
        self.clamp_cursors();
    }

    /// What the open modal's error region should show.
    pub fn modal_error(&self) -> Option<String> {
        if let Some(input_error) = &self.input_error {
            return Some(input_error.clone());
        }
        match self.tab {
            Tab::Rentals => self.rentals.last_error().map(str::to_string),
            Tab::Withdrawals => self.withdrawals.last_error().map(str::to_string),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let modal_open = match self.tab {
            Tab::Rentals => self.rentals.modal() != ActiveModal::None,
            Tab::Withdrawals => self.withdrawals.modal() != WithdrawalModal::None,
        };

        if modal_open {
            self.on_modal_key(key);
        } else {
            self.on_list_key(key);
        }
    }

    fn on_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.tab = match self.tab {
                    Tab::Rentals => Tab::Withdrawals,
                    Tab::Withdrawals => Tab::Rentals,
                };
            }
            KeyCode::Char('r') => {
                self.status = None;
                self.refresh();
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Enter => self.open_details(),
            KeyCode::Char('a') => self.open_action_modal(true),
            KeyCode::Char('x') => self.open_action_modal(false),
            _ => {}
        }
    }

    fn on_modal_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.input_error = None;
            match self.tab {
                Tab::Rentals => self.rentals.close_modal(),
                Tab::Withdrawals => self.withdrawals.close_modal(),
            }
            return;
        }

        match self.tab {
            Tab::Rentals => match self.rentals.modal() {
                ActiveModal::Details => {
                    if key.code == KeyCode::Enter {
                        self.rentals.close_modal();
                    }
                }
                ActiveModal::Accept => self.on_accept_key(key),
                ActiveModal::Reject => self.on_reject_key(key),
                ActiveModal::None => {}
            },
            Tab::Withdrawals => match self.withdrawals.modal() {
                WithdrawalModal::Details => {
                    if key.code == KeyCode::Enter {
                        self.withdrawals.close_modal();
                    }
                }
                WithdrawalModal::Approve => self.on_approve_key(key),
                WithdrawalModal::Reject => self.on_withdrawal_reject_key(key),
                WithdrawalModal::None => {}
            },
        }
    }

    fn on_accept_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.accept_form.field = (self.accept_form.field + 1) % AcceptFormState::FIELDS;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.accept_form.field =
                    (self.accept_form.field + AcceptFormState::FIELDS - 1) % AcceptFormState::FIELDS;
            }
            KeyCode::Char(c) => {
                self.input_error = None;
                self.accept_form.active_buffer().push(c);
            }
            KeyCode::Backspace => {
                self.input_error = None;
                self.accept_form.active_buffer().pop();
            }
            KeyCode::Enter => self.submit_accept(),
            _ => {}
        }
    }

    fn submit_accept(&mut self) {
        let start_date = match parse_date(&self.accept_form.start_date) {
            Ok(date) => date,
            Err(err) => {
                self.input_error = Some(err);
                return;
            }
        };
        let end_date = match parse_date(&self.accept_form.end_date) {
            Ok(date) => date,
            Err(err) => {
                self.input_error = Some(err);
                return;
            }
        };

        let form = AcceptForm {
            response_message: self.accept_form.message.clone(),
            start_date,
            end_date,
        };
        if self.rentals.confirm_accept(&form).is_ok() {
            self.status = Some("Đã chấp nhận yêu cầu thuê".to_string());
            self.accept_form = AcceptFormState::default();
            self.clamp_cursors();
        }
    }

    fn on_reject_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                self.reject_form.reason_index = (self.reject_form.reason_index
                    + REJECT_REASONS.len()
                    - 1)
                    % REJECT_REASONS.len();
            }
            KeyCode::Right => {
                self.reject_form.reason_index =
                    (self.reject_form.reason_index + 1) % REJECT_REASONS.len();
            }
            KeyCode::Char(c) => {
                self.input_error = None;
                self.reject_form.note.push(c);
            }
            KeyCode::Backspace => {
                self.reject_form.note.pop();
            }
            KeyCode::Enter => self.submit_reject(),
            _ => {}
        }
    }

    fn submit_reject(&mut self) {
        let form = RejectForm {
            selected_reason: REJECT_REASONS[self.reject_form.reason_index].to_string(),
            note: self.reject_form.note.clone(),
        };
        if self.rentals.confirm_reject(&form).is_ok() {
            self.status = Some("Đã từ chối yêu cầu thuê".to_string());
            self.reject_form = RejectFormState::default();
            self.clamp_cursors();
        }
    }

    fn on_approve_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.approve_form.field = (self.approve_form.field + 1) % ApproveFormState::FIELDS;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.approve_form.field = (self.approve_form.field + ApproveFormState::FIELDS - 1)
                    % ApproveFormState::FIELDS;
            }
            KeyCode::Char(c) => {
                if self.approve_form.field == 0 && !c.is_ascii_digit() {
                    return;
                }
                self.input_error = None;
                self.approve_form.active_buffer().push(c);
            }
            KeyCode::Backspace => {
                self.input_error = None;
                self.approve_form.active_buffer().pop();
            }
            KeyCode::Enter => self.submit_approve(),
            _ => {}
        }
    }

    fn submit_approve(&mut self) {
        let deduction = if self.approve_form.deduction.is_empty() {
            0
        } else {
            match self.approve_form.deduction.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    self.input_error = Some("Số tiền khấu trừ không hợp lệ".to_string());
                    return;
                }
            }
        };

        let form = ApprovalForm {
            deduction_amount: deduction,
            deduction_reason: self.approve_form.reason.clone(),
            response_note: self.approve_form.note.clone(),
        };
        if self.withdrawals.confirm_approve(&form).is_ok() {
            self.status = Some("Đã duyệt yêu cầu rút tiền".to_string());
            self.approve_form = ApproveFormState::default();
            self.clamp_cursors();
        }
    }

    fn on_withdrawal_reject_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.input_error = None;
                self.withdrawal_note.push(c);
            }
            KeyCode::Backspace => {
                self.withdrawal_note.pop();
            }
            KeyCode::Enter => {
                let note = self.withdrawal_note.clone();
                if self.withdrawals.confirm_reject(&note).is_ok() {
                    self.status = Some("Đã từ chối yêu cầu rút tiền".to_string());
                    self.withdrawal_note.clear();
                    self.clamp_cursors();
                }
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.tab {
            Tab::Rentals => (&mut self.rental_cursor, self.rentals.requests().len()),
            Tab::Withdrawals => (
                &mut self.withdrawal_cursor,
                self.withdrawals.requests().len(),
            ),
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        let next = cursor.saturating_add_signed(delta);
        *cursor = next.min(len - 1);
    }

    fn clamp_cursors(&mut self) {
        let rentals = self.rentals.requests().len();
        if self.rental_cursor >= rentals {
            self.rental_cursor = rentals.saturating_sub(1);
        }
        let withdrawals = self.withdrawals.requests().len();
        if self.withdrawal_cursor >= withdrawals {
            self.withdrawal_cursor = withdrawals.saturating_sub(1);
        }
    }

    fn open_details(&mut self) {
        self.input_error = None;
        self.status = None;
        match self.tab {
            Tab::Rentals => {
                if let Some(request) = self.rentals.requests().get(self.rental_cursor) {
                    let id = request.id.clone();
                    let _ = self.rentals.view_details(&id);
                }
            }
            Tab::Withdrawals => {
                if let Some(request) = self.withdrawals.requests().get(self.withdrawal_cursor) {
                    let id = request.id.clone();
                    let _ = self.withdrawals.view_details(&id);
                }
            }
        }
    }

    /// `accept == true` opens accept/approve, otherwise reject.
    fn open_action_modal(&mut self, accept: bool) {
        self.input_error = None;
        self.status = None;
        match self.tab {
            Tab::Rentals => {
                let Some(request) = self.rentals.requests().get(self.rental_cursor) else {
                    return;
                };
                let id = request.id.clone();
                if accept {
                    self.accept_form = AcceptFormState::default();
                    self.rentals.begin_accept(&id);
                } else {
                    self.reject_form = RejectFormState::default();
                    self.rentals.begin_reject(&id);
                }
            }
            Tab::Withdrawals => {
                let Some(request) = self.withdrawals.requests().get(self.withdrawal_cursor) else {
                    return;
                };
                let id = request.id.clone();
                if accept {
                    self.approve_form = ApproveFormState::default();
                    self.withdrawals.begin_approve(&id);
                } else {
                    self.withdrawal_note.clear();
                    self.withdrawals.begin_reject(&id);
                }
            }
        }
    }
}

fn parse_date(text: &str) -> Result<Option<NaiveDate>, String> {
    let text = text.trim();
    if text.is_empty() {
        // Left for form validation to report as missing.
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("Ngày '{}' không hợp lệ (YYYY-MM-DD)", text))
}
