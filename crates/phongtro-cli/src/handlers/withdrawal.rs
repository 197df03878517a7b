use crate::presentation::{console, presenters};
use crate::types::OutputFormat;
use anyhow::{Result, anyhow};
use phongtro_core::forms::{ApprovalForm, CreateWithdrawalForm};
use phongtro_core::{WithdrawalHistory, WithdrawalOps};
use phongtro_sdk::Client;
use phongtro_types::{WithdrawalId, WithdrawalRequest, WithdrawalType};

pub fn pending(client: &Client, format: OutputFormat) -> Result<()> {
    let requests = client.withdrawals().pending()?;
    render_list(&requests, format)
}

pub fn mine(client: &Client, format: OutputFormat) -> Result<()> {
    let mut history = WithdrawalHistory::new(client.withdrawals());
    history.refresh()?;
    render_list(history.requests(), format)
}

fn render_list(requests: &[WithdrawalRequest], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(requests)?),
        OutputFormat::Plain => {
            console::render_withdrawal_list(&presenters::present_withdrawal_list(requests))
        }
    }
    Ok(())
}

pub fn show(client: &Client, id: &str, format: OutputFormat) -> Result<()> {
    let request = client.withdrawals().get(&WithdrawalId::new(id))?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&request)?),
        OutputFormat::Plain => {
            console::render_withdrawal_detail(&presenters::present_withdrawal_detail(&request))
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn create(
    client: &Client,
    amount: i64,
    request_type: WithdrawalType,
    reason: String,
    bank: String,
    account: String,
    holder: String,
    format: OutputFormat,
) -> Result<()> {
    let form = CreateWithdrawalForm {
        amount,
        request_type: Some(request_type),
        reason,
        bank_code: bank,
        account_number: account,
        account_name: holder,
    };
    let payload = form.validate()?;

    let request = client.withdrawals().create(&payload)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&request)?),
        OutputFormat::Plain => println!(
            "Created withdrawal request {} ({})",
            request.id,
            phongtro_core::format::format_vnd(request.amount)
        ),
    }
    Ok(())
}

pub fn approve(
    client: &Client,
    id: &str,
    deduction: i64,
    deduction_reason: Option<String>,
    note: Option<String>,
) -> Result<()> {
    let id = WithdrawalId::new(id);
    let withdrawals = client.withdrawals();

    // The deduction is validated against the requested amount.
    let request = withdrawals.get(&id)?;
    if !request.is_actionable() {
        return Err(anyhow!("withdrawal request {} is no longer pending", id));
    }

    let form = ApprovalForm {
        deduction_amount: deduction,
        deduction_reason: deduction_reason.unwrap_or_default(),
        response_note: note.unwrap_or_default(),
    };
    let payload = form.validate(request.amount)?;
    let net = request.amount - payload.deduction_amount;

    withdrawals.approve(&id, &payload)?;
    println!(
        "Approved {}: payout {}",
        id,
        phongtro_core::format::format_vnd(net)
    );
    Ok(())
}

pub fn reject(client: &Client, id: &str, note: &str) -> Result<()> {
    let id = WithdrawalId::new(id);
    let note = note.trim();
    if note.is_empty() {
        return Err(anyhow!("a response note is required"));
    }

    client.withdrawals().reject(&id, note)?;
    println!("Rejected withdrawal request {}", id);
    Ok(())
}

pub fn cancel(client: &Client, id: &str) -> Result<()> {
    let id = WithdrawalId::new(id);

    // The history controller enforces the only-pending rule before any
    // call goes out.
    let mut history = WithdrawalHistory::new(client.withdrawals());
    history.refresh()?;
    history.cancel(&id)?;

    println!("Cancelled withdrawal request {}", id);
    Ok(())
}
