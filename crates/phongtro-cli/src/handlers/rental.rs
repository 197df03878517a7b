use crate::presentation::{console, presenters};
use crate::types::OutputFormat;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use phongtro_core::forms::{AcceptForm, CreateRentalForm, RejectForm};
use phongtro_core::{OTHER_REASON, REJECT_REASONS, RentalOps};
use phongtro_sdk::Client;
use phongtro_types::{RentalRequest, RequestId, RoomId};

pub fn list(
    client: &Client,
    status: Option<&str>,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let requests = client.rentals().list(status, limit)?;
    render_list(&requests, format)
}

pub fn mine(client: &Client, format: OutputFormat) -> Result<()> {
    let requests = client.rentals().mine()?;
    render_list(&requests, format)
}

fn render_list(requests: &[RentalRequest], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(requests)?),
        OutputFormat::Plain => {
            console::render_rental_list(&presenters::present_rental_list(requests))
        }
    }
    Ok(())
}

pub fn show(client: &Client, id: &str, format: OutputFormat) -> Result<()> {
    let request = client.rentals().get(&RequestId::new(id))?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&request)?),
        OutputFormat::Plain => {
            console::render_rental_detail(&presenters::present_rental_detail(&request))
        }
    }
    Ok(())
}

pub fn accept(
    client: &Client,
    id: &str,
    message: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> Result<()> {
    let id = RequestId::new(id);
    let rentals = client.rentals();

    // The room's fixed pricing goes into the payload, so the full record
    // is fetched first.
    let request = rentals.get(&id)?;
    if !request.is_actionable() {
        return Err(anyhow!("request {} is no longer pending", id));
    }

    let form = AcceptForm {
        response_message: message,
        start_date: Some(start_date),
        end_date,
    };
    let payload = form.validate(&request.room)?;
    rentals.accept(&id, &payload)?;

    println!("Accepted {} ({})", id, request.tenant.full_name);
    println!(
        "Rent {} / deposit {} per the room listing.",
        phongtro_core::format::format_vnd(payload.rent),
        phongtro_core::format::format_vnd(payload.deposit),
    );
    Ok(())
}

pub fn reject(client: &Client, id: &str, reason: Option<&str>, note: Option<&str>) -> Result<()> {
    let id = RequestId::new(id);

    let selected_reason = match reason {
        Some(reason) => {
            if !REJECT_REASONS.contains(&reason) {
                return Err(anyhow!(
                    "unknown reason '{}'; expected one of: {}",
                    reason,
                    REJECT_REASONS.join(", ")
                ));
            }
            reason.to_string()
        }
        // No canned reason means the note is the reason.
        None => OTHER_REASON.to_string(),
    };

    let form = RejectForm {
        selected_reason,
        note: note.unwrap_or_default().to_string(),
    };
    let message = form.validate()?;

    client.rentals().reject(&id, &message)?;
    println!("Rejected {}: {}", id, message);
    Ok(())
}

pub fn cancel(client: &Client, id: &str) -> Result<()> {
    let id = RequestId::new(id);
    client.rentals().cancel(&id)?;
    println!("Withdrew request {}", id);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn create(
    client: &Client,
    room: &str,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    guests: u32,
    rent: Option<i64>,
    message: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let form = CreateRentalForm {
        start_date: Some(start_date),
        end_date,
        guest_count: guests,
        proposed_rent: rent,
        message: message.unwrap_or_default(),
    };
    let payload = form.validate()?;

    let request = client.rentals().create(&RoomId::new(room), &payload)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&request)?),
        OutputFormat::Plain => println!("Created request {} for room {}", request.id, room),
    }
    Ok(())
}
