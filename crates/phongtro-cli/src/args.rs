use crate::types::OutputFormat;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "phongtro")]
#[command(about = "Manage rental requests and deposit withdrawals from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Access token (overrides config)
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Trace backend requests to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config scaffold
    Init,

    /// Rental requests
    Rental {
        #[command(subcommand)]
        command: RentalCommand,
    },

    /// Deposit-withdrawal requests
    Withdrawal {
        #[command(subcommand)]
        command: WithdrawalCommand,
    },

    /// Signed-agreement files
    Agreement {
        #[command(subcommand)]
        command: AgreementCommand,
    },

    /// Interactive landlord inbox
    Inbox,
}

#[derive(Subcommand)]
pub enum RentalCommand {
    /// Requests addressed to your rooms (landlord)
    List {
        #[arg(long)]
        status: Option<String>,

        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// Your own requests (tenant)
    Mine,

    /// Full detail for one request
    Show { id: String },

    /// Accept a pending request
    Accept {
        id: String,

        /// Response message to the tenant
        #[arg(long)]
        message: String,

        /// Move-in date (YYYY-MM-DD)
        #[arg(long)]
        start_date: NaiveDate,

        #[arg(long)]
        end_date: Option<NaiveDate>,
    },

    /// Reject a pending request
    Reject {
        id: String,

        /// Canned reason; omit to use --note as a free-text reason
        #[arg(long)]
        reason: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Withdraw your own pending request (tenant)
    Cancel { id: String },

    /// Create a request for a room (tenant)
    Create {
        #[arg(long)]
        room: String,

        /// Desired move-in date (YYYY-MM-DD)
        #[arg(long)]
        start_date: NaiveDate,

        #[arg(long)]
        end_date: Option<NaiveDate>,

        #[arg(long, default_value = "1")]
        guests: u32,

        /// Proposed rent in VND (the landlord may ignore it)
        #[arg(long)]
        rent: Option<i64>,

        #[arg(long)]
        message: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum WithdrawalCommand {
    /// Pending requests against your rooms (landlord)
    Pending,

    /// Your own requests (tenant)
    Mine,

    /// Full detail for one request
    Show { id: String },

    /// Create a withdrawal request (tenant)
    Create {
        /// Amount in VND
        #[arg(long)]
        amount: i64,

        /// deposit_refund or early_termination
        #[arg(long, value_parser = parse_withdrawal_type)]
        request_type: phongtro_types::WithdrawalType,

        #[arg(long)]
        reason: String,

        #[arg(long)]
        bank: String,

        #[arg(long)]
        account: String,

        #[arg(long)]
        holder: String,
    },

    /// Approve a pending request (landlord)
    Approve {
        id: String,

        /// Amount withheld from the payout, in VND
        #[arg(long, default_value = "0")]
        deduction: i64,

        /// Required when a deduction is made
        #[arg(long)]
        deduction_reason: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Reject a pending request (landlord)
    Reject {
        id: String,

        #[arg(long)]
        note: String,
    },

    /// Cancel your own pending request (tenant)
    Cancel { id: String },
}

#[derive(Subcommand)]
pub enum AgreementCommand {
    /// Download a signed-agreement file
    Download {
        id: String,

        /// Target directory (defaults to the configured download dir, then
        /// the current directory)
        #[arg(long)]
        out: Option<String>,
    },
}

fn parse_withdrawal_type(value: &str) -> Result<phongtro_types::WithdrawalType, String> {
    match value {
        "deposit_refund" => Ok(phongtro_types::WithdrawalType::DepositRefund),
        "early_termination" => Ok(phongtro_types::WithdrawalType::EarlyTermination),
        other => Err(format!(
            "unknown withdrawal type '{}' (expected deposit_refund or early_termination)",
            other
        )),
    }
}
