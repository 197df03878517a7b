use super::args::{AgreementCommand, Cli, Commands, RentalCommand, WithdrawalCommand};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use anyhow::{Result, anyhow};
use phongtro_sdk::Client;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    let Some(command) = cli.command.as_ref() else {
        show_guidance(&config_path)?;
        return Ok(());
    };

    if let Commands::Init = command {
        return handlers::init::handle(&config_path);
    }

    let config = Config::load_from(&config_path)?;
    let client = connect(&cli, &config)?;

    let command = cli.command.unwrap();
    match command {
        Commands::Init => unreachable!("handled above"),

        Commands::Rental { command } => match command {
            RentalCommand::List { status, limit } => {
                handlers::rental::list(&client, status.as_deref(), limit, cli.format)
            }
            RentalCommand::Mine => handlers::rental::mine(&client, cli.format),
            RentalCommand::Show { id } => handlers::rental::show(&client, &id, cli.format),
            RentalCommand::Accept {
                id,
                message,
                start_date,
                end_date,
            } => handlers::rental::accept(&client, &id, message, start_date, end_date),
            RentalCommand::Reject { id, reason, note } => {
                handlers::rental::reject(&client, &id, reason.as_deref(), note.as_deref())
            }
            RentalCommand::Cancel { id } => handlers::rental::cancel(&client, &id),
            RentalCommand::Create {
                room,
                start_date,
                end_date,
                guests,
                rent,
                message,
            } => handlers::rental::create(
                &client,
                &room,
                start_date,
                end_date,
                guests,
                rent,
                message,
                cli.format,
            ),
        },

        Commands::Withdrawal { command } => match command {
            WithdrawalCommand::Pending => handlers::withdrawal::pending(&client, cli.format),
            WithdrawalCommand::Mine => handlers::withdrawal::mine(&client, cli.format),
            WithdrawalCommand::Show { id } => handlers::withdrawal::show(&client, &id, cli.format),
            WithdrawalCommand::Create {
                amount,
                request_type,
                reason,
                bank,
                account,
                holder,
            } => handlers::withdrawal::create(
                &client,
                amount,
                request_type,
                reason,
                bank,
                account,
                holder,
                cli.format,
            ),
            WithdrawalCommand::Approve {
                id,
                deduction,
                deduction_reason,
                note,
            } => handlers::withdrawal::approve(
                &client,
                &id,
                deduction,
                deduction_reason,
                note,
            ),
            WithdrawalCommand::Reject { id, note } => {
                handlers::withdrawal::reject(&client, &id, &note)
            }
            WithdrawalCommand::Cancel { id } => handlers::withdrawal::cancel(&client, &id),
        },

        Commands::Agreement { command } => match command {
            AgreementCommand::Download { id, out } => {
                handlers::agreement::download(&client, &config, &id, out.as_deref())
            }
        },

        Commands::Inbox => crate::tui::run_inbox(&client),
    }
}

/// Flags override environment, environment overrides config.
fn connect(cli: &Cli, config: &Config) -> Result<Client> {
    let base_url = cli
        .api_url
        .clone()
        .or_else(|| std::env::var("PHONGTRO_API_URL").ok())
        .unwrap_or_else(|| config.api.base_url.clone());
    let token = cli
        .token
        .clone()
        .or_else(|| std::env::var("PHONGTRO_ACCESS_TOKEN").ok())
        .unwrap_or_else(|| config.api.access_token.clone());

    if base_url.is_empty() {
        return Err(anyhow!(
            "no backend configured; run `phongtro init` or pass --api-url"
        ));
    }
    if token.trim().is_empty() {
        return Err(anyhow!(
            "no access token configured; edit the config or pass --token"
        ));
    }

    Client::connect_verbose(base_url, token, cli.verbose).map_err(|e| anyhow!(e.to_string()))
}

fn show_guidance(config_path: &std::path::Path) -> Result<()> {
    println!("phongtro - Room-rental marketplace client\n");

    if !config_path.exists() {
        println!("Get started:");
        println!("  phongtro init\n");
        println!("The init command writes a config scaffold; fill in your");
        println!("backend URL and access token, then:");
        println!("  phongtro rental list              # Pending rental requests");
        println!("  phongtro inbox                    # Interactive inbox\n");
    } else {
        println!("Quick commands:");
        println!("  phongtro rental list              # Pending rental requests");
        println!("  phongtro withdrawal pending       # Pending withdrawal requests");
        println!("  phongtro inbox                    # Interactive inbox");
        println!("  phongtro agreement download <ID>  # Fetch a signed agreement\n");
    }

    println!("For more commands:");
    println!("  phongtro --help");

    Ok(())
}
