//! QIWI CLI
//!
//! Command-line interface for the QIWI bill API.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::TimeDelta;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};

use qiwi_client::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_CURRENCY, QiwiClient, Timeouts, verify_notification,
};
use qiwi_types::{Decimal, Notification};

#[derive(Parser)]
#[command(name = "qiwi")]
#[command(author, version, about = "QIWI bill API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the bill resource
    #[arg(long, env = "QIWI_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Merchant secret key
    #[arg(long, env = "QIWI_SECRET_KEY", hide_env_values = true)]
    secret_key: String,

    /// Connect timeout in seconds
    #[arg(long, env = "QIWI_CONNECT_TIMEOUT", default_value = "15")]
    connect_timeout: u64,

    /// Read timeout in seconds
    #[arg(long, env = "QIWI_READ_TIMEOUT", default_value = "60")]
    read_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a new bill
    Create {
        /// Amount, e.g. 100.00
        #[arg(long)]
        amount: String,
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,
        #[arg(long)]
        comment: Option<String>,
        /// Hours until the bill expires
        #[arg(long, default_value = "24")]
        expire_hours: i64,
        /// Customer e-mail
        #[arg(long)]
        email: Option<String>,
        /// IANA timezone for the expiration timestamp
        #[arg(long, default_value = "Europe/Moscow")]
        timezone: String,
    },
    /// Show the current state of a bill
    Check {
        /// Bill ID
        bill_id: String,
    },
    /// Reject an unpaid bill
    Cancel {
        /// Bill ID
        bill_id: String,
    },
    /// Refund a paid bill
    Refund {
        /// Bill ID
        bill_id: String,
        #[arg(long)]
        amount: String,
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,
    },
    /// Check the signature of a saved payment notification
    Verify {
        /// Notification body (JSON)
        #[arg(long)]
        file: std::path::PathBuf,
        /// Value of the X-Api-Signature-SHA256 header
        #[arg(long)]
        signature: String,
    },
}

fn parse_amount(s: &str) -> Result<Decimal> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid amount: {}", s))
}

fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: {}", s))
}

fn parse_expiry(hours: i64) -> Result<TimeDelta> {
    TimeDelta::try_hours(hours).with_context(|| format!("Expiry of {} hours is out of range", hours))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,qiwi_client=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    tracing::debug!(api_url = %cli.api_url, "Starting qiwi CLI");

    let secret_key = cli.secret_key.clone();
    let client = QiwiClient::from_config(ClientConfig {
        secret_key: cli.secret_key,
        base_url: cli.api_url,
        timeouts: Timeouts {
            connect: Duration::from_secs(cli.connect_timeout),
            read: Duration::from_secs(cli.read_timeout),
        },
    })?;

    match cli.command {
        Commands::Create {
            amount,
            currency,
            comment,
            expire_hours,
            email,
            timezone,
        } => {
            let amount = parse_amount(&amount)?;
            let timezone = parse_timezone(&timezone)?;
            let expire_in = parse_expiry(expire_hours)?;
            let invoice = client
                .create_bill(
                    amount,
                    &currency,
                    comment.as_deref(),
                    expire_in,
                    email.as_deref(),
                    timezone,
                )
                .await?;
            println!("{}", serde_json::to_string_pretty(&invoice)?);
        }
        Commands::Check { bill_id } => {
            let invoice = client.check_bill(&bill_id).await?;
            println!("{}", serde_json::to_string_pretty(&invoice)?);
        }
        Commands::Cancel { bill_id } => {
            let invoice = client.cancel_bill(&bill_id).await?;
            println!("{}", serde_json::to_string_pretty(&invoice)?);
        }
        Commands::Refund {
            bill_id,
            amount,
            currency,
        } => {
            let amount = parse_amount(&amount)?;
            let refund = client.refund_bill(amount, &bill_id, &currency).await?;
            println!("{}", serde_json::to_string_pretty(&refund)?);
        }
        Commands::Verify { file, signature } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            let data: serde_json::Value = serde_json::from_str(&raw)?;
            let notification = Notification::prepare(&data)?;
            println!("{}", serde_json::to_string_pretty(&notification.bill)?);
            if verify_notification(&notification, &signature, &secret_key) {
                println!("✓ Signature is valid");
            } else {
                println!("✗ Signature mismatch");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100.00").unwrap().to_string(), "100.00");
        assert!(parse_amount("ten").is_err());
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Europe/Moscow").unwrap(), chrono_tz::Europe::Moscow);
        assert!(parse_timezone("Mars/Olympus").is_err());
    }

    #[test]
    fn test_parse_expiry() {
        assert_eq!(parse_expiry(24).unwrap(), TimeDelta::days(1));
        assert!(parse_expiry(i64::MAX).is_err());
    }

    #[test]
    fn test_refund_args() {
        let cli = Cli::try_parse_from([
            "qiwi",
            "--secret-key",
            "sk",
            "refund",
            "bill-001",
            "--amount",
            "10.50",
        ])
        .unwrap();
        match cli.command {
            Commands::Refund {
                bill_id, currency, ..
            } => {
                assert_eq!(bill_id, "bill-001");
                assert_eq!(currency, "RUB");
            }
            _ => panic!("expected refund"),
        }
    }
}
