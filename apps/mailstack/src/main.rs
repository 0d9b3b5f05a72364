//! Command-line front end for the Label Server client.
//!
//! Subcommands cover the account-maintenance operations: changing a pass
//! phrase, quoting a postage rate, and resetting a suspended account. Every
//! command takes the run mode (`sandbox` or `production`), the requester
//! id, and credentials: either a security token or an account id plus
//! pass phrase.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use mailstack_client::{Client, Mode, endpoint};
use mailstack_model::credential::CertifiedIntermediary;
use mailstack_model::request::{
    ChangePassPhraseRequest, PostageRateRequest, ResetSuspendedAccountRequest,
};
use mailstack_model::types::{MailClass, ResponseOptions};

/// Command-line client for the carrier's Label Server API.
#[derive(Parser, Debug)]
#[command(name = "mailstack")]
#[command(about = "Talk to the carrier's Label Server API", long_about = None)]
#[command(version)]
struct Cli {
    /// Which Label Server to talk to.
    #[arg(long, value_enum, default_value = "production")]
    mode: ModeArg,

    /// Requester id (partner id) assigned by the carrier. Ignored in
    /// sandbox mode, which uses the shared sandbox requester id.
    #[arg(long)]
    requester_id: Option<String>,

    /// Security token authenticating the account. Either a token or an
    /// account id and pass phrase must be provided.
    #[arg(long)]
    token: Option<String>,

    /// Postage account id.
    #[arg(long)]
    account_id: Option<String>,

    /// Current pass phrase of the account.
    #[arg(long)]
    passphrase: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Production,
    Sandbox,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Production => Self::Production,
            ModeArg::Sandbox => Self::Sandbox,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Change the account's pass phrase.
    ChangePassphrase {
        /// The new pass phrase to assign to the account.
        #[arg(long)]
        new_passphrase: String,

        /// Request a security token usable in place of credentials.
        #[arg(long)]
        request_token: bool,
    },
    /// Quote the postage rate for a mailpiece.
    PostageRate {
        /// Mail class to quote (e.g. Priority, First, MediaMail).
        #[arg(long)]
        mail_class: String,

        /// Mailpiece weight in ounces.
        #[arg(long)]
        weight: f64,

        /// Origin postal code.
        #[arg(long)]
        from_postal_code: String,

        /// Destination postal code.
        #[arg(long)]
        to_postal_code: String,

        /// Ask for the fully itemized price breakdown.
        #[arg(long)]
        itemized: bool,
    },
    /// Reset a suspended account's pass phrase via its challenge answer.
    ResetSuspendedAccount {
        /// Account id to reset.
        #[arg(long)]
        account_id: String,

        /// Answer to the account's challenge question.
        #[arg(long)]
        challenge_answer: String,

        /// The new pass phrase to assign to the account.
        #[arg(long)]
        new_passphrase: String,
    },
}

impl Cli {
    /// Resolve the credential from the token or account-id/passphrase
    /// options.
    fn credential(&self) -> Result<CertifiedIntermediary> {
        if let Some(ref token) = self.token {
            return Ok(CertifiedIntermediary::from_token(token.clone())?);
        }
        match (&self.account_id, &self.passphrase) {
            (Some(account_id), Some(passphrase)) => Ok(
                CertifiedIntermediary::from_credentials(account_id.clone(), passphrase.clone())?,
            ),
            _ => bail!(
                "either --token, or both --account-id and --passphrase, must be provided"
            ),
        }
    }

    /// Resolve the requester id; sandbox runs fall back to the shared
    /// sandbox id.
    fn requester_id(&self) -> Result<String> {
        match (&self.requester_id, self.mode) {
            (Some(id), _) => Ok(id.clone()),
            (None, ModeArg::Sandbox) => Ok(endpoint::SANDBOX_REQUESTER_ID.to_owned()),
            (None, ModeArg::Production) => {
                bail!("--requester-id is required in production mode")
            }
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let client = Client::new(cli.mode.into());
    let requester_id = cli.requester_id()?;

    let failed = match &cli.command {
        Commands::ChangePassphrase {
            new_passphrase,
            request_token,
        } => {
            let mut request = ChangePassPhraseRequest::new(
                requester_id,
                cli.credential()?,
                new_passphrase.clone(),
                *request_token,
            )?;
            let response = client
                .change_pass_phrase(&mut request)
                .await
                .context("pass-phrase change request failed")?;
            if response.is_successful() {
                println!("Pass phrase changed.");
                if let Some(token) = response.token() {
                    println!("Security token: {token}");
                }
                false
            } else {
                eprintln!(
                    "Pass phrase change failed (status {}): {}",
                    response.status(),
                    response.error_message()
                );
                true
            }
        }
        Commands::PostageRate {
            mail_class,
            weight,
            from_postal_code,
            to_postal_code,
            itemized,
        } => {
            let mail_class: MailClass = mail_class.parse()?;
            let mut request = PostageRateRequest::new(
                requester_id,
                cli.credential()?,
                mail_class,
                *weight,
                from_postal_code.clone(),
                to_postal_code.clone(),
            );
            if *itemized {
                request.set_response_options(Some(ResponseOptions::new(true)));
            }
            let response = client
                .postage_rate(&mut request)
                .await
                .context("postage rate request failed")?;
            if response.is_successful() {
                if let Some(zone) = response.zone() {
                    println!("Zone: {zone}");
                }
                if let Some(postage) = response.postage() {
                    println!("{}: ${:.2}", postage.mail_service, postage.rate);
                }
                if let Some(price) = response.postage_price() {
                    println!("Total: ${:.2}", price.total_amount);
                    if let Some(ref postage) = price.postage {
                        if let Some(ref service) = postage.mail_service {
                            println!("  {service}: ${:.2}", postage.total_amount);
                        }
                    }
                    if let Some(ref fees) = price.fees {
                        if let Some(total) = fees.total_amount {
                            println!("  Fees: ${total:.2}");
                        }
                    }
                }
                false
            } else {
                eprintln!(
                    "Rate request failed (status {}): {}",
                    response.status(),
                    response.error_message()
                );
                true
            }
        }
        Commands::ResetSuspendedAccount {
            account_id,
            challenge_answer,
            new_passphrase,
        } => {
            let mut request = ResetSuspendedAccountRequest::new(
                requester_id,
                account_id.clone(),
                challenge_answer.clone(),
                new_passphrase.clone(),
                None,
            );
            let response = client
                .reset_suspended_account(&mut request)
                .await
                .context("suspended-account reset request failed")?;
            if response.envelope().is_successful() {
                println!("Account reset.");
                false
            } else {
                eprintln!(
                    "Account reset failed (status {}): {}",
                    response.envelope().status(),
                    response.envelope().error_message()
                );
                true
            }
        }
    };

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
