//! sosohelper: operator tool for the contact cipher and presence settings.
//!
//! Reads the same environment (and `.env`) as the service, so `check` fails
//! exactly when the service would refuse to start.

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::info;

use sosohelper_api::{AppState, AppStateInner, Settings};
use sosohelper_crypto::ContactKey;
use sosohelper_presence::OnlineTtl;

#[derive(Parser, Debug)]
#[command(name = "sosohelper", version, about = "Contact cipher and presence tooling")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate DATA_ENCRYPTION_KEY and ONLINE_TTL_SECONDS.
    Check,

    /// Print a fresh random key, base64-encoded.
    GenerateKey,

    /// Seal a plaintext contact into a storage bundle.
    Seal { plaintext: String },

    /// Open a storage bundle. Exits non-zero if it does not authenticate.
    Open { bundle: String },

    /// Evaluate online status for a last-active timestamp.
    Presence {
        /// RFC 3339 timestamp; omit for a never-seen actor.
        #[arg(long)]
        last_active: Option<String>,

        /// TTL in seconds.
        #[arg(long, default_value_t = OnlineTtl::DEFAULT.as_secs())]
        ttl: u32,
    },
}

fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sosohelper=info".into()),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Check => {
            let state = load_state()?;
            info!("Configuration OK");
            println!("ok (online TTL {})", state.online_ttl);
        }
        Command::GenerateKey => {
            println!("{}", ContactKey::generate().to_base64());
        }
        Command::Seal { plaintext } => {
            let state = load_state()?;
            let bundle = state
                .cipher
                .encrypt_string(&plaintext)
                .context("Failed to seal contact")?;
            println!("{}", bundle);
        }
        Command::Open { bundle } => {
            let state = load_state()?;
            let plaintext = state
                .cipher
                .decrypt_string(bundle.trim())
                .context("Failed to open bundle")?;
            println!("{}", plaintext);
        }
        Command::Presence { last_active, ttl } => {
            let ttl = OnlineTtl::from_secs(ttl).context("--ttl must be a positive number of seconds")?;
            let last_active = last_active
                .as_deref()
                .map(parse_timestamp)
                .transpose()?;
            let online = sosohelper_presence::is_online(last_active, ttl);
            println!("{}", if online { "online" } else { "offline" });
        }
    }

    Ok(())
}

fn load_state() -> anyhow::Result<AppState> {
    let settings = Settings::from_env().context("Invalid configuration")?;
    let state = AppStateInner::from_settings(&settings).context("Invalid DATA_ENCRYPTION_KEY")?;
    Ok(state)
}

fn parse_timestamp(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Not an RFC 3339 timestamp: {}", raw))?;
    Ok(parsed.with_timezone(&Utc))
}
