//! CLI administration tool for crm-portal.
//!
//! # Usage
//!
//! ```bash
//! # Generate a session secret
//! cargo run --bin admin -- secret generate
//!
//! # Decode a session cookie copied from the browser
//! cargo run --bin admin -- session inspect "crm_session=eyJ...."
//!
//! # Check the authentication service
//! cargo run --bin admin -- auth check
//! cargo run --bin admin -- auth login --email sara@example.com
//!
//! # Validate the environment
//! cargo run --bin admin -- config check
//! ```
//!
//! # Environment Variables
//!
//! Everything except `secret generate` reads the same variables as the
//! server (see `crm_portal::config`).

use crm_portal::config::{self, Config, MIN_SESSION_SECRET_LEN};
use crm_portal::domain::entities::Credentials;
use crm_portal::domain::gateways::AuthGateway;
use crm_portal::infrastructure::auth::HttpAuthGateway;
use crm_portal::infrastructure::session::{CookieSessionStore, SessionSettings};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use rand::RngCore;
use std::time::Duration;

/// CLI tool for managing crm-portal.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Session secret helpers
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Session cookie helpers
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Authentication service diagnostics
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Configuration diagnostics
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum SecretAction {
    /// Generate a random hex-encoded secret suitable for SESSION_SECRET
    Generate {
        /// Number of random bytes
        #[arg(short, long, default_value_t = 32)]
        bytes: usize,

        /// Print only the secret
        #[arg(long)]
        raw: bool,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Verify and decode a session cookie
    Inspect {
        /// Cookie value, with or without the `name=` prefix
        cookie: String,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Check that the authentication service answers
    Check,

    /// Try a login against the authentication service
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate the configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Secret {
            action: SecretAction::Generate { bytes, raw },
        } => generate_secret(bytes, raw)?,
        Commands::Session {
            action: SessionAction::Inspect { cookie },
        } => inspect_session(&cookie)?,
        Commands::Auth { action } => handle_auth_action(action).await?,
        Commands::Config {
            action: ConfigAction::Check,
        } => check_config()?,
    }

    Ok(())
}

/// Upper bound for `secret generate --bytes`.
const MAX_SECRET_BYTES: usize = 1024;

/// Checks that `bytes` random bytes hex-encode to a usable SESSION_SECRET.
fn check_secret_size(bytes: usize) -> Result<()> {
    let min_bytes = MIN_SESSION_SECRET_LEN.div_ceil(2);
    if bytes < min_bytes {
        anyhow::bail!("At least {min_bytes} bytes are needed to produce a valid SESSION_SECRET");
    }
    if bytes > MAX_SECRET_BYTES {
        anyhow::bail!("At most {MAX_SECRET_BYTES} bytes can be generated");
    }
    Ok(())
}

/// Prints a fresh random secret.
fn generate_secret(bytes: usize, raw: bool) -> Result<()> {
    check_secret_size(bytes)?;

    let mut buf = vec![0u8; bytes];
    rand::rng().fill_bytes(&mut buf);
    let secret = hex::encode(buf);

    if raw {
        println!("{secret}");
        return Ok(());
    }

    println!("{}", "Generated session secret".bright_blue().bold());
    println!();
    println!("  {}={}", "SESSION_SECRET".bright_cyan(), secret.bright_yellow());
    println!();
    println!(
        "{}",
        "Changing the secret logs every user out.".yellow()
    );

    Ok(())
}

/// Decodes a session cookie with the configured secret.
fn inspect_session(cookie: &str) -> Result<()> {
    let config = config::load_from_env()?;
    let store = session_store(&config);

    let prefix = format!("{}=", store.cookie_name());
    let value = cookie.trim();
    let value = value.strip_prefix(&prefix).unwrap_or(value);
    let value = value.split(';').next().unwrap_or(value);

    match store.open_at(value, chrono::Utc::now().timestamp()) {
        Some(session) => {
            println!("{}", "Valid session".green().bold());
            println!("  User ID:   {}", session.user.id.to_string().cyan());
            println!("  Name:      {}", session.user.name.cyan());
            println!("  Email:     {}", session.user.email.cyan());
            println!("  Role:      {}", session.user.role.cyan());
            println!("  Logged in: {}", session.is_logged_in);
        }
        None => {
            println!(
                "{}",
                "Invalid session: bad signature, malformed or expired".red().bold()
            );
        }
    }

    Ok(())
}

/// Dispatches authentication service commands.
async fn handle_auth_action(action: AuthAction) -> Result<()> {
    let config = config::load_from_env()?;
    let gateway = HttpAuthGateway::new(
        &config.auth_api_url,
        Duration::from_secs(config.auth_api_timeout_seconds),
    )?;

    match action {
        AuthAction::Check => {
            if gateway.health_check().await {
                println!("{} {}", "Reachable:".green().bold(), config.auth_api_url);
            } else {
                println!("{} {}", "Unreachable:".red().bold(), config.auth_api_url);
            }
        }
        AuthAction::Login { email } => {
            let email = match email {
                Some(e) => e,
                None => Input::new().with_prompt("Email").interact_text()?,
            };
            let password = Password::new()
                .with_prompt("Password")
                .interact()
                .context("Failed to read password")?;

            match gateway.login(&Credentials::new(email, password)).await {
                Ok(auth) => {
                    println!("{}", "Login accepted".green().bold());
                    println!("  User ID: {}", auth.user.id.to_string().cyan());
                    println!("  Name:    {}", auth.user.name.cyan());
                    println!("  Role:    {}", auth.user.role.cyan());
                }
                Err(failure) => {
                    println!("{} {}", "Login rejected:".red().bold(), failure);
                    println!("  Shown to user: {}", failure.user_message().yellow());
                }
            }
        }
    }

    Ok(())
}

/// Validates the environment and prints a summary.
fn check_config() -> Result<()> {
    let config = config::load_from_env()?;

    println!("{}", "Configuration is valid".green().bold());
    println!("  Listen:         {}", config.listen_addr.cyan());
    println!("  Environment:    {}", config.environment.to_string().cyan());
    println!(
        "  Auth API:       {}",
        config::mask_connection_string(&config.auth_api_url).cyan()
    );
    println!("  Session cookie: {}", config.session_cookie_name.cyan());
    println!("  Session TTL:    {}s", config.session_ttl_seconds);

    if config.demo_login_enabled() {
        println!("{}", "  Demo login is ENABLED".yellow().bold());
    }

    Ok(())
}

fn session_store(config: &Config) -> CookieSessionStore {
    CookieSessionStore::new(SessionSettings {
        cookie_name: config.session_cookie_name.clone(),
        secret: config.session_secret.clone(),
        ttl_seconds: config.session_ttl_seconds,
        secure: config.cookie_secure,
    })
}
