//! Authentication commands.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use rust_i18n::t;
use signalfire::{AuthMethod, SignalFireApi, SignalFireClient};
use tracing::debug;

use crate::config::{build_client, load_config};
use crate::output::{print_session, OutputFormat};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Open a session on a server that needs no credentials
    Noop,

    /// Open a session with username and password
    Basic {
        /// Username (defaults to the configured one)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (defaults to the configured one)
        #[arg(short, long)]
        password: Option<String>,
    },
}

pub async fn handle(action: AuthAction, server: Option<&str>, format: OutputFormat) -> Result<()> {
    let client = build_client(server)?;

    match action {
        AuthAction::Noop => client.auth_noop().await?,
        AuthAction::Basic { username, password } => {
            let configured = load_config()?.auth;
            let username = username
                .or_else(|| configured.as_ref().map(|a| a.username.clone()))
                .context(t!("missing_username").to_string())?;
            let password = password
                .or_else(|| configured.as_ref().map(|a| a.password.clone()))
                .context(t!("missing_password").to_string())?;

            client.auth_basic(&username, &password).await?;
        }
    }

    print_session(client.session().as_ref(), format);
    Ok(())
}

/// Authenticate the way the server asks for before calling protected endpoints.
pub async fn open_session(client: &SignalFireClient) -> Result<()> {
    let method = client.auth_type().await?;
    debug!(%method, "server auth method");

    match method {
        AuthMethod::None => client.auth_noop().await?,
        AuthMethod::UserPass => {
            let Some(auth) = load_config()?.auth else {
                bail!("{}", t!("credentials_required"));
            };
            client.auth_basic(&auth.username, &auth.password).await?;
        }
    }

    Ok(())
}
