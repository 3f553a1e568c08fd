//! SignalFire CLI.

mod commands;
mod config;
mod output;
mod region;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{auth, director, group, info, run};
use rust_i18n::t;
use tracing_subscriber::EnvFilter;

rust_i18n::i18n!("src/locales", fallback = "en");

/// SignalFire director management CLI
#[derive(Parser)]
#[command(name = "signalfire")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// SignalFire server URL
    #[arg(short, long, global = true, env = "SIGNALFIRE_URL")]
    server: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "plain")]
    format: output::OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Language for output
    #[arg(short, long, global = true, default_value = "en")]
    lang: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve auth, open a session, and render the director list
    Run(run::RunArgs),

    /// Show server version and auth method
    Info,

    /// Authenticate against the server
    Auth {
        #[command(subcommand)]
        action: auth::AuthAction,
    },

    /// List directors
    #[command(alias = "d")]
    Directors,

    /// List deployment groups
    #[command(alias = "g")]
    Groups,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Remember the server URL
    SetServer {
        /// Server URL
        url: String,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    rust_i18n::set_locale(&cli.lang);
    init_logging(cli.verbose);

    let command = cli
        .command
        .ok_or_else(|| anyhow::anyhow!("{}", t!("no_command")))?;
    let server = cli.server.as_deref();

    match command {
        Commands::Run(args) => run::handle(args, server).await,
        Commands::Info => info::handle(server, cli.format).await,
        Commands::Auth { action } => auth::handle(action, server, cli.format).await,
        Commands::Directors => director::handle(server, cli.format).await,
        Commands::Groups => group::handle(server, cli.format).await,
        Commands::Config { action } => handle_config(action, server),
    }
}

fn handle_config(action: Option<ConfigAction>, server: Option<&str>) -> Result<()> {
    let mut cfg = config::load_config()?;

    match action {
        Some(ConfigAction::SetServer { url }) => {
            signalfire::SignalFireClient::builder()
                .base_url(url.as_str())
                .build()?;
            cfg.server_url = Some(url.clone());
            config::save_config(&cfg)?;
            println!("{}", t!("server_saved", url = &url));
        }
        None => {
            println!(
                "{}",
                t!("config_file", path = config::config_path()?.display())
            );
            println!("{}", t!("server_url", url = cfg.effective_server_url(server)));
            println!("{}", t!("credentials_configured", status = cfg.auth.is_some()));
        }
    }

    Ok(())
}
