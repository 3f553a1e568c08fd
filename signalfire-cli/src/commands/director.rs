//! Director commands.

use anyhow::Result;

use crate::commands::auth::open_session;
use crate::config::build_client;
use crate::output::{print_table, DirectorRow, OutputFormat};

pub async fn handle(server: Option<&str>, format: OutputFormat) -> Result<()> {
    let client = build_client(server)?;
    open_session(&client).await?;

    let directors = client.directors().list().await?;
    print_table(directors.iter().map(DirectorRow::from).collect(), format);

    Ok(())
}
