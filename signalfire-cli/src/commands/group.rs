//! Deployment group commands.

use anyhow::Result;

use crate::commands::auth::open_session;
use crate::config::build_client;
use crate::output::{print_table, GroupRow, OutputFormat};

pub async fn handle(server: Option<&str>, format: OutputFormat) -> Result<()> {
    let client = build_client(server)?;
    open_session(&client).await?;

    let groups = client.groups().list().await?;
    print_table(groups.iter().map(GroupRow::from).collect(), format);

    Ok(())
}
