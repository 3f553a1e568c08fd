//! Server info command.

use anyhow::Result;

use crate::config::build_client;
use crate::output::{print_info, OutputFormat};

pub async fn handle(server: Option<&str>, format: OutputFormat) -> Result<()> {
    let client = build_client(server)?;
    let info = client.info().get().await?;

    print_info(&info, format);
    Ok(())
}
