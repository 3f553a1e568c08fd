//! Startup flow command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use signalfire::PageController;
use tracing::info;

use crate::config::build_client;
use crate::region::{HtmlFileRegion, StdoutRegion, DIRECTORS_LIST_ID};

#[derive(Args)]
pub struct RunArgs {
    /// HTML document whose director list element is rewritten
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Id of the element holding the director list
    #[arg(long, default_value = DIRECTORS_LIST_ID)]
    pub region_id: String,
}

pub async fn handle(args: RunArgs, server: Option<&str>) -> Result<()> {
    let client = build_client(server)?;

    match args.html {
        Some(path) => {
            info!(path = %path.display(), id = %args.region_id, "rendering into document");
            PageController::new(client, HtmlFileRegion::new(path, args.region_id))
                .run()
                .await;
        }
        None => PageController::new(client, StdoutRegion).run().await,
    }

    Ok(())
}
