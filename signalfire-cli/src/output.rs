//! Output formatting.

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use rust_i18n::t;
use serde::Serialize;
use signalfire::{ApiInfo, DeploymentGroup, Director, Session};

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table format
    Table,
    /// JSON format
    Json,
    /// Plain text format
    #[default]
    Plain,
}

/// Trait for plain text output.
pub trait PlainPrint {
    /// Print as plain text with formatting.
    fn plain_print(&self);
}

/// Trait for table row generation.
pub trait TableRow {
    /// Get table headers.
    fn headers() -> Vec<&'static str>;
    /// Get row data as strings.
    fn row(&self) -> Vec<String>;
}

/// Print items in plain text format.
pub fn print_plain<T: PlainPrint>(items: &[T]) {
    if items.is_empty() {
        println!("{}", t!("no_results"));
        return;
    }
    for item in items {
        item.plain_print();
    }
}

/// Print a table of items with proper formatting for each output mode.
pub fn print_table<T: TableRow + Serialize + PlainPrint>(items: Vec<T>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items).unwrap_or_default());
        }
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{}", t!("no_results"));
                return;
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(T::headers());
            for item in &items {
                table.add_row(item.row());
            }
            println!("{table}");
        }
        OutputFormat::Plain => {
            print_plain(&items);
        }
    }
}

/// Print server info.
pub fn print_info(info: &ApiInfo, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(info).unwrap_or_default());
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(vec!["Version", "Auth"]);
            table.add_row(vec![info.version.clone(), info.auth_method().to_string()]);
            println!("{table}");
        }
        OutputFormat::Plain => {
            println!("{}", t!("server_version", version = &info.version));
            println!("{}", t!("auth_method", method = info.auth_method().to_string().cyan()));
        }
    }
}

/// Print the outcome of an auth handshake.
pub fn print_session(session: Option<&Session>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "token": session.map(|s| s.token.as_str()) });
            println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        }
        OutputFormat::Table | OutputFormat::Plain => match session {
            Some(session) => println!("{}", t!("session_opened", token = session.token.green())),
            None => println!("{}", t!("session_without_token")),
        },
    }
}

// ============================================================================
// Display implementations for models
// ============================================================================

/// Row for director list display.
#[derive(Serialize)]
pub struct DirectorRow {
    pub name: String,
    pub uuid: String,
}

impl From<&Director> for DirectorRow {
    fn from(d: &Director) -> Self {
        Self {
            name: d.name.clone(),
            uuid: d.uuid.clone(),
        }
    }
}

impl TableRow for DirectorRow {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "UUID"]
    }
    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.uuid.clone()]
    }
}

impl PlainPrint for DirectorRow {
    fn plain_print(&self) {
        println!("{} {}", self.name.bold(), format!("[{}]", self.uuid).dimmed());
    }
}

/// Row for deployment group display.
#[derive(Serialize)]
pub struct GroupRow {
    pub name: String,
    pub deployments: usize,
    pub releases: usize,
    pub drift: bool,
}

impl From<&DeploymentGroup> for GroupRow {
    fn from(g: &DeploymentGroup) -> Self {
        Self {
            name: g.name.clone(),
            deployments: g.deployments.len(),
            releases: g.releases.len(),
            drift: g.has_version_drift(),
        }
    }
}

impl TableRow for GroupRow {
    fn headers() -> Vec<&'static str> {
        vec!["Group", "Deployments", "Releases", "Drift"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.deployments.to_string(),
            self.releases.to_string(),
            if self.drift { "yes".into() } else { "-".into() },
        ]
    }
}

impl PlainPrint for GroupRow {
    fn plain_print(&self) {
        let drift = if self.drift {
            format!(" {}", t!("version_drift")).yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{} {}{}",
            self.name.bold(),
            t!("group_counts", deployments = self.deployments, releases = self.releases)
                .to_string()
                .dimmed(),
            drift
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_row() {
        let row = DirectorRow::from(&Director::new("prod", "d-1"));
        assert_eq!(row.row(), vec!["prod".to_string(), "d-1".to_string()]);
        assert_eq!(DirectorRow::headers().len(), row.row().len());
    }

    #[test]
    fn test_group_row() {
        let group: DeploymentGroup = serde_json::from_value(serde_json::json!({
            "name": "cf",
            "deployments": [{ "name": "cf", "id": "a", "director_id": "d1" }],
            "releases": [{ "name": "uaa", "versions": [
                { "version": "74", "deployments": ["a"] },
                { "version": "75", "deployments": [] }
            ] }]
        }))
        .unwrap();

        let row = GroupRow::from(&group);
        assert_eq!(row.row(), vec!["cf", "1", "1", "yes"]);
    }
}
