//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, PagerConfig};
use crate::error::{Error, Result};
use crate::pagination::{nodes_of, Connection, Pager, QueryParam};
use crate::types::{JsonObject, JsonValue};
use serde_json::json;
use std::fs;
use tracing::{debug, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        let pager = self.pager()?;
        debug!(
            "Using page size {} ({} order)",
            pager.page_size(),
            pager.order()
        );

        match &self.cli.command {
            Commands::Nodes => self.nodes(),
            Commands::Next => {
                let connection = self.load_connection()?;
                if !connection.page_info.has_next_page {
                    warn!("Connection reports no next page; the fetch will come back empty");
                }
                self.render_params(&pager.next_page_params(&connection))
            }
            Commands::Previous => {
                let connection = self.load_connection()?;
                if !connection.page_info.has_previous_page {
                    warn!("Connection reports no previous page; the fetch will come back empty");
                }
                self.render_params(&pager.previous_page_params(&connection))
            }
            Commands::CurrentPage => {
                let connection = self.load_connection()?;
                let page = pager.current_page(&connection)?;
                Ok(match self.cli.format {
                    OutputFormat::Json => json!({ "currentPage": page }).to_string(),
                    OutputFormat::Pretty => format!("Page {page}"),
                })
            }
            Commands::Jump { page, total_count } => {
                let total_count = match total_count {
                    Some(total) => *total,
                    None => self.load_connection()?.total_count,
                };
                if *page == 0 || *page > pager.total_pages(total_count) {
                    warn!(
                        "Page {} is outside 1..={} for {} items",
                        page,
                        pager.total_pages(total_count),
                        total_count
                    );
                }
                self.render_params(&pager.page_query(*page, total_count))
            }
            Commands::Summary => {
                let connection = self.load_connection()?;
                let summary = pager.summary(&connection)?;
                Ok(match self.cli.format {
                    OutputFormat::Json => serde_json::to_string(&summary)?,
                    OutputFormat::Pretty => format!(
                        "Page {} of {} (next: {}, previous: {})",
                        summary.current_page,
                        summary.total_pages,
                        yes_no(summary.has_next_page),
                        yes_no(summary.has_previous_page)
                    ),
                })
            }
        }
    }

    /// Print the connection's nodes
    fn nodes(&self) -> Result<String> {
        let connection = self.load_connection()?;
        let nodes = nodes_of(&connection);
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string(&nodes)?),
            OutputFormat::Pretty => {
                let lines: Vec<String> = connection
                    .edges
                    .iter()
                    .map(|edge| format!("{}\t{}", edge.cursor, edge.node))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Build the pager from config file and flags
    fn pager(&self) -> Result<Pager> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => PagerConfig::default(),
        };
        if let Some(page_size) = self.cli.page_size {
            config = config.with_page_size(page_size);
        }
        Pager::from_config(&config)
    }

    /// Load the connection snapshot from inline JSON or a file
    fn load_connection(&self) -> Result<Connection<JsonValue>> {
        if let Some(json) = &self.cli.connection_json {
            return Ok(serde_json::from_str(json)?);
        }

        let path = self.cli.connection.as_ref().ok_or_else(|| {
            Error::config("No connection provided. Use --connection or --connection-json")
        })?;
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Base variables the query parameters get merged into
    fn base_variables(&self) -> Result<JsonObject> {
        match &self.cli.variables_json {
            None => Ok(JsonObject::new()),
            Some(raw) => match serde_json::from_str::<JsonValue>(raw)
                .map_err(|e| Error::invalid_value("variables_json", e.to_string()))?
            {
                JsonValue::Object(vars) => Ok(vars),
                _ => Err(Error::invalid_value(
                    "variables_json",
                    "expected a JSON object",
                )),
            },
        }
    }

    fn render_params(&self, params: &QueryParam) -> Result<String> {
        let mut vars = self.base_variables()?;
        params.merge_into(&mut vars);
        match self.cli.format {
            OutputFormat::Json => Ok(JsonValue::Object(vars).to_string()),
            OutputFormat::Pretty if self.cli.variables_json.is_none() => Ok(params.to_string()),
            OutputFormat::Pretty => Ok(serde_json::to_string_pretty(&vars)?),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::Value;
    use std::io::Write;

    const CONNECTION: &str = r#"{
        "edges": [
            {"cursor": "10", "node": {"height": 10}},
            {"cursor": "19", "node": {"height": 19}}
        ],
        "pageInfo": {
            "startCursor": "10",
            "endCursor": "19",
            "hasNextPage": true,
            "hasPreviousPage": true
        },
        "totalCount": 25
    }"#;

    fn run(args: &[&str]) -> Result<String> {
        let mut argv = vec!["explorer-pager", "--connection-json", CONNECTION];
        argv.extend_from_slice(args);
        Runner::new(Cli::parse_from(argv)).execute()
    }

    fn run_json(args: &[&str]) -> Value {
        serde_json::from_str(&run(args).unwrap()).unwrap()
    }

    #[test]
    fn test_next() {
        assert_eq!(run_json(&["next"]), json!({"after": "19", "first": 10}));
    }

    #[test]
    fn test_previous_with_page_size() {
        assert_eq!(
            run_json(&["--page-size", "5", "previous"]),
            json!({"before": "10", "last": 5})
        );
    }

    #[test]
    fn test_current_page() {
        assert_eq!(run_json(&["current-page"]), json!({"currentPage": 2}));
        assert_eq!(run(&["--format", "pretty", "current-page"]).unwrap(), "Page 2");
    }

    #[test]
    fn test_jump_merges_variables() {
        assert_eq!(
            run_json(&[
                "--variables-json",
                r#"{"address": "ca1qx", "first": 10}"#,
                "jump",
                "--page",
                "1"
            ]),
            json!({"address": "ca1qx", "before": "6", "last": 10})
        );
    }

    #[test]
    fn test_jump_with_explicit_total_count() {
        assert_eq!(
            run_json(&["jump", "--page", "1", "--total-count", "20"]),
            json!({"before": "1", "last": 10})
        );
    }

    #[test]
    fn test_summary_pretty() {
        assert_eq!(
            run(&["--format", "pretty", "summary"]).unwrap(),
            "Page 2 of 3 (next: yes, previous: yes)"
        );
    }

    #[test]
    fn test_nodes() {
        assert_eq!(
            run_json(&["nodes"]),
            json!([{"height": 10}, {"height": 19}])
        );
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = run(&["--page-size", "0", "next"]).unwrap_err();
        assert!(matches!(err, Error::InvalidPageSize { value: 0 }));
    }

    #[test]
    fn test_variables_must_be_object() {
        let err = run(&["--variables-json", "[1]", "next"]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_unparsable_variables_are_local_input_errors() {
        let err = run(&["--variables-json", "{oops", "next"]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { ref field, .. } if field == "variables_json"
        ));
        assert!(!err.is_data_contract_violation());
    }

    #[test]
    fn test_unparsable_config_file_is_not_a_contract_violation() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{oops").unwrap();

        let path = file.path().to_str().unwrap();
        let err = run(&["--config", path, "next"]).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(!err.is_data_contract_violation());
    }

    #[test]
    fn test_unparsable_snapshot_is_a_contract_violation() {
        let cli = Cli::parse_from(["explorer-pager", "--connection-json", "{oops", "nodes"]);
        let err = Runner::new(cli).execute().unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
        assert!(err.is_data_contract_violation());
    }

    #[test]
    fn test_null_cursors_on_empty_page() {
        let snapshot = r#"{
            "edges": [],
            "pageInfo": {
                "startCursor": null,
                "endCursor": null,
                "hasNextPage": false,
                "hasPreviousPage": false
            },
            "totalCount": 0
        }"#;
        let cli = Cli::parse_from(["explorer-pager", "--connection-json", snapshot, "nodes"]);
        assert_eq!(Runner::new(cli).execute().unwrap(), "[]");

        let cli = Cli::parse_from([
            "explorer-pager",
            "--connection-json",
            snapshot,
            "current-page",
        ]);
        let err = Runner::new(cli).execute().unwrap_err();
        assert!(matches!(err, Error::MalformedCursor { ref cursor } if cursor.is_empty()));
    }

    #[test]
    fn test_unreadable_connection_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();

        let cli = Cli::parse_from(["explorer-pager", "--connection", path, "nodes"]);
        let err = Runner::new(cli).execute().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_missing_connection() {
        let cli = Cli::parse_from(["explorer-pager", "next"]);
        let err = Runner::new(cli).execute().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_malformed_end_cursor() {
        let cli = Cli::parse_from([
            "explorer-pager",
            "--connection-json",
            r#"{"edges": [], "pageInfo": {"startCursor": "0", "endCursor": "tip"}}"#,
            "current-page",
        ]);
        let err = Runner::new(cli).execute().unwrap_err();
        assert!(matches!(err, Error::MalformedCursor { .. }));
    }
}
