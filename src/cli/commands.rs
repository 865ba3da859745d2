//! CLI command implementations
//!
//! Every command follows the same boot sequence:
//! 1. Load and validate the config file
//! 2. Load and validate the dataset it points at
//! 3. Build the index
//!
//! Failures in any step are fatal. After boot, `search` answers requests
//! until stdin is exhausted.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::catalog::Dataset;
use crate::index::FacetIndex;
use crate::observability::{
    log_event_with_fields, Event, Logger, MetricsRegistry, ObservationScope, Severity, Timer,
};
use crate::query::{SearchEngine, SearchRequest};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_lines, write_error, write_response};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Dataset file (required). Relative paths resolve against the config file's directory.
    pub dataset_path: PathBuf,

    /// Log one line per answered search (optional, default true)
    #[serde(default = "default_log_searches")]
    pub log_searches: bool,

    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(skip)]
    base_dir: PathBuf,
}

fn default_log_searches() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err(CliError::config_error("dataset_path must not be empty"));
        }

        if Severity::parse(&self.log_level).is_none() {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Dataset path resolved against the config file's directory
    pub fn resolved_dataset_path(&self) -> PathBuf {
        if self.dataset_path.is_absolute() {
            self.dataset_path.clone()
        } else {
            self.base_dir.join(&self.dataset_path)
        }
    }

    /// Validated minimum log severity
    pub fn min_severity(&self) -> Severity {
        Severity::parse(&self.log_level).unwrap_or(Severity::Info)
    }
}

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Search { config } => search(&config),
        Command::Stats { config } => stats(&config),
    }
}

/// Answer search requests from stdin until EOF.
pub fn search(config_path: &Path) -> CliResult<()> {
    let config = boot_config(config_path)?;
    let dataset = load_dataset(&config)?;

    let metrics = MetricsRegistry::new();
    let engine = build_engine(&dataset, &metrics);

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&engine, &metrics, &config, stdin.lock(), &mut stdout.lock())?;

    let summary = metrics.snapshot();
    log_event_with_fields(
        Event::ServeComplete,
        &[
            ("searches", summary.searches_executed.to_string().as_str()),
            ("rejected", summary.searches_rejected.to_string().as_str()),
        ],
    );
    Ok(())
}

/// Print index statistics and exit.
pub fn stats(config_path: &Path) -> CliResult<()> {
    let config = boot_config(config_path)?;
    let dataset = load_dataset(&config)?;

    let metrics = MetricsRegistry::new();
    let engine = build_engine(&dataset, &metrics);

    let stdout = io::stdout();
    write_response(&mut stdout.lock(), stats_json(&engine, &metrics)?)
}

/// Answer one search per request line.
///
/// A malformed line gets an error response; the stream continues.
pub fn serve<R: BufRead, W: Write>(
    engine: &SearchEngine<'_>,
    metrics: &MetricsRegistry,
    config: &Config,
    reader: R,
    writer: &mut W,
) -> CliResult<()> {
    for line in read_lines(reader) {
        let request = match parse_request(line?) {
            Ok(request) => request,
            Err(err) => {
                metrics.increment_searches_rejected();
                log_event_with_fields(Event::SearchRejected, &[("reason", err.message())]);
                write_error(writer, err.code_str(), err.message())?;
                continue;
            }
        };

        let timer = Timer::new();
        let result = engine.search(&request);
        metrics.record_search(result.buckets_probed as u64, result.total() as u64);

        if config.log_searches {
            Logger::info(
                "SEARCH_COMPLETE",
                &[
                    ("buckets_probed", result.buckets_probed.to_string().as_str()),
                    ("elapsed_us", timer.elapsed_us().as_str()),
                    ("items", result.total().to_string().as_str()),
                    ("unconstrained", if request.is_unconstrained() { "true" } else { "false" }),
                ],
            );
        }

        write_response(writer, serde_json::to_value(&result)?)?;
    }

    Ok(())
}

/// Decode one raw request line. Both failure kinds are bad requests.
fn parse_request(line: Vec<u8>) -> CliResult<SearchRequest> {
    let text = String::from_utf8(line).map_err(|e| {
        CliError::bad_request(format!("Request line is not valid UTF-8: {}", e.utf8_error()))
    })?;

    serde_json::from_str(&text)
        .map_err(|e| CliError::bad_request(format!("Invalid search request: {}", e)))
}

fn boot_config(config_path: &Path) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.min_severity());
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("config", config_path.display().to_string().as_str())],
    );
    Ok(config)
}

fn load_dataset(config: &Config) -> CliResult<Dataset> {
    let path = config.resolved_dataset_path();
    let path_str = path.display().to_string();

    let scope = ObservationScope::with_fields("DATASET_LOAD", &[("path", path_str.as_str())]);
    let dataset = match Dataset::load(&path) {
        Ok(dataset) => dataset,
        Err(e) => {
            let reason = e.to_string();
            scope.fail(&reason);
            log_event_with_fields(
                Event::DatasetRejected,
                &[("code", e.code()), ("path", path_str.as_str()), ("reason", reason.as_str())],
            );
            return Err(e.into());
        }
    };
    scope.complete();

    log_event_with_fields(
        Event::DatasetLoaded,
        &[
            ("colors", dataset.catalog.colors().len().to_string().as_str()),
            ("items", dataset.items.len().to_string().as_str()),
            ("path", path_str.as_str()),
            ("sizes", dataset.catalog.sizes().len().to_string().as_str()),
        ],
    );
    Ok(dataset)
}

fn build_engine<'a>(dataset: &'a Dataset, metrics: &MetricsRegistry) -> SearchEngine<'a> {
    let scope = ObservationScope::new("INDEX_BUILD");
    let index = FacetIndex::build(&dataset.items);
    metrics.record_index_build(index.item_count() as u64);
    scope.complete_with_fields(&[("buckets", index.bucket_count().to_string().as_str())]);

    log_event_with_fields(
        Event::IndexReady,
        &[("items", index.item_count().to_string().as_str())],
    );
    SearchEngine::from_index(&dataset.catalog, index)
}

fn stats_json(engine: &SearchEngine<'_>, metrics: &MetricsRegistry) -> CliResult<serde_json::Value> {
    let catalog = engine.catalog();
    Ok(json!({
        "index": serde_json::to_value(engine.index().stats())?,
        "catalog": {
            "sizes": catalog.sizes().values(),
            "colors": catalog.colors().values(),
        },
        "metrics": metrics.to_json(),
    }))
}
