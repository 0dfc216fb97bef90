//! ingress-router CLI.
//!
//! ```text
//!   rules file ──▶ validate   compile and report
//!              ──▶ rule      compile, match one URL, print the rule
//!              ──▶ watch     compile, hot reload on change until Ctrl+C
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use url::Url;

use ingress_router::config::watcher::{publish_updates, RulesWatcher};
use ingress_router::lifecycle::shutdown_signal;
use ingress_router::observability::init_logging;
use ingress_router::{load_routing_table, RoutingTable, SharedRoutingTable};

#[derive(Parser)]
#[command(name = "ingress-router")]
#[command(about = "Validate and test ingress rules for a tunnel agent", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is unset.
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a rules file compiles
    Validate {
        /// Rules document (YAML or JSON)
        file: PathBuf,
    },
    /// Show which rule a URL would be routed by
    Rule {
        /// Rules document (YAML or JSON)
        file: PathBuf,
        /// Request URL, e.g. https://www.example.com/static/index.html
        url: Url,
        /// Print the matched rule as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load the rules and reload them whenever the file changes
    Watch {
        /// Rules document (YAML or JSON)
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Rule { file, url, json } => cmd_rule(&file, &url, json),
        Commands::Watch { file } => cmd_watch(&file).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_validate(file: &Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let table = load_routing_table(file)?;
    println!("Validated {} rules", table.len());
    Ok(ExitCode::SUCCESS)
}

fn cmd_rule(file: &Path, url: &Url, json: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let table = load_routing_table(file)?;
    let host = url.host_str().unwrap_or_default();

    match table.find_matching_index(host, url.path()) {
        Some((index, rule)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&rule.summary())?);
            } else {
                println!("Matched rule #{}", index + 1);
                println!("{}", rule);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("No rule matched {}", url);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn cmd_watch(file: &Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let table = load_routing_table(file)?;
    log_table(&table);
    let shared = SharedRoutingTable::new(table);

    let (watcher, updates) = RulesWatcher::new(file);
    // Dropping the handle stops notifications
    let _watcher = watcher.run()?;

    publish_updates(&shared, updates, shutdown_signal()).await;

    tracing::info!("Shutdown complete");
    Ok(ExitCode::SUCCESS)
}

fn log_table(table: &RoutingTable) {
    for (i, rule) in table.rules().iter().enumerate() {
        tracing::info!(
            rule = i + 1,
            hostname = %rule.hostname(),
            path = rule.path().map(|p| p.as_str()).unwrap_or_default(),
            service = %rule.service(),
            "Ingress rule"
        );
    }
}
