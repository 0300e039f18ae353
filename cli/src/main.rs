mod format;
mod listing;
mod logging;
mod tui;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use roi_ledger_core::config::DATA_DIR_ENV;
use roi_ledger_core::time::month_label_for;
use roi_ledger_core::{
    DetachedStore, EntryInput, FileKeyValueStore, KeyValueStore, Ledger, LedgerConfig,
    StoreSeriesRepository, EXPORT_FILE_NAME,
};
use tracing::info;

use crate::format::format_number;
use crate::logging::{LogTarget, LOG_FILE_NAME};

type CliLedger = Ledger<StoreSeriesRepository<Box<dyn KeyValueStore>>>;

#[derive(Parser)]
#[command(name = "roi-ledger")]
#[command(about = "Track the return on investment of test automation", long_about = None)]
struct Cli {
    /// Directory holding the persisted series (default: ~/.roi-ledger)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Run without a persistent store; nothing is read or written
    #[arg(long, global = true)]
    detached: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Record a month of testing data (usage: add --tests 20 --time 0.5)
    Add {
        /// Number of automated tests
        #[arg(long, allow_hyphen_values = true)]
        tests: String,
        /// Manual test time in hours per test
        #[arg(long, allow_hyphen_values = true)]
        time: String,
        /// Month label to record under, as a name ("Apr") or number ("4");
        /// defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
    /// Show the summary metrics
    Summary {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every recorded data point
    List,
    /// Export the series as pretty-printed JSON ("-" writes to stdout)
    Export {
        #[arg(short, long, default_value = EXPORT_FILE_NAME)]
        output: PathBuf,
    },
    /// Open the interactive dashboard
    Dashboard,
}

fn resolve_month(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u32>() {
        return month_label_for(n).ok_or_else(|| anyhow!("Invalid month number: {}", n));
    }
    if raw.is_empty() {
        return Err(anyhow!("Month label must not be empty"));
    }
    Ok(raw.to_string())
}

fn open_ledger(cli: &Cli) -> Result<(CliLedger, Option<PathBuf>)> {
    if cli.detached {
        let store: Box<dyn KeyValueStore> = Box::new(DetachedStore);
        return Ok((Ledger::initialize(StoreSeriesRepository::new(store)), None));
    }

    let config = LedgerConfig::resolve(cli.data_dir.clone())?;
    let store: Box<dyn KeyValueStore> =
        Box::new(FileKeyValueStore::new(Some(config.data_dir.clone()))?);
    let ledger = Ledger::initialize(StoreSeriesRepository::with_key(store, config.storage_key));
    Ok((ledger, Some(config.data_dir)))
}

fn log_target(cli: &Cli) -> Result<LogTarget> {
    let interactive = matches!(cli.command, None | Some(Commands::Dashboard));
    if !interactive {
        return Ok(LogTarget::Stderr);
    }
    if cli.detached {
        return Ok(LogTarget::Discard);
    }
    let config = LedgerConfig::resolve(cli.data_dir.clone())?;
    Ok(LogTarget::File(config.data_dir.join(LOG_FILE_NAME)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(log_target(&cli)?)?;

    let (mut ledger, data_dir) = open_ledger(&cli)?;
    if let Some(dir) = &data_dir {
        info!(data_dir = %dir.display(), points = ledger.series().len(), "ledger opened");
    }

    match cli.command {
        Some(Commands::Add { tests, time, month }) => {
            let input = EntryInput::parse(&tests, &time)?;
            let point = match month {
                Some(m) => ledger.record_entry_for(resolve_month(&m)?, input),
                None => ledger.record_entry(input),
            };
            println!(
                "Added {}: {} tests, {} hours saved",
                point.month,
                point.tests,
                format_number(point.hours_saved)
            );
            println!();
            listing::show_summary(&ledger.derive_summary());
        }
        Some(Commands::Summary { json }) => {
            let summary = ledger.derive_summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                listing::show_summary(&summary);
            }
        }
        Some(Commands::List) => {
            listing::show_series(ledger.series());
        }
        Some(Commands::Export { output }) => {
            let bytes = ledger.export_series()?;
            if output.as_os_str() == "-" {
                let mut stdout = io::stdout().lock();
                stdout.write_all(&bytes)?;
                writeln!(stdout)?;
            } else {
                fs::write(&output, &bytes)?;
                println!("Exported {} data points to {}", ledger.series().len(), output.display());
            }
        }
        Some(Commands::Dashboard) | None => {
            let mut app = tui::app::App::new(ledger, PathBuf::from(EXPORT_FILE_NAME));
            tui::run(&mut app)?;
        }
    }
    Ok(())
}
