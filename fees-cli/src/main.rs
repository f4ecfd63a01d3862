use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use fees_core::WeekYear;
use fees_report::{PivotRow, Session, share_by_type, summarize};
use std::path::{Path, PathBuf};

mod config;
mod export;
mod fmt;
mod logging;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "fees",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FEES_BUILD_SHA"), ")"),
    about = "School fee collection analytics"
)]
struct Cli {
    /// Config file (default: ~/.fees/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List dates that have payments
    Dates {
        /// Fee export (.xlsx, .xls, .ods or .csv)
        #[arg(long)]
        file: PathBuf,
    },

    /// Payment summary and distribution for one date
    Daily {
        #[arg(long)]
        file: PathBuf,

        /// YYYY-MM-DD (default: earliest date in the file)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List one date's records with their cleaned values
    Records {
        #[arg(long)]
        file: PathBuf,

        /// YYYY-MM-DD (default: earliest date in the file)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Write one date's records to CSV
    Export {
        #[arg(long)]
        file: PathBuf,

        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output path (default: school_fees_data_<date>.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Monthly and weekly totals per payment type
    Periods {
        #[arg(long)]
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = View::Both)]
        view: View,

        /// Override the configured weekly year policy (calendar or iso)
        #[arg(long)]
        week_year: Option<WeekYear>,
    },

    /// Whole-file totals
    Overview {
        #[arg(long)]
        file: PathBuf,
    },

    /// Manage ~/.fees/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file
    Init,
    /// Print the effective config
    Show,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Monthly,
    Weekly,
    Both,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(config_path)?,
            ConfigCommand::Show => {
                let cfg = config::load_config(config_path)?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },

        Command::Dates { file } => {
            let cfg = config::load_config(config_path)?;
            let session = open_session(&file, &cfg)?;
            let dates = session.available_dates();
            println!("{} dates with payments in {}\n", dates.len(), file.display());
            for d in &dates {
                let n = session.records_on(*d).len();
                println!("{}  {:>6} records", d, fmt::count(n));
            }
            let undated = session.dataset().undated_count();
            if undated > 0 {
                println!("\n{} records have no usable date", fmt::count(undated));
            }
        }

        Command::Daily { file, date } => {
            let cfg = config::load_config(config_path)?;
            let session = open_session(&file, &cfg)?;
            let Some(date) = session.resolve_date(date) else {
                bail!("no dated records in {}", file.display());
            };
            daily(&session, date, &cfg)?;
        }

        Command::Records { file, date } => {
            let cfg = config::load_config(config_path)?;
            let session = open_session(&file, &cfg)?;
            let Some(date) = session.resolve_date(date) else {
                bail!("no dated records in {}", file.display());
            };

            let records = session.records_on(date);
            if records.is_empty() {
                println!("No records for {date}");
                return Ok(());
            }
            println!("{} records for {}\n", records.len(), date);
            print_records(&session, &records, &cfg);
        }

        Command::Export { file, date, out } => {
            let cfg = config::load_config(config_path)?;
            let session = open_session(&file, &cfg)?;
            let Some(date) = session.resolve_date(date) else {
                bail!("no dated records in {}", file.display());
            };

            let records = session.records_on(date);
            if records.is_empty() {
                println!("No records for {date}");
                return Ok(());
            }

            print_summary(&summarize(records.iter().copied()), &cfg.report.currency_symbol);
            println!("\nFound {} records for {}\n", records.len(), date);
            print_records(&session, &records, &cfg);

            let out = out.unwrap_or_else(|| export::default_export_path(date));
            export::export_to_path(&out, &session.dataset().headers, &records, &cfg.ingest.columns)?;
            println!("Wrote {}", out.display());
        }

        Command::Periods { file, view, week_year } => {
            let cfg = config::load_config(config_path)?;
            let week_year = week_year.unwrap_or(cfg.report.week_year);
            let session = open_session(&file, &cfg)?.with_week_year(week_year);
            let sym = &cfg.report.currency_symbol;

            if matches!(view, View::Monthly | View::Both) {
                println!("## Monthly Summary\n");
                print_pivot(&session.monthly_pivot(), sym);
                println!();
            }
            if matches!(view, View::Weekly | View::Both) {
                println!("## Weekly Summary\n");
                print_pivot(&session.weekly_pivot(), sym);
                println!();
            }
        }

        Command::Overview { file } => {
            let cfg = config::load_config(config_path)?;
            let session = open_session(&file, &cfg)?;
            let m = session.metrics();
            let sym = &cfg.report.currency_symbol;
            println!("Total Collection    {}", fmt::money(sym, m.total_collection));
            println!("Total Transactions  {}", fmt::count(m.total_transactions));
            println!("Active Days         {}", fmt::count(m.active_days));
        }
    }

    Ok(())
}

fn open_session(file: &Path, cfg: &Config) -> Result<Session> {
    if !file.exists() {
        bail!("file not found: {} (pass --file <path>)", file.display());
    }
    let session = Session::load(file, &cfg.ingest)
        .with_context(|| format!("loading {}", file.display()))?;
    Ok(session.with_week_year(cfg.report.week_year))
}

fn daily(session: &Session, date: NaiveDate, cfg: &Config) -> Result<()> {
    let sym = &cfg.report.currency_symbol;
    let records = session.records_on(date);
    if records.is_empty() {
        println!("No records for {date}");
        return Ok(());
    }

    println!("# Daily Payment Analytics: {date}\n");
    let summary = session.summary(Some(date));
    print_summary(&summary, sym);

    let m = session.daily(date);
    println!("\nTotal Paid Amount   {}", fmt::money(sym, m.total_amount));
    println!("Total Transactions  {}", fmt::count(m.transactions));

    let shares = share_by_type(&summary);
    if !shares.is_empty() {
        println!("\n## Payment Type Distribution\n");
        for (t, share) in shares {
            println!("{:<8} {:>7}", t.as_str(), fmt::percent(share));
        }
    }
    Ok(())
}

fn print_records(session: &Session, records: &[&fees_core::CleanRecord], cfg: &Config) {
    let rows = export::record_rows(&session.dataset().headers, records, &cfg.ingest.columns);
    print!("{}", export::format_listing(&rows));
}

fn print_summary(
    summary: &std::collections::BTreeMap<fees_core::PaymentType, fees_report::PaymentSummary>,
    sym: &str,
) {
    println!("{:<14} {:>18} {:>24}", "Payment Type", "Total Amount", "Number of Transactions");
    for (t, s) in summary {
        println!(
            "{:<14} {:>18} {:>24}",
            t.as_str(),
            fmt::money(sym, s.total_amount),
            fmt::count(s.transaction_count)
        );
    }
}

fn print_pivot(rows: &[PivotRow], sym: &str) {
    if rows.is_empty() {
        println!("(no dated records)");
        return;
    }
    println!(
        "{:<16} {:>16} {:>16} {:>16} {:>16}",
        "Period", "CASH", "ONLINE", "OTHER", "Total"
    );
    for r in rows {
        println!(
            "{:<16} {:>16} {:>16} {:>16} {:>16}",
            r.period,
            fmt::money(sym, r.cash),
            fmt::money(sym, r.online),
            fmt::money(sym, r.other),
            fmt::money(sym, r.total)
        );
    }
}
