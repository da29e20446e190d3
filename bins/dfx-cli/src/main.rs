//! dfx-cli: Command-line harness for the DeFindex revenue calculator.
//!
//! Drives the scale mapper and revenue model with literal inputs, and
//! captures leads into the local JSON store.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dfx_core::constants::{DEFAULT_ACTIVE_USERS, DEFAULT_AVG_BALANCE, DEFAULT_OPT_IN_RATE};
use dfx_core::traits::RevenueCalculator;
use dfx_core::types::{Inputs, RevenueResult};
use dfx_leads::{JsonFileStore, LeadCapture, LeadForm};
use dfx_model::format::{format_currency, format_decimal, format_number, format_percent};
use dfx_model::{LogScale, RevenueModel, Tween};
use tracing::debug;

mod config;

use config::Config;

/// DeFindex integration revenue calculator.
#[derive(Parser)]
#[command(name = "dfx-cli")]
#[command(version, about = "See how much your wallet or app could earn by offering stablecoin yield.")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project TVL, partner revenue and ROI for a set of inputs.
    Revenue(RevenueArgs),
    /// Convert between slider positions and active-user counts.
    Scale {
        #[command(subcommand)]
        action: ScaleAction,
    },
    /// Capture and inspect leads.
    Lead {
        #[command(subcommand)]
        action: LeadAction,
    },
}

#[derive(Args)]
struct RevenueArgs {
    /// Active users of the wallet or app.
    #[arg(short = 'u', long, default_value_t = DEFAULT_ACTIVE_USERS)]
    active_users: u64,

    /// Average stablecoin balance per user, in dollars.
    #[arg(short = 'b', long, default_value_t = DEFAULT_AVG_BALANCE)]
    avg_balance: f64,

    /// Percentage of users who would opt into yield (0-100).
    #[arg(short = 'r', long, default_value_t = DEFAULT_OPT_IN_RATE)]
    opt_in_rate: f64,

    /// Print the full result as JSON.
    #[arg(long, conflicts_with = "animate")]
    json: bool,

    /// Count the TVL up from zero before printing the breakdown.
    #[arg(long)]
    animate: bool,
}

#[derive(Subcommand)]
enum ScaleAction {
    /// Active-user count for a slider position in [0, 100].
    ToValue {
        /// Slider position.
        #[arg(allow_negative_numbers = true)]
        position: f64,
    },
    /// Slider position for an active-user count.
    ToPosition {
        /// Active-user count (must be positive).
        value: f64,
    },
}

#[derive(Subcommand)]
enum LeadAction {
    /// Validate and store a contact submission.
    Submit(LeadSubmitArgs),
    /// List stored submissions.
    List(LeadListArgs),
}

#[derive(Args)]
struct LeadSubmitArgs {
    /// Contact name.
    #[arg(long, default_value = "")]
    name: String,

    /// Contact email.
    #[arg(long, default_value = "")]
    email: String,

    /// Company name.
    #[arg(long, default_value = "")]
    company: String,

    /// Telegram handle (optional).
    #[arg(long, default_value = "")]
    telegram: String,

    /// Lead store directory (default: $DFX_LEADS_DIR or <data dir>/defindex).
    #[arg(long)]
    store_dir: Option<PathBuf>,
}

#[derive(Args)]
struct LeadListArgs {
    /// Lead store directory (default: $DFX_LEADS_DIR or <data dir>/defindex).
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Print leads as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_format);

    let config = Config::from_env().context("Failed to load configuration")?;
    debug!(leads_dir = %config.leads_dir.display(), "configuration loaded");

    match cli.command {
        Commands::Revenue(args) => revenue(args, &config),
        Commands::Scale { action } => scale(action),
        Commands::Lead { action } => match action {
            LeadAction::Submit(args) => lead_submit(args, &config),
            LeadAction::List(args) => lead_list(args, &config),
        },
    }
}

/// Compute and print a revenue projection.
fn revenue(args: RevenueArgs, config: &Config) -> Result<()> {
    let model = RevenueModel::with_params(config.model.clone())
        .context("Invalid revenue model configuration")?;
    let inputs = Inputs::new(args.active_users, args.avg_balance, args.opt_in_rate);
    let result = model
        .compute_revenue(&inputs)
        .context("Cannot project revenue for these inputs")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if args.animate {
        animate_tvl(result.total_value_locked)?;
    }
    print_revenue(&result, model.params().partner_share_pct);
    Ok(())
}

fn animate_tvl(target: f64) -> Result<()> {
    let tween = Tween::new(0.0, target);
    let interval = tween.frame_interval();
    let mut stdout = std::io::stdout();
    for frame in tween {
        write!(stdout, "\rTotal Value Locked: {}", format_currency(frame))?;
        stdout.flush()?;
        std::thread::sleep(interval);
    }
    writeln!(stdout)?;
    Ok(())
}

fn print_revenue(result: &RevenueResult, partner_share_pct: f64) {
    let inputs = &result.inputs;
    println!("=== REVENUE PROJECTION ===");
    println!(
        "Inputs: {} active users, {} average balance, {} opt-in",
        format_number(inputs.active_users),
        format_currency(inputs.avg_balance),
        format_percent(inputs.opt_in_rate, 0)
    );
    println!(
        "Total Value Locked: {} ({} participating users)",
        format_currency(result.total_value_locked),
        format_number(result.participating_users)
    );

    println!(
        "\nRevenue projections ({} partner revenue share)",
        format_percent(partner_share_pct, 0)
    );
    for p in &result.scenarios {
        let badge = if p.scenario.recommended { "  LIKELIEST" } else { "" };
        println!(
            "  {:<14} {:>4} APY  {:>12}/month  {:>14}/year{}",
            p.scenario.name,
            format_percent(p.scenario.apy_pct, 0),
            format_currency(p.revenue.monthly_revenue),
            format_currency(p.revenue.annual_revenue),
            badge
        );
    }

    let reference = &result.reference_scenario;
    println!(
        "\nROI analysis ({} scenario, {} APY)",
        reference.name,
        format_percent(reference.apy_pct, 0)
    );
    println!("  Integration cost:   {}", format_currency(result.integration_cost));
    println!("  Payback period:     {} weeks", format_decimal(result.payback_weeks(), 1));
    if result.roi.is_fast_payback() {
        println!("                      Ultra-fast payback!");
    }
    println!(
        "  First-year margin:  {}",
        format_percent(result.first_year_profit_margin_pct(), 1)
    );
}

/// Convert between slider positions and active-user counts.
fn scale(action: ScaleAction) -> Result<()> {
    let scale = LogScale::ACTIVE_USERS;
    match action {
        ScaleAction::ToValue { position } => {
            println!("{}", format_number(scale.linear_to_count(position)));
        }
        ScaleAction::ToPosition { value } => {
            let position = scale
                .checked_value_to_linear(value)
                .context("Cannot place value on the active-user slider")?;
            println!("{}", format_decimal(position, 2));
        }
    }
    Ok(())
}

fn lead_store(dir: Option<PathBuf>, config: &Config) -> JsonFileStore {
    JsonFileStore::new(dir.unwrap_or_else(|| config.leads_dir.clone()))
}

/// Validate and persist a lead.
fn lead_submit(args: LeadSubmitArgs, config: &Config) -> Result<()> {
    let store = lead_store(args.store_dir, config);
    let path = store.collection_path(dfx_core::constants::LEADS_COLLECTION)?;
    let capture = LeadCapture::new(store);

    let form = LeadForm {
        name: args.name,
        email: args.email,
        company: args.company,
        telegram: args.telegram,
    };
    let lead = capture.submit(form).context("Lead not saved")?;

    println!("Thank you, {}!", lead.name);
    println!("Lead saved to: {}", path.display());
    Ok(())
}

/// Print every stored lead.
fn lead_list(args: LeadListArgs, config: &Config) -> Result<()> {
    let capture = LeadCapture::new(lead_store(args.store_dir, config));
    let leads = capture.leads().context("Failed to read leads")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&leads)?);
        return Ok(());
    }

    if leads.is_empty() {
        println!("No leads captured yet.");
        return Ok(());
    }
    for lead in &leads {
        let telegram = lead
            .telegram
            .as_deref()
            .map(|t| format!(" @{t}"))
            .unwrap_or_default();
        println!(
            "{}  {} <{}> {}{}",
            lead.timestamp.to_rfc3339(),
            lead.name,
            lead.email,
            lead.company,
            telegram
        );
    }
    println!("{} lead(s)", leads.len());
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so `--json` output on stdout stays machine-readable.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
