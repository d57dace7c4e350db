use analytics::{AnalyticsEngine, DashboardReport, filter};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::Config;
use core_types::{FilterSelection, Unit};
use dataset::Dataset;
use rust_decimal::Decimal;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Atlas sales-analytics application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load the application configuration (dataset path, server address).
    let config = configuration::load_config()?;
    tracing::info!(dataset = %config.dataset.path.display(), "Configuration loaded.");

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, config),
        Commands::Serve(args) => handle_serve(args, config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A sales-analytics engine: filter the sales table and derive the dashboard
/// aggregates for a chosen unit.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary metrics and ranked tables for a filtered view.
    Report(ReportArgs),
    /// Serve the dashboard aggregates over HTTP.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// The unit page to derive: "value" or "quantity".
    #[arg(long, default_value = "value")]
    unit: Unit,

    /// Restrict to these countries (repeatable).
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Restrict to these years (repeatable).
    #[arg(long = "year")]
    years: Vec<i32>,

    /// Restrict to these main types (repeatable).
    #[arg(long = "main-type")]
    main_types: Vec<String>,

    /// Restrict to these brands (repeatable).
    #[arg(long = "brand")]
    brands: Vec<String>,

    /// Restrict to these items (repeatable).
    #[arg(long = "item")]
    items: Vec<String>,
}

#[derive(Parser)]
struct ServeArgs {
    /// Address to bind, e.g. 127.0.0.1:8080. Defaults to the configured one.
    #[arg(long)]
    listen: Option<SocketAddr>,
}

impl ReportArgs {
    fn selection(&self) -> FilterSelection {
        FilterSelection {
            countries: self.countries.iter().cloned().collect(),
            years: self.years.iter().copied().collect(),
            main_types: self.main_types.iter().cloned().collect(),
            brands: self.brands.iter().cloned().collect(),
            items: self.items.iter().cloned().collect(),
        }
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Loads the dataset, applies the CLI filter selection, and prints the
/// derived report to the terminal.
fn handle_report(args: ReportArgs, config: Config) -> anyhow::Result<()> {
    let dataset = Dataset::load(&config.dataset.path)?;
    let engine = AnalyticsEngine::with_top_n(config.analytics.top_n);

    let subset = filter(dataset.records(), &args.selection());
    let report = engine.dashboard(&subset, args.unit);

    print_report(&report, subset.len());
    Ok(())
}

fn print_report(report: &DashboardReport, rows: usize) {
    let unit = report.unit;
    println!("=== Sales {unit} report ({rows} records) ===");
    println!("Total {unit}:            {}", fmt_amount(report.summary.total));
    println!("Total Target {unit}:     {}", fmt_amount(report.summary.total_target));
    println!("Total Last Year {unit}:  {}", fmt_amount(report.summary.total_last_year));
    println!("Growth:               {}", fmt_pct(report.summary.growth_pct));
    println!("Achievement:          {}", fmt_pct(report.summary.achievement_pct));

    let mut countries = Table::new();
    countries.set_header(vec!["Country", unit.label()]);
    for row in &report.country_totals {
        countries.add_row(vec![row.key.clone(), fmt_amount(row.total)]);
    }
    println!("\nTotals by country:\n{countries}");

    let mut bricks = Table::new();
    bricks.set_header(vec!["Country - Brick", unit.label()]);
    for row in &report.top_bricks {
        bricks.add_row(vec![row.label.clone(), fmt_amount(row.total)]);
    }
    println!("\nTop bricks:\n{bricks}");

    let mut employees = Table::new();
    employees.set_header(vec!["Employee", unit.label()]);
    for row in &report.top_employees {
        employees.add_row(vec![row.label.clone(), fmt_amount(row.total)]);
    }
    println!("\nTop employees:\n{employees}");
}

fn fmt_amount(amount: Decimal) -> String {
    amount.round_dp(1).to_string()
}

fn fmt_pct(pct: Option<Decimal>) -> String {
    match pct {
        Some(pct) => format!("{}%", pct.round_dp(1)),
        None => "N/A".to_string(),
    }
}

/// Loads the dataset and runs the HTTP API until interrupted.
async fn handle_serve(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let addr = match args.listen {
        Some(addr) => addr,
        None => format!("{}:{}", config.server.host, config.server.port).parse()?,
    };

    let dataset = Arc::new(Dataset::load(&config.dataset.path)?);
    let engine = AnalyticsEngine::with_top_n(config.analytics.top_n);

    web_server::run_server(addr, dataset, engine).await
}
