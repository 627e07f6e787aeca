use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use supplier_scorecard::{
    config::{self, AppConfig},
    db::{self, DbPool},
    period::ScorecardPeriod,
    services::{
        scorecard::{ScorecardReport, ScorecardService},
        variables::VariableService,
    },
    variables::{resolve_path, Metric, NamespaceResolver},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Path checks need no database.
        Commands::ValidatePath(args) => handle_validate_path(&args, cli.json),
        command => {
            let context = CliContext::initialize().await?;
            run(&context, command, cli.json).await?;
            db::close_pool(context.db)
                .await
                .context("failed to close database pool")
        }
    }
}

async fn run(context: &CliContext, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Migrate => handle_migrate(context).await,
        Commands::Seed => handle_seed(context, json).await,
        Commands::Variables => handle_variables(context, json).await,
        Commands::Evaluate(args) => handle_evaluate(context, args, json).await,
        Commands::ValidatePath(args) => handle_validate_path(&args, json),
    }
}

#[derive(Parser)]
#[command(
    name = "scorecard",
    about = "Supplier scorecard variables: validate paths and evaluate metrics",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON when available"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Install the standard variable for every catalogue metric
    Seed,
    /// Check that a variable path names a catalogue metric
    ValidatePath(ValidatePathArgs),
    /// List configured scorecard variables
    Variables,
    /// Evaluate metrics for a supplier over a date range
    Evaluate(EvaluateArgs),
}

#[derive(Args)]
struct ValidatePathArgs {
    #[arg(help = "Bare metric name or dotted path")]
    path: String,
}

#[derive(Args)]
struct EvaluateArgs {
    #[arg(long, help = "Supplier name")]
    supplier: String,
    #[arg(long, help = "Period start date (YYYY-MM-DD)")]
    from: NaiveDate,
    #[arg(long, help = "Period end date (YYYY-MM-DD), inclusive")]
    to: NaiveDate,
    #[arg(
        long = "metric",
        value_parser = parse_metric,
        help = "Metric path to evaluate; repeatable. Defaults to the whole catalogue"
    )]
    metrics: Vec<Metric>,
    #[arg(
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "metrics",
        help = "Evaluate the stored variable records instead of catalogue metrics"
    )]
    configured: bool,
}

fn parse_metric(raw: &str) -> std::result::Result<Metric, String> {
    resolve_path(raw, NamespaceResolver::standard()).map_err(|e| e.to_string())
}

struct CliContext {
    config: AppConfig,
    db: DbPool,
}

impl CliContext {
    async fn initialize() -> Result<Self> {
        let config = config::load_config().context("failed to load application config")?;
        config::init_tracing(config.log_level(), config.json_logs());

        let db_pool = db::establish_connection_from_app_config(&config)
            .await
            .context("failed to connect to database")?;

        if config.auto_migrate {
            db::run_migrations(&db_pool)
                .await
                .context("failed to run migrations")?;
        }

        Ok(Self {
            config,
            db: db_pool,
        })
    }

    fn variable_service(&self) -> VariableService {
        VariableService::new(Arc::new(self.db.clone()))
    }

    fn scorecard_service(&self) -> ScorecardService {
        ScorecardService::new(Arc::new(self.db.clone()))
    }
}

fn handle_validate_path(args: &ValidatePathArgs, json: bool) -> Result<()> {
    #[derive(Serialize)]
    struct PathCheck<'a> {
        path: &'a str,
        metric: Option<&'static str>,
        error: Option<String>,
    }

    let result = resolve_path(&args.path, NamespaceResolver::standard());
    if json {
        print_json(&PathCheck {
            path: &args.path,
            metric: result.as_ref().ok().map(|m| m.path()),
            error: result.as_ref().err().map(|e| e.to_string()),
        })?;
    }

    match result {
        Ok(metric) => {
            if !json {
                println!("{} -> {} ({})", args.path, metric.path(), metric.label());
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn handle_migrate(context: &CliContext) -> Result<()> {
    db::run_migrations(&context.db)
        .await
        .context("failed to run migrations")?;
    println!("Migrations applied to {}", context.config.database_url());
    Ok(())
}

async fn handle_seed(context: &CliContext, json: bool) -> Result<()> {
    let inserted = context
        .variable_service()
        .install_standard_variables()
        .await
        .context("failed to install standard variables")?;

    if json {
        print_json(&serde_json::json!({ "inserted": inserted }))?;
    } else {
        println!("Installed {} standard variables", inserted);
    }
    Ok(())
}

async fn handle_variables(context: &CliContext, json: bool) -> Result<()> {
    let variables = context
        .variable_service()
        .list_variables()
        .await
        .context("failed to list variables")?;

    if json {
        return print_json(&variables);
    }

    if variables.is_empty() {
        println!("No scorecard variables configured. Run `seed` to install the standard set.");
        return Ok(());
    }
    for v in &variables {
        let kind = if v.is_custom { "custom" } else { "standard" };
        println!("- {} • {} • {} • {}", v.name, v.param_name, v.path, kind);
    }
    Ok(())
}

async fn handle_evaluate(context: &CliContext, args: EvaluateArgs, json: bool) -> Result<()> {
    let period = ScorecardPeriod::new(args.supplier, args.from, args.to);
    let service = context.scorecard_service();

    let report = if args.configured {
        service.evaluate_configured(&period).await
    } else if args.metrics.is_empty() {
        service.evaluate_catalogue(&period).await
    } else {
        service.evaluate_metrics(&period, &args.metrics).await
    }
    .with_context(|| format!("failed to evaluate scorecard for {}", period.supplier))?;

    if json {
        print_json(&report)
    } else {
        render_report(&report);
        Ok(())
    }
}

fn render_report(report: &ScorecardReport) {
    println!(
        "Supplier {} • {} to {}",
        report.period.supplier, report.period.start_date, report.period.end_date
    );
    let width = report
        .values
        .iter()
        .map(|v| v.param_name.len())
        .max()
        .unwrap_or(0);
    for v in &report.values {
        println!("  {:<width$}  {}", v.param_name, v.value, width = width);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
