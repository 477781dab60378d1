//! K2Motor: marketplace advertising performance dashboard.
//!
//! Loads campaign, attribution and product exports, validates them, and
//! prints KPIs and scenario alerts as JSON or a text dashboard.

mod render;

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use k2motor_core::config::{AppConfig, DataConfig};
use k2motor_core::types::{Alert, DashboardKpis};
use k2motor_reporting::{DashboardMetrics, Dataset, MetricsEngine};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::render::DashboardRenderer;

#[derive(Parser, Debug)]
#[command(name = "k2motor")]
#[command(about = "Advertising performance dashboard for marketplace campaigns")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Optional TOML config file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Directory holding the JSON exports (overrides config)
    #[arg(long, global = true, env = "K2MOTOR__DATA__DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print run metrics in Prometheus text format to stderr on exit
    #[arg(long, global = true, default_value_t = false)]
    print_metrics: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Dashboard-wide KPIs
    Kpis,
    /// Scenario alerts per campaign
    Alerts,
    /// KPIs and alerts together
    Report,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Text,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportEnvelope {
    generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kpis: Option<DashboardKpis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alerts: Option<Vec<Alert>>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "k2motor=info,k2motor_reporting=info".into()),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let metrics_handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, "Failed to install metrics recorder");
            None
        }
    };

    let mut config = AppConfig::load(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    if let Some(dir) = &cli.data_dir {
        config.data.dir = dir.display().to_string();
    }

    info!(
        data_dir = %config.data.dir,
        high_roas = config.alerts.high_roas,
        max_bounce_rate = config.alerts.max_bounce_rate,
        "Configuration loaded"
    );

    let data = load_dataset(&config.data)?;
    let engine = MetricsEngine::new(config.alerts);

    let (kpis, alerts) = match cli.command {
        Command::Kpis => (Some(engine.kpis(&data)), None),
        Command::Alerts => (None, Some(engine.alerts(&data))),
        Command::Report => (Some(engine.kpis(&data)), Some(engine.alerts(&data))),
    };
    if let Some(alerts) = &alerts {
        metrics::counter!("alerts.emitted").increment(alerts.len() as u64);
        info!(alerts = alerts.len(), "Scenario alerts evaluated");
    }

    let output = match cli.format {
        Format::Json => serde_json::to_string_pretty(&ReportEnvelope {
            generated_at: Utc::now(),
            kpis,
            alerts,
        })?,
        Format::Text => {
            let renderer = DashboardRenderer::new(Some(&engine as &dyn DashboardMetrics));
            match cli.command {
                Command::Kpis => renderer.render_kpis(&data),
                Command::Alerts => renderer.render_alerts(&data),
                Command::Report => renderer.render(&data),
            }
        }
    };
    println!("{output}");

    if let Some(handle) = metrics_handle {
        let snapshot = handle.render();
        if cli.print_metrics {
            eprintln!("{snapshot}");
        } else {
            debug!(metrics = %snapshot, "Run metrics");
        }
    }

    Ok(())
}

fn load_dataset(config: &DataConfig) -> anyhow::Result<Dataset> {
    let dir = Path::new(&config.dir);
    let campaigns = read_export(&dir.join(&config.campaigns_file))?;
    let attribution = read_export(&dir.join(&config.attribution_file))?;
    let products = read_export(&dir.join(&config.products_file))?;

    let data = Dataset::from_json(&campaigns, &attribution, &products)
        .with_context(|| format!("invalid records in {}", dir.display()))?;
    metrics::counter!("records.loaded").increment(
        (data.campaigns().len() + data.attribution().len() + data.products().len()) as u64,
    );
    Ok(data)
}

fn read_export(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
