// One valuation run: fetch the three supplies, compute the report, write
// both CSV tables.

use anyhow::Context;
use rosvalue_baseball::{
    compute_metrics_report, MetricsReport, PositionSupply, ProjectionSupply, ScheduleSupply,
    SupplyError, ValuationSettings,
};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::export::export_hitters;
use crate::sources::{PositionFile, ProjectionsClient, StandingsClient};

/// The data sources a run reads from.
#[derive(Clone, Copy)]
pub struct Supplies<'a> {
    pub schedules: &'a dyn ScheduleSupply,
    pub projections: &'a dyn ProjectionSupply,
    pub positions: &'a dyn PositionSupply,
}

/// Output files written by a successful run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub report: MetricsReport,
    pub metrics_path: PathBuf,
    pub replacement_pool_path: PathBuf,
}

/// Fetch all three supplies concurrently and compute the report. Fails
/// without a partial result if any supply fails.
pub async fn collect_report(
    supplies: Supplies<'_>,
    settings: &ValuationSettings,
) -> Result<MetricsReport, SupplyError> {
    let (schedules, projections, positions) = tokio::try_join!(
        supplies.schedules.fetch_schedules(),
        supplies.projections.fetch_projections(),
        supplies.positions.load_positions(),
    )?;
    Ok(compute_metrics_report(
        &projections,
        &schedules,
        &positions,
        settings,
    ))
}

/// Run the pipeline against the configured sources. Relative paths in the
/// config resolve against `base_dir`.
pub async fn run(config: &Config, base_dir: &Path) -> anyhow::Result<RunOutput> {
    let sources = &config.sources;
    let timeout = sources.request_timeout();

    let standings = StandingsClient::new(
        &sources.standings_url,
        &sources.league_ids,
        sources.season_or_current(),
        timeout,
    )
    .context("failed to build standings client")?;
    let projections = ProjectionsClient::new(&sources.projections_url, timeout)
        .context("failed to build projections client")?;
    let positions = PositionFile::new(base_dir.join(&sources.positions_path));

    let supplies = Supplies {
        schedules: &standings,
        projections: &projections,
        positions: &positions,
    };
    let report = collect_report(supplies, &config.league.valuation_settings())
        .await
        .context("failed to collect valuation inputs")?;

    let metrics_path = base_dir.join(&config.output.metrics_path);
    export_hitters(&metrics_path, &report.hitters).context("failed to write metrics table")?;
    info!("wrote {} hitters to {}", report.hitters.len(), metrics_path.display());

    let replacement_pool_path = base_dir.join(&config.output.replacement_pool_path);
    export_hitters(&replacement_pool_path, &report.replacement_pool)
        .context("failed to write replacement pool")?;
    info!(
        "wrote {} replacement candidates to {}",
        report.replacement_pool.len(),
        replacement_pool_path.display()
    );

    Ok(RunOutput {
        report,
        metrics_path,
        replacement_pool_path,
    })
}

/// Human-readable digest: baselines, then the top `rows` hitters.
pub fn summary_lines(report: &MetricsReport, rows: usize) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Replacement level (FP per game):".to_string());
    for b in &report.baselines {
        lines.push(format!(
            "  {:<3} {}",
            b.position,
            format_value(b.replacement_points_per_game)
        ));
    }

    lines.push(format!("Top {} hitters by adjusted VORP per week:", rows));
    for (i, h) in report.hitters.iter().take(rows).enumerate() {
        lines.push(format!(
            "  {:>2}. {:<24} {:<10} {:>7}",
            i + 1,
            h.name(),
            h.eligibility,
            format_value(h.adjusted_vorp_per_week)
        ));
    }
    lines
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}
