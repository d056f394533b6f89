// rosvalue entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr)
// 2. Resolve the base directory (first argument, else the current directory)
// 3. Load config, copying defaults on first run
// 4. Fetch supplies, compute metrics, write both CSV tables
// 5. Print the summary to stdout

use anyhow::Context;
use rosvalue_app::{config, run};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let base_dir = match std::env::args_os().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    info!("rosvalue starting in {}", base_dir.display());

    let config = config::load_config_in(&base_dir).context("failed to load configuration")?;
    info!(
        "Config loaded: {} teams, replacement sample {}",
        config.league.teams, config.league.replacement_sample
    );

    let output = run::run(&config, &base_dir).await?;

    for line in run::summary_lines(&output.report, config.output.summary_rows) {
        println!("{line}");
    }
    println!(
        "Wrote {} and {}",
        output.metrics_path.display(),
        output.replacement_pool_path.display()
    );

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rosvalue=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
