// advisor-overlay: price series in, advisor chart overlay JSON out
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use engine::config::OverlaySettings;
use engine::data::{self, InputFormat};
use engine::error::EngineError;
use engine::{build_overlay, render};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Computes moving averages, Bollinger bands and crossover signals for a
/// closing-price series and maps them onto a fixed plotting canvas.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Price series file (`.csv`, or JSON in any other case). Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Force the input format instead of guessing from the file extension.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// JSON settings file; flags below override its values.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Fast moving-average window.
    #[arg(long)]
    fast: Option<usize>,

    /// Slow moving-average window.
    #[arg(long)]
    slow: Option<usize>,

    /// Bollinger window.
    #[arg(long)]
    bb_period: Option<usize>,

    /// Bollinger width multiplier.
    #[arg(long)]
    bb_k: Option<f64>,

    /// Canvas width in logical units.
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height in logical units.
    #[arg(long)]
    height: Option<f64>,

    /// Overlays to leave out of the SVG (repeatable).
    #[arg(long, value_enum)]
    hide: Vec<Overlay>,

    /// Also write the chart as a standalone SVG document.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
enum Overlay {
    Price,
    Fast,
    Slow,
    Bollinger,
    Signals,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the JSON document.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            let input_error = err
                .downcast_ref::<EngineError>()
                .is_some_and(EngineError::is_input_error);
            if input_error {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = settings_from(&cli)?;

    let format = cli.format.map(|f| match f {
        FormatArg::Json => InputFormat::Json,
        FormatArg::Csv => InputFormat::Csv,
    });
    let advisor = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let format = format.unwrap_or_else(|| InputFormat::from_path(path));
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open price series '{}'", path.display()))?;
            data::load_from_reader(std::io::BufReader::new(file), format)?
        }
        _ => data::load_from_reader(std::io::stdin().lock(), format.unwrap_or(InputFormat::Json))?,
    };
    info!(
        ticker = advisor.ticker.as_deref().unwrap_or("-"),
        points = advisor.chart.len(),
        "Loaded price series"
    );

    let chart = build_overlay(&advisor.chart, &settings);
    info!(signals = chart.signals.len(), "Overlay computed");

    if let Some(path) = &cli.svg {
        let svg = render::render_svg(&chart, &settings.visibility);
        std::fs::write(path, svg)
            .with_context(|| format!("Failed to write SVG to '{}'", path.display()))?;
        info!(path = %path.display(), "Wrote SVG chart");
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&chart)?
    } else {
        serde_json::to_string(&chart)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

fn settings_from(cli: &Cli) -> Result<OverlaySettings> {
    let mut settings = match &cli.config {
        Some(path) => OverlaySettings::load_from_file(path)
            .with_context(|| format!("Failed to load settings from '{}'", path.display()))?,
        None => OverlaySettings::default(),
    };

    if let Some(fast) = cli.fast {
        settings.fast_period = fast;
    }
    if let Some(slow) = cli.slow {
        settings.slow_period = slow;
    }
    if let Some(period) = cli.bb_period {
        settings.bollinger_period = period;
    }
    if let Some(k) = cli.bb_k {
        settings.bollinger_k = k;
    }
    if let Some(width) = cli.width {
        settings.canvas.width = width;
    }
    if let Some(height) = cli.height {
        settings.canvas.height = height;
    }
    for overlay in &cli.hide {
        match overlay {
            Overlay::Price => settings.visibility.price = false,
            Overlay::Fast => settings.visibility.fast = false,
            Overlay::Slow => settings.visibility.slow = false,
            Overlay::Bollinger => settings.visibility.bollinger = false,
            Overlay::Signals => settings.visibility.signals = false,
        }
    }

    settings.validate()?;
    Ok(settings)
}
