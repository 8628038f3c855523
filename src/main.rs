//! Soundbank CLI
//!
//! Renders the analytics dashboard from the command line:
//! - Filtered and sorted data tables
//! - Metric chart series and card grid
//! - Preset date ranges

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use soundbank_analytics::config::{generate_default_config, Config, LoggingConfig};
use soundbank_analytics::range::parse_timestamp;
use soundbank_analytics::{
    Dashboard, DataSource, Metric, Preset, PresetRangeResolver, Tab, Timestamp,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "soundbank")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analytics dashboard for sound catalogs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference time for presets (default: local clock)
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Row source (fixtures, generated)
    #[arg(long, global = true)]
    pub source: Option<DataSource>,

    /// Seed for generated rows and chart values
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a data table
    View {
        /// Tab (sounds, soundpacks, purchasers)
        #[arg(short, long)]
        tab: Option<Tab>,
        /// Case-insensitive search text
        #[arg(short, long, default_value = "")]
        search: String,
        /// Date preset (today, yesterday, 7days, 30days, thisWeek, thisMonth)
        #[arg(short, long)]
        preset: Option<Preset>,
        /// Custom range start
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Custom range end
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Column header clicks, applied in order
        #[arg(long = "sort")]
        sort: Vec<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show the chart series for a metric
    Chart {
        /// Metric id (default: from config)
        metric: Option<Metric>,
        #[arg(short, long)]
        preset: Option<Preset>,
        #[arg(long, requires = "to")]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Bar width in characters
        #[arg(short, long, default_value = "40")]
        width: usize,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show the metric card grid
    Cards {
        /// Highlighted metric
        metric: Option<Metric>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the date presets resolved at the reference time
    Presets,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The logging level comes from the config, so load problems are
    // collected and reported once the subscriber is installed
    let loaded = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_logging(&loaded.config.logging);
    tracing::info!("Soundbank Analytics v{}", env!("CARGO_PKG_VERSION"));
    loaded.log();

    let mut config = loaded.config;
    if let Some(source) = cli.source {
        config.data.source = source;
    }
    if let Some(seed) = cli.seed {
        config.data.seed = seed;
    }

    let now = match &cli.now {
        Some(text) => parse_timestamp(text).context("invalid --now")?,
        None => chrono::Local::now().naive_local(),
    };

    match cli.command {
        Commands::View {
            tab,
            search,
            preset,
            from,
            to,
            sort,
            format,
        } => {
            let mut dashboard = build_dashboard(&config, now);
            apply_range(&mut dashboard, preset, from, to, now)?;
            if let Some(tab) = tab {
                dashboard.select_tab(tab);
            }
            dashboard.set_search_query(search);
            for key in &sort {
                dashboard.request_sort(key);
            }

            let view = dashboard.active_view();
            match format {
                OutputFormat::Table => {
                    println!("{}", dashboard.title());
                    println!("{}", dashboard.description());
                    println!();
                    println!("{} | {}", dashboard.active_tab().label(), dashboard.date_range());
                    if !dashboard.search_query().is_empty() {
                        println!("Search: {}", dashboard.search_query());
                    }
                    println!();
                    print!("{}", view.render_text());
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                OutputFormat::Csv => view.write_csv(std::io::stdout().lock())?,
            }
        }

        Commands::Chart {
            metric,
            preset,
            from,
            to,
            width,
            format,
        } => {
            let mut dashboard = build_dashboard(&config, now);
            apply_range(&mut dashboard, preset, from, to, now)?;
            if let Some(metric) = metric {
                dashboard.select_metric(metric);
            }

            let series = dashboard.chart();
            match format {
                OutputFormat::Table => print!("{}", series.render_text(width)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&series)?),
                OutputFormat::Csv => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout().lock());
                    writer.write_record(["date", series.metric.id()])?;
                    for point in &series.points {
                        writer.write_record([point.date.to_string(), point.value.to_string()])?;
                    }
                    writer.flush()?;
                }
            }
        }

        Commands::Cards { metric, format } => {
            let selected = metric.unwrap_or(config.dashboard.default_metric);
            let cards = soundbank_analytics::metrics::metric_cards(selected);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cards)?),
                _ => {
                    for card in &cards {
                        let marker = if card.selected { "*" } else { " " };
                        println!(
                            "{} {:<20} {:>8}  {}",
                            marker, card.label, card.value, card.change
                        );
                    }
                }
            }
        }

        Commands::Presets => {
            let resolver = PresetRangeResolver::new();
            println!("{:<14} {:<10} {}", "Label", "Value", "Range");
            println!("{}", "-".repeat(60));
            for preset in Preset::all() {
                let range = resolver.initial(*preset, now);
                println!("{:<14} {:<10} {}", preset.label(), preset.value(), range);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "soundbank={level},soundbank_analytics={level}",
            level = config.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_dashboard(config: &Config, now: Timestamp) -> Dashboard {
    let mut provider = config.provider(now);
    Dashboard::new(provider.as_mut(), config.dashboard_options(), now)
}

/// An explicit from/to wins over a preset
fn apply_range(
    dashboard: &mut Dashboard,
    preset: Option<Preset>,
    from: Option<String>,
    to: Option<String>,
    now: Timestamp,
) -> anyhow::Result<()> {
    match (from, to) {
        (Some(from), Some(to)) => {
            let from = parse_timestamp(&from).context("invalid --from")?;
            let to = parse_timestamp(&to).context("invalid --to")?;
            dashboard.select_calendar_range(Some(from), Some(to))?;
        }
        (None, None) => {
            if let Some(preset) = preset {
                dashboard.select_preset(preset, now);
            }
        }
        _ => bail!("--from and --to must be given together"),
    }
    Ok(())
}
