//! Command-line interface components.

use crate::archive::load_data_file_with;
use crate::config::ReaderConfig;
use crate::constants::output_files;
use crate::models::{Observation, PeriodFilter, YearFilter};
use crate::processor::ObservationSet;
use crate::taxonomy::TaxonomyTable;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "ebird-mydata")]
#[command(about = "Summarise an eBird \"Download My Data\" export: life list, year lists and groupings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the export ZIP downloaded from eBird
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Year to report, or "life" for every year
    #[arg(short, long, default_value = "life")]
    pub year: YearFilter,

    /// Restrict the report to one month (1-12)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// List every countable sighting instead of the first per species
    #[arg(long)]
    pub all_observations: bool,

    /// Print the months that contain countable sightings
    #[arg(long)]
    pub months: bool,

    /// Family range table: ranged JSON, or a reference taxonomy CSV
    #[arg(short, long)]
    pub taxonomy: Option<PathBuf>,

    /// Directory to write JSON exports to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Reject records without a scientific name or taxonomic order
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Period selected by `--year` and `--month`
    pub fn period(&self) -> PeriodFilter {
        PeriodFilter {
            year: self.year,
            month: self.month,
        }
    }
}

/// How a run finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// The archive has no member with the configured name
    MemberMissing,
}

/// Load configuration (file, then CLI overrides) and validate it
pub fn load_configuration(args: &Args) -> Result<ReaderConfig> {
    let mut config = ReaderConfig::load(args.config.as_deref())?;

    if args.strict {
        config.parsing.strict_validation = true;
    }
    if args.verbose {
        config.logging.level = "debug".to_string();
    } else if args.quiet {
        config.logging.level = "warn".to_string();
    }

    config.validate()?;
    Ok(config)
}

/// Set up structured logging on stderr
pub fn setup_logging(level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ebird_mydata={}", level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", level);
}

/// Run the report for parsed arguments
pub async fn run(args: Args) -> Result<RunOutcome> {
    let config = load_configuration(&args)?;
    setup_logging(&config.logging.level, args.quiet);

    let csv_data = load_data_file_with(args.archive.clone(), &config.archive)
        .await
        .with_context(|| format!("Failed to read archive {}", args.archive.display()))?;
    let Some(csv_data) = csv_data else {
        eprintln!(
            "{} {} does not contain {}",
            "Error:".bright_red().bold(),
            args.archive.display(),
            config.archive.member_name
        );
        return Ok(RunOutcome::MemberMissing);
    };

    let set = ObservationSet::from_csv(&csv_data, &config.parsing)
        .context("Failed to parse eBird CSV data")?;

    let taxonomy = match &args.taxonomy {
        Some(path) => Some(
            TaxonomyTable::load(path)
                .await
                .with_context(|| format!("Failed to load taxonomy from {}", path.display()))?,
        ),
        None => None,
    };

    print_summary(&set);

    let period = args.period();
    let sightings = if args.all_observations {
        set.all_sightings(&period)
    } else {
        set.first_sightings(&period)
    };
    print_sightings(&period, &sightings, args.all_observations);

    if args.months {
        let months = set.months_with_observations(period.year);
        print_months(period.year, &months);
    }

    if let Some(output_dir) = &args.output_dir {
        write_exports(output_dir, &set, taxonomy.as_ref(), config.output.pretty_json).await?;
    }

    Ok(RunOutcome::Completed)
}

fn print_summary(set: &ObservationSet) {
    let stats = set.stats();
    println!("{}", "eBird export summary".bright_green().bold());
    println!(
        "  {} {}",
        "Records:".bright_cyan(),
        stats.total_records.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Species:".bright_cyan(),
        stats.species.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Locations:".bright_cyan(),
        stats.locations.to_string().bright_white().bold()
    );
    if let (Some(first), Some(last)) = (stats.first_date, stats.last_date) {
        println!("  {} {} to {}", "Span:".bright_cyan(), first, last);
    }
    debug!("{}", stats.summary());
}

fn print_sightings(period: &PeriodFilter, sightings: &[&Observation], all: bool) {
    let heading = match period.month {
        Some(month) => format!("{} / month {}", period.year, month),
        None => period.year.to_string(),
    };
    let kind = if all { "sightings" } else { "species" };
    println!();
    println!(
        "{} {} {}",
        heading.bright_yellow().bold(),
        sightings.len().to_string().bright_white().bold(),
        kind
    );

    for observation in sightings {
        let marker = if observation.is_lifer {
            "LIFER".bright_green().bold().to_string()
        } else if observation.is_first_of_year {
            "FOY".bright_cyan().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {} {} {} {}",
            observation.date.as_deref().unwrap_or("-").bright_black(),
            observation.common_name.bright_white(),
            format!("({})", observation.scientific_name).bright_black(),
            observation.location,
            marker
        );
    }
}

fn print_months(year: YearFilter, months: &[u32]) {
    let listed: Vec<String> = months.iter().map(u32::to_string).collect();
    println!();
    println!(
        "{} {}",
        format!("Months with observations ({}):", year).bright_yellow(),
        if listed.is_empty() {
            "none".to_string()
        } else {
            listed.join(", ")
        }
    );
}

/// Write the annotated list and the groupings as JSON files
pub async fn write_exports(
    output_dir: &Path,
    set: &ObservationSet,
    taxonomy: Option<&TaxonomyTable>,
    pretty: bool,
) -> Result<()> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    write_json(&output_dir.join(output_files::OBSERVATIONS), set.observations(), pretty).await?;
    write_json(&output_dir.join(output_files::SPECIES), &set.by_species(), pretty).await?;
    write_json(&output_dir.join(output_files::LOCATIONS), &set.by_location(), pretty).await?;
    if let Some(taxonomy) = taxonomy {
        write_json(&output_dir.join(output_files::FAMILIES), &set.by_family(taxonomy), pretty)
            .await?;
    }

    info!("Wrote JSON exports to {}", output_dir.display());
    Ok(())
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}
