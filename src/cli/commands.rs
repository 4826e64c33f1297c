use crate::cli::args::{Cli, Commands};
use crate::pipelines::{self, CatalogJob};
use crate::settings::Settings;
use crate::utils::ProgressReporter;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::sync::Mutex;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Commands::Timezones { input, output } => {
            let output = output.unwrap_or(settings.timezone.output);
            info!("Input boundaries: {}", input.display());

            let progress = ProgressReporter::new_spinner("Reading timezone boundaries...", cli.quiet);
            let averages = pipelines::run_timezones(&input, &output, &progress)
                .with_context(|| format!("Failed to average {}", input.display()))?;
            progress.finish_with_message(&format!("Averaged {} timezones", averages.len()));

            println!("Wrote {} timezones to {}", averages.len(), output.display());
        }

        Commands::SwiftDict { input, output } => {
            let input = input.unwrap_or(settings.timezone.output);

            let count = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    pipelines::run_swift_dict(&input, BufWriter::new(file))?
                }
                None => pipelines::run_swift_dict(&input, io::stdout().lock())?,
            };
            info!("Emitted {} Swift dictionary entries", count);
        }

        Commands::Seed { shapefile, output } => {
            let shapefile = shapefile.unwrap_or_else(|| settings.catalog.shapefile.clone());
            let output = output.unwrap_or(settings.seed.output);

            let reader = CatalogJob::from_settings(&settings.catalog, &settings.text).shape_reader();
            let count = pipelines::run_seed(&reader, &shapefile, &output)
                .with_context(|| format!("Failed to seed from {}", shapefile.display()))?;

            println!("Wrote {} features to {}", count, output.display());
        }

        Commands::Catalog {
            shapefile,
            membership,
            desktop_db,
            android_db,
        } => {
            let mut job = CatalogJob::from_settings(&settings.catalog, &settings.text);
            if let Some(path) = shapefile {
                job.shapefile = path;
            }
            if let Some(path) = membership {
                job.membership = path;
            }
            if let Some(path) = desktop_db {
                job.desktop_db = path;
            }
            if let Some(path) = android_db {
                job.android_db = path;
            }

            let progress = ProgressReporter::new_spinner("Building lunar catalog...", cli.quiet);
            let report = job.run(&progress).await.context("Catalog build failed")?;
            progress.finish_with_message("Catalog complete");

            println!("\n{}", report.summary.generate_summary());
            for file in &report.files {
                println!("{}", file.summary());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}
