use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lesscolors::cli::{Cli, Commands};
use lesscolors::config::AppConfig;
use lesscolors::pipeline;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lesscolors=info,less_colors=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = AppConfig::load(cli.config.as_deref());

    match cli.command {
        Commands::Reduce(args) => {
            let job = args.into_job(&config)?;
            let report = pipeline::run(&job)?;
            tracing::debug!(
                width = report.width,
                height = report.height,
                palette = report.palette_len,
                colors_used = report.stats.colors_used,
                "Reduce finished"
            );
            println!(
                "Successfully finished in {} ms.",
                report.elapsed.as_millis()
            );
        }
        Commands::Palette { source, unique } => {
            let source = source.resolve(&config)?;
            for hex in pipeline::palette_listing(&source, unique)? {
                println!("{hex}");
            }
        }
    }

    Ok(())
}
