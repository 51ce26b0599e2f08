use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hcard::config::AppConfig;
use hcard::{HeaderCard, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "hcard")]
#[command(version = "0.1.0")]
#[command(about = "Render a calendar-card header for a Jupyter notebook")]
struct Args {
    /// Header title (inserted as-is, may contain HTML)
    title: String,

    /// Keyword shown under the title (repeatable)
    #[arg(short, long = "keyword")]
    keywords: Vec<String>,

    /// URL opened by the link icon next to the title
    #[arg(short, long)]
    link: Option<String>,

    /// Output protocol (defaults to the config file, then evcxr)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Text in the top band of the calendar card
    #[arg(long)]
    label: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the rendered header
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = AppConfig::load();

    let mut theme = config.theme();
    if let Some(label) = &args.label {
        theme = theme.with_label(label);
    }
    let format = args.format.unwrap_or(config.format);

    let mut card = HeaderCard::new(args.title).keywords(args.keywords);
    if let Some(link) = args.link {
        card = card.link(link);
    }

    tracing::info!(?format, "Rendering header");
    let mut sink = format.stdout_sink();
    card.show(&theme, sink.as_mut())
        .context("Failed to display header")?;

    Ok(())
}
