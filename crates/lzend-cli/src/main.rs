use anyhow::Context;
use clap::Parser;
use std::fs;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "lzend")]
#[command(version = "0.1.0")]
#[command(about = "Compute the LZ-End parsing of a file", long_about = None)]
struct Cli {
    /// Input file
    file: String,

    /// Suppress per-stage progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing: use RUST_LOG if set, otherwise default to info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let text = fs::read(&cli.file).with_context(|| format!("failed to read {}", cli.file))?;
    info!("read {} bytes from {}", text.len(), cli.file);

    let t0 = Instant::now();
    let parsing = lzend_lib::parse(&text, !cli.quiet)?;
    let elapsed = t0.elapsed().as_millis();

    println!("-> z={} ({} ms)", parsing.len(), elapsed);
    Ok(())
}
