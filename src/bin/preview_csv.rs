use clap::Parser;
use shipment_bridge::core::{normalizer, transformer};
use shipment_bridge::utils::logger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "preview-csv")]
#[command(about = "Show the shipment payload a CSV export would produce, without sending it")]
struct Args {
    /// Path to the back-office CSV export
    file: PathBuf,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_logger(args.verbose, false);

    tracing::info!("📁 Reading export from: {}", args.file.display());
    let rows = normalizer::load_export(&args.file)?;
    let result = transformer::transform(&rows);

    tracing::info!(
        "🔍 {} rows -> {} records ({} without PO, {} unparseable, {} duplicates)",
        result.summary.rows_read,
        result.summary.emitted,
        result.summary.missing_po,
        result.summary.unparseable_order,
        result.summary.duplicates
    );

    let payload = if args.compact {
        serde_json::to_string(&result.records)?
    } else {
        serde_json::to_string_pretty(&result.records)?
    };
    println!("{}", payload);

    Ok(())
}
