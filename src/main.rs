use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repalette::job;
use repalette::palettes::{PaletteStore, DEFAULT_PALETTE};

#[derive(Parser)]
#[command(name = "repalette")]
#[command(about = "Recolor raster images to the nearest colors of a fixed palette")]
struct Cli {
    /// Input image path (any supported raster format)
    #[arg(required_unless_present = "list_palettes")]
    input: Option<PathBuf>,

    /// Output image path (written as PNG, must not already exist)
    #[arg(required_unless_present = "list_palettes")]
    output: Option<PathBuf>,

    /// Palette to use (built-in name or palettes/<name>.json)
    #[arg(short, long, default_value = DEFAULT_PALETTE)]
    palette: String,

    /// Cap the number of parallel workers (defaults to available CPUs)
    #[arg(long)]
    workers: Option<usize>,

    /// List available palettes and exit
    #[arg(long)]
    list_palettes: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repalette=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let store = PaletteStore::new();

    if cli.list_palettes {
        for name in store.available() {
            println!("{name}");
        }
        return Ok(());
    }

    let (input, output) = match (cli.input, cli.output) {
        (Some(input), Some(output)) => (input, output),
        // clap enforces both positionals unless --list-palettes is given
        _ => bail!("usage: repalette <INPUT> <OUTPUT> [-p PALETTE]"),
    };

    let palette = store.load(&cli.palette)?;

    match cli.workers {
        Some(workers) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()?;
            pool.install(|| job::recolor_file(&input, &output, &palette))?;
        }
        None => job::recolor_file(&input, &output, &palette)?,
    }

    Ok(())
}
