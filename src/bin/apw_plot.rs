use std::path::PathBuf;

use clap::Parser;
use polar_wander::plot::{FigureOptions, render_comparison};
use polar_wander::track::read_track;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the drift/APW comparison figure from an exported track CSV"
)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "artifacts/polar_wander.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 500)]
    height: u32,
    /// Extra title line (repeatable)
    #[arg(long)]
    title: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let result = read_track(&cli.input)?;

    let mut options = FigureOptions::default();
    options.width = cli.width;
    options.height = cli.height;
    options.title.extend(cli.title);

    render_comparison(&result, &cli.output, &options)?;
    println!("Saved simulation figure to {}", cli.output.display());
    Ok(())
}
