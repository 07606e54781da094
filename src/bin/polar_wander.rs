use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use polar_wander::config::{ScenarioConfig, load_scenarios};
use polar_wander::drift::{self, scenario, simulate};
use polar_wander::export::{sidecar, table, track};
use polar_wander::plot::{FigureOptions, render_comparison};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Simulate how apparent polar wander curves emerge from continental drift under plate tectonics"
)]
struct Cli {
    /// Scenario name from the catalog (defaults to built-in parameters)
    #[arg(long)]
    scenario: Option<String>,

    /// Scenario catalog: a directory of TOML files, one TOML file, or a YAML list
    #[arg(long, default_value = "data/scenarios")]
    catalog: PathBuf,

    /// Plate angular velocity in degrees per million years
    #[arg(long, allow_negative_numbers = true)]
    angular_velocity: Option<f64>,

    /// Latitude of the Euler rotation pole in degrees
    #[arg(long, allow_negative_numbers = true)]
    axis_lat: Option<f64>,

    /// Longitude of the Euler rotation pole in degrees
    #[arg(long, allow_negative_numbers = true)]
    axis_lon: Option<f64>,

    /// Total time span to simulate in million years
    #[arg(long, allow_negative_numbers = true)]
    total_time: Option<f64>,

    /// Number of discrete time steps
    #[arg(long)]
    time_steps: Option<usize>,

    /// Present-day latitude of the continental reference point
    #[arg(long, allow_negative_numbers = true)]
    continent_lat: Option<f64>,

    /// Present-day longitude of the continental reference point
    #[arg(long, allow_negative_numbers = true)]
    continent_lon: Option<f64>,

    /// Path to save the generated figure
    #[arg(long, default_value = "polar_wander_simulation.png")]
    output: PathBuf,

    /// Skip rendering the figure
    #[arg(long, default_value_t = false, conflicts_with = "show")]
    no_plot: bool,

    /// Open the saved figure in the platform image viewer
    #[arg(long, default_value_t = false)]
    show: bool,

    /// Write every sample to this CSV file (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON sidecar with parameters and samples
    #[arg(long)]
    json: Option<PathBuf>,

    /// Maximum number of rows in the console summary table
    #[arg(long, default_value_t = table::DEFAULT_MAX_ROWS)]
    max_rows: usize,

    #[arg(long, default_value_t = 1200)]
    width: u32,

    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let base = match &cli.scenario {
        Some(name) => {
            let catalog = load_scenarios(&cli.catalog)?;
            scenario::select(&catalog, Some(name.as_str()))?
        }
        None => ScenarioConfig::default(),
    };
    let config = apply_overrides(base, &cli);
    info!(scenario = %config.name, "running simulation");

    let (params, reference) = drift::from_config(&config);
    let result = simulate(&params, &reference)?;

    println!("{}", table::format_summary_table(&result, cli.max_rows));

    if let Some(path) = &cli.csv {
        track::write_track(path, &result)?;
        info!(path = %path.display(), "wrote track CSV");
    }
    if let Some(path) = &cli.json {
        sidecar::write_sidecar(path, &config.name, &params, &reference, &result)?;
        info!(path = %path.display(), "wrote JSON sidecar");
    }

    if !cli.no_plot {
        let mut options = FigureOptions::for_parameters(&params);
        options.width = cli.width;
        options.height = cli.height;
        render_comparison(&result, &cli.output, &options)?;
        println!("Saved simulation figure to {}", cli.output.display());

        if cli.show {
            open_viewer(&cli.output);
        }
    }

    Ok(())
}

fn apply_overrides(mut config: ScenarioConfig, cli: &Cli) -> ScenarioConfig {
    if let Some(v) = cli.angular_velocity {
        config.angular_velocity_deg_per_myr = v;
    }
    if let Some(v) = cli.axis_lat {
        config.euler_pole.lat_deg = v;
    }
    if let Some(v) = cli.axis_lon {
        config.euler_pole.lon_deg = v;
    }
    if let Some(v) = cli.total_time {
        config.total_time_myr = v;
    }
    if let Some(v) = cli.time_steps {
        config.time_steps = v;
    }
    if let Some(v) = cli.continent_lat {
        config.reference.lat_deg = v;
    }
    if let Some(v) = cli.continent_lon {
        config.reference.lon_deg = v;
    }
    config
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn open_viewer(path: &Path) {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    };
    if let Err(err) = std::process::Command::new(opener).arg(path).spawn() {
        warn!(%err, opener, "unable to open figure viewer");
    }
}
