//! Two-panel comparison figure: continental drift next to the apparent polar
//! wander path, both in longitude/latitude space.

use std::fs;
use std::path::Path;

use apw_drift::{PlateMotionParameters, SimulationResult};
use apw_sphere::GeoPoint;
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use thiserror::Error;

/// Errors surfaced while rendering a figure.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("cannot plot an empty track")]
    EmptyTrack,
    #[error("output path contains invalid UTF-8")]
    InvalidPath,
    #[error("failed to prepare output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render figure: {0}")]
    Backend(String),
}

fn backend<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Backend(err.to_string())
}

/// Figure size and title lines.
#[derive(Debug, Clone)]
pub struct FigureOptions {
    pub width: u32,
    pub height: u32,
    pub title: Vec<String>,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 500,
            title: vec![
                "Simulated relationship between continental drift and apparent polar wander"
                    .to_string(),
            ],
        }
    }
}

impl FigureOptions {
    /// Title lines naming the Euler pole and angular velocity of `params`.
    pub fn for_parameters(params: &PlateMotionParameters) -> Self {
        let mut options = Self::default();
        options.title.push(format!(
            "Euler pole: ({:.0}°, {:.0}°), Angular velocity: {:.2}°/Myr",
            params.rotation_axis_lat, params.rotation_axis_lon, params.angular_velocity_deg_per_myr
        ));
        options
    }
}

const TAB_BLUE: RGBColor = RGBColor(31, 119, 180);
const TAB_ORANGE: RGBColor = RGBColor(255, 127, 14);
const TAB_RED: RGBColor = RGBColor(214, 39, 40);
const TAB_GREEN: RGBColor = RGBColor(44, 160, 44);

struct Panel<'a> {
    title: &'a str,
    track: &'a [GeoPoint],
    track_color: RGBColor,
    end_color: RGBColor,
}

/// Render the comparison figure to a PNG at `output`.
pub fn render_comparison(
    result: &SimulationResult,
    output: &Path,
    options: &FigureOptions,
) -> Result<(), PlotError> {
    let last = result.last().ok_or(PlotError::EmptyTrack)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = output.to_str().ok_or(PlotError::InvalidPath)?;
    let root = BitMapBackend::new(output_str, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let font_family = select_font_family();
    let title_font = FontDesc::new(font_family, 20.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 14.0, FontStyle::Normal);

    let header_height = 26 * options.title.len() as i32 + 16;
    let (header, body) = root.split_vertically(header_height);
    for (i, line) in options.title.iter().enumerate() {
        header
            .draw(&Text::new(
                line.clone(),
                (20, 8 + 26 * i as i32),
                title_font.clone(),
            ))
            .map_err(backend)?;
    }

    let (left, right) = body.split_horizontally(options.width as i32 / 2);
    let markers = time_markers(result, last.time_myr);
    draw_panel(
        &left,
        &Panel {
            title: "Actual continental drift",
            track: &result.continent,
            track_color: TAB_BLUE,
            end_color: TAB_ORANGE,
        },
        last.time_myr,
        &markers,
        &result.time_myr,
        &label_font,
    )?;
    draw_panel(
        &right,
        &Panel {
            title: "Apparent polar wander path",
            track: &result.apparent_pole,
            track_color: TAB_RED,
            end_color: TAB_GREEN,
        },
        last.time_myr,
        &markers,
        &result.time_myr,
        &label_font,
    )?;

    root.present().map_err(backend)?;
    Ok(())
}

/// Indices of the samples nearest to the start, midpoint and end of the run.
fn time_markers(result: &SimulationResult, total_time_myr: f64) -> Vec<usize> {
    let mut markers: Vec<usize> = [0.0, total_time_myr / 2.0, total_time_myr]
        .iter()
        .filter_map(|&t| result.nearest_index(t))
        .collect();
    markers.dedup();
    markers
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel<'_>,
    total_time_myr: f64,
    markers: &[usize],
    time_myr: &[f64],
    label_font: &FontDesc<'_>,
) -> Result<(), PlotError> {
    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .caption(panel.title, label_font.clone().resize(18.0))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-180.0..180.0, -90.0..90.0)
        .map_err(backend)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Longitude (°)")
        .y_desc("Latitude (°)")
        .label_style(label_font.clone())
        .x_labels(7)
        .y_labels(7)
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()
        .map_err(backend)?;

    draw_dashed_grid(&mut chart)?;

    let points: Vec<(f64, f64)> = panel.track.iter().map(|p| (p.lon_deg, p.lat_deg)).collect();
    chart
        .draw_series(std::iter::once(PathElement::new(
            points,
            ShapeStyle::from(&panel.track_color).stroke_width(2),
        )))
        .map_err(backend)?;

    let (Some(start), Some(end)) = (panel.track.first(), panel.track.last()) else {
        return Ok(());
    };
    let start_color = panel.track_color;
    chart
        .draw_series(std::iter::once(Circle::new(
            (start.lon_deg, start.lat_deg),
            5,
            start_color.filled(),
        )))
        .map_err(backend)?
        .label("Present")
        .legend(move |(x, y)| Circle::new((x, y), 5, start_color.filled()));
    let end_color = panel.end_color;
    chart
        .draw_series(std::iter::once(Circle::new(
            (end.lon_deg, end.lat_deg),
            5,
            end_color.filled(),
        )))
        .map_err(backend)?
        .label(format!("{total_time_myr:.0} Myr ago"))
        .legend(move |(x, y)| Circle::new((x, y), 5, end_color.filled()));

    for &idx in markers {
        let (Some(point), Some(t)) = (panel.track.get(idx), time_myr.get(idx)) else {
            continue;
        };
        chart
            .draw_series(std::iter::once(
                EmptyElement::at((point.lon_deg, point.lat_deg))
                    + Text::new(
                        format!("{t:.0} Myr"),
                        (-14, -18),
                        label_font.clone().resize(11.0),
                    ),
            ))
            .map_err(backend)?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(label_font.clone())
        .draw()
        .map_err(backend)?;

    Ok(())
}

/// Light dashed grid every 60° of longitude and 30° of latitude.
fn draw_dashed_grid<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
) -> Result<(), PlotError> {
    let style = ShapeStyle::from(&BLACK.mix(0.25)).stroke_width(1);
    let mut segments = Vec::new();
    for lon in (-180..=180).step_by(60).map(f64::from) {
        segments.extend(dashes(-90.0, 90.0).map(|(a, b)| vec![(lon, a), (lon, b)]));
    }
    for lat in (-90..=90).step_by(30).map(f64::from) {
        segments.extend(dashes(-180.0, 180.0).map(|(a, b)| vec![(a, lat), (b, lat)]));
    }
    chart
        .draw_series(
            segments
                .into_iter()
                .map(|segment| PathElement::new(segment, style)),
        )
        .map_err(backend)?;
    Ok(())
}

fn dashes(start: f64, end: f64) -> impl Iterator<Item = (f64, f64)> {
    const DASH: f64 = 4.0;
    const GAP: f64 = 3.0;
    let count = ((end - start) / (DASH + GAP)).ceil() as usize;
    (0..count).map(move |i| {
        let a = start + i as f64 * (DASH + GAP);
        (a, (a + DASH).min(end))
    })
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
