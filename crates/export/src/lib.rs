//! Export helpers for simulation tracks: console table, CSV and JSON.

pub mod table {
    use apw_drift::{SimulationResult, linspace};

    pub const DEFAULT_MAX_ROWS: usize = 15;

    const HEADER: &str =
        "Time (Myr)  | Continent Lat  | Continent Lon  | Apparent Pole Lat  | Apparent Pole Lon";
    const TRUNCATED: &str = "... (table truncated) ...";

    /// Indices of the rows shown when at most `max_rows` of `len` fit.
    ///
    /// Evenly spaced from first to last, truncated toward zero.
    pub fn downsample_indices(len: usize, max_rows: usize) -> Vec<usize> {
        if len == 0 {
            return Vec::new();
        }
        linspace(0.0, (len - 1) as f64, max_rows.min(len))
            .into_iter()
            .map(|v| v as usize)
            .collect()
    }

    /// Fixed-width summary of the tracks, down-sampled to `max_rows` rows.
    pub fn format_summary_table(result: &SimulationResult, max_rows: usize) -> String {
        let mut lines = vec![HEADER.to_string(), "-".repeat(HEADER.len())];

        let indices = downsample_indices(result.len(), max_rows);
        for sample in indices.iter().filter_map(|&idx| result.sample(idx)) {
            lines.push(format!(
                "{:9.1} | {:14.2} | {:14.2} | {:17.2} | {:17.2}",
                sample.time_myr,
                sample.continent.lat_deg,
                sample.continent.lon_deg,
                sample.apparent_pole.lat_deg,
                sample.apparent_pole.lon_deg,
            ));
        }

        if indices.len() < result.len() {
            lines.push(TRUNCATED.to_string());
        }

        lines.join("\n")
    }
}

pub mod track {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use apw_drift::{Sample, SimulationResult};

    pub const HEADER: &str = "time_myr,continent_lat_deg,continent_lon_deg,apparent_pole_lat_deg,apparent_pole_lon_deg";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the track CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the track exporter.
    #[derive(Debug, Clone, Copy)]
    pub struct Record {
        pub time_myr: f64,
        pub continent_lat_deg: f64,
        pub continent_lon_deg: f64,
        pub apparent_pole_lat_deg: f64,
        pub apparent_pole_lon_deg: f64,
    }

    impl From<Sample> for Record {
        fn from(sample: Sample) -> Self {
            Self {
                time_myr: sample.time_myr,
                continent_lat_deg: sample.continent.lat_deg,
                continent_lon_deg: sample.continent.lon_deg,
                apparent_pole_lat_deg: sample.apparent_pole.lat_deg,
                apparent_pole_lon_deg: sample.apparent_pole.lon_deg,
            }
        }
    }

    impl Record {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.9},{:.9},{:.9},{:.9}",
                self.time_myr,
                self.continent_lat_deg,
                self.continent_lon_deg,
                self.apparent_pole_lat_deg,
                self.apparent_pole_lon_deg,
            )
        }
    }

    /// Write the full track (header plus one row per sample) to `path`.
    pub fn write_track(path: &Path, result: &SimulationResult) -> io::Result<()> {
        let mut writer = writer_for_path(path)?;
        write_header(writer.as_mut())?;
        for sample in result.samples() {
            Record::from(sample).write_to(writer.as_mut())?;
        }
        writer.flush()
    }
}

pub mod sidecar {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    use apw_drift::{PlateMotionParameters, ReferencePoint, Sample, SimulationResult};

    #[derive(Serialize)]
    struct Sidecar<'a> {
        scenario: &'a str,
        parameters: &'a PlateMotionParameters,
        reference: &'a ReferencePoint,
        samples: Vec<Sample>,
    }

    /// Write a pretty-printed JSON document describing the run and every sample.
    pub fn write_sidecar(
        output: &Path,
        scenario: &str,
        parameters: &PlateMotionParameters,
        reference: &ReferencePoint,
        result: &SimulationResult,
    ) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let sidecar = Sidecar {
            scenario,
            parameters,
            reference,
            samples: result.samples().collect(),
        };

        to_writer_pretty(File::create(output)?, &sidecar)?;
        Ok(())
    }
}
