//! Plotting of optics scans
//!
//! Renders selected transfer-matrix entries of an
//! [`OpticsScan`](crate::beamline::OpticsScan) against the longitudinal
//! position s as a PNG line chart. One series per entry, labeled with the
//! 1-based `mij` convention.

use std::error::Error;

use plotters::prelude::*;

use crate::beamline::OpticsScan;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for scan plots.
///
/// # Example
///
/// ```rust,ignore
/// use beam_rs::output::PlotConfig;
///
/// let mut config = PlotConfig::titled("FODO cell optics");
/// config.entries = vec![(0, 0), (2, 2)];  // m11 and m33 only
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Plot title.
    pub title: String,

    /// X-axis label.
    pub xlabel: String,

    /// Y-axis label.
    pub ylabel: String,

    /// Matrix entries to draw, as 0-based (row, col) pairs.
    pub entries: Vec<(usize, usize)>,

    /// Line thickness in pixels.
    pub line_width: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Optics scan".to_string(),
            xlabel: "s (m)".to_string(),
            ylabel: "matrix entry".to_string(),
            entries: vec![(0, 0), (0, 1), (2, 2), (2, 3)],
            line_width: 2,
        }
    }
}

impl PlotConfig {
    /// Default configuration with a custom title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

// =================================================================================================
// Plotting
// =================================================================================================

const SERIES_COLORS: [RGBColor; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, BLACK];

/// Plot an optics scan to a PNG file.
///
/// `config` of `None` uses [`PlotConfig::default`].
///
/// # Errors
///
/// An empty scan, an entry index outside 0..6, or any backend failure.
pub fn plot_scan(
    scan: &OpticsScan,
    path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    if scan.is_empty() {
        return Err("cannot plot an empty scan".into());
    }
    if let Some(&(row, col)) = config.entries.iter().find(|(r, c)| *r > 5 || *c > 5) {
        return Err(format!("matrix entry ({}, {}) out of 6x6 range", row, col).into());
    }

    // Axis ranges over every drawn series.
    let s_min = scan.positions.iter().cloned().fold(f64::INFINITY, f64::min);
    let s_max = scan.positions.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(row, col) in &config.entries {
        for value in scan.entry_trace(row, col) {
            y_min = y_min.min(value);
            y_max = y_max.max(value);
        }
    }
    let y_pad = 0.1 * (y_max - y_min).max(1e-12);

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(s_min..s_max, (y_min - y_pad)..(y_max + y_pad))?;

    chart
        .configure_mesh()
        .x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .draw()?;

    for (i, &(row, col)) in config.entries.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        let trace = scan.entry_trace(row, col);

        chart
            .draw_series(LineSeries::new(
                scan.positions.iter().zip(trace.iter()).map(|(s, v)| (*s, *v)),
                color.stroke_width(config.line_width),
            ))?
            .label(format!("m{}{}", row + 1, col + 1))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
