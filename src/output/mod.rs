//! Output module for optics scans
//!
//! This module turns an [`OpticsScan`](crate::beamline::OpticsScan) into
//! artifacts for humans and for external tools:
//!
//! - **Visualization**: PNG plots of matrix entries against s (plotters)
//! - **Export**: CSV data for Excel, pandas, MATLAB, gnuplot
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use beam_rs::output::{export_scan_csv, plot_scan, PlotConfig};
//!
//! let scan = line.scan(0.0, 10.0, 500)?;
//!
//! // CSV with the default entry selection
//! export_scan_csv(&scan, "scan.csv", None)?;
//!
//! // PNG of m11 and m33 against s
//! plot_scan(&scan, "scan.png", Some(&PlotConfig::titled("FODO cell")))?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module never recomputes optics: it consumes a finished scan
//! and only selects, formats and draws. Both halves accept an optional
//! config and fall back to sensible defaults.

pub mod csv;
pub mod plot;

// Re-export commonly used items for convenience
pub use csv::{export_scan_csv, CsvConfig};
pub use plot::{plot_scan, PlotConfig};
