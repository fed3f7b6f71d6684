//! Example: scanning optics along a line, CSV export and plotting
//!
//! Builds a FODO-style cell, samples the composite transfer matrix from
//! the upstream end at 400 positions, then writes the scan as CSV and as
//! a PNG chart of the focusing entries m11/m33 and the dispersion m16.

use beam_rs::beamline::Beamline;
use beam_rs::elements::Element;
use beam_rs::output::{export_scan_csv, plot_scan, PlotConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  beam-rs: optics scan of a FODO cell");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== The cell ======

    let mut cell = Beamline::named("fodo");
    cell.push(Element::quadrupole("QF", 0.2, 0.0, 1.8)?);
    cell.push(Element::sector_bend("B1", 0.6, 1.0, 0.15)?);
    cell.push(Element::quadrupole("QD", 0.2, 2.0, -1.8)?);
    cell.push(Element::sector_bend("B2", 0.6, 3.0, 0.15)?);
    cell.compile();

    let (s_from, s_to) = cell.span()?.unwrap();
    println!("scanning {} elements over {:.2} m .. {:.2} m", cell.len(), s_from, s_to);

    // ====== Scan ======

    let scan = cell.scan(s_from, s_to, 400)?;
    println!("sampled {} matrices from s = {:.2} m", scan.len(), scan.origin);

    // ====== Export ======

    let tmp_dir = std::env::temp_dir();

    let csv_path = tmp_dir.join("fodo_scan.csv");
    export_scan_csv(&scan, csv_path.to_str().unwrap(), None)?;
    println!("CSV written to {:?}", csv_path);

    let mut plot_config = PlotConfig::titled("FODO cell: m11, m33 and dispersion");
    plot_config.entries = vec![(0, 0), (2, 2), (0, 5)];

    let png_path = tmp_dir.join("fodo_scan.png");
    plot_scan(&scan, png_path.to_str().unwrap(), Some(&plot_config))?;
    println!("plot written to {:?}", png_path);

    Ok(())
}
