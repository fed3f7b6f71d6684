//! CSV export of optics scans
//!
//! Writes one row per sample position with a configurable selection of
//! transfer-matrix entries. The header labels entries `m11` … `m66`
//! (1-based row/column, the convention optics codes print).
//!
//! # Example output
//!
//! ```csv
//! s (m),m11,m12,m33,m34,m16,m56
//! 0.000000,1.000000,0.000000,1.000000,0.000000,0.000000,0.000000
//! 0.500000,0.980067,0.496339,1.020067,0.503339,0.000000,0.000000
//! ```

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::beamline::OpticsScan;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for CSV export.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column separator.
    pub delimiter: char,

    /// Decimal places for every numeric column.
    pub precision: usize,

    /// Whether to write the header row.
    pub include_header: bool,

    /// Matrix entries to export, as 0-based (row, col) pairs.
    pub entries: Vec<(usize, usize)>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_header: true,
            // Focusing terms of both planes, horizontal dispersion and the
            // momentum-compaction entry.
            entries: vec![(0, 0), (0, 1), (2, 2), (2, 3), (0, 5), (4, 5)],
        }
    }
}

// =================================================================================================
// Export
// =================================================================================================

/// Export an optics scan to a CSV file.
///
/// `config` of `None` uses [`CsvConfig::default`].
///
/// # Errors
///
/// An empty scan, an entry index outside 0..6, or any I/O failure.
pub fn export_scan_csv(
    scan: &OpticsScan,
    path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    if scan.is_empty() {
        return Err("cannot export an empty scan".into());
    }
    if let Some(&(row, col)) = config.entries.iter().find(|(r, c)| *r > 5 || *c > 5) {
        return Err(format!("matrix entry ({}, {}) out of 6x6 range", row, col).into());
    }

    let mut writer = BufWriter::new(File::create(path)?);

    if config.include_header {
        let mut header = String::from("s (m)");
        for (row, col) in &config.entries {
            header.push(config.delimiter);
            header.push_str(&format!("m{}{}", row + 1, col + 1));
        }
        writeln!(writer, "{}", header)?;
    }

    for (s, matrix) in scan.positions.iter().zip(scan.matrices.iter()) {
        let mut line = format!("{:.*}", config.precision, s);
        for &(row, col) in &config.entries {
            line.push(config.delimiter);
            line.push_str(&format!("{:.*}", config.precision, matrix[(row, col)]));
        }
        writeln!(writer, "{}", line)?;
    }

    writer.flush()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beamline::Beamline;
    use crate::elements::Element;

    fn small_scan() -> OpticsScan {
        let mut line = Beamline::new();
        line.push(Element::quadrupole("Q", 0.2, 1.0, 2.0).unwrap());
        line.compile();
        line.scan(0.0, 2.0, 5).unwrap()
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let scan = small_scan();
        let path = std::env::temp_dir().join("beam_rs_test_scan.csv");
        let path = path.to_str().unwrap();

        export_scan_csv(&scan, path, None).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 6); // header + 5 samples
        assert!(lines[0].starts_with("s (m),m11,m12"));
        assert!(lines[1].starts_with("0.000000,1.000000"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_rejects_out_of_range_entry() {
        let scan = small_scan();
        let config = CsvConfig {
            entries: vec![(6, 0)],
            ..CsvConfig::default()
        };
        let path = std::env::temp_dir().join("beam_rs_test_bad.csv");
        let err = export_scan_csv(&scan, path.to_str().unwrap(), Some(&config)).unwrap_err();
        assert!(err.to_string().contains("out of 6x6 range"));
    }

    #[test]
    fn test_rejects_empty_scan() {
        let scan = OpticsScan {
            origin: 0.0,
            positions: vec![],
            matrices: vec![],
        };
        let path = std::env::temp_dir().join("beam_rs_test_empty.csv");
        assert!(export_scan_csv(&scan, path.to_str().unwrap(), None).is_err());
    }
}
