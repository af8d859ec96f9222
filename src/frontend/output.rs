use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::backend::montecarlo::SignalResult;
use crate::backend::scenario::{CoordinateRecord, SecureTextRecord};


pub const SIGNAL_RESULTS_FILENAME: &str = "signal_results.csv";


#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory `{}`: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: csv::Error,
    },
}


/// Row type of a CSV table.
///
/// `HEADER` is written on its own when a table has no rows, so it must list
/// the serialized field names in order.
pub trait CsvTable: Serialize {
    const HEADER: &'static [&'static str];
}

impl CsvTable for SignalResult {
    const HEADER: &'static [&'static str] = &[
        "iterations",
        "interference_distance_km",
        "interference_path_loss_dB",
        "interference_power",
        "receiver_distance_km",
        "receiver_path_loss_dB",
        "sinr_dB",
    ];
}

impl CsvTable for CoordinateRecord {
    const HEADER: &'static [&'static str] = &[
        "transmitter_x",
        "transmitter_y",
        "receiver_x",
        "receiver_y",
        "interceptor_x",
        "interceptor_y",
        "no_transmitters",
        "transmitter_power_db",
        "antenna_gain_db",
        "technology",
        "power_scenario",
    ];
}

impl CsvTable for SecureTextRecord {
    const HEADER: &'static [&'static str] = &[
        "transmitter_x",
        "transmitter_y",
        "receiver_x",
        "receiver_y",
        "interceptor_x",
        "interceptor_y",
        "no_transmitters",
        "transmitter_power_db",
        "antenna_gain_db",
        "technology",
        "text_scenario",
        "power_scenario",
        "application_area",
    ];
}


#[must_use]
pub fn coordinates_filename(transmitters: usize) -> String {
    format!("{transmitters}_transmitters_inputs.csv")
}

#[must_use]
pub fn secure_text_filename(transmitters: usize) -> String {
    format!("{transmitters}_secure_data.csv")
}


/// Writes `rows` with a header line to `output_dir/filename`, creating the
/// directory if it does not exist. An empty table still gets its header.
///
/// # Errors
///
/// Will return `Err` if the directory cannot be created or the file cannot
/// be written.
pub fn write_csv<S: CsvTable>(
    output_dir: &Path,
    filename: &str,
    rows: &[S],
) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(output_dir)
        .map_err(|source| OutputError::CreateDirectory { 
            path: output_dir.to_path_buf(), 
            source 
        })?;

    let path = output_dir.join(filename);
    let write_error = |source| OutputError::Write { 
        path: path.clone(), 
        source 
    };

    let mut writer = csv::Writer::from_path(&path).map_err(write_error)?;

    if rows.is_empty() {
        writer.write_record(S::HEADER).map_err(write_error)?;
    }

    for row in rows {
        writer.serialize(row).map_err(write_error)?;
    }

    writer
        .flush()
        .map_err(|error| write_error(csv::Error::from(error)))?;

    info!("Wrote {} rows to {}", rows.len(), path.display());

    Ok(path)
}


#[cfg(test)]
mod tests {
    use crate::backend::linkbudget::LinkMetrics;
    use crate::backend::scenario::{PowerScenario, TextScenario};

    use super::*;


    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_else(|error| panic!("{}", error))
    }

    fn written_header<S: CsvTable>(rows: &[S]) -> String {
        let directory = tempfile::tempdir()
            .unwrap_or_else(|error| panic!("{}", error));

        let path = write_csv(directory.path(), "table.csv", rows)
            .unwrap_or_else(|error| panic!("{}", error));

        read(&path).lines().next().unwrap_or_default().to_string()
    }

    fn coordinate_record() -> CoordinateRecord {
        CoordinateRecord {
            transmitter_x: 1.5,
            transmitter_y: 2.0,
            receiver_x: 3.0,
            receiver_y: 4.0,
            interceptor_x: 5.0,
            interceptor_y: 6.0,
            no_transmitters: 1,
            transmitter_power_db: 40.0,
            antenna_gain_db: 16.0,
            technology: "5G".to_string(),
            power_scenario: PowerScenario::High,
        }
    }


    #[test]
    fn filenames_follow_transmitter_count() {
        assert_eq!(coordinates_filename(3), "3_transmitters_inputs.csv");
        assert_eq!(secure_text_filename(5), "5_secure_data.csv");
    }

    #[test]
    fn signal_results_are_written_with_header() {
        let directory = tempfile::tempdir()
            .unwrap_or_else(|error| panic!("{}", error));
        let metrics = LinkMetrics {
            signal_distance: 2.0,
            interference_distance: 1.0,
            signal_path_loss: 100.0,
            interference_path_loss: 92.5,
            jammer_power: -36.5,
            sinr: -7.5,
        };
        let rows = [SignalResult::new(0, &metrics)];

        let path = write_csv(directory.path(), SIGNAL_RESULTS_FILENAME, &rows)
            .unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(
            read(&path),
            "iterations,interference_distance_km,interference_path_loss_dB,\
            interference_power,receiver_distance_km,receiver_path_loss_dB,\
            sinr_dB\n\
            0,1.0,92.5,-36.5,2.0,100.0,-7.5\n"
        );
    }

    #[test]
    fn missing_output_directory_is_created() {
        let directory = tempfile::tempdir()
            .unwrap_or_else(|error| panic!("{}", error));
        let nested = directory.path().join("results").join("run");
        let rows = [coordinate_record()];

        let path = write_csv(&nested, &coordinates_filename(1), &rows)
            .unwrap_or_else(|error| panic!("{}", error));

        let content = read(&path);
        let mut lines = content.lines();

        assert_eq!(
            lines.next(),
            Some(
                "transmitter_x,transmitter_y,receiver_x,receiver_y,\
                interceptor_x,interceptor_y,no_transmitters,\
                transmitter_power_db,antenna_gain_db,technology,power_scenario"
            )
        );
        assert_eq!(lines.next(), Some("1.5,2.0,3.0,4.0,5.0,6.0,1,40.0,16.0,5G,high"));
    }

    #[test]
    fn empty_tables_keep_their_header() {
        let directory = tempfile::tempdir()
            .unwrap_or_else(|error| panic!("{}", error));

        let path = write_csv::<SignalResult>(
            directory.path(), 
            SIGNAL_RESULTS_FILENAME, 
            &[]
        ).unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(
            read(&path),
            "iterations,interference_distance_km,interference_path_loss_dB,\
            interference_power,receiver_distance_km,receiver_path_loss_dB,\
            sinr_dB\n"
        );
    }

    #[test]
    fn empty_header_matches_serialized_header() {
        let metrics = LinkMetrics {
            signal_distance: 1.0,
            interference_distance: 1.0,
            signal_path_loss: 92.44,
            interference_path_loss: 92.44,
            jammer_power: -36.44,
            sinr: 0.0,
        };
        let secure_text = SecureTextRecord {
            transmitter_x: 1.0,
            transmitter_y: 1.0,
            receiver_x: 2.0,
            receiver_y: 2.0,
            interceptor_x: 3.0,
            interceptor_y: 3.0,
            no_transmitters: 3,
            transmitter_power_db: 30.0,
            antenna_gain_db: 10.0,
            technology: "LTE".to_string(),
            text_scenario: TextScenario::Partial,
            power_scenario: PowerScenario::Baseline,
            application_area: "healthcare".to_string(),
        };

        assert_eq!(
            written_header(&[SignalResult::new(0, &metrics)]),
            written_header::<SignalResult>(&[])
        );
        assert_eq!(
            written_header(&[coordinate_record()]),
            written_header::<CoordinateRecord>(&[])
        );
        assert_eq!(
            written_header(&[secure_text]),
            written_header::<SecureTextRecord>(&[])
        );
    }
}
