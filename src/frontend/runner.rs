use log::{debug, info};

use crate::backend::linkbudget::LinkBudget;
use crate::backend::montecarlo::{run_trials, TrialConfig};
use crate::backend::scenario::{
    generate_coordinates, generate_secure_text, GenerationMode
};

use super::FrontendError;
use super::config::{GenerateConfig, GeneralConfig};
use super::output::{
    coordinates_filename, secure_text_filename, write_csv, 
    SIGNAL_RESULTS_FILENAME
};


/// Writes one input table per transmitter count.
///
/// # Errors
///
/// Will return `Err` if generation or writing fails.
pub fn generate(
    general_config: &GeneralConfig,
    generate_config: &GenerateConfig,
) -> Result<(), FrontendError> {
    let mut rng = general_config.rng();

    for &transmitters in &generate_config.transmitter_counts {
        info!(
            "Generating random coordinates for a case of {} transmitters", 
            transmitters
        );

        let path = match generate_config.mode {
            GenerationMode::Coordinates => write_csv(
                general_config.output_dir(),
                &coordinates_filename(transmitters),
                &generate_coordinates(
                    &mut rng,
                    transmitters,
                    &generate_config.parameter_sets,
                    &generate_config.sampling,
                )?,
            )?,
            GenerationMode::SecureText => write_csv(
                general_config.output_dir(),
                &secure_text_filename(transmitters),
                &generate_secure_text(
                    &mut rng,
                    transmitters,
                    &generate_config.parameter_sets,
                    &generate_config.sampling,
                )?,
            )?,
        };

        debug!("Table for {} transmitters: {}", transmitters, path.display());
    }

    Ok(())
}

/// Runs Monte Carlo trials and writes their results.
///
/// # Errors
///
/// Will return `Err` if the link parameters are invalid or writing fails.
pub fn simulate(
    general_config: &GeneralConfig,
    trial_config: &TrialConfig,
) -> Result<(), FrontendError> {
    let results = run_trials(trial_config, &mut general_config.rng())?;

    write_csv(
        general_config.output_dir(), 
        SIGNAL_RESULTS_FILENAME, 
        &results
    )?;

    Ok(())
}

pub fn link(link_budget: &LinkBudget) {
    print!("{}", format_metrics(link_budget));
}

#[must_use]
pub fn format_metrics(link_budget: &LinkBudget) -> String {
    let metrics = link_budget.metrics();

    format!(
        "Signal distance:        {:>10.3} km\n\
        Interference distance:  {:>10.3} km\n\
        Signal path loss:       {:>10.3} dB\n\
        Interference path loss: {:>10.3} dB\n\
        Jammer power:           {:>10.3} dBm\n\
        SINR:                   {:>10.3} dB\n",
        metrics.signal_distance,
        metrics.interference_distance,
        metrics.signal_path_loss,
        metrics.interference_path_loss,
        metrics.jammer_power,
        metrics.sinr,
    )
}
