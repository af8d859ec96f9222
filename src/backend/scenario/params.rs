use serde::Deserialize;

use crate::backend::mathphysics::{Decibel, Kilometer};


#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ParameterSet {
    pub name: String,
    pub power_db: Decibel,
    pub antenna_gain_db: Decibel,
    pub grid_length: Kilometer,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub application_areas: Vec<String>,
}

impl ParameterSet {
    #[must_use]
    pub fn new(
        name: &str,
        power_db: Decibel,
        antenna_gain_db: Decibel,
        grid_length: Kilometer,
        technologies: &[&str],
        application_areas: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            power_db,
            antenna_gain_db,
            grid_length,
            technologies: to_strings(technologies),
            application_areas: to_strings(application_areas),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values
        .iter()
        .map(ToString::to_string)
        .collect()
}


#[must_use]
pub fn default_parameter_sets() -> Vec<ParameterSet> {
    vec![
        ParameterSet::new(
            "onshore",
            40.0,
            16.0,
            20.0,
            &["4G", "5G"],
            &["monitoring", "control"],
        ),
        ParameterSet::new(
            "offshore",
            46.0,
            18.0,
            30.0,
            &["4G", "5G"],
            &["monitoring", "maintenance"],
        ),
    ]
}
