use thiserror::Error;

use crate::backend::linkbudget::LinkBudgetError;
use crate::backend::scenario::ScenarioError;

use config::ConfigError;
use output::OutputError;


pub mod cli;
pub mod config;
pub mod output;
pub mod runner;


#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("Missing command line argument `{0}`")]
    MissingArgument(&'static str),
    #[error("Coordinate range {min}..{max} is empty")]
    EmptyCoordinateRange { min: i32, max: i32 },
    #[error("Configuration failed with error `{0}`")]
    Config(#[from] ConfigError),
    #[error("Output failed with error `{0}`")]
    Output(#[from] OutputError),
    #[error("Scenario generation failed with error `{0}`")]
    Scenario(#[from] ScenarioError),
    #[error("Link budget failed with error `{0}`")]
    LinkBudget(#[from] LinkBudgetError),
}
