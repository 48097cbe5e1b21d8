pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{console::ConsoleView, http::HttpSimulationApi};
pub use crate::config::SimulatorConfig;
pub use crate::core::{batch::run_batch, orchestrator::Orchestrator};
pub use crate::domain::model::{
    Field, FieldErrors, FormFields, Outcome, SimulationRequest, SimulationResult, SubmissionState,
    ValidationOutcome,
};
pub use crate::domain::ports::{SilentView, SimulationApi, SubmissionView};
pub use crate::utils::error::{ApiError, Result, SimError};
