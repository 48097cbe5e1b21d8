pub mod batch;
pub mod orchestrator;
pub mod validator;

pub use crate::domain::model::{FormFields, Outcome, SimulationRequest, SimulationResult};
pub use crate::domain::ports::{ConfigProvider, SimulationApi, SubmissionView};
pub use crate::utils::error::Result;
