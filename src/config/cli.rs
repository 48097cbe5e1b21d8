use crate::config::{CliConfig, SimulatorConfig};
use crate::utils::error::Result;

impl CliConfig {
    /// Loads the config file (or defaults) and applies command-line overrides.
    pub fn resolve(&self) -> Result<SimulatorConfig> {
        let mut config = match &self.config {
            Some(path) => SimulatorConfig::from_file(path)?,
            None => SimulatorConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.api.timeout_seconds = Some(timeout);
        }

        Ok(config)
    }
}
