use serde::Deserialize;
use xsslab_core::{LabError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl LabConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LabError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.server.validate()?;
        Ok(())
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.is_empty() {
            return Err(LabError::Config("server.listen must not be empty".into()));
        }
        Ok(())
    }
}

// Same port the lab has always run on.
fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
