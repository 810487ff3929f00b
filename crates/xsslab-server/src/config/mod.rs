//! Server config loader (strict parsing).

pub mod schema;

use std::fs;

use xsslab_core::{LabError, Result};

pub use schema::{LabConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<LabConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| LabError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<LabConfig> {
    let cfg: LabConfig = serde_yaml::from_str(s)
        .map_err(|e| LabError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
