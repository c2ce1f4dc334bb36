//! Configuration system
//!
//! Handles TOML config file parsing and the environment override for the
//! served GPU name.

pub mod file;

pub use file::ConfigFile;

use crate::domain::GpuName;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the served GPU name
pub const GPU_NAME_ENV: &str = "MOCK_NVML_GPU_NAME";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Mocked GPU settings
    pub gpu: GpuConfig,
}

/// Mocked GPU configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GpuConfig {
    /// Name reported by nvmlDeviceGetName
    pub name: Option<String>,
}

impl Config {
    /// Resolve the GPU name to serve
    ///
    /// Precedence: environment variable, then config file, then the built-in
    /// default. Invalid overrides are logged and skipped; resolution never
    /// fails.
    pub fn resolve_gpu_name() -> GpuName {
        let env_name = std::env::var(GPU_NAME_ENV).ok();
        let file_name = ConfigFile::load_default().and_then(|c| c.gpu.name);
        resolve_gpu_name_from(env_name, file_name)
    }
}

fn resolve_gpu_name_from(env_name: Option<String>, file_name: Option<String>) -> GpuName {
    let sources = [("environment", env_name), ("config file", file_name)];

    for (source, value) in sources {
        let Some(value) = value else { continue };
        match GpuName::new(value) {
            Ok(name) => {
                log::debug!("Serving GPU name from {}: {}", source, name);
                return name;
            }
            Err(e) => {
                log::warn!("Ignoring GPU name from {}: {}", source, e);
            }
        }
    }

    GpuName::default()
}
