//! Unified error types for mock-nvml
//!
//! Uses thiserror for ergonomic error definitions. Errors stay inside the
//! crate: the exported C surface reports misuse through NVML return codes
//! and falls back to the default name rather than unwinding into the host.

use thiserror::Error;

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// GPU name is empty
    #[error("GPU name must not be empty")]
    EmptyGpuName,

    /// GPU name contains an interior NUL byte
    #[error("GPU name contains a NUL byte at offset {0}")]
    EmbeddedNul(usize),

    /// GPU name does not fit the NVML name buffer
    #[error("GPU name is {len} bytes (maximum {max})")]
    GpuNameTooLong { len: usize, max: usize },
}

/// Errors from configuration parsing
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let err = DomainError::EmbeddedNul(3);
        assert_eq!(err.to_string(), "GPU name contains a NUL byte at offset 3");
    }

    #[test]
    fn test_name_too_long_display() {
        let err = DomainError::GpuNameTooLong { len: 120, max: 95 };
        assert!(err.to_string().contains("120 bytes"));
        assert!(err.to_string().contains("maximum 95"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::FileNotFound("/etc/mock-nvml/config.toml".to_string());
        assert!(err.to_string().contains("/etc/mock-nvml/config.toml"));
    }
}
