//! GPU name domain type
//!
//! Provides the validated name served by the mocked device.

use crate::error::DomainError;
use std::fmt;

/// Name served when no override is configured
pub const DEFAULT_GPU_NAME: &str = "NVIDIA H100 80GB HBM3";

/// Maximum name length in bytes, excluding the terminator
///
/// NVML's v2 device name buffer is 96 bytes including the terminator.
pub const MAX_GPU_NAME_LEN: usize = 95;

/// Validated GPU name
///
/// Guaranteed non-empty, free of interior NUL bytes, and small enough to fit
/// NVML's name buffer with its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuName(String);

impl GpuName {
    /// Validate and wrap a GPU name
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainError::EmptyGpuName);
        }
        if let Some(pos) = name.bytes().position(|b| b == 0) {
            return Err(DomainError::EmbeddedNul(pos));
        }
        if name.len() > MAX_GPU_NAME_LEN {
            return Err(DomainError::GpuNameTooLong {
                len: name.len(),
                max: MAX_GPU_NAME_LEN,
            });
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GpuName {
    fn default() -> Self {
        Self(DEFAULT_GPU_NAME.to_string())
    }
}

impl fmt::Display for GpuName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name() {
        let name = GpuName::default();
        assert_eq!(name.as_str(), "NVIDIA H100 80GB HBM3");
    }

    #[test]
    fn test_valid_name() {
        let name = GpuName::new("NVIDIA A100-SXM4-40GB").unwrap();
        assert_eq!(name.to_string(), "NVIDIA A100-SXM4-40GB");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(GpuName::new(""), Err(DomainError::EmptyGpuName));
    }

    #[test]
    fn test_embedded_nul_rejected() {
        assert_eq!(GpuName::new("H100\0X"), Err(DomainError::EmbeddedNul(4)));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let long = "X".repeat(MAX_GPU_NAME_LEN + 1);
        assert!(matches!(
            GpuName::new(long),
            Err(DomainError::GpuNameTooLong { len: 96, max: 95 })
        ));
    }

    #[test]
    fn test_max_length_name_accepted() {
        let name = "X".repeat(MAX_GPU_NAME_LEN);
        assert!(GpuName::new(name).is_ok());
    }
}
