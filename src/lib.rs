//! mock-nvml - mock NVML shared library
//!
//! Builds `libmock_nvml.so`, a stand-in for NVIDIA's Management Library that
//! answers GPU name queries with a mocked value instead of touching real
//! hardware. A process that resolves `nvmlDeviceGetName` against this
//! library sees "NVIDIA H100 80GB HBM3" unless an override is configured.
//!
//! # Modules
//!
//! - [`config`]: Configuration system (served-name overrides)
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`ffi`]: Exported C ABI surface
//! - [`state`]: Process-wide mock state

pub mod config;
pub mod domain;
pub mod error;
pub mod ffi;
pub mod state;

pub use domain::{DEFAULT_GPU_NAME, GpuName};
pub use error::{ConfigError, DomainError};
pub use ffi::{NvmlDevice, NvmlReturn};
