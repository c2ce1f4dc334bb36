//! Domain models with validation
//!
//! Values are validated at construction so the FFI layer can serve them
//! without further checks.

pub mod gpu;

pub use gpu::{DEFAULT_GPU_NAME, GpuName, MAX_GPU_NAME_LEN};
