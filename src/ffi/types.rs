//! C ABI types for the exported NVML surface
//!
//! Hand-written equivalents of the `nvmlDevice_t` and `nvmlReturn_t`
//! declarations the host process compiled against.

use std::os::raw::c_void;

/// Opaque NVML device handle (`nvmlDevice_t`)
///
/// The mock never dereferences it; any value, including null, resolves to
/// the single mocked GPU.
pub type NvmlDevice = *mut c_void;

/// NVML status code (`nvmlReturn_t`)
///
/// Values match the NVML ABI. Only the codes this library can return are
/// defined.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NvmlReturn {
    /// The operation succeeded (`NVML_SUCCESS`)
    Success = 0,
    /// A supplied argument is invalid (`NVML_ERROR_INVALID_ARGUMENT`)
    InvalidArgument = 2,
}
