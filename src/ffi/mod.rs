//! Exported C ABI surface
//!
//! The symbols a host process resolves in place of the real NVML library.

pub mod buffer;
pub mod types;

pub use types::{NvmlDevice, NvmlReturn};

use crate::state;
use std::os::raw::{c_char, c_uint};

/// Mock implementation of `nvmlDeviceGetName`
///
/// Writes the mocked GPU name into `name`, truncating to `length` bytes
/// (terminator included). The device handle is ignored; every handle maps to
/// the same mocked GPU.
///
/// # Safety
///
/// `name` must be null or valid for writes of `length` bytes. Null and
/// zero-length buffers are rejected with `NvmlReturn::InvalidArgument`
/// rather than dereferenced.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn nvmlDeviceGetName(
    device: NvmlDevice,
    name: *mut c_char,
    length: c_uint,
) -> NvmlReturn {
    state::ensure_logging();

    if name.is_null() || length == 0 {
        log::warn!(
            "nvmlDeviceGetName called with unusable buffer (ptr={:?}, length={})",
            name,
            length
        );
        return NvmlReturn::InvalidArgument;
    }

    let served = state::gpu_name();
    let truncated = buffer::write_c_string(served.as_str(), name, length as usize);
    if truncated {
        log::warn!(
            "GPU name \"{}\" truncated to fit {}-byte buffer",
            served,
            length
        );
    }

    log::debug!("nvmlDeviceGetName(device={:?}) -> \"{}\"", device, served);
    NvmlReturn::Success
}
