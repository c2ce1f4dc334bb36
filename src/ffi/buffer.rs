//! Bounded C-string copy
//!
//! The primitive behind the exported name query: copy a Rust string into a
//! caller-owned `char` buffer, truncating to fit.

use std::os::raw::c_char;

/// Copy `src` into the C buffer `dst` of `capacity` bytes.
///
/// At most `capacity - 1` bytes of `src` are copied and a NUL terminator is
/// always written, unlike `strncpy`. Returns `true` if `src` was truncated
/// to fit.
///
/// # Safety
///
/// `dst` must be non-null and valid for writes of `capacity` bytes, and
/// `capacity` must be at least 1.
pub unsafe fn write_c_string(src: &str, dst: *mut c_char, capacity: usize) -> bool {
    debug_assert!(!dst.is_null());
    debug_assert!(capacity >= 1);

    let bytes = src.as_bytes();
    let copy_len = bytes.len().min(capacity - 1);

    // SAFETY: dst is writable for capacity bytes per the contract above, and
    // src is a separate Rust allocation, so the ranges cannot overlap.
    std::ptr::copy_nonoverlapping(bytes.as_ptr(), dst.cast::<u8>(), copy_len);
    *dst.add(copy_len) = 0;

    copy_len < bytes.len()
}
