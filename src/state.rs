//! Process-wide mock state
//!
//! The served name is resolved once, on the first intercepted call, and the
//! logger is installed at the same point. Library code cannot rely on the
//! host process running any setup, so both happen lazily.

use crate::config::Config;
use crate::domain::GpuName;

use once_cell::sync::Lazy;
use std::sync::Once;

static GPU_NAME: Lazy<GpuName> = Lazy::new(Config::resolve_gpu_name);

static LOG_INIT: Once = Once::new();

/// Name served by the mocked device
pub fn gpu_name() -> &'static GpuName {
    &GPU_NAME
}

/// Install the logger once
///
/// `try_init`: the host process may already have installed a logger.
pub(crate) fn ensure_logging() {
    LOG_INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .format_timestamp(None)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_name_is_stable() {
        let first = gpu_name();
        let second = gpu_name();
        assert_eq!(first, second);
        assert!(!first.as_str().is_empty());
    }

    #[test]
    fn test_ensure_logging_is_reentrant() {
        ensure_logging();
        ensure_logging();
    }
}
