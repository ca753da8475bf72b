//! Host platform identification
//!
//! Pure query answering the wire's `getPlatformVersion` call. The string is
//! computed once per process, so repeated calls always return the same
//! value.

use once_cell::sync::Lazy;

static PLATFORM_VERSION: Lazy<String> =
    Lazy::new(|| format!("{} {}", std::env::consts::OS, std::env::consts::ARCH));

/// Host-identifying string, e.g. "linux x86_64"
pub fn platform_version() -> &'static str {
    &PLATFORM_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_version_is_stable() {
        let first = platform_version();
        let second = platform_version();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_platform_version_names_host() {
        assert!(platform_version().contains(std::env::consts::OS));
    }
}
