//! Build metadata
//!
//! Values exported by build.rs, read back at compile time. Builds without the
//! script (e.g. some IDE checks) report "unknown" and build 0.

use std::fmt;

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

const RAW_BUILD_NUMBER: Option<&str> = option_env!("DIET_BUILD_NUMBER");
const RAW_BUILD_TIMESTAMP: Option<&str> = option_env!("DIET_BUILD_TIMESTAMP");
const RAW_BUILD_PROFILE: Option<&str> = option_env!("DIET_BUILD_PROFILE");

/// Identity of the running binary, as reported by `diet_status`
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub profile: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: parse_build_number(RAW_BUILD_NUMBER),
            build_timestamp: RAW_BUILD_TIMESTAMP.unwrap_or("unknown"),
            profile: RAW_BUILD_PROFILE.unwrap_or("unknown"),
            description: DESCRIPTION,
        }
    }
}

fn parse_build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} build {} ({}, {})",
            self.name, self.version, self.build_number, self.profile, self.build_timestamp
        )
    }
}

/// Greeting shown by both binaries on startup
pub fn startup_banner() -> String {
    format!(
        "=== Welcome to Personal Diet & Nutrition App ===\n  {}",
        BuildInfo::current()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_number() {
        assert_eq!(parse_build_number(Some("42")), 42);
        assert_eq!(parse_build_number(Some(" 7\n")), 7);
        assert_eq!(parse_build_number(Some("4x2")), 0);
        assert_eq!(parse_build_number(None), 0);
    }

    #[test]
    fn test_banner_names_this_build() {
        let banner = startup_banner();
        assert!(banner.starts_with("=== Welcome to Personal Diet & Nutrition App ==="));
        assert!(banner.contains(&format!("{} v{}", NAME, VERSION)));
    }
}
