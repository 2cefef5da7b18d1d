//! Build script for the personal diet tracker
//!
//! Embeds a local build counter, the build time and the cargo profile.

use std::fs;
use std::io;
use std::path::Path;

const COUNTER_FILE: &str = "build_number.txt";

/// Bump the counter stored in `path`; a missing or garbled file counts as 0
fn next_build_number(path: &Path) -> io::Result<u64> {
    let previous = match fs::read_to_string(path) {
        Ok(text) => text.trim().parse().unwrap_or(0),
        Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
        Err(e) => return Err(e),
    };
    let next = previous + 1;
    fs::write(path, next.to_string())?;
    Ok(next)
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=build.rs");

    let build_number = next_build_number(Path::new(COUNTER_FILE)).unwrap_or_else(|e| {
        println!("cargo:warning=build counter unavailable ({}), using 0", e);
        0
    });
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    let built_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    for (key, value) in [
        ("DIET_BUILD_NUMBER", build_number.to_string()),
        ("DIET_BUILD_TIMESTAMP", built_at),
        ("DIET_BUILD_PROFILE", profile),
    ] {
        println!("cargo:rustc-env={}={}", key, value);
    }
}
