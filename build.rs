//! Injects commit hash and build time for `themekit --version`.
//!
//! Either value can be pinned through the environment for reproducible
//! builds; otherwise git/date are queried, falling back to "unknown".

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "THEMEKIT_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "THEMEKIT_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");

    emit(GIT_HASH_VAR, || {
        command_output("git", &["rev-parse", "--short=12", "HEAD"]).unwrap_or_else(|| "unknown".to_string())
    });
    emit(TIMESTAMP_VAR, || {
        command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(unix_timestamp)
    });
}

fn emit(var: &str, compute: impl FnOnce() -> String) {
    println!("cargo:rerun-if-env-changed={var}");
    let value = env::var(var).unwrap_or_else(|_| compute());
    println!("cargo:rustc-env={var}={value}");
}

fn unix_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("unix:{secs}")
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
