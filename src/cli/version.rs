//! Version command for hrm.

/// The current version of hrm, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Text printed by `--version`.
pub fn version_line() -> String {
    format!("hrm {}", VERSION)
}
