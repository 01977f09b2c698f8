//! Commit hash and build date embedded by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `arcade <date> (<commit>)`, as printed by `--version`.
pub fn version_line() -> String {
    format!("arcade {} ({})", BUILD_DATE, BUILD_COMMIT)
}
