//! Version string reported by `--version`.

/// Build-time override, e.g. `CIDR_CONTAINS_VERSION=v1.2.3-4-gabcdef cargo build`.
const VERSION_OVERRIDE: Option<&str> = option_env!("CIDR_CONTAINS_VERSION");

/// The version of this build.
///
/// Computed once in `main` and handed to [`crate::cli::run`].
pub fn version() -> &'static str {
    resolve(VERSION_OVERRIDE, env!("CARGO_PKG_VERSION"))
}

fn resolve(override_version: Option<&'static str>, package: &'static str) -> &'static str {
    match override_version.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => package,
    }
}
