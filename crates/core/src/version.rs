// crates/core/src/version.rs
//! Build-time version metadata.
//!
//! 値はすべてコンパイル時に `Cargo.toml` のパッケージバージョンから決まる。

/// Human readable version string, e.g. `"0.4.2"`.
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// NUL terminated copy of [`VERSION_STRING`] for C-style consumers.
pub const VERSION_BYTES: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();

/// Numeric version identifier: `major * 10_000 + minor * 100 + patch`.
pub const VERSION_NUMBER: u32 = version_number(
    parse_component(env!("CARGO_PKG_VERSION_MAJOR")),
    parse_component(env!("CARGO_PKG_VERSION_MINOR")),
    parse_component(env!("CARGO_PKG_VERSION_PATCH")),
);

#[must_use]
pub const fn version_number(major: u32, minor: u32, patch: u32) -> u32 {
    major * 10_000 + minor * 100 + patch
}

const fn parse_component(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut value = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            break;
        }
        value = value * 10 + (b - b'0') as u32;
        i += 1;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_is_not_empty() {
        assert!(!VERSION_STRING.is_empty());
    }

    #[test]
    fn version_string_looks_like_semver() {
        let parts: Vec<&str> = VERSION_STRING.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.chars().next().is_some_and(|c| c.is_ascii_digit())));
    }

    #[test]
    fn version_bytes_are_nul_terminated() {
        assert_eq!(VERSION_BYTES.last(), Some(&0));
        assert_eq!(&VERSION_BYTES[..VERSION_BYTES.len() - 1], VERSION_STRING.as_bytes());
    }

    #[test]
    fn version_number_matches_string() {
        let mut parts = VERSION_STRING.split('.').map(|p| parse_component(p));
        let expected = version_number(
            parts.next().unwrap_or(0),
            parts.next().unwrap_or(0),
            parts.next().unwrap_or(0),
        );
        assert_eq!(VERSION_NUMBER, expected);
    }

    #[test]
    fn parse_component_stops_at_prerelease_suffix() {
        assert_eq!(parse_component("12"), 12);
        assert_eq!(parse_component("3-beta"), 3);
        assert_eq!(parse_component(""), 0);
    }
}
