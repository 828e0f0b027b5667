use crate::error::{PublishError, Result};

/// Represents a semantic version with major, minor, and patch components.
///
/// Follows semantic versioning specification (major.minor.patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Represents the type of semantic version bump to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Creates a new Version with the specified major, minor, and patch components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl std::str::FromStr for Version {
    type Err = PublishError;

    fn from_str(s: &str) -> Result<Self> {
        parse_version(s)
    }
}

/// Parses a version from its string form.
///
/// Accepts exactly three dot-separated non-negative integer components
/// (major.minor.patch) and nothing else: no prefixes, no pre-release or
/// build metadata, no surrounding whitespace.
///
/// # Example
/// ```ignore
/// assert_eq!(parse_version("1.2.3").unwrap(), Version::new(1, 2, 3));
/// assert!(parse_version("v1.2.3").is_err());
/// assert!(parse_version("1.2").is_err()); // Too few components
/// ```
pub fn parse_version(s: &str) -> Result<Version> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 3 {
        return Err(PublishError::parse(format!(
            "expected exactly three components in '{}'",
            s
        )));
    }

    let component = |part: &str| -> Result<u64> {
        // parse::<u64> would accept a leading '+', which is not a version digit
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PublishError::parse(format!(
                "invalid component '{}' in '{}'",
                part, s
            )));
        }
        part.parse::<u64>()
            .map_err(|_| PublishError::parse(format!("component '{}' out of range in '{}'", part, s)))
    };

    Ok(Version::new(
        component(parts[0])?,
        component(parts[1])?,
        component(parts[2])?,
    ))
}

impl BumpKind {
    /// Parses a bump kind from a CLI string.
    ///
    /// Unrecognized strings fall back to `Patch`. This is a documented
    /// fallback, not an error: the default release increment is a patch.
    pub fn parse(s: &str) -> BumpKind {
        match s {
            "major" => BumpKind::Major,
            "minor" => BumpKind::Minor,
            _ => BumpKind::Patch,
        }
    }
}

impl Default for BumpKind {
    fn default() -> Self {
        BumpKind::Patch
    }
}

/// Bumps a version according to the specified bump kind.
///
/// Increments the appropriate version component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// # Example
/// ```ignore
/// let v = Version::new(1, 2, 3);
/// assert_eq!(bump_version(v, BumpKind::Major), Version::new(2, 0, 0));
/// assert_eq!(bump_version(v, BumpKind::Minor), Version::new(1, 3, 0));
/// assert_eq!(bump_version(v, BumpKind::Patch), Version::new(1, 2, 4));
/// ```
pub fn bump_version(mut version: Version, kind: BumpKind) -> Version {
    match kind {
        BumpKind::Major => {
            version.major += 1;
            version.minor = 0;
            version.patch = 0;
        }
        BumpKind::Minor => {
            version.minor += 1;
            version.patch = 0;
        }
        BumpKind::Patch => {
            version.patch += 1;
        }
    }
    version
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_versions() {
        assert_eq!(parse_version("1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse_version("0.0.0").unwrap(), Version::new(0, 0, 0));
        assert_eq!(
            parse_version("10.20.30").unwrap(),
            Version::new(10, 20, 30)
        );
    }

    #[test]
    fn test_parse_rejects_malformed_versions() {
        for bad in [
            "1.2", "1.2.3.4", "v1.2.3", "1.2.3-rc1", "1.2.3+build", "1. 2.3", " 1.2.3",
            "1.2.3 ", "1..3", "a.b.c", "",
        ] {
            assert!(parse_version(bad).is_err(), "should reject '{}'", bad);
        }
    }

    #[test]
    fn test_parse_rejects_signed_components() {
        assert!(parse_version("+1.2.3").is_err());
        assert!(parse_version("1.-2.3").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let v = Version::new(1, 4, 2);
        assert_eq!(v.to_string(), "1.4.2");
        assert_eq!(parse_version(&v.to_string()).unwrap(), v);
    }

    #[test]
    fn test_bump_examples() {
        let v = Version::new(1, 2, 3);
        assert_eq!(bump_version(v, BumpKind::Major), Version::new(2, 0, 0));
        assert_eq!(bump_version(v, BumpKind::Minor), Version::new(1, 3, 0));
        assert_eq!(bump_version(v, BumpKind::Patch), Version::new(1, 2, 4));
        assert_eq!(
            bump_version(Version::new(0, 0, 0), BumpKind::Patch),
            Version::new(0, 0, 1)
        );
    }

    #[test]
    fn test_bump_is_strictly_increasing() {
        let versions = [
            Version::new(0, 0, 0),
            Version::new(0, 1, 0),
            Version::new(1, 0, 0),
            Version::new(1, 2, 3),
            Version::new(3, 0, 9),
        ];

        for v in versions {
            for kind in [BumpKind::Major, BumpKind::Minor, BumpKind::Patch] {
                let bumped = bump_version(v, kind);
                assert!(bumped > v, "{:?} bump of {} must increase it", kind, v);
            }
        }
    }

    #[test]
    fn test_bump_stays_increasing_past_u32_range() {
        let boundary = u32::MAX as u64;
        let v = Version::new(boundary, boundary, boundary);

        assert_eq!(
            bump_version(v, BumpKind::Major),
            Version::new(boundary + 1, 0, 0)
        );
        assert_eq!(
            bump_version(v, BumpKind::Minor),
            Version::new(boundary, boundary + 1, 0)
        );
        assert_eq!(
            bump_version(v, BumpKind::Patch),
            Version::new(boundary, boundary, boundary + 1)
        );
    }

    #[test]
    fn test_parse_components_beyond_u32() {
        let v = parse_version("4294967296.0.0").unwrap();
        assert_eq!(v.major, u32::MAX as u64 + 1);
    }

    #[test]
    fn test_bump_kind_parse_fallback() {
        assert_eq!(BumpKind::parse("major"), BumpKind::Major);
        assert_eq!(BumpKind::parse("minor"), BumpKind::Minor);
        assert_eq!(BumpKind::parse("patch"), BumpKind::Patch);
        // Unknown kinds fall back to patch rather than erroring
        assert_eq!(BumpKind::parse("huge"), BumpKind::Patch);
        assert_eq!(BumpKind::parse(""), BumpKind::Patch);
        assert_eq!(BumpKind::parse("MAJOR"), BumpKind::Patch);
    }
}
