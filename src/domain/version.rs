use std::fmt;

/// Main version triple (major.minor.patch), excluding any development increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A computed version: the main triple plus the development increment
/// counting commits since the version-defining commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedVersion {
    pub version: Version,
    pub increment: u32,
}

impl DerivedVersion {
    pub fn new(version: Version, increment: u32) -> Self {
        DerivedVersion { version, increment }
    }

    /// The starting point for a repository with no commits at all
    pub fn zero() -> Self {
        DerivedVersion {
            version: Version::default(),
            increment: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_version_default_is_zero() {
        assert_eq!(Version::default(), Version::new(0, 0, 0));
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version::new(1, 0, 0) > Version::new(0, 9, 9));
        assert!(Version::new(1, 2, 3) > Version::new(1, 2, 2));
    }

    #[test]
    fn test_derived_zero() {
        let d = DerivedVersion::zero();
        assert_eq!(d.version, Version::new(0, 0, 0));
        assert_eq!(d.increment, 0);
    }
}
