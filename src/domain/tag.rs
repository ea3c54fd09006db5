use crate::domain::Version;
use crate::error::{GitSemverError, Result};

/// A version tag decomposed into its main triple and optional development
/// increment.
///
/// `increment` is `None` for release tags (no delimiter suffix present) and
/// `Some(n)` for development tags. These are distinct states, not a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTag {
    pub version: Version,
    pub increment: Option<u32>,
}

impl ParsedTag {
    /// Parse a tag string into a version tuple.
    ///
    /// Accepts names qualified by a ref namespace ("refs/tags/v1.2.3"), a
    /// configurable prefix ("v"), and an optional increment suffix separated
    /// by `delimiter` ("v1.2.3dev4"). Trailing main components may be
    /// omitted and default to 0, so "v1" parses as 1.0.0.
    ///
    /// Fails if any expected numeric component is non-numeric; an
    /// unparseable tag makes the subsequent version arithmetic meaningless,
    /// so there is no fallback.
    pub fn parse(tag: &str, prefix: &str, delimiter: &str) -> Result<Self> {
        // Keep only the final segment of path-qualified names
        let name = tag.rsplit('/').next().unwrap_or(tag);
        let name = name.strip_prefix(prefix).unwrap_or(name);

        let (main, suffix) = match name.split_once(delimiter) {
            Some((main, suffix)) => (main, Some(suffix)),
            None => (name, None),
        };

        let mut components = [0u32; 3];
        for (i, part) in main.split('.').take(3).enumerate() {
            components[i] = part.parse::<u32>().map_err(|_| {
                GitSemverError::parse(format!(
                    "Invalid version component '{}' in tag '{}'",
                    part, tag
                ))
            })?;
        }

        let increment = match suffix {
            None | Some("") => None,
            Some(s) => Some(s.parse::<u32>().map_err(|_| {
                GitSemverError::parse(format!(
                    "Invalid increment suffix '{}' in tag '{}'",
                    s, tag
                ))
            })?),
        };

        Ok(ParsedTag {
            version: Version::new(components[0], components[1], components[2]),
            increment,
        })
    }

    /// A release tag carries no increment suffix
    pub fn is_release(&self) -> bool {
        self.increment.is_none()
    }
}
