use std::fmt;

/// Soft conditions met while locating the tag/history window.
/// These are non-fatal; derivation proceeds with the empty-root fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// A remote is configured but no matching tags were found
    TagsMissing,
    /// No remote is configured at all
    NoRemote,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::TagsMissing => {
                write!(
                    f,
                    "No tags are present for this repository. If this is unexpected, \
                     check to ensure that tags have been pulled from the remote."
                )
            }
            BoundaryWarning::NoRemote => {
                write!(
                    f,
                    "No remote is configured; the version is derived from local history only."
                )
            }
        }
    }
}
