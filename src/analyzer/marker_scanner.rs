/// Scans commit subjects for major/minor bump markers
pub struct MarkerScanner {
    major_pattern: String,
    minor_pattern: String,
}

/// Result of a marker scan over a commit message sequence.
///
/// Indices are positions in the oldest-first sequence. Both markers are
/// located independently; a single message may match both patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerScan {
    pub major: Option<usize>,
    pub minor: Option<usize>,
}

impl MarkerScanner {
    /// Create a scanner for the configured marker patterns
    pub fn new(major_pattern: &str, minor_pattern: &str) -> Self {
        MarkerScanner {
            major_pattern: major_pattern.to_lowercase(),
            minor_pattern: minor_pattern.to_lowercase(),
        }
    }

    /// Find the first chronological occurrence of each marker.
    ///
    /// Matching is case-insensitive substring containment; the messages must
    /// be ordered oldest first.
    pub fn scan(&self, messages: &[String]) -> MarkerScan {
        let mut scan = MarkerScan {
            major: None,
            minor: None,
        };

        for (index, message) in messages.iter().enumerate() {
            let message = message.to_lowercase();
            if scan.major.is_none() && message.contains(&self.major_pattern) {
                scan.major = Some(index);
            }
            if scan.minor.is_none() && message.contains(&self.minor_pattern) {
                scan.minor = Some(index);
            }
            if scan.major.is_some() && scan.minor.is_some() {
                break;
            }
        }

        scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(subjects: &[&str]) -> Vec<String> {
        subjects.iter().map(|s| s.to_string()).collect()
    }

    fn scanner() -> MarkerScanner {
        MarkerScanner::new("BREAKING CHANGE:", "feat:")
    }

    #[test]
    fn test_scan_no_markers() {
        let scan = scanner().scan(&messages(&["Initial Commit", "Second Commit"]));
        assert_eq!(scan.major, None);
        assert_eq!(scan.minor, None);
    }

    #[test]
    fn test_scan_finds_first_occurrence() {
        let scan = scanner().scan(&messages(&[
            "Initial Commit",
            "feat: one",
            "feat: two",
        ]));
        assert_eq!(scan.minor, Some(1));
    }

    #[test]
    fn test_scan_is_case_insensitive() {
        let scan = scanner().scan(&messages(&["FEAT: shouting", "breaking change: quiet"]));
        assert_eq!(scan.minor, Some(0));
        assert_eq!(scan.major, Some(1));
    }

    #[test]
    fn test_scan_matches_anywhere_in_subject() {
        let scan = scanner().scan(&messages(&["fix: tweak (BREAKING CHANGE: renamed field)"]));
        assert_eq!(scan.major, Some(0));
    }

    #[test]
    fn test_scan_indices_are_independent() {
        // One message may carry both markers
        let scan = scanner().scan(&messages(&["feat: BREAKING CHANGE: everything"]));
        assert_eq!(scan.major, Some(0));
        assert_eq!(scan.minor, Some(0));
    }

    #[test]
    fn test_scan_minor_before_major() {
        let scan = scanner().scan(&messages(&[
            "feat: early",
            "chore: nothing",
            "BREAKING CHANGE: late",
        ]));
        assert_eq!(scan.minor, Some(0));
        assert_eq!(scan.major, Some(2));
    }
}
