use crate::analyzer::MarkerScan;
use crate::domain::{DerivedVersion, Version};

/// Version state feeding a single bump computation.
///
/// `tag_increment` is the increment carried by the nearest tag when that tag
/// is a development tag. `release` is the nearest release tag found further
/// down the proximity-ordered tag list; it is only populated behind a
/// development tag, and its presence switches the engine into the
/// race-reconciliation path.
#[derive(Debug, Clone, Copy)]
pub struct BumpState {
    pub working: Version,
    pub tag_increment: Option<u32>,
    pub release: Option<Version>,
    pub history_len: usize,
}

/// Compute the next version tuple from the current state and marker scan.
pub fn next_version(state: &BumpState, scan: &MarkerScan) -> DerivedVersion {
    match (state.tag_increment, state.release) {
        (Some(increment), Some(release)) => {
            reconcile(state.working, increment, release, scan, state.history_len)
        }
        _ => regular(state.working, scan, state.history_len),
    }
}

/// The regular bump: the oldest marker commit defines the version, and the
/// increment counts the commits that follow it, so each subsequent commit
/// advances the development build number by exactly one.
fn regular(working: Version, scan: &MarkerScan, history_len: usize) -> DerivedVersion {
    if let Some(index) = scan.major {
        DerivedVersion::new(
            Version::new(working.major + 1, 0, 0),
            commits_after(history_len, index),
        )
    } else if let Some(index) = scan.minor {
        DerivedVersion::new(
            Version::new(working.major, working.minor + 1, 0),
            commits_after(history_len, index),
        )
    } else {
        DerivedVersion::new(
            Version::new(working.major, working.minor, working.patch + 1),
            history_len.saturating_sub(1) as u32,
        )
    }
}

/// Reconcile a development tag against a release published on another
/// branch. When the release has caught up to (or passed) the working tuple
/// on the relevant axis, the regular bump applies; when the working tuple is
/// already ahead, only the development counter advances. Equal tuples count
/// as caught up, so the already-bumped component bumps again.
fn reconcile(
    working: Version,
    tag_increment: u32,
    release: Version,
    scan: &MarkerScan,
    history_len: usize,
) -> DerivedVersion {
    let major_caught_up = release.major >= working.major;
    let minor_caught_up = release.minor >= working.minor;
    let patch_caught_up = release.patch >= working.patch;

    if scan.major.is_some() && major_caught_up {
        regular(working, scan, history_len)
    } else if scan.minor.is_some() && minor_caught_up && major_caught_up {
        regular(
            working,
            &MarkerScan {
                major: None,
                minor: scan.minor,
            },
            history_len,
        )
    } else if patch_caught_up && minor_caught_up && major_caught_up {
        regular(
            working,
            &MarkerScan {
                major: None,
                minor: None,
            },
            history_len,
        )
    } else {
        DerivedVersion::new(working, tag_increment + 1)
    }
}

fn commits_after(history_len: usize, marker_index: usize) -> u32 {
    history_len.saturating_sub(marker_index + 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(major: Option<usize>, minor: Option<usize>) -> MarkerScan {
        MarkerScan { major, minor }
    }

    fn plain_state(working: Version, history_len: usize) -> BumpState {
        BumpState {
            working,
            tag_increment: None,
            release: None,
            history_len,
        }
    }

    #[test]
    fn test_patch_bump_without_markers() {
        let d = next_version(&plain_state(Version::new(0, 0, 0), 2), &scan(None, None));
        assert_eq!(d.version, Version::new(0, 0, 1));
        assert_eq!(d.increment, 1);
    }

    #[test]
    fn test_minor_bump_resets_patch() {
        let d = next_version(&plain_state(Version::new(1, 2, 3), 2), &scan(None, Some(1)));
        assert_eq!(d.version, Version::new(1, 3, 0));
        assert_eq!(d.increment, 0);
    }

    #[test]
    fn test_major_bump_resets_minor_and_patch() {
        let d = next_version(&plain_state(Version::new(1, 2, 3), 2), &scan(Some(1), None));
        assert_eq!(d.version, Version::new(2, 0, 0));
        assert_eq!(d.increment, 0);
    }

    #[test]
    fn test_major_wins_over_minor_regardless_of_order() {
        // Minor marker is chronologically first; the major bump still wins
        let d = next_version(
            &plain_state(Version::new(0, 1, 0), 3),
            &scan(Some(2), Some(0)),
        );
        assert_eq!(d.version, Version::new(1, 0, 0));
        assert_eq!(d.increment, 0);
    }

    #[test]
    fn test_increment_counts_commits_after_marker() {
        // Marker at index 1 of 5 commits: three commits follow it
        let d = next_version(&plain_state(Version::new(0, 0, 0), 5), &scan(None, Some(1)));
        assert_eq!(d.increment, 3);
    }

    #[test]
    fn test_increment_is_monotonic_per_commit() {
        for n in 1..6 {
            let d = next_version(&plain_state(Version::new(0, 0, 0), n), &scan(None, None));
            assert_eq!(d.increment, (n - 1) as u32);
        }
    }

    #[test]
    fn test_empty_window_saturates_increment() {
        let d = next_version(&plain_state(Version::new(0, 3, 0), 0), &scan(None, None));
        assert_eq!(d.version, Version::new(0, 3, 1));
        assert_eq!(d.increment, 0);
    }

    fn race_state(working: Version, tag_increment: u32, release: Version) -> BumpState {
        BumpState {
            working,
            tag_increment: Some(tag_increment),
            release: Some(release),
            history_len: 3,
        }
    }

    #[test]
    fn test_race_release_behind_advances_increment_only() {
        // Working 0.1.1dev4 against an older 0.1.0 release: already ahead
        // on the patch axis, so nothing re-bumps
        let d = next_version(
            &race_state(Version::new(0, 1, 1), 4, Version::new(0, 1, 0)),
            &scan(None, None),
        );
        assert_eq!(d.version, Version::new(0, 1, 1));
        assert_eq!(d.increment, 5);
    }

    #[test]
    fn test_race_release_caught_up_rebumps_patch() {
        // Equal tuples mean the release caught up; regular patch bump applies
        let d = next_version(
            &race_state(Version::new(0, 2, 0), 5, Version::new(0, 2, 0)),
            &scan(None, None),
        );
        assert_eq!(d.version, Version::new(0, 2, 1));
        assert_eq!(d.increment, 2);
    }

    #[test]
    fn test_race_major_marker_with_release_ahead() {
        let d = next_version(
            &race_state(Version::new(1, 0, 0), 2, Version::new(1, 4, 2)),
            &scan(Some(0), None),
        );
        assert_eq!(d.version, Version::new(2, 0, 0));
        assert_eq!(d.increment, 2);
    }

    #[test]
    fn test_race_major_marker_with_release_behind() {
        // Working already bumped past the published release: the marker
        // does not bump again
        let d = next_version(
            &race_state(Version::new(2, 0, 0), 1, Version::new(1, 9, 9)),
            &scan(Some(0), None),
        );
        assert_eq!(d.version, Version::new(2, 0, 0));
        assert_eq!(d.increment, 2);
    }

    #[test]
    fn test_race_minor_marker_requires_both_axes_caught_up() {
        // Release minor caught up but major behind: no re-bump
        let d = next_version(
            &race_state(Version::new(2, 1, 0), 0, Version::new(1, 5, 0)),
            &scan(None, Some(0)),
        );
        assert_eq!(d.version, Version::new(2, 1, 0));
        assert_eq!(d.increment, 1);
    }

    #[test]
    fn test_race_minor_marker_with_release_caught_up() {
        let d = next_version(
            &race_state(Version::new(1, 2, 0), 3, Version::new(1, 2, 0)),
            &scan(None, Some(1)),
        );
        assert_eq!(d.version, Version::new(1, 3, 0));
        assert_eq!(d.increment, 1);
    }

    #[test]
    fn test_dev_tag_without_release_uses_regular_path() {
        let state = BumpState {
            working: Version::new(0, 1, 1),
            tag_increment: Some(4),
            release: None,
            history_len: 2,
        };
        let d = next_version(&state, &scan(None, None));
        assert_eq!(d.version, Version::new(0, 1, 2));
        assert_eq!(d.increment, 1);
    }
}
