//! Git query abstraction layer
//!
//! The core never talks to git directly; it consumes the [Repository]
//! trait, which has a real implementation backed by the `git2` crate
//! ([repository::Git2Repository]) and a mock for tests
//! ([mock::MockRepository]).
//!
//! Two ordering contracts are load-bearing and silently produce wrong
//! versions when violated: [Repository::commit_subjects] returns subjects
//! oldest first, and [Repository::tags_by_proximity] returns tags ordered
//! by commit-graph distance from the branch tip (nearest first), never by
//! tag creation time.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// A tag name together with the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    pub target: Oid,
}

/// Read-only git queries needed for version derivation
pub trait Repository: Send + Sync {
    /// Whether the repository contains any commit at all, on any ref
    fn has_any_commit(&self) -> Result<bool>;

    /// Whether any remote is configured
    fn has_remote(&self) -> Result<bool>;

    /// Resolve a branch reference to the commit at its tip.
    ///
    /// Fails with a `Branch` error when the reference is unknown.
    fn resolve_branch(&self, branch: &str) -> Result<Oid>;

    /// Common ancestor of two commits.
    ///
    /// Fails when the commits share no history.
    fn merge_base(&self, a: Oid, b: Oid) -> Result<Oid>;

    /// Tags reachable from `tip` whose names start with `prefix`, ordered
    /// nearest-to-tip first. Tags on commits not reachable from `tip` are
    /// excluded.
    fn tags_by_proximity(&self, tip: Oid, prefix: &str) -> Result<Vec<TagRef>>;

    /// Subject lines of commits reachable from `tip` but not from `root`,
    /// oldest first. With no root, every commit reachable from `tip`.
    fn commit_subjects(&self, root: Option<Oid>, tip: Oid) -> Result<Vec<String>>;

    /// Paths under `path_filter` that changed between `root` and `tip`.
    /// With no root the tip tree is compared against the empty tree.
    fn changed_paths(&self, root: Option<Oid>, tip: Oid, path_filter: &str)
        -> Result<Vec<String>>;
}

/// Candidate reference names for a CI-supplied branch input, most specific
/// first.
///
/// CI checkouts usually leave the branch as a remote-tracking ref, so
/// `refs/heads/*` is retried under `refs/remotes/origin/*` and pull-request
/// merge refs under `refs/remotes/pull/*`, with the raw input as fallback.
pub fn ref_candidates(branch: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    if let Some(rest) = branch.strip_prefix("refs/pull/") {
        candidates.push(format!("refs/remotes/pull/{}", rest));
    } else if let Some(rest) = branch.strip_prefix("refs/heads/") {
        candidates.push(format!("refs/remotes/origin/{}", rest));
    }

    candidates.push(branch.to_string());
    candidates
}
