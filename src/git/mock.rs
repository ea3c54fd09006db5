use crate::error::{GitSemverError, Result};
use crate::git::{Repository, TagRef};
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations.
///
/// Models a single linear history, oldest commit first. That is enough to
/// exercise the derivation pipeline; merge topologies are covered by the
/// integration tests against real repositories.
pub struct MockRepository {
    commits: Vec<(Oid, String)>,
    tags: Vec<TagRef>,
    branch_heads: HashMap<String, Oid>,
    remotes: Vec<String>,
    changed: Vec<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: Vec::new(),
            branch_heads: HashMap::new(),
            remotes: Vec::new(),
            changed: Vec::new(),
        }
    }

    /// Append a commit to the history and return its id
    pub fn add_commit(&mut self, subject: impl Into<String>) -> Oid {
        let mut bytes = [0u8; 20];
        bytes[16..].copy_from_slice(&(self.commits.len() as u32 + 1).to_be_bytes());
        let oid = Oid::from_bytes(&bytes).unwrap();
        self.commits.push((oid, subject.into()));
        oid
    }

    /// Add a tag pointing to an existing commit
    pub fn add_tag(&mut self, name: impl Into<String>, target: Oid) {
        self.tags.push(TagRef {
            name: name.into(),
            target,
        });
    }

    /// Set a branch head
    pub fn set_branch_head(&mut self, branch: impl Into<String>, oid: Oid) {
        self.branch_heads.insert(branch.into(), oid);
    }

    /// Add a configured remote
    pub fn add_remote(&mut self, name: impl Into<String>) {
        self.remotes.push(name.into());
    }

    /// Set the paths reported as changed
    pub fn set_changed_paths(&mut self, paths: Vec<String>) {
        self.changed = paths;
    }

    fn position(&self, oid: Oid) -> Result<usize> {
        self.commits
            .iter()
            .position(|(id, _)| *id == oid)
            .ok_or_else(|| GitSemverError::branch(format!("Unknown commit {}", oid)))
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn has_any_commit(&self) -> Result<bool> {
        Ok(!self.commits.is_empty())
    }

    fn has_remote(&self) -> Result<bool> {
        Ok(!self.remotes.is_empty())
    }

    fn resolve_branch(&self, branch: &str) -> Result<Oid> {
        self.branch_heads
            .get(branch)
            .copied()
            .ok_or_else(|| GitSemverError::branch(format!("Cannot resolve branch '{}'", branch)))
    }

    fn merge_base(&self, a: Oid, b: Oid) -> Result<Oid> {
        let pos = self.position(a)?.min(self.position(b)?);
        Ok(self.commits[pos].0)
    }

    fn tags_by_proximity(&self, tip: Oid, prefix: &str) -> Result<Vec<TagRef>> {
        let tip_pos = self.position(tip)?;

        let mut reachable: Vec<(usize, TagRef)> = Vec::new();
        for tag in &self.tags {
            if !tag.name.starts_with(prefix) {
                continue;
            }
            let pos = self.position(tag.target)?;
            if pos <= tip_pos {
                reachable.push((pos, tag.clone()));
            }
        }

        reachable.sort_by_key(|(pos, _)| std::cmp::Reverse(*pos));
        Ok(reachable.into_iter().map(|(_, tag)| tag).collect())
    }

    fn commit_subjects(&self, root: Option<Oid>, tip: Oid) -> Result<Vec<String>> {
        let tip_pos = self.position(tip)?;
        let start = match root {
            Some(oid) => self.position(oid)? + 1,
            None => 0,
        };

        Ok(self.commits[start..=tip_pos]
            .iter()
            .map(|(_, subject)| subject.clone())
            .collect())
    }

    fn changed_paths(
        &self,
        _root: Option<Oid>,
        _tip: Oid,
        path_filter: &str,
    ) -> Result<Vec<String>> {
        Ok(self
            .changed
            .iter()
            .filter(|path| path.starts_with(path_filter))
            .cloned()
            .collect())
    }
}
