use crate::error::{GitSemverError, Result};
use crate::git::{ref_candidates, TagRef};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::collections::HashMap;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn walk_from(&self, tip: Oid) -> Result<git2::Revwalk<'_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(tip)?;
        Ok(revwalk)
    }
}

impl super::Repository for Git2Repository {
    fn has_any_commit(&self) -> Result<bool> {
        let mut revwalk = self.repo.revwalk()?;

        // An unborn HEAD has nothing to push; that is the empty case, not
        // an error
        if revwalk.push_glob("*").is_err() {
            return Ok(false);
        }

        match revwalk.next() {
            Some(oid) => {
                oid?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn has_remote(&self) -> Result<bool> {
        Ok(!self.repo.remotes()?.is_empty())
    }

    fn resolve_branch(&self, branch: &str) -> Result<Oid> {
        for candidate in ref_candidates(branch) {
            if let Ok(object) = self.repo.revparse_single(&candidate) {
                if let Ok(commit) = object.peel_to_commit() {
                    return Ok(commit.id());
                }
            }
        }

        Err(GitSemverError::branch(format!(
            "Cannot resolve branch '{}'",
            branch
        )))
    }

    fn merge_base(&self, a: Oid, b: Oid) -> Result<Oid> {
        self.repo.merge_base(a, b).map_err(|e| {
            GitSemverError::branch(format!("No common ancestor between {} and {}: {}", a, b, e))
        })
    }

    fn tags_by_proximity(&self, tip: Oid, prefix: &str) -> Result<Vec<TagRef>> {
        // Collect tag targets first (peeling annotated tags to commits),
        // then order them by walking from the tip
        let mut by_target: HashMap<Oid, Vec<String>> = HashMap::new();

        for name in self.repo.tag_names(None)?.iter().flatten() {
            if !name.starts_with(prefix) {
                continue;
            }
            if let Ok(reference) = self.repo.find_reference(&format!("refs/tags/{}", name)) {
                if let Ok(object) = reference.peel(git2::ObjectType::Commit) {
                    by_target
                        .entry(object.id())
                        .or_default()
                        .push(name.to_string());
                }
            }
        }

        let mut tags = Vec::new();
        for oid in self.walk_from(tip)? {
            let oid = oid?;
            if let Some(names) = by_target.get(&oid) {
                for name in names {
                    tags.push(TagRef {
                        name: name.clone(),
                        target: oid,
                    });
                }
            }
        }

        Ok(tags)
    }

    fn commit_subjects(&self, root: Option<Oid>, tip: Oid) -> Result<Vec<String>> {
        let mut revwalk = self.walk_from(tip)?;
        if let Some(root) = root {
            revwalk.hide(root)?;
        }

        let mut subjects = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            subjects.push(commit.summary().unwrap_or("").to_string());
        }

        subjects.reverse();
        Ok(subjects)
    }

    fn changed_paths(
        &self,
        root: Option<Oid>,
        tip: Oid,
        path_filter: &str,
    ) -> Result<Vec<String>> {
        let new_tree = self.repo.find_commit(tip)?.tree()?;
        let old_tree = match root {
            Some(oid) => Some(self.repo.find_commit(oid)?.tree()?),
            None => None,
        };

        let mut options = git2::DiffOptions::new();
        options.pathspec(path_filter);

        let diff =
            self.repo
                .diff_tree_to_tree(old_tree.as_ref(), Some(&new_tree), Some(&mut options))?;

        let mut paths = Vec::new();
        for delta in diff.deltas() {
            if let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) {
                paths.push(path.to_string_lossy().to_string());
            }
        }

        Ok(paths)
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
