//! The derivation workflow
//!
//! Ties the git collaborator and the pure core together into a single
//! pass: locate the nearest tag and history window, classify the window,
//! bump, render. Decoupled from argument parsing so it can be driven
//! programmatically and tested against a mock repository.

use crate::analyzer::MarkerScanner;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{next_version, render, BumpState, DerivedVersion, ParsedTag, RenderedVersion, Version};
use crate::error::Result;
use crate::git::{Repository, TagRef};

/// Everything a single derivation run produces
#[derive(Debug, Clone, PartialEq)]
pub struct VersionReport {
    pub derived: DerivedVersion,
    pub rendered: RenderedVersion,
    pub changed: bool,
    pub tag_prefix: String,
    pub warnings: Vec<BoundaryWarning>,
}

/// Derive the version for the configured branch.
///
/// The nearest reachable tag (by commit-graph proximity, not creation
/// time) supplies the working tuple and the history root; commits after
/// the root are classified against the marker patterns and fed to the bump
/// engine. A development tag with an older release tag behind it switches
/// the engine into race reconciliation.
pub fn derive_version<R: Repository>(repo: &R, config: &Config) -> Result<VersionReport> {
    let mut warnings = Vec::new();

    if !repo.has_any_commit()? {
        return Ok(finish(DerivedVersion::zero(), true, warnings, config));
    }

    let tip = repo.resolve_branch(&config.branch)?;
    let tags = repo.tags_by_proximity(tip, &config.tag_prefix)?;

    let mut state = BumpState {
        working: Version::default(),
        tag_increment: None,
        release: None,
        history_len: 0,
    };
    let mut root = None;

    match tags.first() {
        None => {
            if repo.has_remote()? {
                warnings.push(BoundaryWarning::TagsMissing);
            } else {
                warnings.push(BoundaryWarning::NoRemote);
            }
        }
        Some(nearest) => {
            // An unparseable nearest tag is fatal; guessing a fallback here
            // could regress an already-published version
            let parsed = ParsedTag::parse(
                &nearest.name,
                &config.tag_prefix,
                &config.increment_delimiter,
            )?;

            state.working = parsed.version;
            state.tag_increment = parsed.increment;
            if !parsed.is_release() {
                state.release = preceding_release(&tags[1..], config);
            }

            root = Some(repo.merge_base(nearest.target, tip)?);
        }
    }

    let history = repo.commit_subjects(root, tip)?;
    state.history_len = history.len();

    let scanner = MarkerScanner::new(&config.major_pattern, &config.minor_pattern);
    let derived = next_version(&state, &scanner.scan(&history));

    let changed = match &config.change_path {
        Some(filter) => !repo.changed_paths(root, tip, filter)?.is_empty(),
        None => true,
    };

    Ok(finish(derived, changed, warnings, config))
}

/// Nearest release tag further down the proximity-ordered list.
/// Tags that fail to parse are skipped; only the nearest tag must parse.
fn preceding_release(rest: &[TagRef], config: &Config) -> Option<Version> {
    rest.iter().find_map(|tag| {
        ParsedTag::parse(&tag.name, &config.tag_prefix, &config.increment_delimiter)
            .ok()
            .filter(ParsedTag::is_release)
            .map(|parsed| parsed.version)
    })
}

fn finish(
    derived: DerivedVersion,
    changed: bool,
    warnings: Vec<BoundaryWarning>,
    config: &Config,
) -> VersionReport {
    let rendered = render(
        &derived,
        &config.main_format,
        &config.increment_format,
        &config.increment_delimiter,
        &config.tag_prefix,
    );

    VersionReport {
        derived,
        rendered,
        changed,
        tag_prefix: config.tag_prefix.clone(),
        warnings,
    }
}
