//! Machine-readable output emission.
//!
//! Outputs are `key=value` lines, one per output, written to stdout and
//! (when running under a CI runner that provides `GITHUB_OUTPUT`) appended
//! to the runner's output file in the same format.

use crate::cli::VersionReport;
use std::fs::OpenOptions;
use std::io::{self, Write};

/// Write every derivation output as a `key=value` line
pub fn write_outputs<W: Write>(out: &mut W, report: &VersionReport) -> io::Result<()> {
    let derived = &report.derived;
    let rendered = &report.rendered;

    writeln!(out, "version={}", rendered.version)?;
    writeln!(out, "tag={}", rendered.tag)?;
    writeln!(out, "release_version={}", rendered.release_version)?;
    writeln!(out, "release_tag={}", rendered.release_tag)?;
    writeln!(out, "major={}", derived.version.major)?;
    writeln!(out, "minor={}", derived.version.minor)?;
    writeln!(out, "patch={}", derived.version.patch)?;
    writeln!(out, "increment={}", derived.increment)?;
    writeln!(out, "changed={}", report.changed)?;
    writeln!(out, "tag_prefix={}", report.tag_prefix)?;

    Ok(())
}

/// Append the outputs to the file named by `GITHUB_OUTPUT`, if set.
/// Returns whether anything was written.
pub fn append_github_output(report: &VersionReport) -> io::Result<bool> {
    let path = match std::env::var_os("GITHUB_OUTPUT") {
        Some(path) if !path.is_empty() => path,
        _ => return Ok(false),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_outputs(&mut file, report)?;
    Ok(true)
}
