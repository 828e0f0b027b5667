//! Reads and writes module version records in the versions file.
//!
//! The versions file is treated as an ordered sequence of text lines, not a
//! structured document: only the quoted value of the first line matching
//! `<module> = "<version>"` is ever touched, and every other byte passes
//! through a rewrite verbatim. This keeps comments and formatting intact.

use crate::error::{PublishError, Result};
use crate::version::{parse_version, Version};
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Builds the matcher for a module's version record line.
///
/// A record line is `<module> = "<value>"` with optional leading
/// whitespace and flexible spacing around `=`.
fn record_regex(module: &str) -> Regex {
    let pattern = format!(r#"^(\s*){}(\s*=\s*")([^"]*)(".*)$"#, regex::escape(module));
    // The pattern is built from a fixed template plus an escaped literal,
    // so compilation cannot fail on user input.
    Regex::new(&pattern).unwrap()
}

/// Loads the version recorded for `module` in the file at `path`.
///
/// Only the first matching record line is considered. Fails with
/// `NotFound` if no line matches and `Parse` if the quoted value is not a
/// well-formed version.
pub fn load(path: &Path, module: &str) -> Result<Version> {
    let content = fs::read_to_string(path)?;
    let re = record_regex(module);

    for line in content.lines() {
        if let Some(caps) = re.captures(line) {
            let raw = &caps[3];
            return parse_version(raw).map_err(|_| {
                PublishError::parse(format!(
                    "module '{}' has malformed version '{}' in {}",
                    module,
                    raw,
                    path.display()
                ))
            });
        }
    }

    Err(PublishError::not_found(format!(
        "module '{}' in {}",
        module,
        path.display()
    )))
}

/// Rewrites the version recorded for `module` to `new_version`.
///
/// The whole document is rebuilt in memory with only the first matching
/// record's quoted value replaced, then written to a temporary file in the
/// same directory and atomically renamed over the original. On any failure
/// the original file is left untouched.
pub fn store(path: &Path, module: &str, new_version: Version) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let re = record_regex(module);

    let mut replaced = false;
    let mut updated = String::with_capacity(content.len());

    // split_inclusive keeps each line's terminator, so untouched lines and
    // the final-newline state survive byte-for-byte.
    for line in content.split_inclusive('\n') {
        if !replaced {
            let (body, terminator) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            };
            if let Some(caps) = re.captures(body) {
                updated.push_str(&caps[1]);
                updated.push_str(module);
                updated.push_str(&caps[2]);
                updated.push_str(&new_version.to_string());
                updated.push_str(&caps[4]);
                updated.push_str(terminator);
                replaced = true;
                continue;
            }
        }
        updated.push_str(line);
    }

    if !replaced {
        return Err(PublishError::not_found(format!(
            "module '{}' in {}",
            module,
            path.display()
        )));
    }

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(updated.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path)
        .map_err(|e| PublishError::Io(e.error))?;

    Ok(())
}
