pub mod payload;
pub mod placeholder;
pub mod syntax;

use crate::models::RequestExample;
use crate::snippet::{self, Language};
use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Finding {
    #[error("line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },
    #[error("line {line}: `{open}` is never closed")]
    UnclosedDelimiter { open: char, line: usize },
    #[error("line {line}: unexpected `{found}`")]
    UnexpectedDelimiter { found: char, line: usize },
    #[error("line {line}: `{found}` does not close `{open}` opened on line {open_line}")]
    MismatchedDelimiter {
        open: char,
        open_line: usize,
        found: char,
        line: usize,
    },
    #[error("line {line}: unterminated string literal")]
    UnterminatedString { line: usize },
    #[error("line {line}: unterminated block comment")]
    UnterminatedComment { line: usize },
    #[error("line {line}: credential `{redacted}` looks like a real secret")]
    SuspectedSecret { redacted: String, line: usize },
    #[error("line {line}: credential `{value}` is not a recognizable placeholder")]
    UnmarkedCredential { value: String, line: usize },
    #[error("snippet does not say that error handling is left out")]
    MissingErrorHandlingNote,
    #[error("payload does not survive a JSON round trip: {0}")]
    PayloadRoundTrip(String),
}

/// A note must say the handling is left out, not merely mention it.
static ERROR_HANDLING_NOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:error|failure)\s+handling\b[^\n]{0,40}?\b(?:omitted|left\s+out)\b|\bmust\s+add\s+(?:error|failure)\s+handling\b",
    )
    .expect("note pattern")
});

#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: Language,
    pub findings: Vec<Finding>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Every static check that applies to the text of one snippet.
pub fn check_snippet(language: Language, source: &str) -> Vec<Finding> {
    let mut findings = syntax::check(language, source);
    if language == Language::Curl {
        findings.extend(payload::check_curl_bodies(source));
    }
    findings.extend(placeholder::check(source));
    if !ERROR_HANDLING_NOTE.is_match(source) {
        findings.push(Finding::MissingErrorHandlingNote);
    }
    findings
}

/// Checks the example data itself and each snippet rendered from it.
/// Payload findings carry no language.
pub fn check_example(example: &RequestExample) -> Vec<(Option<Language>, Finding)> {
    let mut findings = Vec::new();
    if let Err(finding) = payload::check_round_trip(&example.body) {
        findings.push((None, finding));
    }
    for language in Language::all() {
        let rendered = match snippet::render(example, language) {
            Ok(rendered) => rendered,
            Err(err) => {
                findings.push((Some(language), Finding::PayloadRoundTrip(err.to_string())));
                continue;
            }
        };
        findings.extend(
            check_snippet(language, &rendered)
                .into_iter()
                .map(|finding| (Some(language), finding)),
        );
    }
    findings
}

/// Checks every snippet file in `dir`. Files are read and judged one at a
/// time, so one file's report never depends on another file.
pub fn check_dir(dir: &Path) -> Result<Vec<FileReport>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("reading docs directory {}", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("reading an entry of {}", dir.display()))?
            .path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut reports = Vec::new();
    for path in paths {
        let Some(language) = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Language::from_extension)
        else {
            tracing::debug!(path = %path.display(), "skipping file with unknown extension");
            continue;
        };

        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let findings = check_snippet(language, &source);
        tracing::info!(
            path = %path.display(),
            language = %language,
            findings = findings.len(),
            "checked snippet"
        );
        reports.push(FileReport {
            path,
            language,
            findings,
        });
    }

    Ok(reports)
}

pub(crate) fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}
