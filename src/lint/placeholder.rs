use super::{Finding, line_of};
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:YOUR_[A-Z0-9_]+|<[^<>]+>|\$\{?[A-Za-z_][A-Za-z0-9_]*\}?|\{\{\s*[A-Za-z_][A-Za-z0-9_]*\s*\}\}|[xX*]{3,}|\.{3})$",
    )
    .expect("placeholder pattern")
});

static KNOWN_SECRET_FORMATS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^sk-[A-Za-z0-9_\-]{16,}$",
        r"^gsk_[A-Za-z0-9]{16,}$",
        r"^gh[pousr]_[A-Za-z0-9]{30,}$",
        r"^AKIA[0-9A-Z]{16}$",
        r"^xox[abposr]-[A-Za-z0-9\-]{10,}$",
        r"^eyJ[A-Za-z0-9_\-]+\.[A-Za-z0-9_\-]+\.[A-Za-z0-9_\-]*$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("secret pattern"))
    .collect()
});

static CREDENTIALS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"(?i)\bBearer\s+([^\s'"`\\,)}]+)"#,
        r#"(?i)\b(?:api[_-]?key|access[_-]?key|token|secret|password)\b['"]?\s*[:=]\s*['"]([^'"]*)['"]"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("credential pattern"))
    .collect()
});

const MIN_GENERIC_SECRET_LEN: usize = 32;

pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER.is_match(value)
}

pub fn looks_like_secret(value: &str) -> bool {
    if KNOWN_SECRET_FORMATS.iter().any(|re| re.is_match(value)) {
        return true;
    }

    value.len() >= MIN_GENERIC_SECRET_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-+/=.".contains(c))
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Checks a single credential value.
pub fn check_value(value: &str, line: usize) -> Option<Finding> {
    if looks_like_secret(value) {
        Some(Finding::SuspectedSecret {
            redacted: redact(value),
            line,
        })
    } else if !is_placeholder(value) {
        Some(Finding::UnmarkedCredential {
            value: value.to_string(),
            line,
        })
    } else {
        None
    }
}

/// Finds credentials written into `source` and checks each one.
pub fn check(source: &str) -> Vec<Finding> {
    let mut found: Vec<(usize, Finding)> = Vec::new();
    for re in CREDENTIALS.iter() {
        for caps in re.captures_iter(source) {
            let Some(m) = caps.get(1) else { continue };
            let line = line_of(source, m.start());
            if let Some(finding) = check_value(m.as_str(), line) {
                found.push((m.start(), finding));
            }
        }
    }
    found.sort_by_key(|(offset, _)| *offset);
    found.into_iter().map(|(_, finding)| finding).collect()
}

fn redact(value: &str) -> String {
    let prefix: String = value.chars().take(4).collect();
    format!("{}****", prefix)
}
