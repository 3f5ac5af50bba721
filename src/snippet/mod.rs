pub mod literal;
pub mod renderer;

use std::fmt;
use std::str::FromStr;

pub use renderer::{file_name, render};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Python,
    Curl,
    Rust,
}

impl Language {
    pub fn all() -> [Language; 4] {
        [
            Language::JavaScript,
            Language::Python,
            Language::Curl,
            Language::Rust,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Curl => "cURL",
            Language::Rust => "Rust",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::Python => "py",
            Language::Curl => "sh",
            Language::Rust => "rs",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Language> {
        Language::all()
            .into_iter()
            .find(|lang| lang.extension().eq_ignore_ascii_case(ext))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(Language::JavaScript),
            "py" | "python" => Ok(Language::Python),
            "curl" | "sh" | "shell" => Ok(Language::Curl),
            "rs" | "rust" => Ok(Language::Rust),
            other => Err(anyhow::anyhow!("unknown snippet language: {}", other)),
        }
    }
}
