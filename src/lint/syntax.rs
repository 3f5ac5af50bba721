use super::Finding;
use crate::snippet::Language;

/// Checks that a snippet is well formed.
///
/// Rust is parsed as a whole file with `syn`. The other languages get a
/// lexical scan: comments and string literals are skipped according to
/// `language`, and `()[]{}` must balance and nest.
pub fn check(language: Language, source: &str) -> Vec<Finding> {
    if language == Language::Rust {
        return check_rust(source);
    }
    let mut scanner = Scanner::new(language, source);
    scanner.run();
    scanner.finish()
}

fn check_rust(source: &str) -> Vec<Finding> {
    match syn::parse_file(source) {
        Ok(_) => Vec::new(),
        Err(err) => vec![Finding::InvalidSyntax {
            line: err.span().start().line.max(1),
            message: err.to_string(),
        }],
    }
}

struct Scanner {
    language: Language,
    chars: Vec<char>,
    pos: usize,
    line: usize,
    stack: Vec<(char, usize)>,
    findings: Vec<Finding>,
}

impl Scanner {
    fn new(language: Language, source: &str) -> Self {
        Self {
            language,
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            stack: Vec::new(),
            findings: Vec::new(),
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn starts_with(&self, pat: &str) -> bool {
        pat.chars().enumerate().all(|(i, c)| self.peek(i) == Some(c))
    }

    /// Consumes one char, keeping the line count.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    fn run(&mut self) {
        while let Some(c) = self.peek(0) {
            if self.skip_comment() || self.skip_string() {
                continue;
            }
            match c {
                '(' | '[' | '{' => {
                    self.stack.push((c, self.line));
                    self.bump();
                }
                ')' | ']' | '}' => {
                    self.close(c);
                    self.bump();
                }
                '\\' if self.language == Language::Curl => self.bump_n(2),
                _ => {
                    self.bump();
                }
            }
        }
    }

    fn close(&mut self, found: char) {
        let expected = match found {
            ')' => '(',
            ']' => '[',
            _ => '{',
        };
        match self.stack.pop() {
            None => self.findings.push(Finding::UnexpectedDelimiter {
                found,
                line: self.line,
            }),
            Some((open, open_line)) if open != expected => {
                self.findings.push(Finding::MismatchedDelimiter {
                    open,
                    open_line,
                    found,
                    line: self.line,
                })
            }
            Some(_) => {}
        }
    }

    fn skip_comment(&mut self) -> bool {
        match self.language {
            Language::JavaScript => {
                if self.starts_with("//") {
                    self.skip_line();
                    true
                } else if self.starts_with("/*") {
                    self.skip_block_comment();
                    true
                } else {
                    false
                }
            }
            Language::Python => {
                if self.peek(0) == Some('#') {
                    self.skip_line();
                    true
                } else {
                    false
                }
            }
            Language::Curl => {
                // `#` only starts a comment at the beginning of a word.
                let word_start = self.pos == 0 || self.chars[self.pos - 1].is_whitespace();
                if self.peek(0) == Some('#') && word_start {
                    self.skip_line();
                    true
                } else {
                    false
                }
            }
            Language::Rust => false,
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.peek(0) {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) {
        let start = self.line;
        self.bump_n(2);
        loop {
            if self.starts_with("*/") {
                self.bump_n(2);
                return;
            } else if self.bump().is_none() {
                self.findings
                    .push(Finding::UnterminatedComment { line: start });
                return;
            }
        }
    }

    fn skip_string(&mut self) -> bool {
        let Some(c) = self.peek(0) else {
            return false;
        };
        match (self.language, c) {
            (Language::JavaScript, '\'' | '"') => self.quoted(c, true, false),
            (Language::JavaScript, '`') => self.quoted(c, true, true),
            (Language::Python, '\'' | '"') => {
                let triple: String = [c, c, c].iter().collect();
                if self.starts_with(&triple) {
                    self.triple_quoted(&triple);
                } else {
                    self.quoted(c, true, false);
                }
            }
            (Language::Curl, '\'') => self.quoted(c, false, true),
            (Language::Curl, '"') => self.quoted(c, true, true),
            _ => return false,
        }
        true
    }

    /// Skips a literal closed by `quote`. Single-line literals stop at a
    /// newline and are reported as unterminated.
    fn quoted(&mut self, quote: char, escapes: bool, multiline: bool) {
        let start = self.line;
        self.bump();
        while let Some(c) = self.peek(0) {
            if escapes && c == '\\' {
                self.bump_n(2);
                continue;
            }
            if c == quote {
                self.bump();
                return;
            }
            if c == '\n' && !multiline {
                break;
            }
            self.bump();
        }
        self.findings
            .push(Finding::UnterminatedString { line: start });
    }

    fn triple_quoted(&mut self, triple: &str) {
        let start = self.line;
        self.bump_n(3);
        while self.peek(0).is_some() {
            if self.peek(0) == Some('\\') {
                self.bump_n(2);
                continue;
            }
            if self.starts_with(triple) {
                self.bump_n(3);
                return;
            }
            self.bump();
        }
        self.findings
            .push(Finding::UnterminatedString { line: start });
    }

    fn finish(mut self) -> Vec<Finding> {
        for (open, line) in self.stack.drain(..) {
            self.findings.push(Finding::UnclosedDelimiter { open, line });
        }
        self.findings
    }
}
