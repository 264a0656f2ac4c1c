//! Ignore-pattern loading and matching.
//!
//! Patterns use shell wildcard semantics applied to the whole relative path
//! string: `*` matches any run of characters (including `/`), `?` matches a
//! single character and `[seq]` / `[!seq]` match character classes. A pattern
//! must therefore spell out directory prefixes itself, e.g. `docs/*.png`.
//!
//! # Example
//!
//! ```
//! use duplicate_guard::ignore::IgnoreFilter;
//!
//! let filter = IgnoreFilter::from_patterns(["*.lock", "vendor/*"]).unwrap();
//! assert!(filter.should_ignore(".git/HEAD"));
//! assert!(filter.should_ignore("vendor/lib/a.c"));
//! assert!(!filter.should_ignore("src/main.rs"));
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;

use crate::error::GuardError;

/// Ignore file used when the caller does not need an override.
pub const DEFAULT_IGNORE_FILE: &str = "./duplicate_guard.ignore";

/// Pattern that is always in effect, excluding version-control metadata.
pub const BUILTIN_PATTERN: &str = ".git/*";

/// A single compiled glob pattern.
#[derive(Debug, Clone)]
struct GlobPattern {
    source: String,
    matcher: Regex,
}

impl GlobPattern {
    fn new(pattern: &str) -> Result<Self, GuardError> {
        let matcher =
            Regex::new(&translate_glob(pattern)).map_err(|source| GuardError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            source: pattern.to_string(),
            matcher,
        })
    }
}

/// Ordered, immutable set of ignore patterns.
///
/// The built-in [`BUILTIN_PATTERN`] is always the first entry.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    patterns: Vec<GlobPattern>,
}

impl IgnoreFilter {
    /// Create a filter containing only the built-in pattern.
    pub fn builtin() -> Result<Self, GuardError> {
        Self::from_patterns(std::iter::empty::<&str>())
    }

    /// Create a filter from user patterns; the built-in pattern is prepended.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::InvalidPattern`] if a pattern cannot be compiled.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, GuardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = vec![GlobPattern::new(BUILTIN_PATTERN)?];
        for pattern in patterns {
            compiled.push(GlobPattern::new(pattern.as_ref())?);
        }
        Ok(Self { patterns: compiled })
    }

    /// Load patterns from an ignore file.
    ///
    /// A missing file is tolerated only when `path` is [`DEFAULT_IGNORE_FILE`];
    /// a missing explicit path is a fatal configuration error.
    ///
    /// # Errors
    ///
    /// - [`GuardError::IgnoreFileNotFound`] for a missing explicit path
    /// - [`GuardError::IgnoreFileRead`] if the file cannot be read
    /// - [`GuardError::InvalidPattern`] if a line cannot be compiled
    pub fn load(path: &Path) -> Result<Self, GuardError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if is_default_location(path) {
                    log::debug!(
                        "No ignore file at {}, using built-in pattern only",
                        path.display()
                    );
                    return Self::builtin();
                }
                return Err(GuardError::IgnoreFileNotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(GuardError::IgnoreFileRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let filter = Self::from_patterns(parse_patterns(&content))?;
        log::debug!(
            "Loaded {} ignore patterns from {}",
            filter.len() - 1,
            path.display()
        );
        Ok(filter)
    }

    /// Check whether a relative path matches any pattern.
    #[must_use]
    pub fn should_ignore(&self, path: &str) -> bool {
        match self.patterns.iter().find(|p| p.matcher.is_match(path)) {
            Some(pattern) => {
                log::trace!("'{}' ignored by pattern '{}'", path, pattern.source);
                true
            }
            None => false,
        }
    }

    /// The patterns in effect, built-in first.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.source.as_str())
    }

    /// Number of patterns, including the built-in one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false: the built-in pattern is present in every filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn is_default_location(path: &Path) -> bool {
    path.as_os_str() == DEFAULT_IGNORE_FILE
}

/// Extract patterns from ignore-file text.
///
/// A line starting with `#` is a comment. Other lines are trimmed and kept
/// unless they end up empty.
pub fn parse_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Translate a shell glob into an anchored regex.
fn translate_glob(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from(r"(?s)\A(?:");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => {
                let mut j = i;
                if j < chars.len() && chars[j] == '!' {
                    j += 1;
                }
                if j < chars.len() && chars[j] == ']' {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    // Unterminated class: the bracket is literal.
                    out.push_str(r"\[");
                } else {
                    out.push_str(&translate_class(&chars[i..j]));
                    i = j + 1;
                }
            }
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    out.push_str(r")\z");
    out
}

/// Translate the body of a `[...]` class.
fn translate_class(body: &[char]) -> String {
    let (negated, body) = match body.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, body),
    };

    let mut items = String::new();
    let mut i = 0;
    while i < body.len() {
        if i + 2 < body.len() && body[i + 1] == '-' {
            let (lo, hi) = (body[i], body[i + 2]);
            // Reversed ranges match nothing.
            if lo <= hi {
                push_class_char(&mut items, lo);
                items.push('-');
                push_class_char(&mut items, hi);
            }
            i += 3;
        } else {
            push_class_char(&mut items, body[i]);
            i += 1;
        }
    }

    match (items.is_empty(), negated) {
        (true, true) => ".".to_string(),
        (true, false) => "[a&&b]".to_string(),
        (false, true) => format!("[^{items}]"),
        (false, false) => format!("[{items}]"),
    }
}

fn push_class_char(out: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '^' | '-' | '&' | '~') {
        out.push('\\');
    }
    out.push(c);
}
