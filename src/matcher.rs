//! Multi-pattern matchers.
//!
//! A [`Matcher`] aggregates any number of patterns into a single predicate
//! which succeeds when any of its patterns matches. Patterns are tried in
//! order over a precompiled list; nothing is generated or evaluated at
//! match time.

// third-party imports
use once_cell::sync::Lazy;

// local imports
use crate::error::Result;
use crate::glob::{Glob, Options};
use crate::re::{Flags, Regex};

// ---

/// Recognizes the literal regular expression surface syntax `/body/flags`.
static LITERAL_REGEX: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"^/(.{1,4096})/([gimsuy]{0,6})$").unwrap());

/// Translates literal regular expression flag letters.
///
/// `g`, `u` and `y` are accepted but have no effect: they control
/// iteration, Unicode and anchoring modes with no meaning for whole-string
/// boolean tests, and the engines are always Unicode-aware.
fn flags(letters: &str) -> Flags {
    let mut flags = Flags::default();
    for ch in letters.chars() {
        match ch {
            'i' => flags.case_insensitive = true,
            'm' => flags.multi_line = true,
            's' => flags.dot_matches_new_line = true,
            _ => {}
        }
    }
    flags
}

// ---

/// A single pattern accepted by [`Matcher::new`].
///
/// `From` conversions let glob strings, compiled globs and precompiled
/// regular expressions be mixed in one collection.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// A glob pattern, or a `/body/flags` literal regular expression.
    Text(String),
    /// A precompiled regular expression, used as-is.
    Regex(Regex),
}

impl From<&str> for Pattern {
    fn from(pattern: &str) -> Self {
        Self::Text(pattern.into())
    }
}

impl From<String> for Pattern {
    fn from(pattern: String) -> Self {
        Self::Text(pattern)
    }
}

impl From<Glob> for Pattern {
    fn from(glob: Glob) -> Self {
        Self::Regex(glob.into_regex())
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self::Regex(regex)
    }
}

impl From<regex::Regex> for Pattern {
    fn from(regex: regex::Regex) -> Self {
        Self::Regex(regex.into())
    }
}

impl From<fancy_regex::Regex> for Pattern {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Regex(regex.into())
    }
}

// ---

/// An ordered set of patterns combined by logical OR.
///
/// An empty matcher matches nothing, including the empty string.
///
/// # Examples
///
/// ```
/// use globre::{Matcher, Options};
///
/// let matcher = Matcher::new(["*.js", "*.ts"], &Options::default())?;
/// assert!(matcher.matches("app.js"));
/// assert!(matcher.matches("app.ts"));
/// assert!(!matcher.matches("app.css"));
/// # Ok::<(), globre::Error>(())
/// ```
///
/// A pattern string of the shape `/body/flags` is used as a regular
/// expression directly instead of being compiled as a glob:
///
/// ```
/// use globre::{Matcher, Options};
///
/// let matcher = Matcher::new([r"/^test.*\.js$/"], &Options::default())?;
/// assert!(matcher.matches("test_parser.js"));
/// assert!(!matcher.matches("parser_test.js"));
/// # Ok::<(), globre::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    regexes: Vec<Regex>,
}

impl Matcher {
    /// Builds a matcher from a collection of patterns.
    ///
    /// Glob items are compiled with the given options. Fails when a
    /// literal regular expression body is rejected by the engines, or in
    /// the should-not-happen case of the engines rejecting a compiled
    /// glob.
    pub fn new<I>(patterns: I, options: &Options) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        let mut regexes = Vec::new();
        for pattern in patterns {
            match pattern.into() {
                Pattern::Text(text) => match LITERAL_REGEX.captures(&text) {
                    Some(captures) => {
                        regexes.push(Regex::new(&captures[1], &flags(&captures[2]))?);
                    }
                    None => regexes.push(Glob::with_options(&text, options)?.into_regex()),
                },
                Pattern::Regex(regex) => regexes.push(regex),
            }
        }
        Ok(Self { regexes })
    }

    /// Tests the candidate against each pattern in order, returning `true`
    /// on the first match.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        self.regexes.iter().any(|regex| regex.is_match(candidate))
    }

    /// Returns the number of patterns in the set.
    pub fn len(&self) -> usize {
        self.regexes.len()
    }

    /// Returns `true` if the set contains no patterns.
    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }
}

impl From<Glob> for Matcher {
    fn from(glob: Glob) -> Self {
        Self {
            regexes: vec![glob.into_regex()],
        }
    }
}

// ---
