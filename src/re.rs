//! A thin facade over two regular expression engines.
//!
//! Expressions are compiled with the [`regex`] crate whenever its syntax
//! permits, falling back to [`fancy_regex`] for expressions that need
//! backtracking features such as lookaround. Glob translation only emits
//! lookaround for `!(...)` groups, so most compiled patterns stay on the
//! non-backtracking engine with its linear-time matching guarantee.

// std imports
use std::fmt;

// local imports
use crate::error::Result;

// ---

/// Matching flags applied to an expression at compile time.
///
/// The flags are rendered as an inline `(?ims)` group, which both engines
/// understand, rather than through engine-specific builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// Letters match both cases.
    pub case_insensitive: bool,
    /// `^` and `$` also match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches a newline.
    pub dot_matches_new_line: bool,
}

impl Flags {
    /// Returns a copy with case-insensitive matching set as given.
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(&self, expr: &str) -> String {
        if self.is_empty() {
            return expr.into();
        }
        let mut out = String::with_capacity(expr.len() + 6);
        out.push_str("(?");
        if self.case_insensitive {
            out.push('i');
        }
        if self.multi_line {
            out.push('m');
        }
        if self.dot_matches_new_line {
            out.push('s');
        }
        out.push(')');
        out.push_str(expr);
        out
    }
}

// ---

/// A compiled regular expression backed by one of the two engines.
#[derive(Debug, Clone)]
pub enum Regex {
    Plain(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl Regex {
    /// Compiles an expression, preferring the plain engine.
    ///
    /// If the plain engine rejects the syntax, the expression is compiled
    /// with the fancy engine instead, and its error is returned on failure.
    pub fn new(expr: &str, flags: &Flags) -> Result<Self> {
        let expr = flags.apply(expr);
        match regex::Regex::new(&expr) {
            Ok(re) => Ok(Self::Plain(re)),
            Err(_) => Ok(Self::Fancy(fancy_regex::Regex::new(&expr)?)),
        }
    }

    /// Tests whether the expression matches anywhere in the text.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Plain(re) => re.is_match(text),
            // Exceeding the backtracking limit counts as no match.
            Self::Fancy(re) => re.is_match(text).unwrap_or(false),
        }
    }

    /// Returns the source text of the compiled expression.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(re) => re.as_str(),
            Self::Fancy(re) => re.as_str(),
        }
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<regex::Regex> for Regex {
    fn from(re: regex::Regex) -> Self {
        Self::Plain(re)
    }
}

impl From<fancy_regex::Regex> for Regex {
    fn from(re: fancy_regex::Regex) -> Self {
        Self::Fancy(re)
    }
}

// ---
