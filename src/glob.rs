//! Glob pattern compilation.
//!
//! A glob pattern is translated into an anchored regular expression by a
//! single forward pass over the pattern. Brace groups and extended-glob
//! groups are translated by recursively running the full translator over
//! each alternative, so any glob construct keeps working inside a group.

// std imports
use std::fmt;
use std::mem::take;
use std::str::FromStr;

// third-party imports
use serde::{Deserialize, Serialize};

// local imports
use crate::error::{Error, Result};
use crate::re::{Flags, Regex};

// ---

/// Options controlling how a pattern is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    /// Match letters in both cases, including inside brace and
    /// extended-glob alternatives.
    pub case_insensitive: bool,
    /// Recognize the extended-glob operators `?(...)`, `*(...)`, `+(...)`,
    /// `@(...)` and `!(...)`. When disabled, their trigger characters are
    /// ordinary pattern text.
    pub extended_glob: bool,
}

// ---

/// A compiled glob pattern for matching path-like strings.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters within a path segment
/// - `?` matches exactly one character within a path segment
/// - `**` matches any number of path segments, including none
/// - `{a,b}` matches any of the comma-separated alternatives
/// - `[abc]`, `[a-z]`, `[!a-z]` character classes
/// - with [`Options::extended_glob`], the `?(...)`, `*(...)`, `+(...)`,
///   `@(...)` and `!(...)` operators
///
/// A match always covers the entire candidate string; there are no partial
/// matches. Malformed group syntax does not fail compilation: an
/// unterminated class, brace group or extended-glob group degrades to
/// literal text.
///
/// # Examples
///
/// ```
/// use globre::Glob;
///
/// let glob = Glob::new("src/**/*.rs")?;
/// assert!(glob.matches("src/main.rs"));
/// assert!(glob.matches("src/fmt/mod.rs"));
/// assert!(!glob.matches("benches/glob.rs"));
/// # Ok::<(), globre::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Glob {
    source: String,
    regex: Regex,
}

impl Glob {
    /// Compiles a pattern with default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use globre::Glob;
    ///
    /// let glob = Glob::new("*.{html,txt}")?;
    /// assert!(glob.matches("index.html"));
    /// assert!(glob.matches("notes.txt"));
    /// assert!(!glob.matches("notes.md"));
    /// # Ok::<(), globre::Error>(())
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_options(pattern, &Options::default())
    }

    /// Compiles a pattern with the given options.
    ///
    /// Fails only if the generated expression is rejected by the regular
    /// expression engine, which well-formed translator output avoids.
    ///
    /// # Examples
    ///
    /// ```
    /// use globre::{Glob, Options};
    ///
    /// let options = Options {
    ///     extended_glob: true,
    ///     ..Default::default()
    /// };
    /// let glob = Glob::with_options("file+(.bak).txt", &options)?;
    /// assert!(glob.matches("file.bak.txt"));
    /// assert!(glob.matches("file.bak.bak.txt"));
    /// assert!(!glob.matches("file.txt"));
    /// # Ok::<(), globre::Error>(())
    /// ```
    pub fn with_options(pattern: &str, options: &Options) -> Result<Self> {
        let expr = format!("^{}$", Translator::new(pattern, options).run());
        log::debug!("glob: compiled {:?} to {:?}", pattern, expr);
        let flags = Flags::default().case_insensitive(options.case_insensitive);
        Ok(Self {
            source: pattern.into(),
            regex: Regex::new(&expr, &flags)?,
        })
    }

    /// Tests whether the pattern matches the entire text.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Returns the original pattern text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the generated regular expression text.
    pub fn regex(&self) -> &str {
        self.regex.as_str()
    }

    /// Consumes the glob and returns the compiled regular expression.
    pub fn into_regex(self) -> Regex {
        self.regex
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Glob {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

// ---

/// Translates glob syntax into an unanchored regular expression fragment.
struct Translator<'a> {
    chars: Vec<char>,
    pos: usize,
    options: &'a Options,
    out: String,
}

impl<'a> Translator<'a> {
    fn new(pattern: &str, options: &'a Options) -> Self {
        Self {
            chars: pattern.chars().collect(),
            pos: 0,
            options,
            out: String::new(),
        }
    }

    fn run(mut self) -> String {
        while let Some(ch) = self.peek() {
            match ch {
                '?' | '*' | '+' | '@' | '!'
                    if self.options.extended_glob && self.peek_at(1) == Some('(') =>
                {
                    let start = self.pos;
                    self.pos += 2;
                    match self.ext_glob(ch) {
                        Some(fragment) => self.out.push_str(&fragment),
                        None => {
                            // Unclosed group: the quantifier and the paren
                            // are ordinary text, the rest is rescanned.
                            self.pos = start + 2;
                            self.literal(ch);
                            self.literal('(');
                        }
                    }
                }
                '*' => self.star(),
                '?' => {
                    self.out.push_str("[^/]");
                    self.pos += 1;
                }
                '[' => self.char_class(),
                '{' => self.brace_group(),
                '/' => {
                    self.out.push('/');
                    self.pos += 1;
                }
                _ => {
                    self.literal(ch);
                    self.pos += 1;
                }
            }
        }
        self.out
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Emits a single character, escaped if it is a regex metacharacter.
    fn literal(&mut self, ch: char) {
        match ch {
            '.' | '^' | '$' | '*' | '+' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}'
            | '\\' => {
                self.out.push('\\');
                self.out.push(ch);
            }
            _ => self.out.push(ch),
        }
    }

    fn subpattern(&self, pattern: &str) -> String {
        Translator::new(pattern, self.options).run()
    }

    /// Handles `*` and `**`, positioned at the first star.
    fn star(&mut self) {
        if self.peek_at(1) == Some('*') {
            // Collapse runs of three or more stars into a globstar.
            let mut next = self.pos + 2;
            while self.chars.get(next) == Some(&'*') {
                next += 1;
            }
            if self.chars.get(next) == Some(&'/') {
                // An optional separator lets `a/**/b` match `a/b`.
                self.out.push_str("(?:.*/)?");
                self.pos = next + 1;
            } else {
                self.out.push_str(".*");
                self.pos = next;
            }
        } else {
            self.out.push_str("[^/]*");
            self.pos += 1;
        }
    }

    /// Copies a character class, positioned at `[`.
    ///
    /// A `!` right after the opening negates the class, and a `]` right
    /// after the opening (or the negation) is a literal member. When no
    /// closing `]` is found, a literal `[` is emitted instead and scanning
    /// resumes at the character following the `[`.
    fn char_class(&mut self) {
        let start = self.pos;
        let mut class = String::from("[");
        self.pos += 1;
        if self.peek() == Some('!') {
            class.push('^');
            self.pos += 1;
        }
        if self.peek() == Some(']') {
            class.push_str("\\]");
            self.pos += 1;
        }
        while let Some(ch) = self.peek() {
            if ch == ']' {
                break;
            }
            // A backslash stays a class member rather than an escape.
            if ch == '\\' {
                class.push_str("\\\\");
            } else {
                class.push(ch);
            }
            self.pos += 1;
        }
        if self.peek() == Some(']') {
            class.push(']');
            self.pos += 1;
            self.out.push_str(&class);
        } else {
            self.out.push_str("\\[");
            self.pos = start + 1;
        }
    }

    /// Expands a brace group, positioned at `{`.
    ///
    /// The content is split at every comma until the closing `}`; nested
    /// braces are not recognized. Each alternative, including empty ones,
    /// is translated through the full translator. Without a closing `}`,
    /// the whole span from `{` to the end of the pattern is literal text.
    fn brace_group(&mut self) {
        let start = self.pos;
        self.pos += 1;
        let mut parts = Vec::new();
        let mut current = String::new();
        while let Some(ch) = self.peek() {
            self.pos += 1;
            match ch {
                '}' => {
                    parts.push(take(&mut current));
                    let alternation = parts
                        .iter()
                        .map(|part| self.subpattern(part))
                        .collect::<Vec<_>>()
                        .join("|");
                    self.out.push_str("(?:");
                    self.out.push_str(&alternation);
                    self.out.push(')');
                    return;
                }
                ',' => parts.push(take(&mut current)),
                _ => current.push(ch),
            }
        }
        let span: String = self.chars[start..].iter().collect();
        self.out.push_str(&regex::escape(&span));
    }

    /// Parses an extended-glob group, positioned just past the opening
    /// paren, and returns the translated fragment.
    ///
    /// Alternatives are split at `|` characters at nesting depth one;
    /// deeper parens and their content belong to nested groups. Returns
    /// `None` when the group is never closed.
    fn ext_glob(&mut self, quantifier: char) -> Option<String> {
        let mut depth = 1usize;
        let mut parts = Vec::new();
        let mut current = String::new();
        while let Some(ch) = self.peek() {
            self.pos += 1;
            match ch {
                '(' => {
                    depth += 1;
                    current.push(ch);
                }
                ')' if depth == 1 => {
                    parts.push(take(&mut current));
                    let alternation = parts
                        .iter()
                        .map(|part| self.subpattern(part))
                        .collect::<Vec<_>>()
                        .join("|");
                    return Some(match quantifier {
                        '?' => format!("(?:{})?", alternation),
                        '*' => format!("(?:{})*", alternation),
                        '+' => format!("(?:{})+", alternation),
                        '@' => format!("(?:{})", alternation),
                        // `!`: anything in the segment except the
                        // alternatives.
                        _ => format!("(?!(?:{}))[^/]*", alternation),
                    });
                }
                ')' => {
                    depth -= 1;
                    current.push(ch);
                }
                '|' if depth == 1 => parts.push(take(&mut current)),
                _ => current.push(ch),
            }
        }
        None
    }
}

// ---
