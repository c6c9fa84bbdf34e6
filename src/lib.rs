//! A glob pattern to regular expression compiler.
//!
//! This crate compiles shell-style wildcard patterns into regular
//! expressions and combines any number of them into a single OR-combined
//! matcher for testing path-like strings.
//!
//! # Features
//!
//! - **Anchored matching**: a pattern always matches the entire candidate
//!   string, never a substring
//! - **Globstar**: `**` matches across path segment boundaries
//! - **Brace groups**: `{html,txt}` alternation with full glob syntax
//!   inside each alternative
//! - **Character classes**: `[abc]`, `[a-z]` and negated `[!a-z]`
//! - **Extended globbing**: opt-in `?(...)`, `*(...)`, `+(...)`, `@(...)`
//!   and `!(...)` operators
//! - **Permissive**: malformed groups degrade to literal text instead of
//!   failing compilation
//! - **Multi-pattern matchers**: glob strings, literal `/body/flags`
//!   regular expressions and precompiled expressions combined with
//!   short-circuiting OR
//!
//! # Pattern Syntax
//!
//! - `/` separates path segments
//! - `*` matches zero or more characters within a segment
//! - `?` matches exactly one character within a segment
//! - `**` matches any number of whole segments, including none
//! - `{a,b}` matches either alternative; alternatives may be empty
//! - `[abc]`, `[a-z]` match one character from the set; `[!...]` negates
//! - Any other character matches itself
//!
//! # Examples
//!
//! ```
//! use globre::Glob;
//!
//! let glob = Glob::new("src/**/*.{ts,tsx}")?;
//! assert!(glob.matches("src/app.ts"));
//! assert!(glob.matches("src/ui/button.tsx"));
//! assert!(!glob.matches("lib/app.ts"));
//! # Ok::<(), globre::Error>(())
//! ```
//!
//! Multiple patterns are combined with [`Matcher`]:
//!
//! ```
//! use globre::{Matcher, Options};
//!
//! let matcher = Matcher::new(["*.js", "*.ts"], &Options::default())?;
//! assert!(matcher.matches("app.ts"));
//! assert!(!matcher.matches("app.rs"));
//! # Ok::<(), globre::Error>(())
//! ```

// public modules
pub mod error;
pub mod glob;
pub mod matcher;
pub mod re;

// public uses
pub use error::{Error, Result};
pub use glob::{Glob, Options};
pub use matcher::{Matcher, Pattern};
