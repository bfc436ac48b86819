#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::perf, clippy::suspicious)] // Catch correctness + perf + suspicious patterns early.
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![forbid(unsafe_code)]

//! UnicodeSet pattern engine.
//!
//! Parses the UTS #35 UnicodeSet pattern syntax into an AST, resolves it
//! against the Unicode property data into a canonical set of codepoint
//! intervals plus multi-codepoint strings, and wraps the result in a
//! reusable membership predicate.
//!
//! ```
//! let set = unicode_set::compile("[a-z{ch}]").unwrap();
//! assert!(set.contains('m'));
//! assert!(!set.contains('A'));
//! assert!(set.contains_str("ch"));
//! ```
//!
//! The pipeline is pure and synchronous; every produced value is immutable
//! and shareable across threads. Callers that want zero work at use sites
//! can compile a pattern once and keep the [`Matcher`] in a static.

pub mod ast;
pub mod error;
pub mod eval;
pub mod intervals;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod properties;
pub mod resolved;

pub use error::{Error, ErrorKind, Result};
pub use intervals::{Interval, IntervalSet, MAX_CODE_POINT};
pub use matcher::{Matcher, PatternEntry};
pub use resolved::{ResolvedSet, SplitNeedle};

/// Parse a pattern into its AST without resolving properties.
pub fn parse(pattern: &str) -> Result<ast::Node> {
    parser::parse(pattern)
}

/// Parse and evaluate a pattern with the shared default property resolver.
pub fn resolve(pattern: &str) -> Result<ResolvedSet> {
    resolve_with(pattern, properties::default_resolver())
}

/// Parse and evaluate a pattern with an explicit property resolver.
pub fn resolve_with(
    pattern: &str,
    resolver: &properties::PropertyResolver,
) -> Result<ResolvedSet> {
    let root = parser::parse(pattern)?;
    eval::evaluate(&root, resolver)
}

/// Compile a pattern into a reusable membership predicate.
pub fn compile(pattern: &str) -> Result<Matcher> {
    resolve(pattern).map(Matcher::new)
}

/// Rewrite a pattern as an explicit regex character class equivalent to its
/// resolved intervals.
pub fn to_regex_class(pattern: &str) -> Result<String> {
    resolve(pattern).map(|set| matcher::regex_class(&set))
}

/// Expand a pattern to an enumerated codepoint list; a top-level negation
/// yields [`PatternEntry::NegatedChar`] entries for the excluded
/// codepoints. Callers opting in accept the size cost.
pub fn to_pattern_list(pattern: &str) -> Result<Vec<PatternEntry>> {
    let root = parser::parse(pattern)?;
    let (set, negated) = eval::evaluate_root(&root, properties::default_resolver())?;
    Ok(matcher::pattern_list(&set, negated))
}

/// Resolve a pattern to needles for a host multi-needle splitter.
pub fn split_needles(pattern: &str) -> Result<Vec<SplitNeedle>> {
    resolve(pattern).map(|set| set.split_needles())
}
