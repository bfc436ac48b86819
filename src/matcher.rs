//! Matcher and emitters over resolved sets.

use std::fmt::Write;

use crate::resolved::ResolvedSet;

/// Reusable membership predicate over a resolved set.
///
/// Construction is free; every query is a binary search over the interval
/// starts. Values are immutable and shareable across threads, so callers
/// can build one ahead of time and store it in a static.
#[derive(Clone, Debug)]
pub struct Matcher {
    set: ResolvedSet,
}

impl Matcher {
    #[must_use]
    pub fn new(set: ResolvedSet) -> Self {
        Self { set }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.contains32(ch as u32)
    }

    /// Membership for a raw codepoint, surrogates included.
    #[inline]
    #[must_use]
    pub fn contains32(&self, cp: u32) -> bool {
        self.set.contains(cp)
    }

    /// String members of the set as codepoint sequences; the predicate
    /// itself is codepoint-only.
    #[must_use]
    pub fn strings(&self) -> &[Vec<u32>] {
        self.set.strings()
    }

    /// Full membership test for a text fragment: single scalars test the
    /// intervals, longer fragments test the string members.
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        self.set.contains_str(text)
    }

    #[must_use]
    pub fn resolved(&self) -> &ResolvedSet {
        &self.set
    }

    #[must_use]
    pub fn into_resolved(self) -> ResolvedSet {
        self.set
    }
}

/// Entry of an enumerated pattern list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternEntry {
    Char(u32),
    /// Codepoint excluded by a top-level negation.
    NegatedChar(u32),
}

/// Enumerate a resolved set for parser-combinator consumers.
///
/// When the pattern's top level was negated, `set` must be the un-negated
/// resolution and the entries mark the codepoints the pattern excludes.
#[must_use]
pub fn pattern_list(set: &ResolvedSet, negated: bool) -> Vec<PatternEntry> {
    set.intervals()
        .codepoints()
        .map(|cp| {
            if negated {
                PatternEntry::NegatedChar(cp)
            } else {
                PatternEntry::Char(cp)
            }
        })
        .collect()
}

/// Rewrite a resolved set as a regex character class (`[\u{hhh}…]`).
///
/// The empty set has no class representation; it is emitted as a negated
/// full-range class, which some hosts reject as an empty class. String
/// members cannot appear in a character class and are exposed separately.
#[must_use]
pub fn regex_class(set: &ResolvedSet) -> String {
    if set.intervals().is_empty() {
        return "[^\\u{0}-\\u{10FFFF}]".to_string();
    }
    let mut out = String::from("[");
    for run in set.intervals().iter() {
        let _ = write!(out, "\\u{{{:X}}}", run.lo);
        if run.hi > run.lo {
            let _ = write!(out, "-\\u{{{:X}}}", run.hi);
        }
    }
    out.push(']');
    out
}
