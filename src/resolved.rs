//! Canonical resolved sets: intervals plus multi-codepoint string members.

use crate::intervals::IntervalSet;

/// Needle for a host multi-needle splitter: interval members as ranges,
/// string members as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitNeedle {
    Range(u32, u32),
    Text(String),
}

/// The canonical result of resolving a pattern.
///
/// `intervals` is sorted, disjoint, and coalesced. `strings` holds the
/// multi-codepoint members as raw codepoint sequences, sorted and
/// deduplicated; every member has at least two codepoints (shorter strings
/// are interval members by construction), and surrogate codepoints are
/// admissible, so a member is not always representable as a host string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedSet {
    intervals: IntervalSet,
    strings: Vec<Vec<u32>>,
}

impl ResolvedSet {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_intervals(intervals: IntervalSet) -> Self {
        Self {
            intervals,
            strings: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn from_codepoints(member: Vec<u32>) -> Self {
        debug_assert!(member.len() >= 2);
        Self {
            intervals: IntervalSet::new(),
            strings: vec![member],
        }
    }

    #[must_use]
    pub fn intervals(&self) -> &IntervalSet {
        &self.intervals
    }

    /// String members as codepoint sequences, sorted.
    #[must_use]
    pub fn strings(&self) -> &[Vec<u32>] {
        &self.strings
    }

    /// Codepoint membership; string members are not consulted.
    #[must_use]
    pub fn contains(&self, cp: u32) -> bool {
        self.intervals.contains(cp)
    }

    /// Full membership test for a codepoint sequence: a single codepoint
    /// tests the intervals, longer sequences test the string members.
    #[must_use]
    pub fn contains_codepoints(&self, member: &[u32]) -> bool {
        match member {
            [] => false,
            [cp] => self.intervals.contains(*cp),
            _ => self
                .strings
                .binary_search_by(|m| m.as_slice().cmp(member))
                .is_ok(),
        }
    }

    /// [`Self::contains_codepoints`] for host text.
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        let member: Vec<u32> = text.chars().map(|ch| ch as u32).collect();
        self.contains_codepoints(&member)
    }

    #[must_use]
    pub fn union(&self, other: &ResolvedSet) -> ResolvedSet {
        let mut strings = self.strings.clone();
        strings.extend(other.strings.iter().cloned());
        strings.sort();
        strings.dedup();
        ResolvedSet {
            intervals: self.intervals.union(&other.intervals),
            strings,
        }
    }

    #[must_use]
    pub fn intersect(&self, other: &ResolvedSet) -> ResolvedSet {
        let strings = self
            .strings
            .iter()
            .filter(|&member| other.strings.binary_search(member).is_ok())
            .cloned()
            .collect();
        ResolvedSet {
            intervals: self.intervals.intersect(&other.intervals),
            strings,
        }
    }

    #[must_use]
    pub fn difference(&self, other: &ResolvedSet) -> ResolvedSet {
        let strings = self
            .strings
            .iter()
            .filter(|&member| other.strings.binary_search(member).is_err())
            .cloned()
            .collect();
        ResolvedSet {
            intervals: self.intervals.difference(&other.intervals),
            strings,
        }
    }

    /// Complement of the codepoint side; string members pass through
    /// unchanged (`[^…]` negates codepoints only).
    #[must_use]
    pub fn complement_codepoints(&self) -> ResolvedSet {
        ResolvedSet {
            intervals: self.intervals.complement(),
            strings: self.strings.clone(),
        }
    }

    /// Needles for a host splitter: every interval, then every string.
    ///
    /// A member containing surrogate codepoints has no host-string form and
    /// is omitted; use [`Self::strings`] for the full member list.
    #[must_use]
    pub fn split_needles(&self) -> Vec<SplitNeedle> {
        let mut needles: Vec<SplitNeedle> = self
            .intervals
            .iter()
            .map(|run| SplitNeedle::Range(run.lo, run.hi))
            .collect();
        for member in &self.strings {
            if let Some(text) = host_string(member) {
                needles.push(SplitNeedle::Text(text));
            }
        }
        needles
    }

    /// Emit a pattern that this crate parses back to the same set.
    ///
    /// Every codepoint is written as a hex escape, so no member can collide
    /// with pattern syntax and surrogate members survive the trip.
    #[must_use]
    pub fn to_pattern(&self) -> String {
        let mut out = String::from("[");
        for run in self.intervals.iter() {
            push_escape(&mut out, run.lo);
            if run.hi > run.lo {
                out.push('-');
                push_escape(&mut out, run.hi);
            }
        }
        for member in &self.strings {
            out.push('{');
            for &cp in member {
                push_escape(&mut out, cp);
            }
            out.push('}');
        }
        out.push(']');
        out
    }
}

fn host_string(member: &[u32]) -> Option<String> {
    member.iter().map(|&cp| char::from_u32(cp)).collect()
}

fn push_escape(out: &mut String, cp: u32) {
    use std::fmt::Write;
    if cp <= 0xFFFF {
        let _ = write!(out, "\\u{cp:04X}");
    } else {
        let _ = write!(out, "\\U{cp:08X}");
    }
}
