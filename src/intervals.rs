//! Canonical interval sets over the Unicode codepoint range.
//!
//! An [`IntervalSet`] is a sorted sequence of disjoint, non-touching,
//! inclusive intervals. Every operation returns a set in that canonical
//! form, so membership is always a binary search and equality is
//! structural.

/// Largest codepoint in the Unicode scalar range.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Inclusive codepoint interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub lo: u32,
    pub hi: u32,
}

impl Interval {
    #[inline]
    #[must_use]
    pub const fn contains(&self, cp: u32) -> bool {
        self.lo <= cp && cp <= self.hi
    }
}

/// Sorted, disjoint, coalesced sequence of inclusive intervals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntervalSet {
    runs: Vec<Interval>,
}

impl IntervalSet {
    #[must_use]
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// The full codepoint range `[0, 0x10FFFF]`.
    #[must_use]
    pub fn full() -> Self {
        Self::range(0, MAX_CODE_POINT)
    }

    #[must_use]
    pub fn single(cp: u32) -> Self {
        Self::range(cp, cp)
    }

    /// Set holding the single interval `[lo, hi]`.
    #[must_use]
    pub fn range(lo: u32, hi: u32) -> Self {
        debug_assert!(lo <= hi && hi <= MAX_CODE_POINT);
        Self {
            runs: vec![Interval { lo, hi }],
        }
    }

    /// Build a set from intervals that are already sorted by `lo`.
    ///
    /// Touching and overlapping neighbours are coalesced; this is the entry
    /// point for property-data ranges, which arrive sorted.
    #[must_use]
    pub fn from_sorted(ranges: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mut runs: Vec<Interval> = Vec::new();
        for (lo, hi) in ranges {
            debug_assert!(lo <= hi);
            let hi = hi.min(MAX_CODE_POINT);
            let lo = lo.min(hi);
            debug_assert!(runs.last().is_none_or(|last| last.lo <= lo));
            push_run(&mut runs, Interval { lo, hi });
        }
        Self { runs }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Interval] {
        &self.runs
    }

    pub fn iter(&self) -> impl Iterator<Item = Interval> + '_ {
        self.runs.iter().copied()
    }

    /// Iterate every codepoint of the set in ascending order.
    pub fn codepoints(&self) -> impl Iterator<Item = u32> + '_ {
        self.runs.iter().flat_map(|run| run.lo..=run.hi)
    }

    /// Number of codepoints covered.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.runs
            .iter()
            .map(|run| u64::from(run.hi - run.lo) + 1)
            .sum()
    }

    /// Binary-search membership test.
    #[must_use]
    pub fn contains(&self, cp: u32) -> bool {
        let idx = self.runs.partition_point(|run| run.lo <= cp);
        idx > 0 && cp <= self.runs[idx - 1].hi
    }

    /// Merge-sweep union.
    #[must_use]
    pub fn union(&self, other: &IntervalSet) -> IntervalSet {
        let mut runs = Vec::with_capacity(self.runs.len() + other.runs.len());
        let mut a = self.runs.iter().peekable();
        let mut b = other.runs.iter().peekable();
        loop {
            let next = match (a.peek(), b.peek()) {
                (Some(x), Some(y)) => {
                    if x.lo <= y.lo {
                        a.next()
                    } else {
                        b.next()
                    }
                }
                (Some(_), None) => a.next(),
                (None, Some(_)) => b.next(),
                (None, None) => break,
            };
            if let Some(run) = next {
                push_run(&mut runs, *run);
            }
        }
        IntervalSet { runs }
    }

    /// Two-pointer intersection.
    #[must_use]
    pub fn intersect(&self, other: &IntervalSet) -> IntervalSet {
        let mut runs = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.runs.len() && j < other.runs.len() {
            let a = self.runs[i];
            let b = other.runs[j];
            let lo = a.lo.max(b.lo);
            let hi = a.hi.min(b.hi);
            if lo <= hi {
                push_run(&mut runs, Interval { lo, hi });
            }
            if a.hi < b.hi {
                i += 1;
            } else {
                j += 1;
            }
        }
        IntervalSet { runs }
    }

    /// Two-pointer difference: the portions of `self` not covered by `other`.
    #[must_use]
    pub fn difference(&self, other: &IntervalSet) -> IntervalSet {
        let mut runs = Vec::new();
        let mut j = 0;
        for run in &self.runs {
            // Skip blockers that end before this run begins.
            while j < other.runs.len() && other.runs[j].hi < run.lo {
                j += 1;
            }
            let mut lo = run.lo;
            let mut k = j;
            while k < other.runs.len() && other.runs[k].lo <= run.hi {
                let blocker = other.runs[k];
                if blocker.lo > lo {
                    push_run(
                        &mut runs,
                        Interval {
                            lo,
                            hi: blocker.lo - 1,
                        },
                    );
                }
                if blocker.hi >= run.hi {
                    lo = run.hi + 1;
                    break;
                }
                lo = blocker.hi + 1;
                k += 1;
            }
            if lo <= run.hi {
                push_run(&mut runs, Interval { lo, hi: run.hi });
            }
        }
        IntervalSet { runs }
    }

    /// Complement over `[0, 0x10FFFF]`: the gaps between runs.
    #[must_use]
    pub fn complement(&self) -> IntervalSet {
        let mut runs = Vec::with_capacity(self.runs.len() + 1);
        let mut next = 0u32;
        for run in &self.runs {
            if run.lo > next {
                runs.push(Interval {
                    lo: next,
                    hi: run.lo - 1,
                });
            }
            if run.hi >= MAX_CODE_POINT {
                return IntervalSet { runs };
            }
            next = run.hi + 1;
        }
        runs.push(Interval {
            lo: next,
            hi: MAX_CODE_POINT,
        });
        IntervalSet { runs }
    }
}

/// Append `next` to a sorted run list, coalescing touching neighbours.
fn push_run(runs: &mut Vec<Interval>, next: Interval) {
    if let Some(last) = runs.last_mut() {
        debug_assert!(last.lo <= next.lo);
        if next.lo <= last.hi.saturating_add(1) {
            if next.hi > last.hi {
                last.hi = next.hi;
            }
            return;
        }
    }
    runs.push(next);
}
