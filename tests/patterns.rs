//! End-to-end pattern behaviour: concrete sets, operator semantics, and the
//! structural invariants of the canonical form.

use unicode_set::{ErrorKind, IntervalSet, ResolvedSet, compile, resolve};

fn pairs(set: &ResolvedSet) -> Vec<(u32, u32)> {
    set.intervals().iter().map(|run| (run.lo, run.hi)).collect()
}

fn cps(text: &str) -> Vec<u32> {
    text.chars().map(|ch| ch as u32).collect()
}

/// Canonical-form invariant: sorted, disjoint, non-touching, well-formed.
fn assert_canonical(set: &IntervalSet) {
    let runs = set.as_slice();
    for run in runs {
        assert!(run.lo <= run.hi, "inverted run {run:?}");
        assert!(run.hi <= 0x10FFFF, "run beyond the scalar range {run:?}");
    }
    for pair in runs.windows(2) {
        assert!(
            pair[0].hi + 1 < pair[1].lo,
            "runs not coalesced: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn ascii_range() {
    let set = resolve("[a-z]").unwrap();
    assert_eq!(pairs(&set), vec![(0x61, 0x7A)]);
    assert!(set.strings().is_empty());
}

#[test]
fn members_coalesce_into_runs() {
    let set = resolve("[abc123]").unwrap();
    assert_eq!(pairs(&set), vec![(0x31, 0x33), (0x61, 0x63)]);
}

#[test]
fn left_fold_of_union_and_difference() {
    // ({a,c,e} ∪ {b,d,f}) − {a,b,c}, then ∪ {d,e,f}.
    let set = resolve("[[ace][bdf]-[abc][def]]").unwrap();
    assert_eq!(pairs(&set), vec![(0x64, 0x66)]);
}

#[test]
fn difference_of_properties_excludes_thai_digits() {
    let ascii_only = compile("[[:digit:]-[:thai:]]").unwrap();
    assert!(!ascii_only.contains32(0x0E53)); // Thai digit three
    assert!(ascii_only.contains('7'));

    let all_digits = compile("[[:digit:]]").unwrap();
    assert!(all_digits.contains32(0x0E53));
}

#[test]
fn string_member_rides_along() {
    let set = resolve("[abc{def}]").unwrap();
    assert_eq!(pairs(&set), vec![(0x61, 0x63)]);
    assert_eq!(set.strings(), [cps("def")]);
}

#[test]
fn singleton_strings_are_codepoints() {
    let via_strings = resolve("[{a}{b}{c}]").unwrap();
    let plain = resolve("[abc]").unwrap();
    assert_eq!(via_strings, plain);
    assert!(via_strings.strings().is_empty());
}

#[test]
fn difference_with_bare_char_is_rejected() {
    let err = resolve("[[:Lu:]-A]").unwrap_err();
    assert_eq!(err.kind, ErrorKind::OperatorNeedsSet);
}

#[test]
fn difference_with_bracketed_char_works() {
    let set = resolve("[[:Lu:]-[A]]").unwrap();
    assert!(!set.contains('A' as u32));
    assert!(set.contains('B' as u32));
    assert!(set.contains(0x0391)); // Α
    let uppercase = resolve("[:Lu:]").unwrap();
    assert_eq!(
        set.intervals().union(&IntervalSet::single(0x41)),
        *uppercase.intervals()
    );
}

#[test]
fn resolved_sets_are_canonical() {
    for pattern in [
        "[a-z]",
        "[abc123]",
        "[[ace][bdf]-[abc][def]]",
        "[:L:]",
        "[^[:White_Space:]]",
        "[\\u0000-\\uFFFF]",
        "[[:Lu:][:Ll:]]",
    ] {
        let set = resolve(pattern).unwrap();
        assert_canonical(set.intervals());
    }
}

#[test]
fn predicate_agrees_with_resolution() {
    for pattern in ["[a-z0-9]", "[:Lu:]", "[^[:digit:]]", "[[:L:]-[:Ll:]]"] {
        let set = resolve(pattern).unwrap();
        let matcher = compile(pattern).unwrap();
        for cp in (0..0x2000).chain([0xD800, 0xE000, 0x1F600, 0x10FFFF]) {
            assert_eq!(
                set.contains(cp),
                matcher.contains32(cp),
                "{pattern} disagrees at U+{cp:04X}"
            );
        }
    }
}

#[test]
fn negation_is_complement_on_codepoints_only() {
    let plain = resolve("[a-f{ch}]").unwrap();
    let negated = resolve("[^a-f{ch}]").unwrap();
    assert_eq!(plain.intervals().complement(), *negated.intervals());
    assert_eq!(plain.strings(), negated.strings());
}

#[test]
fn union_is_commutative_and_associative() {
    let ab = resolve("[[a-m][k-z]]").unwrap();
    let ba = resolve("[[k-z][a-m]]").unwrap();
    assert_eq!(ab, ba);

    let left = resolve("[[[a-c][f-h]][m-p]]").unwrap();
    let right = resolve("[[a-c][[f-h][m-p]]]").unwrap();
    assert_eq!(left, right);
}

#[test]
fn difference_associates_left() {
    let set = resolve("[[a-z]-[a-c]-[x-z]]").unwrap();
    assert_eq!(pairs(&set), vec![(0x64, 0x77)]);
    // Right association would subtract nothing past `c`.
    let right_assoc = resolve("[[a-z]-[[a-c]-[x-z]]]").unwrap();
    assert_eq!(pairs(&right_assoc), vec![(0x64, 0x7A)]);
    assert_ne!(set, right_assoc);
}

#[test]
fn resolved_pattern_round_trips() {
    for pattern in [
        "[a-z{ch}{ss}]",
        "[:Lu:]",
        "[^a-f]",
        "[abc123]",
        "[\\U0001F600-\\U0001F64F]",
    ] {
        let set = resolve(pattern).unwrap();
        let reparsed = resolve(&set.to_pattern()).unwrap();
        assert_eq!(set, reparsed, "round-trip diverged for {pattern}");
    }
}

#[test]
fn property_pattern_matches_resolver_output() {
    let plain = resolve("[:Lu:]").unwrap();
    let negated = resolve("[:^Lu:]").unwrap();
    assert!(plain.strings().is_empty());
    assert!(negated.strings().is_empty());
    assert_eq!(plain.intervals().complement(), *negated.intervals());
}

#[test]
fn perl_and_posix_forms_are_equivalent() {
    assert_eq!(resolve("\\p{Lu}").unwrap(), resolve("[:Lu:]").unwrap());
    assert_eq!(resolve("\\P{Lu}").unwrap(), resolve("[:^Lu:]").unwrap());
    assert_eq!(
        resolve("\\p{sc=Thai}").unwrap(),
        resolve("[:script=Thai:]").unwrap()
    );
}

#[test]
fn surrogate_codepoints_are_ordinary_members() {
    let set = resolve("[\\uD800-\\uDFFF]").unwrap();
    assert_eq!(pairs(&set), vec![(0xD800, 0xDFFF)]);
    let matcher = compile("[^\\uD800-\\uDFFF]").unwrap();
    assert!(!matcher.contains32(0xD800));
    assert!(matcher.contains32(0xE000));
}

#[test]
fn surrogates_survive_in_string_members() {
    let set = resolve("[{\\uD800\\uDC00}]").unwrap();
    assert_eq!(set.strings(), [vec![0xD800, 0xDC00]]);
    assert!(set.contains_codepoints(&[0xD800, 0xDC00]));
    let round = resolve(&set.to_pattern()).unwrap();
    assert_eq!(set, round);
}

#[test]
fn error_offsets_point_into_the_pattern() {
    let err = resolve("[a-z").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnbalancedBracket);
    assert_eq!(err.offset, 0);

    let err = resolve("[:NoSuchProperty:]").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownProperty);
    assert_eq!(err.offset, 0);

    let err = resolve("[x[:NoSuchProperty:]]").unwrap_err();
    assert_eq!(err.offset, 2);
}
