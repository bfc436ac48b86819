//! Emitter outputs: regex classes, enumerated pattern lists, split needles.

use expect_test::expect;
use unicode_set::{PatternEntry, SplitNeedle, compile, split_needles, to_pattern_list, to_regex_class};

#[test]
fn space_separator_class_rewrite() {
    let class = to_regex_class("\\p{Zs}").unwrap();
    expect![[r"[\u{20}\u{A0}\u{1680}\u{2000}-\u{200A}\u{202F}\u{205F}\u{3000}]"]]
        .assert_eq(&class);
}

#[test]
fn simple_class_rewrite() {
    let class = to_regex_class("[a-z0-9]").unwrap();
    expect![[r"[\u{30}-\u{39}\u{61}-\u{7A}]"]].assert_eq(&class);
}

#[test]
fn emitted_classes_compile_and_agree_with_the_predicate() {
    for pattern in ["[a-z0-9]", "\\p{Zs}", "[[:Greek:]&[:Lu:]]", "[^\\u0000-\\uFFFF]"] {
        let class = to_regex_class(pattern).unwrap();
        let re = regex::Regex::new(&format!("^{class}$")).unwrap();
        let matcher = compile(pattern).unwrap();
        for cp in (0..0x500).chain([0x1680, 0x2003, 0x1F600, 0x10FFFF]) {
            let Some(ch) = char::from_u32(cp) else {
                continue;
            };
            assert_eq!(
                re.is_match(&ch.to_string()),
                matcher.contains(ch),
                "{pattern} disagrees at U+{cp:04X}"
            );
        }
    }
}

#[test]
fn pattern_list_enumerates_members() {
    assert_eq!(
        to_pattern_list("[ace]").unwrap(),
        vec![
            PatternEntry::Char(0x61),
            PatternEntry::Char(0x63),
            PatternEntry::Char(0x65),
        ]
    );
}

#[test]
fn negated_pattern_list_marks_exclusions() {
    // `[^ace]` excludes exactly a, c, e; the list says so instead of
    // enumerating the rest of the codepoint space.
    assert_eq!(
        to_pattern_list("[^ace]").unwrap(),
        vec![
            PatternEntry::NegatedChar(0x61),
            PatternEntry::NegatedChar(0x63),
            PatternEntry::NegatedChar(0x65),
        ]
    );
    assert_eq!(
        to_pattern_list("\\P{Any}").unwrap().len(),
        0x110000
    );
}

#[test]
fn split_needles_carry_ranges_then_strings() {
    assert_eq!(
        split_needles("[a-f{::}{->}]").unwrap(),
        vec![
            SplitNeedle::Range(0x61, 0x66),
            SplitNeedle::Text("->".to_string()),
            SplitNeedle::Text("::".to_string()),
        ]
    );
}

#[test]
fn matcher_exposes_strings_separately() {
    fn cps(text: &str) -> Vec<u32> {
        text.chars().map(|ch| ch as u32).collect()
    }
    let matcher = compile("[a-c{ch}{ll}]").unwrap();
    assert!(matcher.contains('a'));
    assert!(!matcher.contains('h'));
    assert!(matcher.contains_str("ch"));
    assert_eq!(matcher.strings(), [cps("ch"), cps("ll")]);
}
