//! Property resolver: canonicalizes `(name, value)` references and expands
//! them to interval sets.
//!
//! General_Category, Script, Script_Extensions, Canonical_Combining_Class,
//! and the boolean properties come from `icu_properties` compiled data;
//! Block comes from the generated table in `generated/`; the quote-mark
//! properties are derived sets maintained in this crate.

use icu_properties::props::{self, CanonicalCombiningClass, GeneralCategory, GeneralCategoryGroup, Script};
use icu_properties::script::ScriptWithExtensions;
use icu_properties::{CodePointMapData, CodePointSetData, CodePointSetDataBorrowed, PropertyParser};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::intervals::IntervalSet;

mod blocks;
mod quotes;

/// Resolves property references against the compiled Unicode data.
///
/// Stateless; the data it consults is read-only compiled data, so a single
/// instance can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertyResolver;

static DEFAULT: Lazy<PropertyResolver> = Lazy::new(PropertyResolver::new);

/// Process-wide shared resolver.
#[must_use]
pub fn default_resolver() -> &'static PropertyResolver {
    &DEFAULT
}

impl PropertyResolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Expand a property reference to an interval set.
    ///
    /// `name == None` is the bare form (`[:Lu:]`, `\p{Thai}`) resolved
    /// through the category-or-script fallback chain. `offset` is the byte
    /// offset of the reference in the pattern, carried into errors.
    pub fn resolve(
        &self,
        name: Option<&str>,
        value: &str,
        negated: bool,
        offset: usize,
    ) -> Result<IntervalSet> {
        let canon_value = canonicalize(value);
        let set = match name {
            Some(raw) => self.resolve_keyed(&canonicalize(raw), &canon_value, offset)?,
            None => self.resolve_bare(&canon_value, offset)?,
        };
        debug!(
            property = canon_value.as_str(),
            runs = set.as_slice().len(),
            negated,
            "expanded property reference"
        );
        Ok(if negated { set.complement() } else { set })
    }

    fn resolve_keyed(&self, name: &str, value: &str, offset: usize) -> Result<IntervalSet> {
        let set = match name {
            "gc" | "generalcategory" | "category" => general_category(value),
            "sc" | "script" => script(value),
            "scx" | "scriptextensions" => script_extensions(value),
            "blk" | "block" => block(value),
            "ccc" | "canonicalcombiningclass" | "combiningclass" => combining_class(value),
            _ => return Err(Error::new(ErrorKind::UnknownProperty, offset)),
        };
        set.ok_or(Error::new(ErrorKind::UnknownPropertyValue, offset))
    }

    /// Bare-value fallback chain: General_Category, then Script, then the
    /// boolean properties, then the derived quote-mark sets.
    fn resolve_bare(&self, value: &str, offset: usize) -> Result<IntervalSet> {
        general_category(value)
            .or_else(|| script(value))
            .or_else(|| boolean_property(value))
            .or_else(|| quotes::lookup(value))
            .ok_or(Error::new(ErrorKind::UnknownProperty, offset))
    }
}

/// Loose-match canonicalization: drop whitespace, underscores, and hyphens;
/// lowercase ASCII.
fn canonicalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

fn ranges_of(set: CodePointSetDataBorrowed<'_>) -> IntervalSet {
    IntervalSet::from_sorted(set.iter_ranges().map(|range| (*range.start(), *range.end())))
}

/// A category value (`Lu`) or derived group (`L`, `LC`); the group parser
/// accepts both.
fn general_category(value: &str) -> Option<IntervalSet> {
    let group = PropertyParser::<GeneralCategoryGroup>::new().get_loose(value)?;
    let data = CodePointMapData::<GeneralCategory>::new().get_set_for_value_group(group);
    Some(ranges_of(data.as_borrowed()))
}

fn script(value: &str) -> Option<IntervalSet> {
    let script = PropertyParser::<Script>::new().get_loose(value)?;
    let data = CodePointMapData::<Script>::new().get_set_for_value(script);
    Some(ranges_of(data.as_borrowed()))
}

fn script_extensions(value: &str) -> Option<IntervalSet> {
    let script = PropertyParser::<Script>::new().get_loose(value)?;
    let list = ScriptWithExtensions::new().get_script_extensions_set(script);
    Some(IntervalSet::from_sorted(
        list.iter_ranges().map(|range| (*range.start(), *range.end())),
    ))
}

fn block(value: &str) -> Option<IntervalSet> {
    if value == "noblock" || value == "nb" {
        let mut assigned = IntervalSet::new();
        for (lo, hi) in blocks::all() {
            assigned = assigned.union(&IntervalSet::range(lo, hi));
        }
        return Some(assigned.complement());
    }
    blocks::lookup(value).map(|(lo, hi)| IntervalSet::range(lo, hi))
}

/// Decimal (`ccc=230`) or symbolic (`ccc=Above`) combining class.
fn combining_class(value: &str) -> Option<IntervalSet> {
    let ccc = match value.parse::<u8>() {
        Ok(num) => CanonicalCombiningClass::from_icu4c_value(num),
        Err(_) => PropertyParser::<CanonicalCombiningClass>::new().get_loose(value)?,
    };
    let data = CodePointMapData::<CanonicalCombiningClass>::new().get_set_for_value(ccc);
    Some(ranges_of(data.as_borrowed()))
}

type SetConstructor = fn() -> CodePointSetDataBorrowed<'static>;

/// Boolean properties and the derived categories `Any`, `Assigned`, `ASCII`.
fn boolean_property(value: &str) -> Option<IntervalSet> {
    match value {
        "any" => return Some(IntervalSet::full()),
        "ascii" => return Some(IntervalSet::range(0, 0x7F)),
        // Assigned is the complement of the Unassigned general category.
        "assigned" => {
            let unassigned = CodePointMapData::<GeneralCategory>::new()
                .get_set_for_value(GeneralCategory::Unassigned);
            return Some(ranges_of(unassigned.as_borrowed()).complement());
        }
        _ => {}
    }
    let idx = BOOLEAN_PROPS
        .binary_search_by_key(&value, |&(name, _)| name)
        .ok()?;
    Some(ranges_of((BOOLEAN_PROPS[idx].1)()))
}

/// Canonicalized long and short boolean-property names (UAX #44), sorted.
static BOOLEAN_PROPS: &[(&str, SetConstructor)] = &[
    ("ahex", CodePointSetData::new::<props::AsciiHexDigit>),
    ("alpha", CodePointSetData::new::<props::Alphabetic>),
    ("alphabetic", CodePointSetData::new::<props::Alphabetic>),
    ("asciihexdigit", CodePointSetData::new::<props::AsciiHexDigit>),
    ("bidic", CodePointSetData::new::<props::BidiControl>),
    ("bidicontrol", CodePointSetData::new::<props::BidiControl>),
    ("bidim", CodePointSetData::new::<props::BidiMirrored>),
    ("bidimirrored", CodePointSetData::new::<props::BidiMirrored>),
    ("cased", CodePointSetData::new::<props::Cased>),
    ("caseignorable", CodePointSetData::new::<props::CaseIgnorable>),
    ("changeswhencasefolded", CodePointSetData::new::<props::ChangesWhenCasefolded>),
    ("changeswhencasemapped", CodePointSetData::new::<props::ChangesWhenCasemapped>),
    ("changeswhenlowercased", CodePointSetData::new::<props::ChangesWhenLowercased>),
    ("changeswhennfkccasefolded", CodePointSetData::new::<props::ChangesWhenNfkcCasefolded>),
    ("changeswhentitlecased", CodePointSetData::new::<props::ChangesWhenTitlecased>),
    ("changeswhenuppercased", CodePointSetData::new::<props::ChangesWhenUppercased>),
    ("ci", CodePointSetData::new::<props::CaseIgnorable>),
    ("cwcf", CodePointSetData::new::<props::ChangesWhenCasefolded>),
    ("cwcm", CodePointSetData::new::<props::ChangesWhenCasemapped>),
    ("cwkcf", CodePointSetData::new::<props::ChangesWhenNfkcCasefolded>),
    ("cwl", CodePointSetData::new::<props::ChangesWhenLowercased>),
    ("cwt", CodePointSetData::new::<props::ChangesWhenTitlecased>),
    ("cwu", CodePointSetData::new::<props::ChangesWhenUppercased>),
    ("dash", CodePointSetData::new::<props::Dash>),
    ("defaultignorablecodepoint", CodePointSetData::new::<props::DefaultIgnorableCodePoint>),
    ("dep", CodePointSetData::new::<props::Deprecated>),
    ("deprecated", CodePointSetData::new::<props::Deprecated>),
    ("di", CodePointSetData::new::<props::DefaultIgnorableCodePoint>),
    ("dia", CodePointSetData::new::<props::Diacritic>),
    ("diacritic", CodePointSetData::new::<props::Diacritic>),
    ("ebase", CodePointSetData::new::<props::EmojiModifierBase>),
    ("ecomp", CodePointSetData::new::<props::EmojiComponent>),
    ("emod", CodePointSetData::new::<props::EmojiModifier>),
    ("emoji", CodePointSetData::new::<props::Emoji>),
    ("emojicomponent", CodePointSetData::new::<props::EmojiComponent>),
    ("emojimodifier", CodePointSetData::new::<props::EmojiModifier>),
    ("emojimodifierbase", CodePointSetData::new::<props::EmojiModifierBase>),
    ("emojipresentation", CodePointSetData::new::<props::EmojiPresentation>),
    ("epres", CodePointSetData::new::<props::EmojiPresentation>),
    ("ext", CodePointSetData::new::<props::Extender>),
    ("extendedpictographic", CodePointSetData::new::<props::ExtendedPictographic>),
    ("extender", CodePointSetData::new::<props::Extender>),
    ("extpict", CodePointSetData::new::<props::ExtendedPictographic>),
    ("graphemebase", CodePointSetData::new::<props::GraphemeBase>),
    ("graphemeextend", CodePointSetData::new::<props::GraphemeExtend>),
    ("grbase", CodePointSetData::new::<props::GraphemeBase>),
    ("grext", CodePointSetData::new::<props::GraphemeExtend>),
    ("hex", CodePointSetData::new::<props::HexDigit>),
    ("hexdigit", CodePointSetData::new::<props::HexDigit>),
    ("idc", CodePointSetData::new::<props::IdContinue>),
    ("idcontinue", CodePointSetData::new::<props::IdContinue>),
    ("ideo", CodePointSetData::new::<props::Ideographic>),
    ("ideographic", CodePointSetData::new::<props::Ideographic>),
    ("ids", CodePointSetData::new::<props::IdStart>),
    ("idsb", CodePointSetData::new::<props::IdsBinaryOperator>),
    ("idsbinaryoperator", CodePointSetData::new::<props::IdsBinaryOperator>),
    ("idst", CodePointSetData::new::<props::IdsTrinaryOperator>),
    ("idstart", CodePointSetData::new::<props::IdStart>),
    ("idstrinaryoperator", CodePointSetData::new::<props::IdsTrinaryOperator>),
    ("joinc", CodePointSetData::new::<props::JoinControl>),
    ("joincontrol", CodePointSetData::new::<props::JoinControl>),
    ("loe", CodePointSetData::new::<props::LogicalOrderException>),
    ("logicalorderexception", CodePointSetData::new::<props::LogicalOrderException>),
    ("lower", CodePointSetData::new::<props::Lowercase>),
    ("lowercase", CodePointSetData::new::<props::Lowercase>),
    ("math", CodePointSetData::new::<props::Math>),
    ("nchar", CodePointSetData::new::<props::NoncharacterCodePoint>),
    ("noncharactercodepoint", CodePointSetData::new::<props::NoncharacterCodePoint>),
    ("patsyn", CodePointSetData::new::<props::PatternSyntax>),
    ("patternsyntax", CodePointSetData::new::<props::PatternSyntax>),
    ("patternwhitespace", CodePointSetData::new::<props::PatternWhiteSpace>),
    ("patws", CodePointSetData::new::<props::PatternWhiteSpace>),
    ("qmark", CodePointSetData::new::<props::QuotationMark>),
    ("quotationmark", CodePointSetData::new::<props::QuotationMark>),
    ("radical", CodePointSetData::new::<props::Radical>),
    ("regionalindicator", CodePointSetData::new::<props::RegionalIndicator>),
    ("ri", CodePointSetData::new::<props::RegionalIndicator>),
    ("sd", CodePointSetData::new::<props::SoftDotted>),
    ("sentenceterminal", CodePointSetData::new::<props::SentenceTerminal>),
    ("softdotted", CodePointSetData::new::<props::SoftDotted>),
    ("space", CodePointSetData::new::<props::WhiteSpace>),
    ("sterm", CodePointSetData::new::<props::SentenceTerminal>),
    ("term", CodePointSetData::new::<props::TerminalPunctuation>),
    ("terminalpunctuation", CodePointSetData::new::<props::TerminalPunctuation>),
    ("uideo", CodePointSetData::new::<props::UnifiedIdeograph>),
    ("unifiedideograph", CodePointSetData::new::<props::UnifiedIdeograph>),
    ("upper", CodePointSetData::new::<props::Uppercase>),
    ("uppercase", CodePointSetData::new::<props::Uppercase>),
    ("variationselector", CodePointSetData::new::<props::VariationSelector>),
    ("vs", CodePointSetData::new::<props::VariationSelector>),
    ("whitespace", CodePointSetData::new::<props::WhiteSpace>),
    ("wspace", CodePointSetData::new::<props::WhiteSpace>),
    ("xidc", CodePointSetData::new::<props::XidContinue>),
    ("xidcontinue", CodePointSetData::new::<props::XidContinue>),
    ("xids", CodePointSetData::new::<props::XidStart>),
    ("xidstart", CodePointSetData::new::<props::XidStart>),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intervals::MAX_CODE_POINT;

    fn resolver() -> PropertyResolver {
        PropertyResolver::new()
    }

    #[test]
    fn canonicalize_strips_separators_and_case() {
        assert_eq!(canonicalize(" White_Space "), "whitespace");
        assert_eq!(canonicalize("white-space"), "whitespace");
        assert_eq!(canonicalize("Lu"), "lu");
        assert_eq!(canonicalize("ccc = 230"), "ccc=230");
    }

    #[test]
    fn boolean_table_is_sorted() {
        assert!(
            BOOLEAN_PROPS
                .windows(2)
                .all(|pair| pair[0].0 < pair[1].0)
        );
    }

    #[test]
    fn uppercase_letter_category() {
        let lu = resolver().resolve(None, "Lu", false, 0).unwrap();
        assert!(lu.contains('A' as u32));
        assert!(!lu.contains('a' as u32));
        assert!(lu.contains(0x0391)); // Α
    }

    #[test]
    fn derived_group_is_union_of_subcategories() {
        let resolver = resolver();
        let letters = resolver.resolve(None, "L", false, 0).unwrap();
        for value in ["Lu", "Ll", "Lt", "Lm", "Lo"] {
            let sub = resolver.resolve(None, value, false, 0).unwrap();
            assert_eq!(sub.difference(&letters), crate::intervals::IntervalSet::new());
        }
    }

    #[test]
    fn digit_alias_reaches_decimal_number() {
        let digits = resolver().resolve(None, "digit", false, 0).unwrap();
        assert!(digits.contains('7' as u32));
        assert!(digits.contains(0x0E53)); // Thai digit three
        assert!(!digits.contains('x' as u32));
    }

    #[test]
    fn script_resolves_bare_and_keyed() {
        let resolver = resolver();
        let bare = resolver.resolve(None, "arabic", false, 0).unwrap();
        let keyed = resolver.resolve(Some("sc"), "Arab", false, 0).unwrap();
        assert_eq!(bare, keyed);
        assert!(bare.contains(0x0627)); // ا
        assert!(!bare.contains('a' as u32));
    }

    #[test]
    fn script_extensions_cover_more_than_script() {
        let resolver = resolver();
        let sc = resolver.resolve(Some("sc"), "Deva", false, 0).unwrap();
        let scx = resolver.resolve(Some("scx"), "Deva", false, 0).unwrap();
        assert_eq!(sc.difference(&scx), crate::intervals::IntervalSet::new());
        // U+0966 DEVANAGARI DIGIT ZERO is shared with other Indic scripts.
        assert!(scx.contains(0x0966));
    }

    #[test]
    fn block_lookup() {
        let resolver = resolver();
        let latin = resolver.resolve(Some("blk"), "Basic Latin", false, 0).unwrap();
        assert_eq!(latin, IntervalSet::range(0, 0x7F));
        let none = resolver.resolve(Some("blk"), "No_Block", false, 0).unwrap();
        assert!(!none.contains(0x41));
    }

    #[test]
    fn combining_class_numeric_and_symbolic() {
        let resolver = resolver();
        let above = resolver.resolve(Some("ccc"), "230", false, 0).unwrap();
        assert!(above.contains(0x0301)); // combining acute
        assert!(!above.contains(0x0323)); // combining dot below (ccc=220)
        let named = resolver.resolve(Some("ccc"), "Above", false, 0).unwrap();
        assert_eq!(above, named);
    }

    #[test]
    fn boolean_property_with_aliases() {
        let resolver = resolver();
        let long = resolver.resolve(None, "White_Space", false, 0).unwrap();
        let short = resolver.resolve(None, "WSpace", false, 0).unwrap();
        assert_eq!(long, short);
        assert!(long.contains(0x20));
        assert!(long.contains(0x1680)); // Ogham space mark
        assert!(!long.contains('x' as u32));
    }

    #[test]
    fn derived_categories() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(None, "Any", false, 0).unwrap(),
            IntervalSet::full()
        );
        assert_eq!(
            resolver.resolve(None, "ASCII", false, 0).unwrap(),
            IntervalSet::range(0, 0x7F)
        );
        let assigned = resolver.resolve(None, "Assigned", false, 0).unwrap();
        assert!(assigned.contains('A' as u32));
        assert!(!assigned.contains(0x0378)); // unassigned
    }

    #[test]
    fn quote_marks_resolve_through_the_fallback_chain() {
        let marks = resolver().resolve(None, "Quote_Mark", false, 0).unwrap();
        assert!(marks.contains(0x0022));
        assert!(marks.contains(0x00AB));
        let left = resolver().resolve(None, "quote_mark_left", false, 0).unwrap();
        assert!(left.contains(0x00AB));
        assert!(!left.contains(0x00BB));
    }

    #[test]
    fn negation_complements_over_the_full_range() {
        let resolver = resolver();
        let lu = resolver.resolve(None, "Lu", false, 0).unwrap();
        let not_lu = resolver.resolve(None, "Lu", true, 0).unwrap();
        assert_eq!(lu.complement(), not_lu);
        assert_eq!(lu.union(&not_lu), IntervalSet::full());
        assert!(not_lu.contains(MAX_CODE_POINT));
    }

    #[test]
    fn unknown_names_report_kind_and_offset() {
        let resolver = resolver();
        let err = resolver.resolve(None, "NoSuchThing", false, 5).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownProperty);
        assert_eq!(err.offset, 5);
        let err = resolver.resolve(Some("sc"), "Klingon", false, 9).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownPropertyValue);
        assert_eq!(err.offset, 9);
        let err = resolver.resolve(Some("flavor"), "sweet", false, 2).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownProperty);
    }
}
