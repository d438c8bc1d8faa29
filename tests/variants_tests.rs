//! Tests for `#[derive(NamedVariants)]` together with `enum_values` and
//! `to_enum`.
//!
//! - Derived tables list variants in declaration order
//! - Raw identifiers are named without their `r#` prefix
//! - Parsing honours the case rule and validates identifiers first

#![cfg(feature = "derive")]

use extkit::prelude::*;
use extkit::variants::{enum_values, is_valid_identifier, to_enum};
use rstest::rstest;

// =============================================================================
// Test enums
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, NamedVariants)]
enum CompareOptions {
    None,
    IgnoreCase,
    IgnoreNonSpace,
    IgnoreSymbols,
    IgnoreKanaType,
    IgnoreWidth,
    OrdinalIgnoreCase,
    StringSort,
    Ordinal,
}

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, NamedVariants)]
enum Keyword {
    r#Type,
    r#match,
    Plain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, NamedVariants)]
#[repr(u8)]
enum Priority {
    Low = 1,
    High = 10,
}

#[allow(uncommon_codepoints, mixed_script_confusables)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, NamedVariants)]
enum Conjunct {
    क्ष,
    Plain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, NamedVariants)]
enum Greeting {
    Straße,
    Hello,
}

// =============================================================================
// Derived table
// =============================================================================

#[rstest]
fn values_are_in_declaration_order() {
    let values = enum_values::<CompareOptions>().unwrap();
    assert_eq!(values.len(), 9);
    assert_eq!(values.first(), Some(&CompareOptions::None));
    assert_eq!(values.last(), Some(&CompareOptions::Ordinal));
}

#[rstest]
fn names_match_identifiers() {
    let names: Vec<&str> = CompareOptions::VARIANTS.iter().map(|(name, _)| *name).collect();
    assert_eq!(names[1], "IgnoreCase");
    assert_eq!(CompareOptions::IgnoreWidth.variant_name(), "IgnoreWidth");
}

#[rstest]
fn raw_identifiers_lose_their_prefix() {
    assert_eq!(Keyword::r#Type.variant_name(), "Type");
    assert_eq!(Keyword::r#match.variant_name(), "match");
    assert_eq!(to_enum::<Keyword>("match", Case::Sensitive), Ok(Keyword::r#match));
}

#[rstest]
fn explicit_discriminants_are_kept() {
    assert_eq!(Priority::variants().unwrap(), vec![Priority::Low, Priority::High]);
    assert_eq!(to_enum::<Priority>("High", Case::Sensitive).map(|priority| priority as u8), Ok(10));
}

// =============================================================================
// Parsing
// =============================================================================

#[rstest]
#[case("IgnoreSymbols", Case::Sensitive, CompareOptions::IgnoreSymbols)]
#[case("ignoresymbols", Case::Insensitive, CompareOptions::IgnoreSymbols)]
#[case("ORDINAL", Case::Insensitive, CompareOptions::Ordinal)]
#[case("None", Case::Sensitive, CompareOptions::None)]
fn parses_names(#[case] text: &str, #[case] case: Case, #[case] expected: CompareOptions) {
    assert_eq!(text.to_enum::<CompareOptions>(case), Ok(expected));
}

#[rstest]
fn insensitive_matching_folds_unicode() {
    assert_eq!(to_enum::<Greeting>("STRASSE", Case::Insensitive).ok(), None);
    assert_eq!(to_enum::<Greeting>("straße", Case::Insensitive), Ok(Greeting::Straße));
    assert_eq!(to_enum::<Greeting>("hELLO", Case::Insensitive), Ok(Greeting::Hello));
}

#[rstest]
#[case("IgnoreHeight", ErrorKind::InvalidArgument)]
#[case("an invalid name to an enum value", ErrorKind::InvalidArgument)]
#[case("IgnoreCase, IgnoreWidth", ErrorKind::InvalidArgument)]
fn rejects_bad_names(#[case] text: &str, #[case] kind: ErrorKind) {
    let error = to_enum::<CompareOptions>(text, Case::default()).unwrap_err();
    assert_eq!(error.kind(), kind);
}

#[rstest]
fn unknown_variant_names_the_type() {
    let error = to_enum::<CompareOptions>("IgnoreHeight", Case::Sensitive).unwrap_err();
    match error {
        Error::UnknownVariant { value, type_name } => {
            assert_eq!(value, "IgnoreHeight");
            assert!(type_name.ends_with("CompareOptions"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn identifier_rules() {
    assert!(is_valid_identifier("OrdinalIgnoreCase"));
    assert!(!is_valid_identifier("Ordinal IgnoreCase"));
}

#[rstest]
fn every_name_round_trips_in_both_modes() {
    for (name, variant) in CompareOptions::VARIANTS {
        assert_eq!(to_enum::<CompareOptions>(name, Case::Sensitive), Ok(*variant));
        assert_eq!(to_enum::<CompareOptions>(&name.to_uppercase(), Case::Insensitive), Ok(*variant));
    }
}

#[rstest]
fn names_with_combining_marks_round_trip() {
    assert_eq!(Conjunct::क्ष.variant_name(), "\u{915}\u{94d}\u{937}");
    for variant in Conjunct::variants().unwrap() {
        let name = variant.variant_name();
        assert!(is_valid_identifier(name), "{name:?}");
        assert_eq!(to_enum::<Conjunct>(name, Case::Sensitive), Ok(variant));
        assert_eq!(to_enum::<Conjunct>(name, Case::Insensitive), Ok(variant));
    }
}
