//! Compile-fail tests for `#[derive(NamedVariants)]`.
//!
//! These tests verify that structs, generic enums, empty enums and enums with
//! data-carrying variants are rejected with a targeted error.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#![cfg(feature = "derive")]

#[test]
fn named_variants_compile_fail_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.compile_fail("tests/compile_fail/named_variants_*.rs");
}
