//! Property-based tests for the CPF/CNPJ pipeline.
//!
//! Run with: `cargo test --test proptest_tests`

use cadastro::core::*;
use proptest::prelude::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// A valid CPF built from a random non-repeated 9-digit base.
fn arb_cpf() -> impl Strategy<Value = Cpf> {
    "[0-9]{9}"
        .prop_filter("repeated base", |base| !is_repeated_sequence(base))
        .prop_map(|base| Cpf::from_base(&base).unwrap())
}

/// A valid CNPJ built from a random non-repeated 12-digit base.
fn arb_cnpj() -> impl Strategy<Value = Cnpj> {
    "[0-9]{12}"
        .prop_filter("repeated base", |base| !is_repeated_sequence(base))
        .prop_map(|base| Cnpj::from_base(&base).unwrap())
}

/// Strings that look like user-typed identifiers.
fn arb_typed_id() -> impl Strategy<Value = String> {
    "[0-9 ./-]{0,24}"
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generated_cpf_validates(cpf in arb_cpf()) {
        let r = validate_fiscal_id(cpf.digits());
        prop_assert_eq!(r.kind, FiscalIdKind::Cpf);
        let expected = format_cpf(cpf.digits());
        prop_assert_eq!(r.canonical(), Some(expected.as_str()));
    }

    #[test]
    fn generated_cnpj_validates(cnpj in arb_cnpj()) {
        let r = validate_fiscal_id(cnpj.digits());
        prop_assert_eq!(r.kind, FiscalIdKind::Cnpj);
        let expected = format_cnpj(cnpj.digits());
        prop_assert_eq!(r.canonical(), Some(expected.as_str()));
    }

    #[test]
    fn canonical_round_trips_to_digits(cpf in arb_cpf(), cnpj in arb_cnpj()) {
        let r = validate_fiscal_id(cpf.digits());
        prop_assert_eq!(extract_digits(r.canonical().unwrap()), cpf.digits());
        let r = validate_fiscal_id(cnpj.digits());
        prop_assert_eq!(extract_digits(r.canonical().unwrap()), cnpj.digits());
    }

    #[test]
    fn canonical_form_is_a_fixed_point(cpf in arb_cpf()) {
        let first = validate_fiscal_id(cpf.digits());
        let second = validate_fiscal_id(first.canonical().unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn changed_last_digit_invalidates(cpf in arb_cpf(), bump in 1u8..10) {
        let mut digits = cpf.digits().as_bytes().to_vec();
        digits[10] = b'0' + (digits[10] - b'0' + bump) % 10;
        let mutated = String::from_utf8(digits).unwrap();
        prop_assert!(!validate_fiscal_id(&mutated).is_valid());
    }

    #[test]
    fn non_id_lengths_always_invalid(
        digits in prop_oneof!["[0-9]{10}", "[0-9]{12}", "[0-9]{13}", "[0-9]{0,9}", "[0-9]{15,20}"]
    ) {
        prop_assert_eq!(validate_fiscal_id(&digits), ValidationResult::invalid());
    }

    #[test]
    fn repeated_digits_always_invalid(
        d in 0u8..10,
        len in prop_oneof![Just(11usize), Just(14usize)]
    ) {
        let s: String = std::iter::repeat_n(char::from(b'0' + d), len).collect();
        prop_assert!(!validate_fiscal_id(&s).is_valid());
    }

    #[test]
    fn typed_parse_agrees_with_facade(input in arb_typed_id()) {
        let facade = validate_fiscal_id(&input);
        match FiscalId::parse(&input) {
            Ok(id) => {
                prop_assert_eq!(facade.kind, id.kind());
                let canonical = id.to_string();
                prop_assert_eq!(facade.canonical(), Some(canonical.as_str()));
            }
            Err(_) => prop_assert!(!facade.is_valid()),
        }
    }

    #[test]
    fn never_panics_on_arbitrary_input(input in any::<String>()) {
        let r = validate_fiscal_id(&input);
        prop_assert_eq!(r.is_valid(), r.canonical.is_some());
    }

    #[test]
    fn extraction_keeps_only_ascii_digits(input in any::<String>()) {
        let digits = extract_digits(&input);
        prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(digits.len(), input.chars().filter(char::is_ascii_digit).count());
    }
}
