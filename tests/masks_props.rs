//! Property-based tests for the input masks

use novapay::egui_app::masks;
use proptest::prelude::*;

proptest! {
    /// Masking is idempotent: re-masking a masked value changes nothing.
    #[test]
    fn masks_are_idempotent(input in ".{0,40}") {
        let once = masks::cpf(&input);
        prop_assert_eq!(masks::cpf(&once.clone()), once);

        let once = masks::rg(&input);
        prop_assert_eq!(masks::rg(&once.clone()), once);

        let once = masks::phone(&input);
        prop_assert_eq!(masks::phone(&once.clone()), once);

        let once = masks::cep(&input);
        prop_assert_eq!(masks::cep(&once.clone()), once);
    }

    /// A full CPF never exceeds its canonical 14 characters, whatever the
    /// input noise.
    #[test]
    fn cpf_output_is_bounded(input in ".{0,60}") {
        prop_assert!(masks::cpf(&input).len() <= 14);
    }

    #[test]
    fn cep_output_is_bounded(input in ".{0,60}") {
        prop_assert!(masks::cep(&input).len() <= 9);
    }

    /// Masks only ever emit digits and their own separators.
    #[test]
    fn masks_emit_no_foreign_characters(input in ".{0,40}") {
        prop_assert!(masks::cpf(&input)
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-'));
        prop_assert!(masks::phone(&input)
            .chars()
            .all(|c| c.is_ascii_digit() || "() -".contains(c)));
    }

    /// Currency output always carries the prefix and exactly two decimals.
    #[test]
    fn currency_shape(value in -1_000_000.0f64..1_000_000.0f64) {
        let formatted = masks::format_currency(value);
        prop_assert!(formatted.starts_with("R$ "));
        let decimals = formatted.rsplit(',').next().unwrap();
        prop_assert_eq!(decimals.len(), 2);
    }
}
