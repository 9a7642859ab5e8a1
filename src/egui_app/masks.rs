//! Input masks and display formatting
//!
//! Progressive masks for the Brazilian document and contact fields on the
//! registration form, applied on every edit, plus the currency and date
//! formatting used by the dashboard. All functions are pure; feeding a
//! masked value back in yields the same value.

use chrono::{DateTime, Local, Utc};

fn digits(input: &str, max: usize) -> Vec<char> {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max)
        .collect()
}

/// CPF: `000.000.000-00`
pub fn cpf(input: &str) -> String {
    let digits = digits(input, 11);
    let mut out = String::new();
    for (i, d) in digits.iter().enumerate() {
        if i == 3 || i == 6 {
            out.push('.');
        }
        if i == 9 {
            out.push('-');
        }
        out.push(*d);
    }
    out
}

/// RG: `12.345.678-9`
pub fn rg(input: &str) -> String {
    let digits = digits(input, 9);
    let mut out = String::new();
    for (i, d) in digits.iter().enumerate() {
        if i == 2 || i == 5 {
            out.push('.');
        }
        if i == 8 {
            out.push('-');
        }
        out.push(*d);
    }
    out
}

/// Phone: `(11) 9999-9999` with eight digits, `(11) 99999-9999` with nine
pub fn phone(input: &str) -> String {
    let digits = digits(input, 11);
    if digits.len() < 3 {
        return digits.into_iter().collect();
    }
    let hyphen_at = if digits.len() > 10 { 7 } else { 6 };
    let mut out = String::new();
    for (i, d) in digits.iter().enumerate() {
        if i == 0 {
            out.push('(');
        }
        if i == 2 {
            out.push_str(") ");
        }
        if i == hyphen_at {
            out.push('-');
        }
        out.push(*d);
    }
    out
}

/// CEP: `00000-000`
pub fn cep(input: &str) -> String {
    let digits = digits(input, 8);
    let mut out = String::new();
    for (i, d) in digits.iter().enumerate() {
        if i == 5 {
            out.push('-');
        }
        out.push(*d);
    }
    out
}

/// Brazilian-style currency: `1234.56` renders as `R$ 1.234,56`. The sign
/// is dropped; callers render credits and debits themselves.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("R$ {},{:02}", grouped, cents % 100)
}

/// `dd/mm/yyyy` in the local timezone
pub fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d/%m/%Y").to_string()
}

/// `hh:mm` in the local timezone
pub fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cpf_masks_progressively() {
        assert_eq!(cpf("123"), "123");
        assert_eq!(cpf("1234"), "123.4");
        assert_eq!(cpf("1234567"), "123.456.7");
        assert_eq!(cpf("12345678901"), "123.456.789-01");
    }

    #[test]
    fn cpf_truncates_overflow() {
        assert_eq!(cpf("123456789012345"), "123.456.789-01");
    }

    #[test]
    fn rg_masks() {
        assert_eq!(rg("12"), "12");
        assert_eq!(rg("123456"), "12.345.6");
        assert_eq!(rg("123456789"), "12.345.678-9");
    }

    #[test]
    fn phone_handles_eight_and_nine_digit_numbers() {
        assert_eq!(phone("11"), "11");
        assert_eq!(phone("1133334444"), "(11) 3333-4444");
        assert_eq!(phone("11999998888"), "(11) 99999-8888");
    }

    #[test]
    fn cep_masks() {
        assert_eq!(cep("01310"), "01310");
        assert_eq!(cep("01310100"), "01310-100");
    }

    #[test]
    fn masks_are_idempotent() {
        assert_eq!(cpf("123.456.789-01"), "123.456.789-01");
        assert_eq!(phone("(11) 99999-8888"), "(11) 99999-8888");
        assert_eq!(cep("01310-100"), "01310-100");
        assert_eq!(rg("12.345.678-9"), "12.345.678-9");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(7.5), "R$ 7,50");
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(1_234_567.89), "R$ 1.234.567,89");
    }

    #[test]
    fn currency_uses_absolute_value() {
        assert_eq!(format_currency(-1200.0), "R$ 1.200,00");
    }
}
