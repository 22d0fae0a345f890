//! Composable Validation Rules
//!
//! Small pure predicates shared by the client and policy rule sets. Each rule
//! inspects one value and returns `Err(FieldError)` naming the field it
//! rejected; the caller folds the outcome into a
//! [`ValidationErrors`](crate::functional::validation_engine::ValidationErrors)
//! accumulator so that every rule runs regardless of earlier failures.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::functional::validation_engine::FieldError;

/// Cached regex patterns for validation
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));
pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{7,50}$").expect("phone pattern compiles"));
pub static POLICY_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9-]{5,50}$").expect("policy number pattern compiles"));

pub type RuleResult = Result<(), FieldError>;

fn rule(passed: bool, field: &str, message: impl FnOnce() -> String) -> RuleResult {
    if passed {
        Ok(())
    } else {
        Err(FieldError::new(field, message()))
    }
}

/// Value must contain something other than whitespace.
pub fn required(field: &str, value: &str) -> RuleResult {
    rule(!value.trim().is_empty(), field, || {
        format!("{} is required", field)
    })
}

/// Value must not exceed `max` characters (not bytes).
pub fn max_length(field: &str, value: &str, max: usize) -> RuleResult {
    rule(value.chars().count() <= max, field, || {
        format!("{} must be no more than {} characters long", field, max)
    })
}

/// Value must be a single well-formed email address.
pub fn email(field: &str, value: &str) -> RuleResult {
    rule(EMAIL_REGEX.is_match(value), field, || {
        format!("{} must be a valid email address", field)
    })
}

/// Value must match `regex`; `message` is used verbatim on failure.
pub fn pattern(field: &str, value: &str, regex: &Regex, message: &str) -> RuleResult {
    rule(regex.is_match(value), field, || message.to_string())
}

/// Case-insensitive membership in a closed set of names.
pub fn one_of_ignore_case(field: &str, value: &str, allowed: &[&str]) -> RuleResult {
    let found = allowed
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(value.trim()));
    rule(found, field, || {
        format!("{} must be one of: {}", field, allowed.join(", "))
    })
}

/// Value must be strictly greater than zero.
pub fn positive<T>(field: &str, value: T) -> RuleResult
where
    T: PartialOrd + Default,
{
    rule(value > T::default(), field, || {
        format!("{} must be greater than zero", field)
    })
}

/// Decimal must not exceed `max`.
pub fn max_amount(field: &str, value: Decimal, max: Decimal) -> RuleResult {
    rule(value <= max, field, || format!("{} must not exceed {}", field, max))
}

/// Decimal must not carry more than `scale` significant fractional digits.
///
/// Trailing zeros are ignored, so `100.00` has scale 0 while `100.005` has 3.
/// Extra precision is rejected, never rounded away.
pub fn max_scale(field: &str, value: Decimal, scale: u32) -> RuleResult {
    rule(value.normalize().scale() <= scale, field, || {
        format!("{} cannot have more than {} decimal places", field, scale)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_required_trims_whitespace() {
        assert!(required("first_name", "Ana").is_ok());
        let err = required("first_name", "   ").unwrap_err();
        assert_eq!(err.field, "first_name");
        assert_eq!(err.message, "first_name is required");
    }

    #[test]
    fn test_max_length_counts_chars() {
        assert!(max_length("last_name", &"é".repeat(100), 100).is_ok());
        assert!(max_length("last_name", &"a".repeat(101), 100).is_err());
    }

    #[test]
    fn test_email() {
        assert!(email("email", "user@example.com").is_ok());
        assert!(email("email", "not-an-email").is_err());
        assert!(email("email", "a@b@example.com").is_err());
        assert!(email("email", "user @example.com").is_err());
    }

    #[test]
    fn test_phone_pattern() {
        let check = |v: &str| pattern("phone", v, &PHONE_REGEX, "phone format is invalid");
        assert!(check("+1 (555) 123-4567").is_ok());
        assert!(check("5551234").is_ok());
        assert!(check("555-12").is_err());
        assert!(check("555-CALL-NOW").is_err());
        assert!(check("++15551234567").is_err());
    }

    #[test]
    fn test_policy_number_pattern() {
        let check = |v: &str| pattern("policy_number", v, &POLICY_NUMBER_REGEX, "bad");
        assert!(check("POL-2025-001").is_ok());
        assert!(check("ABCDE").is_ok());
        assert!(check("ABCD").is_err());
        assert!(check("pol-2025-001").is_err());
        assert!(check("POL 2025").is_err());
    }

    #[test]
    fn test_one_of_ignore_case() {
        let allowed = ["Health", "Car"];
        assert!(one_of_ignore_case("policy_type", "health", &allowed).is_ok());
        assert!(one_of_ignore_case("policy_type", "CAR", &allowed).is_ok());
        let err = one_of_ignore_case("policy_type", "Dental", &allowed).unwrap_err();
        assert_eq!(err.message, "policy_type must be one of: Health, Car");
    }

    #[test]
    fn test_decimal_rules() {
        assert!(positive("premium_amount", dec!(0.01)).is_ok());
        assert!(positive("premium_amount", dec!(0)).is_err());
        assert!(positive("premium_amount", dec!(-5.00)).is_err());
        assert!(positive("client_id", 1).is_ok());
        assert!(positive("client_id", 0).is_err());

        let max = dec!(999999999999.99);
        assert!(max_amount("premium_amount", max, max).is_ok());
        assert!(max_amount("premium_amount", dec!(1000000000000.00), max).is_err());

        assert!(max_scale("premium_amount", dec!(100.00), 2).is_ok());
        assert!(max_scale("premium_amount", dec!(100.000), 2).is_ok());
        assert!(max_scale("premium_amount", dec!(100.005), 2).is_err());
    }
}
