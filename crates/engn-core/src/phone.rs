//! Contact number checks for the demo-request form.
//!
//! Two independent rules, both reported when both fail:
//!
//! 1. The number must be a valid international number: leading `+`, a
//!    known country calling code, and a national number whose length and
//!    prefix match that country's numbering plan.
//! 2. Numbers under `+91` must have exactly ten local digits, the first
//!    being 6-9 (Indian mobile numbering).

use phonenumber::Mode;

/// Reported when the number is not a valid international number.
pub const INVALID_INTERNATIONAL: &str = "Please enter a valid international phone number";

/// Reported when a `+91` number breaks the Indian mobile rule.
pub const INVALID_INDIA: &str =
    "Indian phone numbers must be exactly 10 digits and start with 6-9";

const INDIA_PREFIX: &str = "+91";

/// Outcome of checking one contact number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneCheck {
    /// Both rules passed. Carries the E.164 form of the number.
    Valid(String),
    /// One or more rules failed; one message per failed rule.
    Invalid(Vec<&'static str>),
}

/// Check a contact number against both rules.
#[must_use]
pub fn check(raw: &str) -> PhoneCheck {
    let compact = compact(raw);
    let mut failures = Vec::new();

    let e164 = match phonenumber::parse(None, &compact) {
        Ok(number) if phonenumber::is_valid(&number) => {
            Some(number.format().mode(Mode::E164).to_string())
        }
        _ => {
            failures.push(INVALID_INTERNATIONAL);
            None
        }
    };

    if !india_rule_holds(&compact) {
        failures.push(INVALID_INDIA);
    }

    match e164 {
        Some(e164) if failures.is_empty() => PhoneCheck::Valid(e164),
        _ => PhoneCheck::Invalid(failures),
    }
}

/// Whether `compact` satisfies the `+91` rule. Numbers outside India pass.
fn india_rule_holds(compact: &str) -> bool {
    let Some(local) = compact.strip_prefix(INDIA_PREFIX) else {
        return true;
    };
    let mut digits = local.chars();
    let leads_with_mobile_digit = matches!(digits.next(), Some('6'..='9'));
    leads_with_mobile_digit && local.len() == 10 && local.bytes().all(|b| b.is_ascii_digit())
}

/// Drop the visual separators people type between digit groups.
fn compact(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '.'))
        .collect()
}
