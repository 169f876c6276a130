use crate::domain::receipt::Receipt;
use crate::error::ValidationError;
use chrono::{NaiveDate, NaiveTime};

/// Validates a receipt's fields against the submission format rules.
///
/// Checks run in a fixed order and the first failing rule is returned;
/// errors are never aggregated. A receipt that passes here is safe to store.
pub fn validate(receipt: &Receipt) -> Result<(), ValidationError> {
    if !matches_charset(&receipt.retailer, is_retailer_char) {
        return Err(ValidationError::InvalidRetailer);
    }

    if !is_valid_date(&receipt.purchase_date) {
        return Err(ValidationError::InvalidDate);
    }

    if !is_valid_time(&receipt.purchase_time) {
        return Err(ValidationError::InvalidTime);
    }

    if !is_money(&receipt.total) {
        return Err(ValidationError::InvalidTotal);
    }

    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    for item in &receipt.items {
        if !matches_charset(&item.short_description, is_description_char) {
            return Err(ValidationError::InvalidItemDescription);
        }
        if !is_money(&item.price) {
            return Err(ValidationError::InvalidItemPrice);
        }
    }

    Ok(())
}

/// One or more characters, all satisfying the class predicate.
fn matches_charset(s: &str, class: fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(class)
}

// ASCII classes, matching `^[\w\s\-&]+$` semantics.
fn is_retailer_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_ascii_whitespace() || c == '-' || c == '&'
}

// `^[\w\s\-]+$`: like the retailer class but without the ampersand.
fn is_description_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_ascii_whitespace() || c == '-'
}

/// Strict `YYYY-MM-DD` calendar date. The shape check rules out the
/// shortened, padded and signed-year forms chrono's parser would otherwise
/// tolerate (`%Y` accepts an optional leading sign); chrono then validates
/// the calendar (month range, day-of-month, leap years).
fn is_valid_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..].iter().all(u8::is_ascii_digit)
        && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Strict 24-hour `HH:MM`.
fn is_valid_time(s: &str) -> bool {
    s.len() == 5 && NaiveTime::parse_from_str(s, "%H:%M").is_ok()
}

/// `^\d+\.\d{2}$`: one or more digits, a decimal point, exactly two digits.
fn is_money(s: &str) -> bool {
    match s.split_once('.') {
        Some((dollars, cents)) => {
            !dollars.is_empty()
                && dollars.bytes().all(|b| b.is_ascii_digit())
                && cents.len() == 2
                && cents.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
