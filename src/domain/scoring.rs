use crate::domain::receipt::{Item, Receipt};
use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

const RETAILER_NAME_MULTIPLIER: i64 = 1;
const ROUND_DOLLAR_POINTS: i64 = 50;
const QUARTER_DOLLAR_POINTS: i64 = 25;
const ITEM_PAIR_POINTS: i64 = 5;
const ITEM_DESCRIPTION_MODULUS: usize = 3;
const ODD_DAY_POINTS: i64 = 6;
const HAPPY_HOUR_POINTS: i64 = 10;
// Open interval, minute resolution: 14:00 and 16:00 themselves never score.
const HAPPY_HOUR_START_MINUTES: u32 = 14 * 60;
const HAPPY_HOUR_END_MINUTES: u32 = 16 * 60;

/// Computes the points awarded for a receipt as the sum of seven
/// independent rules.
///
/// The engine is defined for receipts that passed validation, but it never
/// panics: a field malformed enough to defeat a rule's parse simply scores
/// zero for that rule.
pub fn score(receipt: &Receipt) -> i64 {
    retailer_name_points(&receipt.retailer)
        + round_dollar_points(&receipt.total)
        + quarter_points(&receipt.total)
        + item_pair_points(&receipt.items)
        + item_description_points(&receipt.items)
        + odd_day_points(&receipt.purchase_date)
        + happy_hour_points(&receipt.purchase_time)
}

/// One point per ASCII alphanumeric character in the retailer name.
/// "Target" = 6, "M&M Corner Market" = 14.
fn retailer_name_points(retailer: &str) -> i64 {
    let count = retailer.chars().filter(char::is_ascii_alphanumeric).count();
    count as i64 * RETAILER_NAME_MULTIPLIER
}

/// 50 points for a round dollar total. A suffix check on the literal
/// two-fraction-digit string, not a numeric comparison.
fn round_dollar_points(total: &str) -> i64 {
    if total.ends_with(".00") {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// 25 points if the total is an exact multiple of 0.25.
fn quarter_points(total: &str) -> i64 {
    match total.parse::<Decimal>() {
        Ok(amount) if (amount * dec!(100)) % dec!(25) == Decimal::ZERO => QUARTER_DOLLAR_POINTS,
        _ => 0,
    }
}

/// 5 points for every two items: 1 item = 0, 3 items = 5, 4 items = 10.
fn item_pair_points(items: &[Item]) -> i64 {
    (items.len() / 2) as i64 * ITEM_PAIR_POINTS
}

/// For each item whose trimmed description length is a multiple of 3,
/// ceil(price * 0.2) points. The ceiling is applied per item, then summed.
fn item_description_points(items: &[Item]) -> i64 {
    items
        .iter()
        .filter(|item| {
            item.short_description.trim().chars().count() % ITEM_DESCRIPTION_MODULUS == 0
        })
        .filter_map(|item| item.price.parse::<Decimal>().ok())
        .filter_map(|price| (price * dec!(0.2)).ceil().to_i64())
        .sum()
}

/// 6 points if the day of the month is odd. The day is whatever follows the
/// first eight characters of the date string; anything unparseable scores 0.
fn odd_day_points(purchase_date: &str) -> i64 {
    match purchase_date.get(8..).and_then(|d| d.parse::<u32>().ok()) {
        Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// 10 points for purchases strictly between 14:00 and 16:00.
fn happy_hour_points(purchase_time: &str) -> i64 {
    match NaiveTime::parse_from_str(purchase_time, "%H:%M") {
        Ok(time) => {
            let minutes = time.hour() * 60 + time.minute();
            if minutes > HAPPY_HOUR_START_MINUTES && minutes < HAPPY_HOUR_END_MINUTES {
                HAPPY_HOUR_POINTS
            } else {
                0
            }
        }
        Err(_) => 0,
    }
}
