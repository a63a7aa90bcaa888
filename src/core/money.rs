//! Currency normalization and pt-BR formatting.
//!
//! Every amount in a record is a [`Decimal`] rounded to cents. Source values
//! are read leniently: the longest numeric prefix counts, anything else is zero.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::str::FromStr;

/// One cent. Differences at or below this are treated as rounding noise.
pub const TOLERANCE: Decimal = dec!(0.01);

/// Flat fee some point-of-sale systems declare as change (`vTroco`).
pub const SYSTEM_FEE: Decimal = dec!(0.99);

const MAX_EXPONENT: i64 = 64;
/// Larger amounts read as zero, which keeps every sum far from `Decimal::MAX`.
pub const MAX_INTEGER_DIGITS: usize = 15;
const MAX_FRACTION_DIGITS: usize = 12;

/// Round to two decimal places, half away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a declared amount and round it to cents.
///
/// Absent, non-numeric and out-of-range input (more than
/// [`MAX_INTEGER_DIGITS`] integer digits) yields zero. Trailing text after a
/// numeric prefix is ignored (`"12.5 BRL"` reads as `12.50`).
pub fn parse_amount(raw: Option<&str>) -> Decimal {
    raw.and_then(parse_prefix)
        .map(round_cents)
        .filter(|amount| !amount.is_zero())
        .unwrap_or(Decimal::ZERO)
}

fn parse_prefix(raw: &str) -> Option<Decimal> {
    let s = raw.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match s.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < s.len() && s[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits: &[u8] = &[];
    if pos < s.len() && s[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < s.len() && s[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = &s[frac_start..frac_end];
        pos = frac_end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent: i64 = 0;
    if pos < s.len() && (s[pos] == b'e' || s[pos] == b'E') {
        let mut exp_pos = pos + 1;
        let exp_negative = match s.get(exp_pos) {
            Some(b'-') => {
                exp_pos += 1;
                true
            }
            Some(b'+') => {
                exp_pos += 1;
                false
            }
            _ => false,
        };
        let digits_start = exp_pos;
        while exp_pos < s.len() && s[exp_pos].is_ascii_digit() {
            exponent = (exponent * 10 + i64::from(s[exp_pos] - b'0')).min(MAX_EXPONENT);
            exp_pos += 1;
        }
        if exp_pos == digits_start {
            exponent = 0;
        } else if exp_negative {
            exponent = -exponent;
        }
    }

    // Shift the decimal point by the exponent over the plain digit string.
    let all_digits: Vec<u8> = int_digits.iter().chain(frac_digits).copied().collect();
    let leading_zeros = all_digits.iter().take_while(|&&d| d == b'0').count();
    let digits = all_digits[leading_zeros..].to_vec();
    if digits.is_empty() {
        return Some(Decimal::ZERO);
    }
    let point = int_digits.len() as i64 - leading_zeros as i64 + exponent;
    if point > MAX_INTEGER_DIGITS as i64 {
        return None;
    }
    let (int_part, frac_part): (Vec<u8>, Vec<u8>) = if point <= 0 {
        let zeros = (-point).min(MAX_FRACTION_DIGITS as i64) as usize;
        (Vec::new(), std::iter::repeat_n(b'0', zeros).chain(digits).collect())
    } else if point as usize >= digits.len() {
        let zeros = point as usize - digits.len();
        (digits.into_iter().chain(std::iter::repeat_n(b'0', zeros)).collect(), Vec::new())
    } else {
        let (i, f) = digits.split_at(point as usize);
        (i.to_vec(), f.to_vec())
    };

    let int_part = String::from_utf8_lossy(&int_part);
    let frac_part = String::from_utf8_lossy(&frac_part[..frac_part.len().min(MAX_FRACTION_DIGITS)]);
    let literal = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_part.is_empty() { "0" } else { &*int_part },
        if frac_part.is_empty() { "0" } else { &*frac_part },
    );
    Decimal::from_str(&literal).ok()
}

/// Render an amount as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{sign}R$ {grouped},{frac_part}")
}

/// Two fixed decimals with a comma separator and no grouping, e.g. `1234,56`.
pub fn format_decimal_comma(amount: Decimal) -> String {
    format!("{:.2}", round_cents(amount)).replace('.', ",")
}
