// src/domain/format.rs
//
// Display rules applied at render time. Nothing here is persisted.

use crate::domain::listing::{Comp, ListingRecord};

pub const DASH: &str = "—";

/// Formats a free-text amount as whole dollars.
///
/// Every non-digit is stripped and the remaining digits are grouped in
/// thousands. Blank input renders as `$0`; input without any digits is
/// returned untouched so a typo never breaks the page.
pub fn format_currency(value: &str) -> String {
    if value.trim().is_empty() {
        return "$0".to_string();
    }

    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return value.to_string();
    }

    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };

    format!("${}", group_thousands(significant))
}

/// Inserts a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Comps with an address, in slot order.
pub fn visible_comps(record: &ListingRecord) -> Vec<&Comp> {
    record
        .comps
        .iter()
        .filter(|c| !c.address.trim().is_empty())
        .collect()
}

/// Feature bullets to display. Empty unless `show_features` is set.
pub fn visible_features(record: &ListingRecord) -> Vec<&str> {
    if !record.show_features {
        return Vec::new();
    }
    record
        .features
        .iter()
        .map(String::as_str)
        .filter(|f| !f.trim().is_empty())
        .collect()
}

pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberTile {
    pub value: String,
    pub label: &'static str,
}

/// The three figures shown under "Numbers".
pub fn numbers(record: &ListingRecord) -> [NumberTile; 3] {
    [
        NumberTile {
            value: format_currency(&record.arv),
            label: "Wholesale Realty ARV Opinion",
        },
        NumberTile {
            value: or_placeholder(&record.rehab_estimate, DASH).to_string(),
            label: "Rehab Estimate",
        },
        NumberTile {
            value: format_currency(&record.monthly_rent),
            label: "Estimated Monthly Rent",
        },
    ]
}

pub fn tel_href(number: &str) -> String {
    format!("tel:{}", number.trim())
}

pub fn sms_href(number: &str) -> String {
    format!("sms:{}", number.trim())
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}
