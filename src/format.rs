use chrono::{Datelike, NaiveDate};

pub const NO_DISPONIBLE: &str = "No disponible";

/// Renders a float the way it was stored: shortest round-trip digits, and at
/// least one decimal place (`8.3`, `7.0`).
pub fn score(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

pub fn score_or_missing(value: Option<f64>) -> String {
    value.map(score).unwrap_or_else(|| NO_DISPONIBLE.to_string())
}

pub fn year_or_missing(date: Option<NaiveDate>) -> String {
    date.map(|d| d.year().to_string())
        .unwrap_or_else(|| NO_DISPONIBLE.to_string())
}

/// Two decimals with `,` thousands separators, prefixed by `$`. The sign goes
/// after the dollar: `$-1,234.50`.
pub fn currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("${sign}{grouped}.{frac_part}")
}
