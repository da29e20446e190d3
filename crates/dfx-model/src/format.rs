//! en-US display formatting for calculator figures.
//!
//! Matches how the page renders numbers: comma thousands separators, dollar
//! amounts without cents, fixed decimals for ROI figures, and `∞` for a
//! payback period that never arrives.

/// Shown in place of non-finite values.
pub const INFINITY_SYMBOL: &str = "∞";

/// Group the digits of `n` in threes: `1234567` -> `"1,234,567"`.
pub fn format_number(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// Format with exactly `decimals` fractional digits and grouped thousands.
///
/// Rounds half away from zero. Non-finite values render as [`INFINITY_SYMBOL`].
pub fn format_decimal(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return INFINITY_SYMBOL.to_string();
    }
    let factor = 10u128.pow(decimals);
    let scaled = (value.abs() * factor as f64).round() as u128;
    let whole = group_thousands(&(scaled / factor).to_string());
    let sign = if value < 0.0 && scaled != 0 { "-" } else { "" };
    if decimals == 0 {
        return format!("{sign}{whole}");
    }
    let frac = scaled % factor;
    format!("{sign}{whole}.{frac:0width$}", width = decimals as usize)
}

/// Whole-dollar amount: `1000000.0` -> `"$1,000,000"`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return INFINITY_SYMBOL.to_string();
    }
    let body = format_decimal(value.abs(), 0);
    if value < 0.0 && body != "0" {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// Percentage with `decimals` fractional digits: `16.666` -> `"16.7%"`.
pub fn format_percent(value: f64, decimals: u32) -> String {
    format!("{}%", format_decimal(value, decimals))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
