// File: crates/trend-core/src/format.rs
// Summary: Number formatting used by tooltip and tick labels (thousands separators, month counts, ordinals).

/// Format `value` with `,` between every three digits of its integer part.
/// Whole numbers print without a fractional part (`54287.0` -> `54,287`).
/// Digits after the decimal point are never grouped. Negative zero prints as `0`.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // -0.0 == 0.0
    let value = if value == 0.0 { 0.0 } else { value };
    let raw = value.to_string();
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(raw.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_digits(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Integer variant of [`format_thousands`].
pub fn format_thousands_int(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    if value < 0 {
        format!("-{}", group_digits(&digits))
    } else {
        group_digits(&digits)
    }
}

fn group_digits(digits: &str) -> String {
    let n = digits.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Number of months (out of 12) a yearly percentage stands for, rounded half up.
pub fn months_out_of_twelve(percentage: f64) -> u32 {
    let months = (percentage / 100.0 * 12.0).round();
    if months.is_nan() {
        return 0;
    }
    months.clamp(0.0, 12.0) as u32
}

/// English ordinal for a count or month number: `1st`, `2nd`, `3rd`, `11th`, `22nd`.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
