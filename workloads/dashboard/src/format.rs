//! Display formatting for figures.
//!
//! Numbers use en-US digit grouping with no fraction digits.

/// Format a number with thousands separators, rounded to a whole number.
///
/// ```
/// assert_eq!(dashboard::format::number(1234567.4), "1,234,567");
/// assert_eq!(dashboard::format::number(999.5), "1,000");
/// ```
pub fn number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = n.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Format a count.
pub fn count(n: u64) -> String {
    number(n as f64)
}

/// Format a dollar amount with no cents.
pub fn currency(n: f64) -> String {
    format!("${}", number(n))
}

/// Format an average rating with one decimal and a star.
pub fn rating(r: f64) -> String {
    format!("{:.1} ★", r)
}
