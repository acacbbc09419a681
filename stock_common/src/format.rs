//! Display helpers for prices and large quantities.

/// Formats `value` as US dollars with thousands separators and two decimals.
///
/// `1234.5` becomes `$1,234.50`, `-0.456` becomes `-$0.46`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), fraction)
}

/// Abbreviates `num` with a `T`, `B`, `M` or `K` suffix at powers of 1000.
///
/// Values below one thousand are printed as they are.
pub fn format_large_number(num: f64) -> String {
    const SCALES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    for (scale, suffix) in SCALES {
        if num >= scale {
            return format!("{:.2}{}", num / scale, suffix);
        }
    }
    num.to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
