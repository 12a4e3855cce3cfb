//! Fixed-precision formatting of decimal strings.

/// Scales a decimal string by `10^decimals` and returns the integer part.
///
/// Fraction digits beyond `decimals` are truncated, leading zeros are
/// stripped, and an all-zero result is rendered as `"0"`.
///
/// ```
/// use ref_pools_domain::math::to_non_divisible_number;
///
/// assert_eq!(to_non_divisible_number(6, "1.5"), "1500000");
/// ```
#[must_use]
pub fn to_non_divisible_number(decimals: u32, number: &str) -> String {
    let (whole, frac) = number.split_once('.').unwrap_or((number, ""));
    let decimals = decimals as usize;

    let mut digits = String::with_capacity(whole.len() + decimals);
    digits.push_str(whole);
    digits.extend(frac.chars().chain(std::iter::repeat('0')).take(decimals));

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
