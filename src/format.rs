//! Text formatting helpers for amounts and percentages.

use crate::dashboard::metrics::Growth;

/// Formats an integer with thousands separators.
///
/// # Examples
/// ```
/// use garage::format::group_thousands;
///
/// assert_eq!(group_thousands(1000), "1,000");
/// assert_eq!(group_thousands(-1234567), "-1,234,567");
/// ```
pub fn group_thousands(value: impl Into<i128>) -> String {
    let value: i128 = value.into();
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        result.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Formats a rupee amount, e.g. `₹70,000`.
pub fn rupees(amount: u64) -> String {
    format!("₹{}", group_thousands(amount))
}

/// `₹used / ₹total` label used by the utilization and savings rows.
pub fn rupees_of(part: u64, whole: u64) -> String {
    format!("{} / {}", rupees(part), rupees(whole))
}

/// Signed growth label, e.g. `+30,000 (30.00%)`.
pub fn growth_label(growth: &Growth) -> String {
    let sign = if growth.is_gain() { "+" } else { "" };
    format!("{}{} ({:.2}%)", sign, group_thousands(growth.delta), growth.percent)
}

/// Rounded percentage label, e.g. `63%`.
pub fn percent(value: f32) -> String {
    format!("{}%", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(200_000), "200,000");
        assert_eq!(group_thousands(-50), "-50");
        assert_eq!(group_thousands(-1_234_567), "-1,234,567");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_rupees() {
        assert_eq!(rupees(70_000), "₹70,000");
        assert_eq!(rupees_of(70_000, 200_000), "₹70,000 / ₹200,000");
        assert_eq!(rupees(u64::MAX), "₹18,446,744,073,709,551,615");
    }

    #[test]
    fn test_growth_label() {
        let gain = Growth { initial: 100_000, latest: 130_000, delta: 30_000, percent: 30.0 };
        assert_eq!(growth_label(&gain), "+30,000 (30.00%)");

        let loss = Growth { initial: 200, latest: 150, delta: -50, percent: -25.0 };
        assert_eq!(growth_label(&loss), "-50 (-25.00%)");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(62.5), "63%");
        assert_eq!(percent(35.0), "35%");
    }
}
