//! Number rendering for chat messages.

/// Renders an integer with comma thousands separators, e.g. `12450` -> `12,450`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Positive deltas get an explicit `+`; zero and negatives render as-is.
pub fn signed_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", group_thousands(delta))
    } else {
        group_thousands(delta)
    }
}

pub fn count(value: u64) -> String {
    group_thousands(i64::try_from(value).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12450), "12,450");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-1450), "-1,450");
        assert_eq!(group_thousands(-100), "-100");
    }

    #[test]
    fn test_signed_delta_prefixes() {
        assert_eq!(signed_delta(1450), "+1,450");
        assert_eq!(signed_delta(0), "0");
        assert_eq!(signed_delta(-3), "-3");
        assert_eq!(signed_delta(-2500), "-2,500");
    }

    #[test]
    fn test_count() {
        assert_eq!(count(500), "500");
        assert_eq!(count(11000), "11,000");
    }
}
