use serde::Serialize;

/// A subscription plan. Defined at build time and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: &'static str,
    /// Display price, e.g. `"KES 1,500"`.
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl Plan {
    /// Numeric amount parsed from the display price.
    pub fn amount(&self) -> Option<u64> {
        parse_display_amount(self.price)
    }
}

/// Extract the whole-unit amount from a display price.
///
/// Currency labels, spaces and thousands separators are ignored; anything
/// after a decimal point is dropped. Returns `None` when no digits are found.
pub fn parse_display_amount(price: &str) -> Option<u64> {
    let whole = price.split('.').next().unwrap_or_default();
    let digits: String = whole.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_ignores_currency_and_separators() {
        assert_eq!(parse_display_amount("KES 1,500"), Some(1500));
        assert_eq!(parse_display_amount("KES 500"), Some(500));
        assert_eq!(parse_display_amount("KES 5,000.50"), Some(5000));
    }

    #[test]
    fn amount_without_digits_is_none() {
        assert_eq!(parse_display_amount("Free"), None);
        assert_eq!(parse_display_amount(""), None);
    }
}
