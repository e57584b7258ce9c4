/// Best-effort rewrite of a local mobile number into international form.
///
/// `07…` becomes `<country_code>7…` (the leading trunk `0` is replaced).
/// Everything else, including malformed input, passes through trimmed but
/// otherwise unchanged; the backend is the validator.
pub fn normalize_phone(raw: &str, country_code: &str) -> String {
    let phone = raw.trim();
    match phone.strip_prefix('0') {
        Some(rest) if rest.starts_with('7') => format!("{country_code}{rest}"),
        _ => phone.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_number_gets_country_code() {
        assert_eq!(normalize_phone("0712345678", "254"), "254712345678");
    }

    #[test]
    fn international_number_is_unchanged() {
        assert_eq!(normalize_phone("254712345678", "254"), "254712345678");
        assert_eq!(normalize_phone("+254712345678", "254"), "+254712345678");
    }

    #[test]
    fn other_local_prefixes_are_not_rewritten() {
        assert_eq!(normalize_phone("0112345678", "254"), "0112345678");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize_phone("  0712345678\n", "254"), "254712345678");
    }
}
