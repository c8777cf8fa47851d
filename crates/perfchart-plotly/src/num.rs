//! Numeric and list utilities shared across the compiler.
//!
//! Values travel through the model as text (the extraction layer hands over
//! numbers and timestamps alike), so everything here works on `&str` and
//! decides per call whether the text is numeric.

use std::cmp::Ordering;

/// Parse a value as a number, tolerating surrounding whitespace.
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// True if the value parses as a finite number.
pub fn is_numeric(value: &str) -> bool {
    parse_number(value).is_some()
}

/// True if every value in the collection parses as a number.
///
/// An empty collection counts as numeric; the caller emits an empty list
/// either way.
pub fn all_numeric<'a, I>(values: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().all(is_numeric)
}

/// Sort values numerically when every entry parses as a number, otherwise
/// lexicographically.
pub fn sort_intelligent(values: &mut [String]) {
    if all_numeric(values.iter().map(String::as_str)) {
        values.sort_by(|a, b| {
            let a = parse_number(a).unwrap_or(0.0);
            let b = parse_number(b).unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        });
    } else {
        values.sort();
    }
}

/// Remove duplicates, keeping the first occurrence of each value in order.
pub fn dedup_first_seen(values: &[String]) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    let mut out = Vec::new();
    for value in values {
        if !seen.contains(&value.as_str()) {
            seen.push(value);
            out.push(value.clone());
        }
    }
    out
}

/// Truncate a numeric value's text to `precision` decimal places.
///
/// Non-numeric text is returned unchanged; malformed numbers are never fatal
/// here.
pub fn truncate_precision(value: &str, precision: u32) -> String {
    match parse_number(value) {
        Some(v) => format!("{:.*}", precision as usize, v),
        None => value.to_string(),
    }
}

/// Scan a mixed text collection for its numeric minimum and maximum.
///
/// Non-numeric entries are skipped; returns `None` when nothing parses.
pub fn min_max<'a, I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut bounds: Option<(f64, f64)> = None;
    for value in values {
        if let Some(v) = parse_number(value) {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
    }
    bounds
}

/// Normalize `value` onto `[0, 1]` within `[min, max]`.
///
/// A zero-width range maps everything to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 {
        return 0.0;
    }
    (value - min) / range
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_and_padded() {
        assert_eq!(parse_number("1.5"), Some(1.5));
        assert_eq!(parse_number("  -3 "), Some(-3.0));
        assert_eq!(parse_number("2021-04-05T22:21:21"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn all_numeric_mixed() {
        assert!(all_numeric(["1", "2.5", "-7"]));
        assert!(!all_numeric(["1", "two"]));
        assert!(all_numeric(std::iter::empty::<&str>()));
    }

    #[test]
    fn sort_numeric_order() {
        let mut values = vec!["10".to_string(), "2".to_string(), "1".to_string()];
        sort_intelligent(&mut values);
        assert_eq!(values, ["1", "2", "10"]);
    }

    #[test]
    fn sort_lexicographic_order() {
        let mut values = vec!["b".to_string(), "a".to_string()];
        sort_intelligent(&mut values);
        assert_eq!(values, ["a", "b"]);
    }

    #[test]
    fn sort_mixed_falls_back_to_lexicographic() {
        let mut values = vec!["10".to_string(), "2".to_string(), "x".to_string()];
        sort_intelligent(&mut values);
        assert_eq!(values, ["10", "2", "x"]);
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let values: Vec<String> = ["b", "a", "b", "c", "a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(dedup_first_seen(&values), ["b", "a", "c"]);
    }

    #[test]
    fn truncate_numeric() {
        assert_eq!(truncate_precision("1.23456", 2), "1.23");
        assert_eq!(truncate_precision("5", 1), "5.0");
        assert_eq!(truncate_precision("not-a-number", 2), "not-a-number");
    }

    #[test]
    fn min_max_skips_non_numeric() {
        assert_eq!(min_max(["3", "x", "1", "2"]), Some((1.0, 3.0)));
        assert_eq!(min_max(["x", "y"]), None);
    }

    #[test]
    fn normalize_clamps_degenerate_range() {
        assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(normalize(5.0, 5.0, 5.0), 0.0);
    }
}
