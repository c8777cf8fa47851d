//! Marker symbol registry.
//!
//! Maps the human-readable marker descriptions used in plot configuration to
//! the renderer's symbol identifiers. Pure lookup, no logic.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Symbol used when a description is missing or unknown.
pub const DEFAULT_SYMBOL: &str = "circle";

/// Description → renderer symbol identifier.
static SYMBOLS: &[(&str, &str)] = &[
    ("circle", "circle"),
    ("open circle", "circle-open"),
    ("dotted circle", "circle-dot"),
    ("open dotted circle", "circle-open-dot"),
    ("square", "square"),
    ("open square", "square-open"),
    ("dotted square", "square-dot"),
    ("open dotted square", "square-open-dot"),
    ("diamond", "diamond"),
    ("open diamond", "diamond-open"),
    ("dotted diamond", "diamond-dot"),
    ("open dotted diamond", "diamond-open-dot"),
    ("cross", "cross"),
    ("open cross", "cross-open"),
    ("dotted cross", "cross-dot"),
    ("open dotted cross", "cross-open-dot"),
    ("x", "x"),
    ("open x", "x-open"),
    ("dotted x", "x-dot"),
    ("open dotted x", "x-open-dot"),
    ("triangle up", "triangle-up"),
    ("open triangle up", "triangle-up-open"),
    ("dotted triangle up", "triangle-up-dot"),
    ("open dotted triangle up", "triangle-up-open-dot"),
    ("triangle down", "triangle-down"),
    ("open triangle down", "triangle-down-open"),
    ("dotted triangle down", "triangle-down-dot"),
    ("open dotted triangle down", "triangle-down-open-dot"),
    ("triangle left", "triangle-left"),
    ("open triangle left", "triangle-left-open"),
    ("dotted triangle left", "triangle-left-dot"),
    ("open dotted triangle left", "triangle-left-open-dot"),
    ("triangle right", "triangle-right"),
    ("open triangle right", "triangle-right-open"),
    ("dotted triangle right", "triangle-right-dot"),
    ("open dotted triangle right", "triangle-right-open-dot"),
    ("triangle northeast", "triangle-ne"),
    ("open triangle northeast", "triangle-ne-open"),
    ("triangle northwest", "triangle-nw"),
    ("open triangle northwest", "triangle-nw-open"),
    ("triangle southeast", "triangle-se"),
    ("open triangle southeast", "triangle-se-open"),
    ("triangle southwest", "triangle-sw"),
    ("open triangle southwest", "triangle-sw-open"),
    ("pentagon", "pentagon"),
    ("open pentagon", "pentagon-open"),
    ("dotted pentagon", "pentagon-dot"),
    ("open dotted pentagon", "pentagon-open-dot"),
    ("hexagon", "hexagon"),
    ("open hexagon", "hexagon-open"),
    ("dotted hexagon", "hexagon-dot"),
    ("open dotted hexagon", "hexagon-open-dot"),
    ("octagon", "octagon"),
    ("open octagon", "octagon-open"),
    ("star", "star"),
    ("open star", "star-open"),
    ("dotted star", "star-dot"),
    ("open dotted star", "star-open-dot"),
    ("hexagram", "hexagram"),
    ("open hexagram", "hexagram-open"),
    ("star triangle up", "star-triangle-up"),
    ("open star triangle up", "star-triangle-up-open"),
    ("star triangle down", "star-triangle-down"),
    ("open star triangle down", "star-triangle-down-open"),
    ("star square", "star-square"),
    ("open star square", "star-square-open"),
    ("star diamond", "star-diamond"),
    ("open star diamond", "star-diamond-open"),
    ("tall diamond", "diamond-tall"),
    ("open tall diamond", "diamond-tall-open"),
    ("wide diamond", "diamond-wide"),
    ("open wide diamond", "diamond-wide-open"),
    ("hourglass", "hourglass"),
    ("open hourglass", "hourglass-open"),
    ("bowtie", "bowtie"),
    ("open bowtie", "bowtie-open"),
    ("circle cross", "circle-cross"),
    ("circle x", "circle-x"),
    ("square cross", "square-cross"),
    ("square x", "square-x"),
    ("diamond cross", "diamond-cross"),
    ("diamond x", "diamond-x"),
    ("thin cross", "cross-thin"),
    ("thin x", "x-thin"),
    ("asterisk", "asterisk"),
    ("hash", "hash"),
    ("y up", "y-up"),
    ("y down", "y-down"),
    ("y left", "y-left"),
    ("y right", "y-right"),
    ("line horizontal", "line-ew"),
    ("line vertical", "line-ns"),
    ("line northeast", "line-ne"),
    ("line northwest", "line-nw"),
    ("arrow up", "arrow-up"),
    ("arrow down", "arrow-down"),
    ("arrow left", "arrow-left"),
    ("arrow right", "arrow-right"),
    ("arrow bar up", "arrow-bar-up"),
    ("arrow bar down", "arrow-bar-down"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| SYMBOLS.iter().copied().collect())
}

/// Look up a marker description, case-insensitively.
pub fn lookup(description: &str) -> Option<&'static str> {
    table()
        .get(description.trim().to_ascii_lowercase().as_str())
        .copied()
}

/// Look up a marker description, falling back to [`DEFAULT_SYMBOL`].
pub fn lookup_or_default(description: Option<&str>) -> &'static str {
    description
        .and_then(lookup)
        .unwrap_or(DEFAULT_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lookup() {
        assert_eq!(lookup("circle"), Some("circle"));
        assert_eq!(lookup("open triangle up"), Some("triangle-up-open"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("Open Circle"), Some("circle-open"));
        assert_eq!(lookup("  DIAMOND "), Some("diamond"));
    }

    #[test]
    fn unknown_falls_back() {
        assert_eq!(lookup("blob"), None);
        assert_eq!(lookup_or_default(Some("blob")), DEFAULT_SYMBOL);
        assert_eq!(lookup_or_default(None), DEFAULT_SYMBOL);
    }

    #[test]
    fn table_has_no_duplicate_descriptions() {
        assert_eq!(table().len(), SYMBOLS.len());
    }
}
