//! Static registry of known text encodings.
//!
//! Entries are compiled-in constants: there is no runtime initialization
//! step, no locking, and no heap allocation for the table itself. Lookups
//! are linear scans over a small fixed array, which is fast enough at the
//! table sizes involved here and keeps the registry trivially `'static`.

use crate::CP_UTF8;

/// One registry entry: a codepage id plus its names.
///
/// Entries are immutable and process-wide. `name` is the canonical short
/// label used for case-insensitive lookups (`codepage_by_name`); `display_name`
/// is the human-facing string; `localized_name` is reserved for a future
/// translated label and is always `None` today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingInfo {
    /// Windows codepage identifier.
    pub codepage: u32,
    /// Canonical short label, e.g. "UTF-8".
    pub name: &'static str,
    /// Human-readable label, e.g. "Unicode (UTF-8)".
    pub display_name: &'static str,
    /// Reserved for a translated display name.
    pub localized_name: Option<&'static str>,
    /// Whether detection may emit this codepage at `High` confidence or
    /// better without an explicit declaration.
    pub is_common: bool,
}

macro_rules! entry {
    ($cp:expr, $name:expr, $display:expr, $common:expr) => {
        EncodingInfo {
            codepage: $cp,
            name: $name,
            display_name: $display,
            localized_name: None,
            is_common: $common,
        }
    };
}

/// The full registry table, covering §6's codepage space.
static ENCODINGS: &[EncodingInfo] = &[
    // Unicode
    entry!(CP_UTF8, "UTF-8", "Unicode (UTF-8)", true),
    entry!(1200, "UTF-16LE", "Unicode (UTF-16 LE)", true),
    entry!(1201, "UTF-16BE", "Unicode (UTF-16 BE)", false),
    entry!(12000, "UTF-32LE", "Unicode (UTF-32 LE)", false),
    entry!(12001, "UTF-32BE", "Unicode (UTF-32 BE)", false),
    entry!(20127, "US-ASCII", "Western European (US-ASCII)", true),
    // Western European
    entry!(1252, "Windows-1252", "Western European (Windows-1252)", true),
    entry!(28591, "ISO-8859-1", "Western European (ISO-8859-1)", false),
    entry!(28605, "ISO-8859-15", "Western European (ISO-8859-15)", false),
    // Central European
    entry!(1250, "Windows-1250", "Central European (Windows-1250)", false),
    entry!(28592, "ISO-8859-2", "Central European (ISO-8859-2)", false),
    // Cyrillic
    entry!(1251, "Windows-1251", "Cyrillic (Windows-1251)", true),
    entry!(20866, "KOI8-R", "Cyrillic (KOI8-R)", false),
    entry!(21866, "KOI8-U", "Cyrillic (KOI8-U)", false),
    entry!(28595, "ISO-8859-5", "Cyrillic (ISO-8859-5)", false),
    // Greek
    entry!(1253, "Windows-1253", "Greek (Windows-1253)", false),
    entry!(28597, "ISO-8859-7", "Greek (ISO-8859-7)", false),
    // Turkish
    entry!(1254, "Windows-1254", "Turkish (Windows-1254)", false),
    entry!(28599, "ISO-8859-9", "Turkish (ISO-8859-9)", false),
    // Hebrew
    entry!(1255, "Windows-1255", "Hebrew (Windows-1255)", false),
    entry!(28598, "ISO-8859-8", "Hebrew (ISO-8859-8)", false),
    // Arabic
    entry!(1256, "Windows-1256", "Arabic (Windows-1256)", false),
    entry!(28596, "ISO-8859-6", "Arabic (ISO-8859-6)", false),
    // Baltic
    entry!(1257, "Windows-1257", "Baltic (Windows-1257)", false),
    entry!(28594, "ISO-8859-4", "Baltic (ISO-8859-4)", false),
    entry!(28603, "ISO-8859-13", "Baltic (ISO-8859-13)", false),
    // Vietnamese
    entry!(1258, "Windows-1258", "Vietnamese (Windows-1258)", false),
    // Thai
    entry!(874, "Windows-874", "Thai (Windows-874)", false),
    // Korean
    entry!(949, "Windows-949", "Korean (Windows-949)", true),
    entry!(51949, "EUC-KR", "Korean (EUC-KR)", true),
    // Japanese
    entry!(932, "Shift-JIS", "Japanese (Shift-JIS)", true),
    entry!(51932, "EUC-JP", "Japanese (EUC-JP)", false),
    entry!(50220, "ISO-2022-JP", "Japanese (ISO-2022-JP)", false),
    // Chinese Simplified
    entry!(936, "GBK", "Chinese Simplified (GBK)", true),
    entry!(54936, "GB18030", "Chinese Simplified (GB18030)", false),
    entry!(20936, "GB2312", "Chinese Simplified (GB2312)", false),
    // Chinese Traditional
    entry!(950, "Big5", "Chinese Traditional (Big5)", true),
    entry!(20000, "Big5-HKSCS", "Chinese Traditional (Big5-HKSCS)", false),
];

/// Enumerate every registry entry.
pub fn all() -> &'static [EncodingInfo] {
    ENCODINGS
}

/// Enumerate entries flagged as commonly used.
pub fn common() -> impl Iterator<Item = &'static EncodingInfo> {
    ENCODINGS.iter().filter(|e| e.is_common)
}

/// Exact lookup by codepage.
pub fn info(codepage: u32) -> Option<&'static EncodingInfo> {
    ENCODINGS.iter().find(|e| e.codepage == codepage)
}

/// Case-insensitive lookup by name, falling back to a small alias table.
/// Returns 0 for unknown names.
pub fn codepage_by_name(name: &str) -> u32 {
    if name.is_empty() {
        return 0;
    }
    if let Some(entry) = ENCODINGS.iter().find(|e| e.name.eq_ignore_ascii_case(name)) {
        return entry.codepage;
    }
    match_alias(name)
}

fn match_alias(name: &str) -> u32 {
    if name.eq_ignore_ascii_case("UTF8") {
        return CP_UTF8;
    }
    if name.eq_ignore_ascii_case("UTF-16")
        || name.eq_ignore_ascii_case("UCS-2")
        || name.eq_ignore_ascii_case("UNICODE")
    {
        return 1200;
    }
    if name.eq_ignore_ascii_case("ASCII") || name.eq_ignore_ascii_case("US-ASCII") {
        return 20127;
    }
    0
}

/// Display name for a codepage, or a synthesized "Codepage N" string for an
/// unknown one.
pub fn display_name(codepage: u32) -> String {
    match info(codepage) {
        Some(entry) => entry.display_name.to_string(),
        None => format!("Codepage {codepage}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_entry_per_codepage() {
        let mut seen = std::collections::HashSet::new();
        for e in all() {
            assert!(seen.insert(e.codepage), "duplicate codepage {}", e.codepage);
        }
    }

    #[test]
    fn idempotent_name_roundtrip() {
        for e in all() {
            let cp = codepage_by_name(e.name);
            assert_eq!(info(cp), Some(e));
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(codepage_by_name("UTF8"), CP_UTF8);
        assert_eq!(codepage_by_name("utf-16"), 1200);
        assert_eq!(codepage_by_name("UCS-2"), 1200);
        assert_eq!(codepage_by_name("unicode"), 1200);
        assert_eq!(codepage_by_name("ascii"), 20127);
        assert_eq!(codepage_by_name("US-ASCII"), 20127);
    }

    #[test]
    fn unknown_name_returns_zero() {
        assert_eq!(codepage_by_name("not-a-real-encoding"), 0);
        assert_eq!(codepage_by_name(""), 0);
    }

    #[test]
    fn case_insensitive_lookup() {
        assert_eq!(codepage_by_name("windows-1251"), 1251);
        assert_eq!(codepage_by_name("WINDOWS-1251"), 1251);
    }

    #[test]
    fn common_entries_cover_expected_set() {
        let names: Vec<&str> = common().map(|e| e.name).collect();
        for expected in [
            "UTF-8",
            "UTF-16LE",
            "Windows-1252",
            "Windows-949",
            "EUC-KR",
            "Shift-JIS",
            "GBK",
            "Big5",
            "Windows-1251",
        ] {
            assert!(names.contains(&expected), "{expected} missing from common()");
        }
    }

    #[test]
    fn display_name_synthesizes_for_unknown_codepage() {
        assert_eq!(display_name(999_999), "Codepage 999999");
        assert_eq!(display_name(CP_UTF8), "Unicode (UTF-8)");
    }
}
