//! The aggregator: runs the probe cascade in precedence order and produces
//! either the single best result or a de-duplicated ranked list.

use crate::{bom, content, declaration, host, Confidence, EncodingResult, CP_UTF8};

pub use content::{is_likely_ascii, is_valid_utf8};

/// Run the full cascade and return the single best result.
///
/// An empty slice returns `(0, None, "")`. A BOM match short-circuits
/// immediately. A declaration at `High` confidence or better short-circuits
/// next. Otherwise the content probe's result is returned as-is.
pub fn detect(data: &[u8]) -> EncodingResult {
    if data.is_empty() {
        return EncodingResult::none();
    }

    let bom_result = bom::detect(data);
    if bom_result.confidence == Confidence::Certain {
        return bom_result;
    }

    let declared = declaration::detect(data);
    if declared.confidence >= Confidence::High {
        return declared;
    }

    content::detect(data)
}

/// Run the full cascade and return every candidate the probes agreed on,
/// ordered by probe precedence (BOM, declaration, content) with duplicates
/// elided by codepage.
///
/// A BOM match is decisive and returned alone. If no probe fires at all,
/// the list falls back to `[(UTF-8, Low), (host default, Low)]`.
pub fn detect_multiple(data: &[u8]) -> Vec<EncodingResult> {
    if data.is_empty() {
        return Vec::new();
    }

    let bom_result = bom::detect(data);
    if bom_result.confidence != Confidence::None {
        return vec![bom_result];
    }

    let mut results = Vec::new();

    let declared = declaration::detect(data);
    if declared.confidence != Confidence::None {
        results.push(declared);
    }

    let from_content = content::detect(data);
    if from_content.confidence != Confidence::None
        && !results.iter().any(|r| r.same_codepage(&from_content))
    {
        results.push(from_content);
    }

    if results.is_empty() {
        results.push(EncodingResult::new(CP_UTF8, Confidence::Low, "UTF-8"));
        results.push(EncodingResult::new(
            host::default_codepage(),
            Confidence::Low,
            "System Default",
        ));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_detect() {
        let r = detect(&[]);
        assert_eq!(r.codepage, 0);
        assert_eq!(r.confidence, Confidence::None);
    }

    #[test]
    fn empty_input_detect_multiple() {
        assert!(detect_multiple(&[]).is_empty());
    }

    #[test]
    fn bom_is_decisive_alone() {
        let data = [0xEF, 0xBB, 0xBF, b'h', b'i'];
        let results = detect_multiple(&data);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].codepage, 65001);
    }

    #[test]
    fn detect_matches_first_of_detect_multiple() {
        let data = b"<meta charset=\"windows-1251\">";
        let single = detect(data);
        let multiple = detect_multiple(data);
        assert_eq!(Some(single), multiple.first().copied());
    }

    #[test]
    fn ascii_input_is_resolved_by_content_probe_not_the_empty_fallback() {
        let data = b"plain ascii, no declaration, no high bytes";
        let results = detect_multiple(data);
        // Pure ASCII is valid UTF-8 at High confidence via the content probe,
        // so it should NOT hit the empty-list fallback.
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].codepage, 20127);
    }

    #[test]
    fn no_codepage_duplicated_in_detect_multiple() {
        let data = b"<meta charset=\"utf-8\"> some body text that is plain ascii";
        let results = detect_multiple(data);
        let mut seen = std::collections::HashSet::new();
        for r in &results {
            assert!(seen.insert(r.codepage), "duplicate codepage {}", r.codepage);
        }
    }
}
