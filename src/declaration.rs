//! In-band encoding declaration probes: XML processing instruction and
//! HTML `meta charset`.
//!
//! Both probes do bounded, hand-written substring scanning rather than a
//! regex or full XML/HTML parse — the input may not even be well-formed
//! markup, and every search window is capped so a pathological buffer
//! cannot make either probe scan past a small fixed prefix.

use crate::{registry, Confidence, EncodingResult};

const XML_SEARCH_CAP: usize = 1024;
const XML_PI_MAX_START: usize = 100;
const XML_ENCODING_MAX_OFFSET: usize = 200;
const XML_QUOTE_MAX_OFFSET: usize = 20;
const XML_CLOSE_QUOTE_MAX_OFFSET: usize = 50;

const HTML_SEARCH_CAP: usize = 2048;

/// Run the XML PI probe, then the HTML meta probe. Returns the first
/// `High`-confidence match, or `Confidence::None` if neither fires.
pub fn detect(data: &[u8]) -> EncodingResult {
    let xml = detect_xml_pi(data);
    if xml.confidence != Confidence::None {
        return xml;
    }
    detect_html_meta(data)
}

/// Parse `<?xml ... encoding="..." ?>` (or with single quotes).
pub fn detect_xml_pi(data: &[u8]) -> EncodingResult {
    let cap = data.len().min(XML_SEARCH_CAP);
    let hay = &data[..cap];

    let Some(pi_pos) = find_sub(hay, b"<?xml") else {
        return EncodingResult::none();
    };
    if pi_pos > XML_PI_MAX_START {
        return EncodingResult::none();
    }

    let Some(enc_rel) = find_sub(&data[pi_pos..], b"encoding") else {
        return EncodingResult::none();
    };
    if enc_rel > XML_ENCODING_MAX_OFFSET {
        return EncodingResult::none();
    }
    let enc_pos = pi_pos + enc_rel;

    let quote_window_end = data.len().min(enc_pos + XML_QUOTE_MAX_OFFSET + 1);
    let Some(quote1_pos) = find_first_quote(&data[enc_pos..quote_window_end]).map(|i| enc_pos + i)
    else {
        return EncodingResult::none();
    };
    let quote_char = data[quote1_pos];

    let close_window_end = data.len().min(quote1_pos + 1 + XML_CLOSE_QUOTE_MAX_OFFSET);
    let Some(quote2_pos) = find_byte(&data[quote1_pos + 1..close_window_end], quote_char)
        .map(|i| quote1_pos + 1 + i)
    else {
        return EncodingResult::none();
    };

    resolve(&data[quote1_pos + 1..quote2_pos])
}

/// Parse `<meta charset="...">` or `charset=... ` (unquoted).
pub fn detect_html_meta(data: &[u8]) -> EncodingResult {
    let cap = data.len().min(HTML_SEARCH_CAP);
    let hay = &data[..cap];

    let Some(charset_pos) = find_sub(hay, b"charset") else {
        return EncodingResult::none();
    };
    let after = charset_pos + "charset".len();

    if let Some(rel) = find_first_quote(&data[after..cap]) {
        let quote1_pos = after + rel;
        let quote_char = data[quote1_pos];
        // invariant: the matching quote must lie strictly after the opener
        // and inside the search window (fixes the open question about
        // unchecked negative spans near buffer boundaries).
        return match find_byte(&data[quote1_pos + 1..cap], quote_char) {
            Some(rel2) => resolve(&data[quote1_pos + 1..quote1_pos + 1 + rel2]),
            None => EncodingResult::none(),
        };
    }

    // Unquoted: charset=value
    let Some(eq_rel) = find_byte(&data[after..cap], b'=') else {
        return EncodingResult::none();
    };
    let mut start = after + eq_rel + 1;
    while start < cap && data[start] == b' ' {
        start += 1;
    }
    let mut end = start;
    while end < cap && data[end] != b' ' && data[end] != b'>' && data[end] != b';' {
        end += 1;
    }
    if end <= start {
        return EncodingResult::none();
    }
    resolve(&data[start..end])
}

fn resolve(name_bytes: &[u8]) -> EncodingResult {
    let name = String::from_utf8_lossy(name_bytes);
    let codepage = registry::codepage_by_name(&name);
    if codepage == 0 {
        return EncodingResult::none();
    }
    let canonical = registry::info(codepage).map(|e| e.name).unwrap_or("");
    EncodingResult::new(codepage, Confidence::High, canonical)
}

fn find_sub(hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || hay.len() < needle.len() {
        return None;
    }
    hay.windows(needle.len()).position(|w| w == needle)
}

fn find_byte(hay: &[u8], needle: u8) -> Option<usize> {
    hay.iter().position(|&b| b == needle)
}

fn find_first_quote(hay: &[u8]) -> Option<usize> {
    hay.iter().position(|&b| b == b'"' || b == b'\'')
}
