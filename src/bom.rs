//! Byte-order-mark probe.
//!
//! Matching is longest-prefix-first: the UTF-32LE BOM (`FF FE 00 00`) is a
//! proper prefix extension of the UTF-16LE BOM (`FF FE`), so the 4-byte
//! prefixes must be tried before the 2-byte ones or every UTF-32LE buffer
//! would misdetect as UTF-16LE.

use crate::{Confidence, EncodingResult};

const UTF32BE: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
const UTF32LE: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
const UTF8: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16BE: [u8; 2] = [0xFE, 0xFF];
const UTF16LE: [u8; 2] = [0xFF, 0xFE];

/// Detect a byte-order mark at the start of `data`.
///
/// Returns `Confidence::Certain` on a match, `Confidence::None` otherwise.
/// The BOM bytes themselves are left in place; the caller does not strip
/// them before running later probes.
pub fn detect(data: &[u8]) -> EncodingResult {
    if data.starts_with(&UTF32BE) {
        return EncodingResult::new(12001, Confidence::Certain, "UTF-32BE");
    }
    if data.starts_with(&UTF32LE) {
        return EncodingResult::new(12000, Confidence::Certain, "UTF-32LE");
    }
    if data.starts_with(&UTF8) {
        return EncodingResult::new(crate::CP_UTF8, Confidence::Certain, "UTF-8");
    }
    if data.starts_with(&UTF16BE) {
        return EncodingResult::new(1201, Confidence::Certain, "UTF-16BE");
    }
    if data.starts_with(&UTF16LE) {
        return EncodingResult::new(1200, Confidence::Certain, "UTF-16LE");
    }
    EncodingResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_bom() {
        let r = detect(&[0xEF, 0xBB, 0xBF, b'A']);
        assert_eq!(r.codepage, 65001);
        assert_eq!(r.confidence, Confidence::Certain);
    }

    #[test]
    fn utf32le_not_mistaken_for_utf16le() {
        let r = detect(&[0xFF, 0xFE, 0x00, 0x00]);
        assert_eq!(r.codepage, 12000);
    }

    #[test]
    fn utf32be() {
        let r = detect(&[0x00, 0x00, 0xFE, 0xFF]);
        assert_eq!(r.codepage, 12001);
    }

    #[test]
    fn utf16le() {
        let r = detect(&[0xFF, 0xFE, b'A', 0x00, b'B', 0x00]);
        assert_eq!(r.codepage, 1200);
    }

    #[test]
    fn utf16be() {
        let r = detect(&[0xFE, 0xFF, 0x00, b'A']);
        assert_eq!(r.codepage, 1201);
    }

    #[test]
    fn no_bom() {
        let r = detect(b"plain text");
        assert_eq!(r.confidence, Confidence::None);
        assert_eq!(r.codepage, 0);
    }

    #[test]
    fn short_slice_is_none() {
        assert_eq!(detect(&[0xFF]).confidence, Confidence::None);
        assert_eq!(detect(&[]).confidence, Confidence::None);
    }
}
