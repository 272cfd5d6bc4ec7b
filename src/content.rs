//! Content probe: strict UTF-8 validation, ASCII test, high-byte density,
//! and the East Asian / single-byte scorer cascade.
//!
//! This is the probe of last resort — it only runs once the BOM and
//! declaration probes have failed to produce a sufficient result.

use crate::{host, multibyte, singlebyte, Confidence, EncodingResult};

const ASCII_SAMPLE_LEN: usize = 4096;
const DENSITY_SAMPLE_LEN: usize = 8192;

/// Strictly validate `data` as UTF-8: rejects overlong sequences, surrogate
/// halves, out-of-range scalars (`> U+10FFFF`), and truncated trailing
/// bytes. Never reads past `data.len()`.
pub fn is_valid_utf8(data: &[u8]) -> bool {
    let len = data.len();
    let mut i = 0;
    while i < len {
        let b = data[i];
        match b {
            0x00..=0x7F => i += 1,
            0xC2..=0xDF => {
                if i + 1 >= len || !is_trail(data[i + 1]) {
                    return false;
                }
                i += 2;
            }
            0xE0..=0xEF => {
                if i + 2 >= len || !is_trail(data[i + 1]) || !is_trail(data[i + 2]) {
                    return false;
                }
                if b == 0xE0 && data[i + 1] < 0xA0 {
                    return false;
                }
                if b == 0xED && data[i + 1] >= 0xA0 {
                    return false;
                }
                i += 3;
            }
            0xF0..=0xF4 => {
                if i + 3 >= len
                    || !is_trail(data[i + 1])
                    || !is_trail(data[i + 2])
                    || !is_trail(data[i + 3])
                {
                    return false;
                }
                if b == 0xF0 && data[i + 1] < 0x90 {
                    return false;
                }
                if b == 0xF4 && data[i + 1] >= 0x90 {
                    return false;
                }
                i += 4;
            }
            _ => return false,
        }
    }
    true
}

fn is_trail(b: u8) -> bool {
    (0x80..=0xBF).contains(&b)
}

/// True iff strictly less than 1% of the first 4096 bytes exceed `0x7F`.
/// Carries the same semantics the content probe uses internally after a
/// successful UTF-8 validation.
pub fn is_likely_ascii(data: &[u8]) -> bool {
    let sample = &data[..data.len().min(ASCII_SAMPLE_LEN)];
    if sample.is_empty() {
        return true;
    }
    let high = sample.iter().filter(|&&b| b > 0x7F).count();
    (high as f64) < 0.01 * sample.len() as f64
}

/// Run the content probe cascade: UTF-8 → high-byte density → Asian
/// scoring → single-byte scoring → host-default fallback.
pub fn detect(data: &[u8]) -> EncodingResult {
    if is_valid_utf8(data) {
        return if is_likely_ascii(data) {
            EncodingResult::new(20127, Confidence::High, "ASCII")
        } else {
            EncodingResult::new(crate::CP_UTF8, Confidence::High, "UTF-8")
        };
    }

    let density_sample = &data[..data.len().min(DENSITY_SAMPLE_LEN)];
    if !density_sample.is_empty() {
        let high = density_sample.iter().filter(|&&b| b >= 0x80).count();
        if (high as f64) < 0.05 * density_sample.len() as f64 {
            return EncodingResult::new(1252, Confidence::Low, "Windows-1252");
        }
    }

    let asian = multibyte::detect(data);
    if asian.confidence != Confidence::None {
        return asian;
    }

    let legacy = singlebyte::detect(data);
    if legacy.confidence != Confidence::None {
        return legacy;
    }

    EncodingResult::new(host::default_codepage(), Confidence::Low, "System Default")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_text_is_valid_utf8_and_counted_as_ascii() {
        let data = b"Hello World";
        assert!(is_valid_utf8(data));
        assert!(is_likely_ascii(data));
        let r = detect(data);
        assert_eq!(r.codepage, 20127);
        assert_eq!(r.confidence, Confidence::High);
    }

    #[test]
    fn utf8_hangul_is_high_confidence_utf8() {
        let data: &[u8] = &[0xED, 0x95, 0x9C, 0xEA, 0xB8, 0x80];
        assert!(is_valid_utf8(data));
        let r = detect(data);
        assert_eq!(r.codepage, 65001);
        assert_eq!(r.confidence, Confidence::High);
    }

    #[test]
    fn overlong_two_byte_lead_is_rejected() {
        assert!(!is_valid_utf8(&[0xC0, 0x80]));
        assert!(!is_valid_utf8(&[0xC1, 0x81]));
    }

    #[test]
    fn surrogate_is_rejected() {
        assert!(!is_valid_utf8(&[0xED, 0xA0, 0x80]));
    }

    #[test]
    fn overlong_three_byte_is_rejected() {
        assert!(!is_valid_utf8(&[0xE0, 0x80, 0x80]));
    }

    #[test]
    fn out_of_range_four_byte_is_rejected() {
        assert!(!is_valid_utf8(&[0xF4, 0x90, 0x80, 0x80]));
        assert!(!is_valid_utf8(&[0xF5, 0x80, 0x80, 0x80]));
    }

    #[test]
    fn truncated_multibyte_sequence_is_rejected() {
        assert!(!is_valid_utf8(&[0xE4, 0xBD]));
        assert!(!is_valid_utf8(&[0xF0, 0x9F, 0x98]));
    }

    #[test]
    fn empty_slice_is_valid_utf8() {
        assert!(is_valid_utf8(&[]));
        assert!(is_likely_ascii(&[]));
    }

    #[test]
    fn low_byte_density_falls_back_to_windows_1252() {
        let mut data = vec![b'x'; 300];
        data.push(0xFF);
        // invalid UTF-8 (lone 0xFF) but under 5% high-byte density.
        let r = detect(&data);
        assert_eq!(r.codepage, 1252);
        assert_eq!(r.confidence, Confidence::Low);
    }

    #[test]
    fn euc_kr_content_is_detected_through_the_cascade() {
        let data: &[u8] = &[
            0xBE, 0xC8, 0xB3, 0xE7, 0xC7, 0xCF, 0xBC, 0xBC, 0xBF, 0xE4, 0x20, 0xC7, 0xD1, 0xB1,
            0xDB, 0x20, 0xC5, 0xD7, 0xBD, 0xBA, 0xC6, 0xAE,
        ];
        let r = detect(data);
        assert_eq!(r.codepage, 949);
    }
}
