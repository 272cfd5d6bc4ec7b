//! Single-byte legacy codepage scoring: Central European, Cyrillic, Greek,
//! Turkish, Hebrew, Arabic, Baltic, Vietnamese.
//!
//! Each scorer counts how many bytes `>= 0x80` fall within a fixed
//! signature set and compares that against the total count of high bytes.
//! Unlike the East Asian scorers this is a single-byte, position-independent
//! frequency test — there is no lead/trail structure to walk.

use crate::{Confidence, EncodingResult};

fn counts(data: &[u8], is_signature: impl Fn(u8) -> bool) -> (u64, u64) {
    let mut high = 0u64;
    let mut sig = 0u64;
    for &b in data {
        if b >= 0x80 {
            high += 1;
            if is_signature(b) {
                sig += 1;
            }
        }
    }
    (high, sig)
}

fn evaluate(
    data: &[u8],
    is_signature: impl Fn(u8) -> bool,
    min_score: f32,
    min_density_pct: f32,
) -> (bool, f32) {
    if data.is_empty() {
        return (false, 0.0);
    }
    let (high, sig) = counts(data, is_signature);
    if high == 0 {
        return (false, 0.0);
    }
    let density_pct = high as f32 / data.len() as f32 * 100.0;
    let score = sig as f32 / high as f32;
    let likely = score >= min_score && density_pct >= min_density_pct;
    (likely, score)
}

/// Central European (Windows-1250).
pub fn score_central_european(data: &[u8]) -> (bool, f32) {
    const SIG: [u8; 16] = [
        0xB9, 0xE6, 0xEA, 0xB3, 0xF1, 0xF3, 0x9C, 0x9F, 0xBF, 0x8C, 0x8F, 0x9A, 0x9D, 0x9E, 0xD5,
        0xDB,
    ];
    evaluate(data, |b| SIG.contains(&b), 0.20, 5.0)
}

/// Cyrillic (Windows-1251).
pub fn score_cyrillic(data: &[u8]) -> (bool, f32) {
    evaluate(
        data,
        |b| (0xC0..=0xFF).contains(&b) || matches!(b, 0xA8 | 0xB8 | 0xAA | 0xBA | 0xAF | 0xBF),
        0.60,
        10.0,
    )
}

/// Greek (Windows-1253).
pub fn score_greek(data: &[u8]) -> (bool, f32) {
    evaluate(
        data,
        |b| (0xC0..=0xFE).contains(&b) || (0xA1..=0xA3).contains(&b) || (0xB4..=0xBE).contains(&b),
        0.60,
        10.0,
    )
}

/// Turkish (Windows-1254).
pub fn score_turkish(data: &[u8]) -> (bool, f32) {
    evaluate(
        data,
        |b| {
            matches!(
                b,
                0xF0 | 0xD0 | 0xFD | 0xDD | 0xF6 | 0xD6 | 0xFE | 0xDE | 0xFC | 0xDC | 0xE7 | 0xC7
            )
        },
        0.15,
        5.0,
    )
}

/// Hebrew (Windows-1255).
pub fn score_hebrew(data: &[u8]) -> (bool, f32) {
    evaluate(data, |b| (0xE0..=0xFA).contains(&b), 0.60, 10.0)
}

/// Arabic (Windows-1256).
pub fn score_arabic(data: &[u8]) -> (bool, f32) {
    evaluate(
        data,
        |b| (0xC1..=0xFE).contains(&b) || (0x8C..=0x9F).contains(&b),
        0.60,
        10.0,
    )
}

/// Baltic (Windows-1257).
pub fn score_baltic(data: &[u8]) -> (bool, f32) {
    const SIG: [u8; 16] = [
        0xE0, 0xE8, 0xEA, 0xEB, 0xEC, 0xF0, 0xF8, 0xFE, 0xC0, 0xC8, 0xCA, 0xCB, 0xCC, 0xD0, 0xD8,
        0xDE,
    ];
    evaluate(data, |b| SIG.contains(&b), 0.20, 5.0)
}

/// Vietnamese (Windows-1258): tone-marked A/E/I/O/U ranges.
pub fn score_vietnamese(data: &[u8]) -> (bool, f32) {
    evaluate(
        data,
        |b| {
            (0xC0..=0xC3).contains(&b)
                || (0xC8..=0xCA).contains(&b)
                || (0xCC..=0xCD).contains(&b)
                || (0xD2..=0xD5).contains(&b)
                || (0xD9..=0xDA).contains(&b)
                || (0xE0..=0xE3).contains(&b)
                || (0xE8..=0xEA).contains(&b)
                || (0xEC..=0xED).contains(&b)
                || (0xF2..=0xF5).contains(&b)
                || (0xF9..=0xFA).contains(&b)
                || b == 0xD0
                || b == 0xF0
        },
        0.30,
        10.0,
    )
}

struct Candidate {
    codepage: u32,
    name: &'static str,
    likely: bool,
    score: f32,
}

/// Run all eight scorers and emit the best likely match, or
/// `Confidence::None` if none are likely. Confidence mapping mirrors the
/// East Asian scorers.
pub fn detect(data: &[u8]) -> EncodingResult {
    let scorers: [(u32, &'static str, (bool, f32)); 8] = [
        (1250, "Windows-1250", score_central_european(data)),
        (1251, "Windows-1251", score_cyrillic(data)),
        (1253, "Windows-1253", score_greek(data)),
        (1254, "Windows-1254", score_turkish(data)),
        (1255, "Windows-1255", score_hebrew(data)),
        (1256, "Windows-1256", score_arabic(data)),
        (1257, "Windows-1257", score_baltic(data)),
        (1258, "Windows-1258", score_vietnamese(data)),
    ];

    let winner = scorers
        .into_iter()
        .map(|(codepage, name, (likely, score))| Candidate {
            codepage,
            name,
            likely,
            score,
        })
        .filter(|c| c.likely)
        .max_by(|a, b| a.score.total_cmp(&b.score));

    match winner {
        Some(c) => EncodingResult::new(c.codepage, confidence_for(c.score), c.name),
        None => EncodingResult::none(),
    }
}

fn confidence_for(score: f32) -> Confidence {
    if score > 0.9 {
        Confidence::High
    } else if score < 0.6 {
        Confidence::Low
    } else {
        Confidence::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_is_never_likely() {
        assert_eq!(score_cyrillic(&[]), (false, 0.0));
        assert_eq!(detect(&[]).confidence, Confidence::None);
    }

    #[test]
    fn pure_cyrillic_signature_bytes_fire() {
        let data = vec![0xC0; 40];
        let (likely, score) = score_cyrillic(&data);
        assert!(likely);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn low_density_does_not_fire_despite_good_score() {
        // 4 high bytes, all matching, but spread over 200 bytes: well under
        // the 10% density floor even though the per-high-byte score is 1.0.
        let mut data = vec![b'x'; 196];
        data.extend_from_slice(&[0xC0, 0xC1, 0xC2, 0xC3]);
        let (likely, _score) = score_cyrillic(&data);
        assert!(!likely);
    }

    #[test]
    fn turkish_has_a_looser_threshold() {
        let mut data = vec![b'x'; 80];
        data.extend_from_slice(&[0xF0, 0xD0, 0xFD, 0xDD, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20]);
        let (likely, _score) = score_turkish(&data);
        assert!(likely);
    }

    #[test]
    fn ascii_never_triggers_any_scorer() {
        let data = b"the quick brown fox jumps over the lazy dog, repeated for bulk";
        assert_eq!(detect(data).confidence, Confidence::None);
    }

    #[test]
    fn detect_picks_highest_scoring_candidate() {
        let data = vec![0xC0; 50];
        let r = detect(&data);
        assert_eq!(r.codepage, 1251);
    }
}
