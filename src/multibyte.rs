//! East Asian double-byte scoring: EUC-KR, Shift-JIS, GBK/GB2312, Big5.
//!
//! Each scorer walks the slice as a byte-pair machine rather than decoding
//! scalars: a lead byte that is followed by a valid trail byte consumes both
//! and counts toward a script-specific sub-range; a lead without a valid
//! trail consumes only itself. This mirrors how these encodings are
//! distinguished in practice — by the *shape* of their byte pairs, not by
//! mapping to a canonical codepoint.

use crate::{Confidence, EncodingResult};

const MIN_INPUT_LEN: usize = 10;

struct PairCounts {
    total: u64,
    valid: u64,
    script: u64,
}

fn walk_pairs(
    data: &[u8],
    is_lead: impl Fn(u8) -> bool,
    is_trail: impl Fn(u8) -> bool,
    is_script: impl Fn(u8, u8) -> bool,
) -> PairCounts {
    let mut counts = PairCounts {
        total: 0,
        valid: 0,
        script: 0,
    };
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if is_lead(b) {
            counts.total += 1;
            if i + 1 < data.len() && is_trail(data[i + 1]) {
                counts.valid += 1;
                if is_script(b, data[i + 1]) {
                    counts.script += 1;
                }
                i += 2;
                continue;
            }
        }
        i += 1;
    }
    counts
}

/// EUC-KR (codepage 949): lead/trail both `0xA1..=0xFE`, with a Hangul
/// sub-range of lead `0xB0..=0xC8`.
pub fn score_euc_kr(data: &[u8]) -> (bool, f32) {
    if data.len() < MIN_INPUT_LEN {
        return (false, 0.0);
    }
    let counts = walk_pairs(
        data,
        |b| (0xA1..=0xFE).contains(&b),
        |b| (0xA1..=0xFE).contains(&b),
        |lead, _trail| (0xB0..=0xC8).contains(&lead),
    );
    if counts.total == 0 {
        return (false, 0.0);
    }
    let valid_ratio = counts.valid as f32 / counts.total as f32;
    let hangul_ratio = counts.script as f32 / counts.total as f32;
    let likely = valid_ratio > 0.8 && hangul_ratio > 0.3;
    (likely, 0.7 * valid_ratio + 0.3 * hangul_ratio)
}

/// Shift-JIS (codepage 932): lead `0x81..=0x9F ∪ 0xE0..=0xFC`, trail
/// `0x40..=0x7E ∪ 0x80..=0xFC`, with a Hiragana/Katakana sub-range.
pub fn score_shift_jis(data: &[u8]) -> (bool, f32) {
    if data.len() < MIN_INPUT_LEN {
        return (false, 0.0);
    }
    let is_lead = |b: u8| (0x81..=0x9F).contains(&b) || (0xE0..=0xFC).contains(&b);
    let is_trail = |b: u8| (0x40..=0x7E).contains(&b) || (0x80..=0xFC).contains(&b);
    let is_kana = |lead: u8, trail: u8| {
        (lead == 0x82 && trail >= 0x9F) || (lead == 0x83 && (0x40..=0x96).contains(&trail))
    };
    let counts = walk_pairs(data, is_lead, is_trail, is_kana);
    if counts.total == 0 {
        return (false, 0.0);
    }
    let valid_ratio = counts.valid as f32 / counts.total as f32;
    let kana_ratio = counts.script as f32 / counts.total as f32;
    let likely = valid_ratio > 0.8 && kana_ratio > 0.2;
    (likely, 0.7 * valid_ratio + 0.3 * kana_ratio)
}

/// GB2312/GBK (codepage 936): lead/trail both `0xA1..=0xFE`, with a
/// common-Chinese sub-range of lead `0xB0..=0xF7`.
pub fn score_gbk(data: &[u8]) -> (bool, f32) {
    if data.len() < MIN_INPUT_LEN {
        return (false, 0.0);
    }
    let counts = walk_pairs(
        data,
        |b| (0xA1..=0xFE).contains(&b),
        |b| (0xA1..=0xFE).contains(&b),
        |lead, _trail| (0xB0..=0xF7).contains(&lead),
    );
    if counts.total == 0 {
        return (false, 0.0);
    }
    let valid_ratio = counts.valid as f32 / counts.total as f32;
    let chinese_ratio = counts.script as f32 / counts.total as f32;
    let likely = valid_ratio > 0.8 && chinese_ratio > 0.4;
    (likely, 0.7 * valid_ratio + 0.3 * chinese_ratio)
}

/// Big5 (codepage 950): lead `0x81..=0xFE`, trail `0x40..=0x7E ∪ 0x80..=0xFE`.
/// No sub-range weighting.
pub fn score_big5(data: &[u8]) -> (bool, f32) {
    if data.len() < MIN_INPUT_LEN {
        return (false, 0.0);
    }
    let counts = walk_pairs(
        data,
        |b| (0x81..=0xFE).contains(&b),
        |b| (0x40..=0x7E).contains(&b) || (0x80..=0xFE).contains(&b),
        |_, _| false,
    );
    if counts.total == 0 {
        return (false, 0.0);
    }
    let valid_ratio = counts.valid as f32 / counts.total as f32;
    (valid_ratio > 0.85, valid_ratio)
}

struct Candidate {
    codepage: u32,
    name: &'static str,
    likely: bool,
    score: f32,
}

/// Run all four scorers and emit the best likely match, or
/// `Confidence::None` if none are likely.
pub fn detect(data: &[u8]) -> EncodingResult {
    let (likely, score) = score_euc_kr(data);
    let euc_kr = Candidate {
        codepage: 949,
        name: "EUC-KR",
        likely,
        score,
    };
    let (likely, score) = score_shift_jis(data);
    let shift_jis = Candidate {
        codepage: 932,
        name: "Shift-JIS",
        likely,
        score,
    };
    let (likely, score) = score_gbk(data);
    let gbk = Candidate {
        codepage: 936,
        name: "GBK",
        likely,
        score,
    };
    let (likely, score) = score_big5(data);
    let big5 = Candidate {
        codepage: 950,
        name: "Big5",
        likely,
        score,
    };

    let winner = [euc_kr, shift_jis, gbk, big5]
        .into_iter()
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
