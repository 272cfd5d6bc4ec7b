//! # encodesniff - Text Encoding Detection Core
//!
//! A statistical and structural character-encoding detector for raw byte
//! buffers: byte-order marks, in-band XML/HTML declarations, strict UTF-8
//! validation, and frequency-based scoring for East Asian double-byte and
//! single-byte legacy codepages.
//!
//! ## Quick Start
//!
//! ```rust
//! use encodesniff::detect;
//!
//! let utf8_bom = &[0xEF, 0xBB, 0xBF, b'H', b'i'];
//! let result = detect(utf8_bom);
//! assert_eq!(result.codepage, 65001);
//! ```

#![deny(missing_docs)]

pub mod bom;
pub mod content;
pub mod declaration;
pub mod detect;
pub mod host;
pub mod multibyte;
pub mod registry;
pub mod singlebyte;

pub use detect::{detect, detect_multiple, is_likely_ascii, is_valid_utf8};
pub use registry::EncodingInfo;

/// Windows codepage id for UTF-8, used throughout as the canonical constant.
pub const CP_UTF8: u32 = 65001;

/// Ordinal confidence grade attached to every detection result.
///
/// `None` means "this probe did not apply" rather than an error: the
/// detection core has no error type (callers consult `confidence`, not a
/// `Result`, to decide how much to trust a `codepage`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    /// The probe produced no signal.
    None,
    /// A weak guess; callers should prompt the user before trusting it.
    Low,
    /// A plausible statistical match.
    Medium,
    /// A strong structural or statistical match.
    High,
    /// Unambiguous; only a byte-order-mark match produces this grade.
    Certain,
}

/// The result of one detection attempt: a codepage, a confidence grade, and
/// a short canonical name.
///
/// `codepage` is `0` iff `confidence` is `Confidence::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingResult {
    /// Windows codepage identifier, or 0 when absent.
    pub codepage: u32,
    /// How much to trust `codepage`.
    pub confidence: Confidence,
    /// Short canonical label, e.g. "UTF-8". May be empty.
    pub encoding_name: &'static str,
}

impl EncodingResult {
    /// The "no signal" result: `codepage = 0`, `confidence = None`.
    pub const fn none() -> Self {
        Self {
            codepage: 0,
            confidence: Confidence::None,
            encoding_name: "",
        }
    }

    /// Build a result, enforcing invariant (ii): `None` confidence always
    /// carries `codepage = 0`.
    pub const fn new(codepage: u32, confidence: Confidence, encoding_name: &'static str) -> Self {
        match confidence {
            Confidence::None => Self::none(),
            _ => Self {
                codepage,
                confidence,
                encoding_name,
            },
        }
    }

    /// Two results are considered equal for de-duplication purposes iff
    /// their `codepage` fields match.
    pub fn same_codepage(&self, other: &Self) -> bool {
        self.codepage == other.codepage
    }
}

impl Default for EncodingResult {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_ordering() {
        assert!(Confidence::None < Confidence::Low);
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
        assert!(Confidence::High < Confidence::Certain);
    }

    #[test]
    fn none_result_has_zero_codepage() {
        let r = EncodingResult::new(65001, Confidence::None, "UTF-8");
        assert_eq!(r.codepage, 0);
        assert_eq!(r.confidence, Confidence::None);
    }

    #[test]
    fn same_codepage_dedup() {
        let a = EncodingResult::new(932, Confidence::High, "Shift-JIS");
        let b = EncodingResult::new(932, Confidence::Low, "Shift-JIS");
        assert!(a.same_codepage(&b));
    }
}
