//! The one allowed side effect: querying the host's default codepage as a
//! last-resort fallback for content that no probe could otherwise identify.

/// Fixed fallback used on platforms with no "system default codepage"
/// concept (portable builds, non-Windows targets). Windows-1252 is the
/// conventional choice.
pub const PORTABLE_FALLBACK: u32 = 1252;

/// The host's default codepage, or [`PORTABLE_FALLBACK`] where the concept
/// doesn't apply.
#[cfg(target_os = "windows")]
pub fn default_codepage() -> u32 {
    // SAFETY: GetACP takes no arguments and cannot fail.
    unsafe { windows::Win32::Globalization::GetACP() }
}

/// The host's default codepage, or [`PORTABLE_FALLBACK`] where the concept
/// doesn't apply.
#[cfg(not(target_os = "windows"))]
pub fn default_codepage() -> u32 {
    PORTABLE_FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_codepage_is_nonzero() {
        assert_ne!(default_codepage(), 0);
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn portable_fallback_matches_design_note() {
        assert_eq!(default_codepage(), PORTABLE_FALLBACK);
    }
}
