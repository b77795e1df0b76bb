//! The libgcc → libunwind compatibility rewrite.
//!
//! Starting with NDK r23 the toolchain no longer bundles libgcc; its unwinder
//! lives in libunwind instead. Rust's prebuilt standard library still asks
//! for `-lgcc`, so the wrapper swaps the prefix and keeps whatever follows.

/// Threshold NDK major version at which libgcc disappeared.
const MIN_UNWIND_VERSION: u32 = 23;

const GCC_FLAG: &str = "-lgcc";
const UNWIND_FLAG: &str = "-lunwind";

/// Whether the rewrite applies for this NDK major version string.
///
/// Active only for all-digit strings with value >= 23. Anything else
/// (empty, signs, whitespace, garbage) silently disables the rewrite
/// rather than erroring, so an exotic toolchain string degrades to a
/// plain pass-through wrapper.
pub fn applies(ndk_major_version: &str) -> bool {
    if ndk_major_version.is_empty() || !ndk_major_version.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // A digits-only string that overflows u32 is certainly >= 23.
    ndk_major_version
        .parse::<u32>()
        .map(|v| v >= MIN_UNWIND_VERSION)
        .unwrap_or(true)
}

/// Applies the rewrite to one token, returning the replacement if it matched.
///
/// Works on raw command-line tokens and on response-file lines alike: a
/// trailing line ending is just part of the preserved suffix.
fn rewrite_token(token: &str) -> Option<String> {
    token
        .strip_prefix(GCC_FLAG)
        .map(|suffix| format!("{UNWIND_FLAG}{suffix}"))
}

/// Returns a copy of `tokens` with the rewrite applied where active.
pub fn rewrite_tokens(tokens: &[String], ndk_major_version: &str) -> Vec<String> {
    if !applies(ndk_major_version) {
        return tokens.to_vec();
    }
    tokens
        .iter()
        .map(|t| rewrite_token(t).unwrap_or_else(|| t.clone()))
        .collect()
}
