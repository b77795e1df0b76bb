//! Response-file patching.
//!
//! Linkers accept `@path` arguments to dodge command-line length limits: the
//! named file holds one token per line. Those tokens need the same libgcc
//! rewrite as the top-level arguments, so the wrapper patches the file on
//! disk before the child runs. Line endings are preserved byte for byte.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::rewrite;

/// Marker character introducing a response-file token.
pub const MARKER: char = '@';

/// Splits `text` into lines, each retaining its original line ending.
///
/// Recognized endings are `\n`, `\r\n`, and a lone `\r`. A final line
/// without an ending is kept as-is, so join(split(text)) == text.
pub fn split_keep_endings(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(text[start..=i].to_string());
                start = i + 1;
            }
            b'\r' if bytes.get(i + 1) != Some(&b'\n') => {
                lines.push(text[start..=i].to_string());
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

/// Rewrites `-lgcc*` lines inside the response file at `path`, in place.
pub fn patch_file(path: &Path, ndk_major_version: &str) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading response file '{}'", path.display()))?;
    let lines = rewrite::rewrite_tokens(&split_keep_endings(&text), ndk_major_version);
    fs::write(path, lines.concat())
        .with_context(|| format!("writing response file '{}'", path.display()))
}
