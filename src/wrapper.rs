//! Command assembly and child execution.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::config::Config;
use crate::{response, rewrite, shell};

/// Builds the full token sequence the child will be executed with.
pub fn assemble(config: &Config, forwarded: Vec<String>) -> Vec<String> {
    let mut tokens = Vec::with_capacity(forwarded.len() + 2);
    tokens.push(config.cc.clone());
    tokens.push(config.link_arg.clone());
    tokens.extend(forwarded);
    rewrite::rewrite_tokens(&tokens, &config.ndk_major_version)
}

/// Runs the wrapped linker invocation and returns the child's exit code.
///
/// Response files are patched on disk before the spawn, so the child sees the
/// rewritten tokens. If a later step fails the files stay patched; the
/// rewrite is idempotent, so a retried link is unaffected.
pub fn run(config: &Config, forwarded: Vec<String>) -> Result<i32> {
    let tokens = assemble(config, forwarded);

    for token in &tokens {
        if let Some(path) = token.strip_prefix(response::MARKER) {
            response::patch_file(Path::new(path), &config.ndk_major_version)?;
        }
    }

    // Mostly of interest when the link fails, but printed unconditionally
    // because the child may fail after this process can no longer report.
    println!("{}", shell::join(&tokens));

    let status = Command::new(&tokens[0])
        .args(&tokens[1..])
        .status()
        .with_context(|| format!("failed to execute linker driver '{}'", tokens[0]))?;

    // No code means the child died to a signal; 1 is as good a relay as any.
    Ok(status.code().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(cc: &str, link_arg: &str, version: &str) -> Config {
        Config {
            cc: cc.to_string(),
            link_arg: link_arg.to_string(),
            ndk_major_version: version.to_string(),
        }
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_assemble_prepends_cc_and_link_arg() {
        let cfg = config("/ndk/bin/clang", "-Wl,--fix-cortex-a8", "22");
        let tokens = assemble(&cfg, args(&["-o", "out"]));
        assert_eq!(
            tokens,
            args(&["/ndk/bin/clang", "-Wl,--fix-cortex-a8", "-o", "out"])
        );
    }

    #[test]
    fn test_assemble_applies_rewrite() {
        let cfg = config("clang", "-fuse-ld=lld", "23");
        let tokens = assemble(&cfg, args(&["-o", "out", "-lgcc", "-lm"]));
        assert_eq!(tokens, args(&["clang", "-fuse-ld=lld", "-o", "out", "-lunwind", "-lm"]));
    }

    #[test]
    fn test_run_relays_exit_code() {
        // `sh -c 'exit 7'` stands in for a linker that fails with code 7.
        let cfg = config("sh", "-c", "25");
        assert_eq!(run(&cfg, args(&["exit 7"])).unwrap(), 7);
        assert_eq!(run(&cfg, args(&["exit 0"])).unwrap(), 0);
    }

    #[test]
    fn test_run_missing_driver_is_error() {
        let cfg = config("/nonexistent/driver", "-fuse-ld=lld", "25");
        let err = run(&cfg, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/driver"));
    }
}
