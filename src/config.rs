use anyhow::{Context, Result};
use std::env;

pub const CC_VAR: &str = "RUST_ANDROID_GRADLE_CC";
pub const LINK_ARG_VAR: &str = "RUST_ANDROID_GRADLE_CC_LINK_ARG";
pub const NDK_MAJOR_VERSION_VAR: &str = "CARGO_NDK_MAJOR_VERSION";

/// Wrapper configuration, resolved once at startup.
///
/// All three variables are set by the Gradle plugin that installs this
/// wrapper as the cargo linker; running outside that harness without them
/// is a configuration error.
pub struct Config {
    /// Path to the real compiler/linker driver (NDK clang).
    pub cc: String,
    /// Extra argument always inserted right after the driver path.
    pub link_arg: String,
    /// NDK major version as a string, e.g. "25". Digits expected but not
    /// enforced; a non-numeric value just disables the libgcc rewrite.
    pub ndk_major_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            cc: required(CC_VAR)?,
            link_arg: required(LINK_ARG_VAR)?,
            ndk_major_version: required(NDK_MAJOR_VERSION_VAR)?,
        })
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("missing required environment variable `{name}`"))
}
