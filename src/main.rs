//! # linker-wrapper
//!
//! Shim between cargo and the Android NDK's clang driver.
//!
//! Cargo invokes this binary as the linker for a cross-compiled Android
//! target. It rebuilds the real driver invocation, patches `-lgcc` to
//! `-lunwind` where the NDK no longer ships libgcc (r23+), and forwards
//! everything else untouched:
//!
//! ```bash
//! linker-wrapper <args...>   # runs: $RUST_ANDROID_GRADLE_CC \
//!                            #       $RUST_ANDROID_GRADLE_CC_LINK_ARG <args...>
//! ```
//!
//! The child's exit code becomes this process's exit code.

use anyhow::Result;

mod config;
mod response;
mod rewrite;
mod shell;
mod wrapper;

fn main() -> Result<()> {
    let config = config::Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = wrapper::run(&config, args)?;
    std::process::exit(code);
}
