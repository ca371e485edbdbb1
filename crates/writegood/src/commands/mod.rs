//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use clap::Args;

pub mod check;
pub mod duplicates;
pub mod highlight;
pub mod info;
pub mod passive;
pub mod weasel;

/// Scan range shared by the checker commands.
///
/// Byte offsets into the file; both default to the whole document.
#[derive(Args, Debug, Default)]
pub struct RangeArgs {
    /// Start byte offset (defaults to the beginning of the file)
    #[arg(long)]
    pub start: Option<usize>,

    /// End byte offset (defaults to the end of the file)
    #[arg(long)]
    pub end: Option<usize>,
}

/// Read a file and validate its size against the configured limit.
///
/// Combines the file-read and size-validation steps that every checker
/// command needs.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}
