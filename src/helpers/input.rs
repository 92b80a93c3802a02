use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::constants::defaults;

/// Read a whole document from a file, or from stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new(defaults::STDIN_PATH) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read document from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Collect the remaining free arguments as paths; at least one is required.
///
/// Anything that looks like a flag is rejected, except `-` for stdin.
pub fn remaining_paths(args: pico_args::Arguments) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for arg in args.finish() {
        let text = arg.to_string_lossy();
        if text.starts_with('-') && text != defaults::STDIN_PATH {
            return Err(anyhow!("Unknown flag '{}'", text));
        }
        paths.push(PathBuf::from(arg));
    }
    if paths.is_empty() {
        return Err(anyhow!("Expected at least one file argument"));
    }
    Ok(paths)
}

/// Fail on any argument the subcommand did not consume.
pub fn finish_args(args: pico_args::Arguments) -> Result<()> {
    let leftover: Vec<String> = args
        .finish()
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if leftover.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Unexpected argument(s): {}", leftover.join(" ")))
    }
}
