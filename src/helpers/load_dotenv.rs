use std::path::PathBuf;

/// Load a local `.env`, if one exists, and return the path it came from.
///
/// Nothing is printed here: stdout carries command output and the logger is
/// not initialised yet.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}
