use std::path::PathBuf;

pub struct ValidateArgs {
    pub files: Vec<PathBuf>,
}

pub struct FmtArgs {
    pub file: PathBuf,
    pub compact: bool,
}

pub struct RoundtripArgs {
    pub file: PathBuf,
}
