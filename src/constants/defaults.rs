pub const LOG_LEVEL: &str = "info";
pub const PRETTY: bool = true;

// Path argument that reads the document from stdin
pub const STDIN_PATH: &str = "-";
