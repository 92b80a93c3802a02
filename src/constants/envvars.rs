pub const LOG_LEVEL: &str = "LOG_LEVEL";

pub const DASHKIND_PRETTY: &str = "DASHKIND_PRETTY";
