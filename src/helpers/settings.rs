use std::env;

use crate::constants::{defaults, envvars};

/// Whether `fmt` pretty-prints unless told otherwise.
///
/// Reads `DASHKIND_PRETTY`; anything other than a recognised boolean falls
/// back to the default.
pub fn pretty_by_default() -> bool {
    match env::var(envvars::DASHKIND_PRETTY) {
        Ok(value) => parse_flag(&value).unwrap_or_else(|| {
            log::warn!(
                "Ignoring {}={:?}; expected true or false",
                envvars::DASHKIND_PRETTY,
                value
            );
            defaults::PRETTY
        }),
        Err(_) => defaults::PRETTY,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_pretty_by_default_from_env() {
        temp_env::with_var(envvars::DASHKIND_PRETTY, Some("false"), || {
            assert!(!pretty_by_default());
        });
        temp_env::with_var(envvars::DASHKIND_PRETTY, Some("garbage"), || {
            assert!(pretty_by_default());
        });
        temp_env::with_var_unset(envvars::DASHKIND_PRETTY, || {
            assert!(pretty_by_default());
        });
    }
}
