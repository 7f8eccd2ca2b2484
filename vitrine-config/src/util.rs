/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn parse_bool_var(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|raw| parse_bool(&raw))
}

/// Read a non-blank environment variable.
pub fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::parse_bool;

    #[test]
    fn parses_env_style_booleans() {
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("nope"), None);
    }
}
