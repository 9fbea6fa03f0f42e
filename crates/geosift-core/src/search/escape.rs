//! Query value escaping shared by every fragment builder.

/// Escape a literal value for embedding inside double quotes in the
/// backend query grammar: embedded `"` becomes `\"`.
///
/// Every builder goes through this one primitive so the escaping rules
/// cannot drift between fragment kinds.
pub fn escape_query_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// A value quoted for a containment clause.
pub(crate) fn quoted(value: &str) -> String {
    format!("\"{}\"", escape_query_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_pass_through() {
        assert_eq!(escape_query_value("GeoTIFF"), "GeoTIFF");
    }

    #[test]
    fn embedded_quotes_escape() {
        assert_eq!(escape_query_value(r#"a"b"#), r#"a\"b"#);
        assert_eq!(quoted(r#"a"b"#), r#""a\"b""#);
    }

    #[test]
    fn quoted_wraps() {
        assert_eq!(quoted("United States"), "\"United States\"");
    }
}
