//! TypeScript naming conventions.

use dtogen_codegen::NamingConvention;

fn escape_ts_reserved(name: &str) -> String {
    format!("_{name}")
}

/// TypeScript naming conventions.
///
/// Used for API client function and parameter names. Object type keys
/// may be reserved words, so property names do not go through it.
pub const TS_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        // Bound by every generated client function
        "axios",
        "body",
        "query",
        "response",
    ],
    escape_reserved: escape_ts_reserved,
};

/// Whether `name` can be used as an unquoted property key.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Quote a key in single quotes when it is not a plain identifier.
pub(crate) fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "\\'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_naming() {
        assert_eq!(TS_NAMING.safe_name("delete"), "_delete");
        assert_eq!(TS_NAMING.safe_name("body"), "_body");
        assert_eq!(TS_NAMING.safe_name("userId"), "userId");
    }

    #[test]
    fn test_property_key() {
        assert_eq!(property_key("id"), "id");
        assert_eq!(property_key("$ref"), "$ref");
        assert_eq!(property_key("@id"), "'@id'");
        assert_eq!(property_key("hydra:member"), "'hydra:member'");
        assert_eq!(property_key("1st"), "'1st'");
    }
}
