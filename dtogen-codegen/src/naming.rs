//! Naming conventions for target languages.

/// Reserved words of a target language and how to escape them.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g. "delete" -> "delete_")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// The name, escaped if it is a reserved word.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }
}
