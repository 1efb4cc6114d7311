//! Escaping of user text embedded in script string literals.
//!
//! Only the characters that can end or reinterpret a literal are escaped.
//! Everything else (unicode, `<`, quotes of the other kinds) passes through.

/// Character delimiting a string literal in generated script text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Template literal. Newlines are allowed inside it.
    Backtick,
    DoubleQuote,
    SingleQuote,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Backtick => '`',
            Delimiter::DoubleQuote => '"',
            Delimiter::SingleQuote => '\'',
        }
    }
}

/// Escape `text` so it can sit between two `delimiter` characters.
///
/// - the delimiter and the backslash are prefixed with a backslash
/// - in template literals, `${` becomes `\${` so no substitution opens
/// - CR becomes `\r` (template literals would normalise it to LF)
/// - in quoted literals, LF becomes `\n`
pub fn escape_literal(text: &str, delimiter: Delimiter) -> String {
    let quote = delimiter.as_char();
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            '$' if delimiter == Delimiter::Backtick && chars.peek() == Some(&'{') => out.push_str("\\$"),
            '\n' if delimiter != Delimiter::Backtick => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }

    out
}

/// Escape `text` and wrap it in `delimiter`.
pub fn quote_literal(text: &str, delimiter: Delimiter) -> String {
    let quote = delimiter.as_char();
    format!("{quote}{}{quote}", escape_literal(text, delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backtick_is_escaped() {
        assert_eq!(escape_literal("a`b`c", Delimiter::Backtick), "a\\`b\\`c");
    }

    #[test]
    fn other_quotes_pass_through() {
        assert_eq!(escape_literal(r#"O'Reilly "Test""#, Delimiter::Backtick), r#"O'Reilly "Test""#);
        assert_eq!(escape_literal("it's", Delimiter::DoubleQuote), "it's");
        assert_eq!(escape_literal("say \"hi\"", Delimiter::SingleQuote), "say \"hi\"");
    }

    #[test]
    fn delimiter_escaped_for_each_kind() {
        assert_eq!(escape_literal("\"x\"", Delimiter::DoubleQuote), "\\\"x\\\"");
        assert_eq!(escape_literal("'x'", Delimiter::SingleQuote), "\\'x\\'");
    }

    #[test]
    fn backslash_cannot_unescape_delimiter() {
        // A literal backslash before the delimiter must not swallow our escape.
        assert_eq!(escape_literal("\\`", Delimiter::Backtick), "\\\\\\`");
        assert_eq!(escape_literal("ends with \\", Delimiter::Backtick), "ends with \\\\");
    }

    #[test]
    fn substitution_opener_only_in_templates() {
        assert_eq!(escape_literal("${alert(1)}", Delimiter::Backtick), "\\${alert(1)}");
        assert_eq!(escape_literal("cost: $5", Delimiter::Backtick), "cost: $5");
        assert_eq!(escape_literal("${x}", Delimiter::DoubleQuote), "${x}");
    }

    #[test]
    fn newlines_depend_on_delimiter() {
        assert_eq!(escape_literal("a\nb", Delimiter::Backtick), "a\nb");
        assert_eq!(escape_literal("a\r\nb", Delimiter::Backtick), "a\\r\nb");
        assert_eq!(escape_literal("a\r\nb", Delimiter::SingleQuote), "a\\r\\nb");
    }

    #[test]
    fn empty_and_unicode() {
        assert_eq!(escape_literal("", Delimiter::Backtick), "");
        assert_eq!(escape_literal("héllo 🦉", Delimiter::Backtick), "héllo 🦉");
    }

    #[test]
    fn quote_wraps() {
        assert_eq!(quote_literal("a`b", Delimiter::Backtick), "`a\\`b`");
        assert_eq!(quote_literal("", Delimiter::SingleQuote), "''");
    }
}
