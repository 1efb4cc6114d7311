//! Whitespace and comment compaction for script text.
//!
//! A single pass over the source that
//! - drops `// line` and `/* block */` comments
//! - copies string and template literals byte for byte
//! - collapses whitespace runs, keeping a space only between two word
//!   characters (or two `+`/`-`, or a digit and `.`) and a newline where a
//!   statement could end or after `return`, `throw`, `break`, `continue`
//!   and `yield`
//!
//! Regular expression literals are not recognised; a regex containing a quote
//! or a comment opener is misread. The bookmarklet template never uses one.

use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Template,
    BlockComment,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::String => "string literal",
            LiteralKind::Template => "template literal",
            LiteralKind::BlockComment => "block comment",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinifyError {
    #[error("unterminated {kind} starting at byte {offset}")]
    Unterminated { kind: LiteralKind, offset: usize },
}

/// Whitespace seen since the last emitted character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Gap {
    None,
    Space,
    Newline,
}

type Chars<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

/// Minify `source`. Deterministic; fails only on unterminated literals or
/// block comments.
pub fn minify(source: &str) -> Result<String, MinifyError> {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.char_indices().peekable();
    let mut gap = Gap::None;

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '"' | '\'' | '`' => {
                push_separator(&mut out, gap, ch);
                gap = Gap::None;
                copy_literal(&mut out, &mut chars, ch, offset)?;
            }
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                // The terminating newline is left for the whitespace arm.
                while chars.next_if(|&(_, c)| !is_line_terminator(c)).is_some() {}
                gap = gap.max(Gap::Space);
            }
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                let spans_lines = skip_block_comment(&mut chars, offset)?;
                gap = gap.max(if spans_lines { Gap::Newline } else { Gap::Space });
            }
            c if is_line_terminator(c) => gap = Gap::Newline,
            c if c.is_whitespace() => gap = gap.max(Gap::Space),
            c => {
                push_separator(&mut out, gap, c);
                gap = Gap::None;
                out.push(c);
            }
        }
    }

    debug!(input = source.len(), output = out.len(), "minified script");
    Ok(out)
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

fn may_end_statement(ch: char) -> bool {
    is_word_char(ch) || matches!(ch, ')' | ']' | '"' | '\'' | '`')
}

fn may_start_statement(ch: char) -> bool {
    is_word_char(ch) || matches!(ch, '"' | '\'' | '`' | '+' | '-')
}

/// Keywords after which a line break always ends the statement.
const RESTRICTED_KEYWORDS: &[&str] = &["return", "throw", "break", "continue", "yield"];

/// The run of word characters at the end of `out`.
fn trailing_word(out: &str) -> &str {
    let start = out
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_word_char(c))
        .last()
        .map_or(out.len(), |(i, _)| i);
    &out[start..]
}

fn newline_is_significant(out: &str, prev: char, next: char) -> bool {
    if RESTRICTED_KEYWORDS.contains(&trailing_word(out)) {
        return true;
    }
    let postfix = out.ends_with("++") || out.ends_with("--");
    (may_end_statement(prev) || postfix) && may_start_statement(next)
}

/// Emit whatever the collapsed whitespace must become before `next`.
fn push_separator(out: &mut String, gap: Gap, next: char) {
    if gap == Gap::None {
        return;
    }
    let Some(prev) = out.chars().next_back() else {
        return;
    };

    if gap == Gap::Newline && newline_is_significant(out, prev, next) {
        out.push('\n');
    } else if (is_word_char(prev) && is_word_char(next))
        || (prev.is_ascii_digit() && next == '.')
        || (prev == '+' && next == '+')
        || (prev == '-' && next == '-')
        || (prev == '/' && matches!(next, '/' | '*'))
    {
        out.push(' ');
    }
}

/// Copy a literal opened by `quote` (already consumed at `offset`).
fn copy_literal(out: &mut String, chars: &mut Chars<'_>, quote: char, offset: usize) -> Result<(), MinifyError> {
    let kind = if quote == '`' {
        LiteralKind::Template
    } else {
        LiteralKind::String
    };
    let unterminated = MinifyError::Unterminated { kind, offset };

    out.push(quote);
    loop {
        let Some((_, ch)) = chars.next() else {
            return Err(unterminated);
        };
        out.push(ch);
        match ch {
            '\\' => {
                let Some((_, escaped)) = chars.next() else {
                    return Err(unterminated);
                };
                out.push(escaped);
            }
            c if c == quote => return Ok(()),
            '\n' | '\r' if kind == LiteralKind::String => return Err(unterminated),
            _ => {}
        }
    }
}

/// Skip to the end of a block comment whose `/*` started at `offset`.
/// Returns whether the comment contained a line terminator.
fn skip_block_comment(chars: &mut Chars<'_>, offset: usize) -> Result<bool, MinifyError> {
    let mut spans_lines = false;
    while let Some((_, ch)) = chars.next() {
        if ch == '*' && chars.next_if(|&(_, c)| c == '/').is_some() {
            return Ok(spans_lines);
        }
        spans_lines |= is_line_terminator(ch);
    }
    Err(MinifyError::Unterminated {
        kind: LiteralKind::BlockComment,
        offset,
    })
}
