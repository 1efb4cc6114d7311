//! Helpers shared by the integration tests.

#![allow(dead_code)]

use bookmarklet::JAVASCRIPT_SCHEME;

/// Names and contents that try to break out of their literal.
pub const NASTY: &[&str] = &[
    "",
    "plain text",
    "a`b",
    "``",
    "\\",
    "ends with \\",
    "\\`",
    "C:\\dir\\new",
    "${alert(1)}",
    "$${x} and $ {y}",
    "line1\nline2\r\nline3",
    "tab\tseparated",
    "`); alert(document.cookie); (`",
    "%60);alert(1);(%60",
    "100% sure, 50%25 off",
    "O'Reilly \"Test\"",
    "héllo 🦉",
    "/* not a comment */ // nor this",
    "})(`x`, `y`);",
];

/// What a browser executes for a `javascript:` href: the payload with tab,
/// LF and CR removed, then percent-decoded.
pub fn browser_payload(href: &str) -> String {
    let payload = href.strip_prefix(JAVASCRIPT_SCHEME).expect("javascript: href");
    let bytes: Vec<u8> = payload.bytes().filter(|b| !matches!(b, b'\t' | b'\n' | b'\r')).collect();

    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let hex = bytes
            .get(i + 1..i + 3)
            .and_then(|h| std::str::from_utf8(h).ok())
            .and_then(|h| u8::from_str_radix(h, 16).ok());
        match (bytes[i], hex) {
            (b'%', Some(byte)) => {
                decoded.push(byte);
                i += 3;
            }
            (b, _) => {
                decoded.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(decoded).expect("payload decodes to UTF-8")
}
