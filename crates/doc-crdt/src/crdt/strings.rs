//! Escaping of raw text for the document's serialized form.

use std::fmt::Write;

/// Escape `raw` for embedding in the document's serialized string form.
///
/// Escapes are emitted with a doubled backslash (`\\"`, `\\n`, `\\u0000`
/// rather than the single-escape JSON form): the serialized document is
/// itself embedded in an already-escaped outer container, and consumers
/// depend on the double-escaped form.
///
/// Total over all inputs; iterates code points, so multi-byte characters are
/// never split.
pub fn escape_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str(r"\\\\"),
            '"' => out.push_str(r#"\\""#),
            '\u{0008}' => out.push_str(r"\\b"),
            '\u{000C}' => out.push_str(r"\\f"),
            '\n' => out.push_str(r"\\n"),
            '\r' => out.push_str(r"\\r"),
            '\t' => out.push_str(r"\\t"),
            c if (c as u32) < 0x20 => {
                // u32 formatting cannot fail into a String.
                let _ = write!(out, "\\\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
