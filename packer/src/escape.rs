//! Byte escaping. Turns arbitrary binary data into a Go interpreted string
//! literal, byte by byte.

use std::fmt::{self, Write};

/// Escaped representation of a single input byte.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EscapedByte {
    /// Printable ascii (32..=126, except `"` and `\`) or horizontal tab,
    /// written as is.
    Literal(u8),
    /// `\n`
    Newline,
    /// `\\`
    Backslash,
    /// `\"`
    Quote,
    /// `\xHH`, any other byte.
    Hex(u8),
}
impl EscapedByte {
    /// Escapes single byte.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'\n' => EscapedByte::Newline,
            b'\\' => EscapedByte::Backslash,
            b'"' => EscapedByte::Quote,
            b'\t' | 32..=126 => EscapedByte::Literal(byte),
            _ => EscapedByte::Hex(byte),
        }
    }
}
impl fmt::Display for EscapedByte {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            EscapedByte::Literal(byte) => write!(f, "{}", char::from(*byte)),
            EscapedByte::Newline => f.write_str("\\n"),
            EscapedByte::Backslash => f.write_str("\\\\"),
            EscapedByte::Quote => f.write_str("\\\""),
            EscapedByte::Hex(byte) => write!(f, "\\x{byte:02x}"),
        }
    }
}

/// Escapes stream of bytes. Never fails, output does not include surrounding
/// quotes.
pub fn escape(bytes: impl IntoIterator<Item = u8>) -> impl Iterator<Item = EscapedByte> {
    bytes.into_iter().map(EscapedByte::from_byte)
}

/// Creates complete, double quoted Go string literal of `bytes`.
///
/// Decoding the literal (eg. by Go compiler) gives back exactly `bytes`.
///
/// # Examples
///
/// ```
/// # use statik_packer::escape::quote;
/// assert_eq!(quote(b"a\"b\n\x00\xff"), r#""a\"b\n\x00\xff""#);
/// assert_eq!(quote(b""), r#""""#);
/// ```
pub fn quote(bytes: &[u8]) -> String {
    // worst case is 4 output chars per byte
    let mut literal = String::with_capacity(bytes.len() * 4 + 2);

    literal.push('"');
    for escaped_byte in escape(bytes.iter().copied()) {
        match escaped_byte {
            EscapedByte::Literal(byte) => literal.push(char::from(byte)),
            // writing into String never fails
            escaped_byte => write!(literal, "{escaped_byte}").unwrap(),
        }
    }
    literal.push('"');

    literal
}
