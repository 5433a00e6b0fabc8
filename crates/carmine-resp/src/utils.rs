//! Constants and low-level helpers shared by the encoder and the decoder.

use crate::error::ParseError;

/// CRLF line terminator.
pub const CRLF: &[u8] = b"\r\n";

/// Reply type markers.
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Find the end of a terminator-delimited line.
///
/// Returns the offset of the CR that, together with the LF after it, closes
/// the line. The terminator must be the literal CR-then-LF pair: a CR at the
/// end of the buffer means the frame is still incomplete, and a CR followed
/// by anything other than LF is a framing error. A bare LF never terminates
/// a line.
#[inline]
pub fn find_line_end(buf: &[u8]) -> Result<usize, ParseError> {
    let cr = memchr::memchr(b'\r', buf).ok_or(ParseError::UnexpectedEof)?;
    match buf.get(cr + 1) {
        None => Err(ParseError::UnexpectedEof),
        Some(&b'\n') => Ok(cr),
        Some(_) => Err(ParseError::InvalidFormat(
            "carriage return not followed by line feed".to_string(),
        )),
    }
}

/// Parse a signed decimal from a line.
///
/// Digits are accumulated left to right with wrapping arithmetic; a single
/// leading `-` flips the sign at the end. Any other byte is rejected.
#[inline]
pub fn parse_decimal(line: &[u8]) -> Result<i64, ParseError> {
    let (digits, negative) = match line.first() {
        Some(b'-') => (&line[1..], true),
        _ => (line, false),
    };
    if digits.is_empty() {
        return Err(ParseError::InvalidInteger(
            String::from_utf8_lossy(line).into_owned(),
        ));
    }
    let mut value: i64 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return Err(ParseError::InvalidInteger(
                String::from_utf8_lossy(line).into_owned(),
            ));
        }
        value = value.wrapping_mul(10).wrapping_add(i64::from(b - b'0'));
    }
    Ok(if negative { value.wrapping_neg() } else { value })
}

/// Render raw frame bytes with CR and LF escaped, for diagnostics.
pub fn escape_crlf(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len());
    for &b in raw {
        match b {
            b'\r' => out.push_str("\\r"),
            b'\n' => out.push_str("\\n"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out
}
