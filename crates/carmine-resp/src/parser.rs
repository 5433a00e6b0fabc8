//! Reply decoder: a tag-dispatched recursive parser over an explicit cursor.

use bytes::Bytes;

use crate::error::ParseError;
use crate::types::Reply;
use crate::types::ReplyData;
use crate::utils::*;

/// An owned view over a captured read buffer plus the decode position.
///
/// Threading the cursor through every sub-parse keeps nested array decoding
/// free of shared mutable position state, and lets each reply record the
/// exact byte range it consumed as a slice of the same buffer.
pub struct Cursor {
    buf: Bytes,
    pos: usize,
}

impl Cursor {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self {
            buf: buf.into(),
            pos: 0,
        }
    }

    /// Current decode offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn rest(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    fn take_tag(&mut self) -> Result<u8, ParseError> {
        let tag = *self.rest().first().ok_or(ParseError::UnexpectedEof)?;
        self.pos += 1;
        Ok(tag)
    }

    /// Consume one terminator-delimited line, returning it without the CRLF.
    fn take_line(&mut self) -> Result<Bytes, ParseError> {
        let end = find_line_end(self.rest())?;
        let line = self.buf.slice(self.pos..self.pos + end);
        self.pos += end + CRLF.len();
        Ok(line)
    }

    fn take_exact(&mut self, n: usize) -> Result<Bytes, ParseError> {
        if self.remaining() < n {
            return Err(ParseError::UnexpectedEof);
        }
        let data = self.buf.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(data)
    }

    fn expect_crlf(&mut self) -> Result<(), ParseError> {
        if self.remaining() < CRLF.len() {
            return Err(ParseError::UnexpectedEof);
        }
        if &self.rest()[..CRLF.len()] != CRLF {
            return Err(ParseError::InvalidFormat(
                "missing CRLF after bulk payload".to_string(),
            ));
        }
        self.pos += CRLF.len();
        Ok(())
    }
}

/// Decode exactly one reply, advancing the cursor past it.
///
/// Dispatches on the single leading type byte; no other decoder state
/// persists across cases. Bytes after the reply are left untouched.
pub fn parse(cursor: &mut Cursor) -> Result<Reply, ParseError> {
    let start = cursor.pos;
    let data = match cursor.take_tag()? {
        SIMPLE_STRING => ReplyData::SimpleString(cursor.take_line()?),
        ERROR => ReplyData::Error(cursor.take_line()?),
        INTEGER => ReplyData::Integer(parse_decimal(&cursor.take_line()?)?),
        BULK_STRING => parse_bulk_string(cursor)?,
        ARRAY => parse_array(cursor)?,
        tag => return Err(ParseError::InvalidTypeMarker(tag as char)),
    };
    let raw = cursor.buf.slice(start..cursor.pos);
    Ok(Reply { data, raw })
}

/// Decode replies back to back until the cursor is exhausted.
///
/// Supports draining several pushed or pipelined replies captured in one
/// read cycle; replies come back in arrival order.
pub fn parse_all(cursor: &mut Cursor) -> Result<Vec<Reply>, ParseError> {
    let mut replies = Vec::new();
    while !cursor.is_exhausted() {
        replies.push(parse(cursor)?);
    }
    Ok(replies)
}

/// Bulk string body: `$6\r\nfoobar\r\n`, or `$-1\r\n` for the null bulk
/// string (no payload, no terminator).
fn parse_bulk_string(cursor: &mut Cursor) -> Result<ReplyData, ParseError> {
    let length = parse_decimal(&cursor.take_line()?)?;
    if length < 0 {
        return Ok(ReplyData::BulkString(None));
    }
    let payload = cursor.take_exact(length as usize)?;
    cursor.expect_crlf()?;
    Ok(ReplyData::BulkString(Some(payload)))
}

/// Array body: `*2\r\n...` with the declared number of recursively decoded
/// elements; a count of zero or less is an empty sequence.
fn parse_array(cursor: &mut Cursor) -> Result<ReplyData, ParseError> {
    let count = parse_decimal(&cursor.take_line()?)?;
    if count <= 0 {
        return Ok(ReplyData::Array(Vec::new()));
    }
    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        items.push(parse(cursor)?);
    }
    Ok(ReplyData::Array(items))
}
