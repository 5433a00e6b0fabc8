//! Reply data model.

use std::fmt;

use bytes::Bytes;

use crate::utils::escape_crlf;

/// The payload of a decoded reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyData {
    /// Simple string: `+OK\r\n`
    SimpleString(Bytes),

    /// Error: `-ERR unknown command 'hello'\r\n`. The text is opaque; the
    /// leading error-code token is part of the payload.
    Error(Bytes),

    /// Integer: `:1000\r\n`
    Integer(i64),

    /// Bulk string: `$6\r\nfoobar\r\n`. `None` is the null bulk string
    /// (`$-1\r\n`), distinct from an empty payload.
    BulkString(Option<Bytes>),

    /// Array: `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`, possibly empty or nested.
    Array(Vec<Reply>),
}

/// One decoded reply plus the exact wire bytes it was parsed from.
///
/// `raw` is a cheap slice of the capture buffer the decoder ran over; it is
/// fully owned data, independent of any connection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub data: ReplyData,
    pub raw: Bytes,
}

impl Reply {
    /// Check if the reply is a server-side error.
    pub fn is_error(&self) -> bool {
        matches!(self.data, ReplyData::Error(_))
    }

    /// Check if the reply is a null bulk string.
    pub fn is_nil(&self) -> bool {
        matches!(self.data, ReplyData::BulkString(None))
    }

    /// Try to view the payload as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Try to view the payload as bytes.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match &self.data {
            ReplyData::SimpleString(b) | ReplyData::Error(b) => Some(b),
            ReplyData::BulkString(Some(b)) => Some(b),
            _ => None,
        }
    }

    /// Try to read the reply as an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self.data {
            ReplyData::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Try to view the reply as an array of replies.
    pub fn as_array(&self) -> Option<&[Reply]> {
        match &self.data {
            ReplyData::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", escape_crlf(&self.raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(data: ReplyData, raw: &'static [u8]) -> Reply {
        Reply {
            data,
            raw: Bytes::from_static(raw),
        }
    }

    #[test]
    fn test_is_error() {
        let err = reply(ReplyData::Error(Bytes::from_static(b"ERR boom")), b"-ERR boom\r\n");
        assert!(err.is_error());

        let ok = reply(ReplyData::SimpleString(Bytes::from_static(b"OK")), b"+OK\r\n");
        assert!(!ok.is_error());
    }

    #[test]
    fn test_nil_is_not_empty() {
        let nil = reply(ReplyData::BulkString(None), b"$-1\r\n");
        let empty = reply(ReplyData::BulkString(Some(Bytes::new())), b"$0\r\n\r\n");
        assert!(nil.is_nil());
        assert!(!empty.is_nil());
        assert_eq!(nil.as_bytes(), None);
        assert_eq!(empty.as_str(), Some(""));
    }

    #[test]
    fn test_as_str() {
        let val = reply(
            ReplyData::BulkString(Some(Bytes::from_static(b"hello"))),
            b"$5\r\nhello\r\n",
        );
        assert_eq!(val.as_str(), Some("hello"));

        let num = reply(ReplyData::Integer(42), b":42\r\n");
        assert_eq!(num.as_str(), None);
        assert_eq!(num.as_integer(), Some(42));
    }

    #[test]
    fn test_display_escapes_terminators() {
        let ok = reply(ReplyData::SimpleString(Bytes::from_static(b"OK")), b"+OK\r\n");
        assert_eq!(ok.to_string(), "+OK\\r\\n");
    }
}
