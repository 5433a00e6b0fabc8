//! Command frame encoder.

use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::utils::ARRAY;
use crate::utils::BULK_STRING;
use crate::utils::CRLF;

/// One request frame: a command name plus its arguments.
///
/// On the wire a command is an array of bulk strings, the name first:
/// `*<n+1>\r\n$<len>\r\n<name>\r\n` followed by one `$<len>\r\n<arg>\r\n`
/// per argument. Arguments are raw bytes; `&str` arguments contribute their
/// UTF-8 encoding. No length limits are enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    parts: Vec<Bytes>,
}

impl Command {
    pub fn new(name: impl AsRef<[u8]>) -> Self {
        Self {
            parts: vec![Bytes::copy_from_slice(name.as_ref())],
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl AsRef<[u8]>) -> Self {
        self.parts.push(Bytes::copy_from_slice(arg.as_ref()));
        self
    }

    /// Append every argument from an iterator.
    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[u8]>,
    {
        for arg in args {
            self.parts.push(Bytes::copy_from_slice(arg.as_ref()));
        }
        self
    }

    /// Build a command from a space-delimited sentence such as
    /// `"set foo bar"`.
    ///
    /// Splits on spaces and drops empty tokens, so repeated spaces collapse.
    /// There is no quoting: an argument containing a space cannot be
    /// expressed this way. Returns `None` when the sentence holds no tokens.
    pub fn from_sentence(sentence: &str) -> Option<Self> {
        let mut tokens = sentence.split(' ').filter(|t| !t.is_empty());
        let name = tokens.next()?;
        Some(Command::new(name).args(tokens))
    }

    /// The command name.
    pub fn name(&self) -> &Bytes {
        &self.parts[0]
    }

    /// Encode the frame into `buf`.
    pub fn encode_to(&self, buf: &mut BytesMut) {
        buf.put_u8(ARRAY);
        buf.put_slice(self.parts.len().to_string().as_bytes());
        buf.put_slice(CRLF);
        for part in &self.parts {
            buf.put_u8(BULK_STRING);
            buf.put_slice(part.len().to_string().as_bytes());
            buf.put_slice(CRLF);
            buf.put_slice(part);
            buf.put_slice(CRLF);
        }
    }

    /// Encode the frame into a fresh buffer.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::new();
        self.encode_to(&mut buf);
        buf.freeze()
    }
}
