//! Error types for RESP decoding.

use thiserror::Error;

/// Errors that can occur while decoding a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer ended before the current frame was complete. Callers that
    /// read from a stream treat this as "need more bytes", not as a fault.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The leading type byte is none of `+ - : $ *`.
    #[error("unknown reply type marker: {0:?}")]
    InvalidTypeMarker(char),

    /// A length field or integer reply contained a non-digit byte.
    #[error("invalid integer: {0:?}")]
    InvalidInteger(String),

    /// Framing violation, e.g. a CR without a following LF or a missing
    /// terminator after a bulk payload.
    #[error("invalid frame: {0}")]
    InvalidFormat(String),
}
