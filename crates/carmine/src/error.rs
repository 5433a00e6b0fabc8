//! Client error taxonomy.

use std::io;

use carmine_resp::ParseError;
use thiserror::Error;

/// Everything a command can fail with.
///
/// A server-returned `-` reply is NOT an error: it decodes into
/// [`ReplyData::Error`](carmine_resp::ReplyData::Error) and it is the
/// caller's job to inspect the variant.
#[derive(Error, Debug)]
pub enum Error {
    /// Creating or connecting the socket failed.
    #[error("connect to {addr} failed")]
    Connection {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// A write or read on an established socket failed.
    #[error("socket i/o failed")]
    Io(#[source] io::Error),

    /// The server sent bytes the decoder does not recognize.
    #[error("protocol error")]
    Protocol(#[from] ParseError),

    /// A command sentence held no tokens.
    #[error("empty command")]
    EmptyCommand,
}
