//! # carmine-resp - RESP codec
//!
//! Reply decoder and command encoder for the Redis Serialization Protocol
//! (RESP2), client side: commands go out as arrays of bulk strings, replies
//! come back as any of the five reply types.
//!
//! The decoder works over an explicit [`Cursor`] so nested array parsing
//! never shares hidden buffer state, and every decoded [`Reply`] keeps the
//! exact raw byte span it was parsed from.
//!
//! ## Example
//!
//! ```rust
//! use carmine_resp::{Command, Cursor, parse};
//!
//! let frame = Command::new("GET").arg("key").encode();
//! assert_eq!(&frame[..], b"*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n");
//!
//! let mut cursor = Cursor::new(&b"+OK\r\n"[..]);
//! let reply = parse(&mut cursor).unwrap();
//! assert_eq!(reply.as_str(), Some("OK"));
//! ```

mod encoder;
mod error;
mod parser;
mod types;
mod utils;

pub use encoder::Command;
pub use error::ParseError;
pub use parser::Cursor;
pub use parser::parse;
pub use parser::parse_all;
pub use types::Reply;
pub use types::ReplyData;
