//! # carmine - a RESP request/response client
//!
//! A client for RESP servers over a single TCP connection: commands are
//! encoded as arrays of bulk strings, sent through a fixed-capacity write
//! buffer, and replies are decoded into [`Reply`] trees by
//! [`carmine-resp`](carmine_resp).
//!
//! One connection, one in-flight command at a time; the only resilience
//! behavior is a transparent reconnect when the per-command health check
//! finds the socket dead. No pooling, no TLS, no retries.
//!
//! ## Example
//!
//! ```no_run
//! use carmine::{Command, Connection};
//!
//! # async fn run() -> Result<(), carmine::Error> {
//! let conn = Connection::new();
//! let reply = conn.exec(Command::new("SET").arg("foo").arg("bar")).await?;
//! assert_eq!(reply.as_str(), Some("OK"));
//!
//! let reply = conn.exec_line("get foo").await?;
//! assert_eq!(reply.as_str(), Some("bar"));
//! conn.close().await;
//! # Ok(())
//! # }
//! ```

pub mod commands;
mod config;
mod connection;
mod error;
mod transport;

pub use carmine_resp::Command;
pub use carmine_resp::ParseError;
pub use carmine_resp::Reply;
pub use carmine_resp::ReplyData;
pub use config::ClientConfig;
pub use config::DEFAULT_ADDR;
pub use connection::Connection;
pub use error::Error;
