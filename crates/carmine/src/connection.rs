//! The public client: one logical connection, strict request/reply pairing.

use carmine_resp::Command;
use carmine_resp::Reply;
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::transport::Transport;

/// A client connection to one server.
///
/// The socket and its buffers live behind a mutex, so a single `Connection`
/// can be shared across tasks with coarse-grained mutual exclusion: one
/// in-flight command at a time, the next caller waits for the previous
/// reply to be fully read. There is no timeout at this layer; a peer that
/// never answers blocks the caller.
///
/// The underlying socket is created on first use (or by [`connect`]) and is
/// transparently recreated when the per-command health check finds it
/// absent or dead. That check runs once per command and is the only
/// resilience behavior; transient write/read errors are not retried.
///
/// [`connect`]: Connection::connect
pub struct Connection {
    config: ClientConfig,
    transport: Mutex<Option<Transport>>,
}

impl Connection {
    /// A connection to the default address, dialed lazily.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// A connection to an explicit host and port, dialed lazily.
    pub fn open(host: &str, port: u16) -> Self {
        Self::with_config(ClientConfig::host_port(host, port))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            transport: Mutex::new(None),
        }
    }

    /// Dial eagerly instead of waiting for the first command.
    pub async fn connect(&self) -> Result<(), Error> {
        let mut slot = self.transport.lock().await;
        if slot.is_none() {
            *slot = Some(Transport::connect(&self.config).await?);
        }
        Ok(())
    }

    /// Execute a command and return its reply.
    ///
    /// A server error reply comes back as a normal
    /// [`ReplyData::Error`](carmine_resp::ReplyData::Error) value.
    pub async fn exec(&self, cmd: Command) -> Result<Reply, Error> {
        let mut slot = self.transport.lock().await;
        let mut transport = self.checkout(&mut slot).await?;
        transport.send(&cmd).await?;
        let reply = transport.read_reply().await?;
        *slot = Some(transport);
        Ok(reply)
    }

    /// Execute a command and drain every reply available once the first one
    /// arrives, e.g. a batch of consecutive published messages.
    pub async fn exec_many(&self, cmd: Command) -> Result<Vec<Reply>, Error> {
        let mut slot = self.transport.lock().await;
        let mut transport = self.checkout(&mut slot).await?;
        transport.send(&cmd).await?;
        let replies = transport.read_replies().await?;
        *slot = Some(transport);
        Ok(replies)
    }

    /// Execute a space-delimited command sentence such as `"set foo bar"`.
    ///
    /// Splits on spaces and drops empty tokens; there is no quoting, so an
    /// argument containing a space cannot be expressed this way.
    pub async fn exec_line(&self, sentence: &str) -> Result<Reply, Error> {
        let cmd = Command::from_sentence(sentence).ok_or(Error::EmptyCommand)?;
        self.exec(cmd).await
    }

    /// Sentence form of [`exec_many`](Connection::exec_many).
    pub async fn exec_line_many(&self, sentence: &str) -> Result<Vec<Reply>, Error> {
        let cmd = Command::from_sentence(sentence).ok_or(Error::EmptyCommand)?;
        self.exec_many(cmd).await
    }

    /// Fire-and-forget: execute a command and discard its reply.
    ///
    /// The reply is still read off the socket so the request/reply pairing
    /// stays in lockstep for the next command.
    pub async fn send(&self, cmd: Command) -> Result<(), Error> {
        self.exec(cmd).await.map(|_| ())
    }

    /// Close the connection, resetting the socket immediately.
    ///
    /// Safe to call when already closed; the connection is recreated if a
    /// later command arrives.
    pub async fn close(&self) {
        let mut slot = self.transport.lock().await;
        if slot.take().is_some() {
            debug!(addr = %self.config.addr, "closed");
        }
    }

    /// Health check, performed before every command.
    ///
    /// Takes the transport out of its slot, replacing an absent or stale
    /// socket with a fresh connect, at most once. The caller puts the
    /// transport back after a successful round trip; on failure it stays
    /// out, so the next command re-dials instead of reusing a broken
    /// socket.
    async fn checkout(&self, slot: &mut Option<Transport>) -> Result<Transport, Error> {
        match slot.take() {
            Some(live) => {
                if live.is_stale().await {
                    debug!(addr = %self.config.addr, "stale socket, reconnecting");
                    Transport::connect(&self.config).await
                } else {
                    Ok(live)
                }
            }
            None => Transport::connect(&self.config).await,
        }
    }
}

impl Default for Connection {
    fn default() -> Self {
        Self::new()
    }
}
