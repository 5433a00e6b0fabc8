//! Buffered socket I/O: one socket, one write buffer, one read capture.

use std::future::poll_fn;
use std::io;
use std::task::Poll;
use std::time::Duration;

use bytes::Bytes;
use bytes::BytesMut;
use carmine_resp::Command;
use carmine_resp::Cursor;
use carmine_resp::ParseError;
use carmine_resp::Reply;
use carmine_resp::parse;
use carmine_resp::parse_all;
use socket2::SockRef;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::io::ReadBuf;
use tokio::net::TcpStream;
use tracing::debug;
use tracing::trace;

use crate::config::ClientConfig;
use crate::error::Error;

pub(crate) struct Transport {
    stream: TcpStream,
    wbuf: BytesMut,
    write_capacity: usize,
    read_capacity: usize,
}

impl Transport {
    /// Dial the configured address and apply the socket options.
    pub(crate) async fn connect(config: &ClientConfig) -> Result<Self, Error> {
        let stream = TcpStream::connect(&config.addr)
            .await
            .and_then(|stream| {
                configure_socket(&stream)?;
                Ok(stream)
            })
            .map_err(|source| Error::Connection {
                addr: config.addr.clone(),
                source,
            })?;
        debug!(addr = %config.addr, "connected");
        Ok(Self {
            stream,
            wbuf: BytesMut::with_capacity(config.write_buffer),
            write_capacity: config.write_buffer,
            read_capacity: config.read_buffer,
        })
    }

    /// Non-blocking staleness probe.
    ///
    /// Peeks one byte without consuming it: end-of-stream or a socket error
    /// means the peer is gone; pending data or nothing-to-read-yet means the
    /// connection is live.
    pub(crate) async fn is_stale(&self) -> bool {
        let mut probe = [0u8; 1];
        let mut buf = ReadBuf::new(&mut probe);
        poll_fn(|cx| {
            Poll::Ready(match self.stream.poll_peek(cx, &mut buf) {
                Poll::Ready(Ok(0)) => true,
                Poll::Ready(Ok(_)) => false,
                Poll::Ready(Err(_)) => true,
                Poll::Pending => false,
            })
        })
        .await
    }

    /// Encode `cmd` and push the frame out through the write buffer.
    pub(crate) async fn send(&mut self, cmd: &Command) -> Result<(), Error> {
        self.wbuf.clear();
        let mut frame = BytesMut::new();
        cmd.encode_to(&mut frame);
        self.buffer_write(&frame).await?;
        self.flush().await
    }

    /// Stage bytes in the write buffer.
    ///
    /// Flushes pending bytes first whenever `src` would overflow the
    /// capacity; a write at least as large as the whole buffer skips staging
    /// and goes to the socket directly, after the flush, preserving order.
    async fn buffer_write(&mut self, src: &[u8]) -> Result<(), Error> {
        if src.len() >= self.write_capacity {
            self.flush().await?;
            return self.stream.write_all(src).await.map_err(Error::Io);
        }
        if src.len() > self.write_capacity - self.wbuf.len() {
            self.flush().await?;
        }
        self.wbuf.extend_from_slice(src);
        Ok(())
    }

    /// Write pending bytes to the socket and reset the buffer.
    async fn flush(&mut self) -> Result<(), Error> {
        if !self.wbuf.is_empty() {
            trace!(len = self.wbuf.len(), "flush");
            self.stream.write_all(&self.wbuf).await.map_err(Error::Io)?;
            self.wbuf.clear();
        }
        Ok(())
    }

    /// Read one reply.
    pub(crate) async fn read_reply(&mut self) -> Result<Reply, Error> {
        self.read_cycle(|cursor| parse(cursor)).await
    }

    /// Read every reply in the capture, in arrival order.
    ///
    /// Picks up several back-to-back replies delivered in one cycle, e.g.
    /// consecutive published messages.
    pub(crate) async fn read_replies(&mut self) -> Result<Vec<Reply>, Error> {
        self.read_cycle(|cursor| parse_all(cursor)).await
    }

    /// One logical read: block until at least one byte is available, drain
    /// what the socket has, then decode from the start of a fresh capture.
    /// A truncated trailing frame (short or split TCP segments) keeps the
    /// cycle reading; any other decode failure is a protocol error.
    async fn read_cycle<T>(
        &mut self,
        decode: impl Fn(&mut Cursor) -> Result<T, ParseError>,
    ) -> Result<T, Error> {
        let mut pending = BytesMut::with_capacity(self.read_capacity);
        loop {
            let n = self.stream.read_buf(&mut pending).await.map_err(Error::Io)?;
            if n == 0 {
                return Err(Error::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed by peer",
                )));
            }
            trace!(len = pending.len(), "read capture");

            let mut cursor = Cursor::new(Bytes::copy_from_slice(&pending));
            match decode(&mut cursor) {
                Ok(decoded) => return Ok(decoded),
                Err(ParseError::UnexpectedEof) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Socket options: address reuse, keep-alive, no-delay, abortive close.
fn configure_socket(stream: &TcpStream) -> io::Result<()> {
    stream.set_nodelay(true)?;
    stream.set_linger(Some(Duration::ZERO))?;
    let sock = SockRef::from(stream);
    sock.set_keepalive(true)?;
    sock.set_reuse_address(true)?;
    Ok(())
}
