//! Duplex stream adapter between the TLS connection and the WebSocket
//! runtime.
//!
//! [`Duplex`] carries no protocol knowledge: reads and non-empty writes
//! delegate straight to the wrapped stream in submission order. The two
//! deliberate differences from a plain passthrough are the spec of the
//! adapter itself:
//!
//! - an empty write resolves immediately without touching the transport, so
//!   a close/empty signal never puts spurious bytes on the wire;
//! - `poll_shutdown` is a no-op — the TLS session and socket are released
//!   when the stream is dropped, not half-closed mid-handshake.
//!
//! End-of-stream is never synthesized here; it is observed only when the
//! wrapped stream itself reports exhaustion (a zero-byte read at TLS
//! closure).

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

/// Wraps a byte stream in the duplex read-chunk / write-chunk shape the
/// WebSocket runtime drives.
///
/// Owned by exactly one logical WebSocket connection for its lifetime.
#[derive(Debug)]
pub struct Duplex<S> {
    inner: S,
}

impl<S> Duplex<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Shared reference to the wrapped stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutable reference to the wrapped stream.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap, returning the underlying stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: AsyncRead + Unpin> AsyncRead for Duplex<S> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_read(cx, buf)
    }
}

impl<S: AsyncWrite + Unpin> AsyncWrite for Duplex<S> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        if buf.is_empty() {
            return Poll::Ready(Ok(0));
        }
        Pin::new(&mut self.get_mut().inner).poll_write(cx, buf)
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_flush(cx)
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        // Close signal is a no-op on the wire; dropping the stream releases
        // the TLS session and socket.
        Poll::Ready(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[tokio::test]
    async fn test_read_write_passthrough() {
        let (client, mut server) = tokio::io::duplex(256);
        let mut duplex = Duplex::new(client);

        duplex.write_all(b"ping").await.unwrap();
        duplex.flush().await.unwrap();
        let mut buf = [0u8; 4];
        server.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"ping");

        server.write_all(b"pong").await.unwrap();
        let mut buf = [0u8; 4];
        duplex.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"pong");
    }

    #[tokio::test]
    async fn test_empty_write_is_wire_noop() {
        let (client, mut server) = tokio::io::duplex(256);
        let mut duplex = Duplex::new(client);

        let written = duplex.write(&[]).await.unwrap();
        assert_eq!(written, 0);

        // The peer must observe nothing until real bytes follow.
        duplex.write_all(b"x").await.unwrap();
        let mut buf = [0u8; 1];
        server.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"x");
    }

    #[tokio::test]
    async fn test_shutdown_leaves_stream_usable() {
        let (client, mut server) = tokio::io::duplex(256);
        let mut duplex = Duplex::new(client);

        duplex.shutdown().await.unwrap();

        // Shutdown must not have half-closed the transport.
        duplex.write_all(b"still open").await.unwrap();
        let mut buf = [0u8; 10];
        server.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"still open");
    }

    #[tokio::test]
    async fn test_eof_comes_only_from_inner_stream() {
        let (client, server) = tokio::io::duplex(256);
        let mut duplex = Duplex::new(client);

        drop(server);
        let mut buf = [0u8; 1];
        let n = duplex.read(&mut buf).await.unwrap();
        assert_eq!(n, 0);
    }
}
