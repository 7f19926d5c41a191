//! Error type for secure client establishment.
//!
//! The adapter performs no recovery and no translation: every failure is the
//! originating library's error, wrapped only so the caller gets a single
//! result type. `source()` always points at the library error.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Failure raised while establishing a secure WebSocket connection.
///
/// Each variant is transparent over the library that detected the failure:
///
/// - [`WssError::Io`] — name resolution or TCP connect failure.
/// - [`WssError::Tls`] — TLS handshake failure, including certificate
///   validation failure.
/// - [`WssError::WebSocket`] — WebSocket opening-handshake or protocol
///   failure reported by tungstenite.
/// - [`WssError::Request`] — the handshake request could not be built from
///   the supplied host/port/path.
#[derive(Debug, Error)]
pub enum WssError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Tls(#[from] native_tls::Error),
    #[error(transparent)]
    WebSocket(#[from] tungstenite::Error),
    #[error("invalid handshake request: {0}")]
    Request(#[from] http::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = WssError::from(io);
        assert_eq!(err.to_string(), "refused");
    }

    #[test]
    fn test_websocket_error_is_transparent() {
        let err = WssError::from(tungstenite::Error::ConnectionClosed);
        assert_eq!(err.to_string(), tungstenite::Error::ConnectionClosed.to_string());
    }
}
