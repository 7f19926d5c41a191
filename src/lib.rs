//! # tokio-wss
//!
//! A minimal adapter for running a WebSocket client over a TLS-secured
//! transport (WSS).
//!
//! `tokio-wss` implements no protocol of its own. TCP connect, the TLS
//! handshake, and certificate verification belong to
//! [`native-tls`](https://docs.rs/native-tls) /
//! [`tokio-native-tls`](https://docs.rs/tokio-native-tls); the WebSocket
//! opening handshake, framing, masking, ping/pong, and the close handshake
//! belong to [`tokio-tungstenite`](https://docs.rs/tokio-tungstenite). This
//! crate supplies only the glue: it opens the secure byte stream with a
//! fixed security policy, bridges it into the duplex shape the WebSocket
//! runtime drives, and returns the application callback's result.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::{SinkExt, StreamExt};
//! use tokio_wss::{run_secure_client, Message};
//!
//! #[tokio::main]
//! async fn main() {
//!     let reply = run_secure_client("echo.example.com", 443, "/", |mut ws| async move {
//!         ws.send(Message::Text("hello".into())).await.unwrap();
//!         let reply = ws.next().await.expect("connection open").unwrap();
//!         ws.close(None).await.unwrap();
//!         reply
//!     })
//!     .await
//!     .unwrap();
//!     println!("echoed: {reply}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Transparent error type over the underlying libraries
//! - [`stream`] - Duplex byte-stream adapter handed to the WebSocket runtime
//!
//! ## Security
//!
//! Every connection the entry points open uses the same TLS policy:
//! certificate validation on, TLS session resumption on, SNI off. There is
//! deliberately no parameter to weaken it — connection options and extra
//! headers are independent axes and never reach the TLS layer.
//!
//! ### Escape hatch
//!
//! Callers who genuinely need different TLS settings (a custom trust store,
//! disabled validation against a test server, a proxy) must compose the
//! underlying crates themselves rather than configure this one:
//!
//! ```rust,ignore
//! use tokio_tungstenite::{connect_async_tls_with_config, Connector};
//!
//! let tls = native_tls::TlsConnector::builder()
//!     .danger_accept_invalid_certs(true) // test servers only
//!     .build()?;
//! let (ws, _response) = connect_async_tls_with_config(
//!     "wss://localhost:9443/",
//!     None,
//!     false,
//!     Some(Connector::NativeTls(tls)),
//! )
//! .await?;
//! ```

pub mod error;
pub mod stream;

mod client;
mod tls;

pub use client::{run_secure_client, run_secure_client_with, WssStream};
pub use error::WssError;

// Re-exports of the WebSocket runtime's caller-facing types, so common use
// does not need a direct tokio-tungstenite dependency.
pub use tokio_tungstenite::tungstenite;
pub use tokio_tungstenite::tungstenite::protocol::WebSocketConfig;
pub use tokio_tungstenite::tungstenite::Message;
pub use tokio_tungstenite::WebSocketStream;
