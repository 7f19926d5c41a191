//! Secure WebSocket client entry points.
//!
//! The two public functions here are the entire adapter surface: open a TLS
//! connection under the fixed security policy, wrap it in a [`Duplex`]
//! stream, and hand that stream to tokio-tungstenite's client-over-stream
//! primitive. Everything protocol-shaped — handshake, framing, masking,
//! ping/pong, the close handshake — happens inside tokio-tungstenite.

use std::future::Future;

use http::{HeaderMap, Request};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_native_tls::TlsStream;
use tokio_tungstenite::tungstenite::protocol::WebSocketConfig;
use tokio_tungstenite::{client_async_with_config, WebSocketStream};

use crate::error::WssError;
use crate::stream::Duplex;
use crate::tls;

/// The connection handle passed to the application callback.
pub type WssStream = WebSocketStream<Duplex<TlsStream<TcpStream>>>;

/// Connect to `wss://{host}:{port}{path}` and run `app` over the
/// established connection.
///
/// Uses default connection options and no extra headers; see
/// [`run_secure_client_with`] for the configurable form. Certificate
/// validation is always enabled and cannot be turned off here.
///
/// The callback owns the [`WssStream`] for its lifetime; when it returns,
/// its output becomes the call's result and the connection is released.
///
/// # Example
/// ```rust,ignore
/// use futures::{SinkExt, StreamExt};
/// use tokio_wss::{run_secure_client, Message};
///
/// let reply = run_secure_client("echo.example.com", 443, "/", |mut ws| async move {
///     ws.send(Message::Text("hello".into())).await?;
///     let reply = ws.next().await.expect("connection open")?;
///     ws.close(None).await?;
///     Ok::<_, tokio_wss::tungstenite::Error>(reply)
/// })
/// .await??;
/// ```
pub async fn run_secure_client<A, F, T>(
    host: &str,
    port: u16,
    path: &str,
    app: A,
) -> Result<T, WssError>
where
    A: FnOnce(WssStream) -> F,
    F: Future<Output = T>,
{
    run_secure_client_with(host, port, path, None, HeaderMap::new(), app).await
}

/// Connect to `wss://{host}:{port}{path}` with explicit connection options
/// and extra handshake headers, then run `app` over the established
/// connection.
///
/// `options` and `headers` are forwarded to the WebSocket runtime
/// unmodified; neither can alter the TLS security policy, which stays fixed
/// (certificate validation on, session resumption on, SNI off).
///
/// Fails transparently at the first broken stage — name resolution, TCP
/// connect, TLS handshake, or WebSocket handshake — without invoking `app`.
pub async fn run_secure_client_with<A, F, T>(
    host: &str,
    port: u16,
    path: &str,
    options: Option<WebSocketConfig>,
    headers: HeaderMap,
    app: A,
) -> Result<T, WssError>
where
    A: FnOnce(WssStream) -> F,
    F: Future<Output = T>,
{
    let connection = tls::connect(host, port).await?;
    let request = build_request(host, port, path, &headers)?;
    run_client_over_stream(request, Duplex::new(connection), options, app).await
}

/// Drive the WebSocket opening handshake over an already-established byte
/// stream, then hand the live connection to `app`.
pub(crate) async fn run_client_over_stream<S, A, F, T>(
    request: Request<()>,
    stream: S,
    options: Option<WebSocketConfig>,
    app: A,
) -> Result<T, WssError>
where
    S: AsyncRead + AsyncWrite + Unpin,
    A: FnOnce(WebSocketStream<S>) -> F,
    F: Future<Output = T>,
{
    let (ws, response) = client_async_with_config(request, stream, options).await?;
    tracing::debug!(status = %response.status(), "WebSocket handshake complete");
    Ok(app(ws).await)
}

/// Assemble the opening-handshake request. The default WSS port is elided
/// from the URI so the generated Host header carries the bare hostname;
/// extra headers are appended untouched.
fn build_request(
    host: &str,
    port: u16,
    path: &str,
    headers: &HeaderMap,
) -> Result<Request<()>, WssError> {
    let uri = if port == 443 {
        format!("wss://{host}{path}")
    } else {
        format!("wss://{host}:{port}{path}")
    };
    let mut request = Request::builder().uri(uri.as_str()).body(())?;
    request
        .headers_mut()
        .extend(headers.iter().map(|(name, value)| (name.clone(), value.clone())));
    Ok(request)
}
