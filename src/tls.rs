//! TLS connection establishment with a fixed security policy.
//!
//! The policy is not a configuration surface: certificate validation is
//! always on, session resumption is always on, and SNI is always off. Callers
//! who need different settings must compose `native-tls` and
//! `tokio-tungstenite` directly (see the crate-level docs).

use tokio::net::TcpStream;
use tokio_native_tls::TlsStream;

use crate::error::WssError;

/// TLS behavior flags applied to every connection the adapter opens.
///
/// Only [`Default`] constructs this; the entry points never accept one from
/// the caller, so connection options and extra headers cannot alter it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SecurityPolicy {
    pub(crate) verify_certificates: bool,
    pub(crate) session_resumption: bool,
    pub(crate) use_sni: bool,
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self {
            verify_certificates: true,
            session_resumption: true,
            use_sni: false,
        }
    }
}

impl SecurityPolicy {
    /// Apply the policy to a fresh connector.
    ///
    /// native-tls has no session-resumption toggle; every backend resumes
    /// sessions by default, which is what `session_resumption: true` asks
    /// for. Hostname verification runs against the connect domain even with
    /// SNI disabled, so validation stays fully enabled.
    fn connector(&self) -> Result<tokio_native_tls::TlsConnector, WssError> {
        let mut builder = native_tls::TlsConnector::builder();
        builder.use_sni(self.use_sni);
        builder.danger_accept_invalid_certs(!self.verify_certificates);
        builder.danger_accept_invalid_hostnames(!self.verify_certificates);
        Ok(tokio_native_tls::TlsConnector::from(builder.build()?))
    }
}

/// Open a TCP connection to `(host, port)` and run the TLS handshake under
/// the fixed [`SecurityPolicy`].
///
/// Fails transparently at whichever stage breaks first: name resolution or
/// TCP connect as [`WssError::Io`], TLS handshake (including certificate
/// validation) as [`WssError::Tls`].
pub(crate) async fn connect(host: &str, port: u16) -> Result<TlsStream<TcpStream>, WssError> {
    let connector = SecurityPolicy::default().connector()?;
    tracing::debug!(host, port, "opening TCP connection");
    let tcp = TcpStream::connect((host, port)).await?;
    tracing::debug!(host, "starting TLS handshake");
    let tls = connector.connect(host, tcp).await?;
    tracing::debug!(host, "TLS session established");
    Ok(tls)
}
