//! Tests for the duplex stream adapter through the public API.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_wss::stream::Duplex;

#[tokio::test]
async fn test_accessors_expose_inner_stream() {
    let (client, _server) = tokio::io::duplex(64);
    let mut duplex = Duplex::new(client);

    let _ = duplex.get_ref();
    let _ = duplex.get_mut();
    let inner = duplex.into_inner();
    drop(inner);
}

#[tokio::test]
async fn test_write_order_preserved_across_empty_writes() {
    let (client, mut server) = tokio::io::duplex(256);
    let mut duplex = Duplex::new(client);

    duplex.write_all(b"first ").await.unwrap();
    assert_eq!(duplex.write(&[]).await.unwrap(), 0);
    duplex.write_all(b"second ").await.unwrap();
    assert_eq!(duplex.write(&[]).await.unwrap(), 0);
    duplex.write_all(b"third").await.unwrap();
    duplex.flush().await.unwrap();
    drop(duplex);

    let mut received = String::new();
    server.read_to_string(&mut received).await.unwrap();
    assert_eq!(received, "first second third");
}

#[tokio::test]
async fn test_close_signal_sends_no_bytes() {
    let (client, mut server) = tokio::io::duplex(256);
    let mut duplex = Duplex::new(client);

    duplex.shutdown().await.unwrap();
    drop(duplex);

    // The peer sees end-of-stream with zero bytes ever written.
    let mut received = Vec::new();
    server.read_to_end(&mut received).await.unwrap();
    assert!(received.is_empty());
}
