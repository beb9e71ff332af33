use clima_core::{ClimaError, Result};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Line-oriented client for the external climate feed.
///
/// The connection is attempted exactly once, at startup.  If the broker is
/// unreachable the process runs on simulated data for its whole lifetime,
/// and a connection lost later is not re-established either — the producer
/// choice is fixed at startup.
pub struct FeedClient {
    addr: String,
    topic: String,
    connect_timeout: Duration,
}

impl FeedClient {
    pub fn new(
        addr: impl Into<String>,
        topic: impl Into<String>,
        connect_timeout: Duration,
    ) -> Self {
        Self {
            addr: addr.into(),
            topic: topic.into(),
            connect_timeout,
        }
    }

    /// Connect and subscribe.  Each payload later arrives as one text line.
    pub async fn connect(&self) -> Result<FeedStream> {
        let mut stream =
            tokio::time::timeout(self.connect_timeout, TcpStream::connect(&self.addr))
                .await
                .map_err(|_| ClimaError::Feed(format!("timed out connecting to {}", self.addr)))?
                .map_err(|e| ClimaError::Feed(format!("connect {}: {e}", self.addr)))?;

        stream
            .write_all(format!("sub {}\n", self.topic).as_bytes())
            .await
            .map_err(|e| ClimaError::Feed(format!("subscribe '{}': {e}", self.topic)))?;

        info!("subscribed to '{}' at {}", self.topic, self.addr);
        Ok(FeedStream { stream })
    }
}

/// An established feed subscription.
#[derive(Debug)]
pub struct FeedStream {
    stream: TcpStream,
}

impl FeedStream {
    /// Spawn a background task that forwards raw payload lines on the
    /// returned channel.  The task ends when the feed closes the connection
    /// or when all receivers are dropped.
    pub fn spawn_listener(self) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(32);

        tokio::spawn(async move {
            let mut lines = BufReader::new(self.stream).lines();

            while let Ok(Some(line)) = lines.next_line().await {
                if tx.send(line).await.is_err() {
                    return; // all receivers dropped
                }
            }

            warn!("feed connection closed; no further live samples");
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn connect_subscribes_and_streams_payload_lines() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 64];
            let n = socket.read(&mut buf).await.unwrap();
            assert_eq!(&buf[..n], b"sub study/climate\n");

            socket.write_all(b"25.0,55.0\n28.5,60.0\n").await.unwrap();
        });

        let client = FeedClient::new(&addr, "study/climate", Duration::from_millis(500));
        let mut payloads = client.connect().await.unwrap().spawn_listener();

        assert_eq!(payloads.recv().await.unwrap(), "25.0,55.0");
        assert_eq!(payloads.recv().await.unwrap(), "28.5,60.0");
        // server side closed the connection after writing
        assert!(payloads.recv().await.is_none());
    }

    #[tokio::test]
    async fn connect_times_out_against_a_black_hole() {
        // 192.0.2.0/24 is TEST-NET-1: packets go nowhere, so the attempt
        // hits our own timeout instead of an OS error.
        let client = FeedClient::new("192.0.2.1:1883", "t", Duration::from_millis(50));
        let err = client.connect().await.unwrap_err();
        assert!(matches!(err, ClimaError::Feed(_)));
    }
}
