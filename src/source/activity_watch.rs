use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::SummaryError;

use super::{Event, EventSource};

pub const DEFAULT_SERVER: &str = "http://localhost:5600";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Name of the bucket aw-watcher-window fills on a machine.
pub fn window_bucket(hostname: &str) -> String {
    format!("aw-watcher-window_{hostname}")
}

/// Reads the window bucket of one host from the ActivityWatch REST api.
pub struct ActivityWatchSource {
    http: reqwest::Client,
    events_url: String,
}

impl ActivityWatchSource {
    pub fn new(server: &str, hostname: &str, timeout: Duration) -> Result<Self, SummaryError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SummaryError::ClientBuild)?;
        let events_url = format!(
            "{}/api/0/buckets/{}/events",
            server.trim_end_matches('/'),
            window_bucket(hostname)
        );
        Ok(Self { http, events_url })
    }

    pub fn events_url(&self) -> &str {
        &self.events_url
    }
}

#[async_trait]
impl EventSource for ActivityWatchSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, SummaryError> {
        debug!("Requesting events from {}", self.events_url);
        let response = self
            .http
            .get(&self.events_url)
            .send()
            .await
            .map_err(SummaryError::Unavailable)?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with {status}", self.events_url);
            return Err(SummaryError::Status {
                url: self.events_url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(SummaryError::Unavailable)?;
        parse_events(&body)
    }
}

/// Parses the body of an events response.
pub fn parse_events(body: &str) -> Result<Vec<Event>, SummaryError> {
    let events = serde_json::from_str::<Vec<Event>>(body).map_err(SummaryError::Malformed)?;
    debug!("Parsed {} events", events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use anyhow::Result;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use crate::{
        error::SummaryError,
        source::{EventSource, activity_watch::parse_events},
        utils::logging::TEST_LOGGING,
    };

    use super::ActivityWatchSource;

    const EVENTS_BODY: &str = r#"[
        {"id": 2, "timestamp": "2024-04-05T12:00:10+00:00", "duration": 20.0, "data": {"app": "code", "title": "main.rs"}},
        {"id": 1, "timestamp": "2024-04-05T12:00:00+00:00", "duration": 10.0, "data": {"app": "firefox", "title": "docs"}}
    ]"#;

    /// Answers exactly one request with the given status line and body, returning the request
    /// head it received.
    async fn serve_once(status: &'static str, body: &'static str) -> Result<(String, tokio::task::JoinHandle<String>)> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = format!("http://{}", listener.local_addr()?);
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = socket.read(&mut buffer).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        Ok((address, handle))
    }

    #[test]
    fn test_events_url_uses_window_bucket() -> Result<()> {
        let source =
            ActivityWatchSource::new("http://localhost:5600/", "desk", Duration::from_secs(1))?;
        assert_eq!(
            source.events_url(),
            "http://localhost:5600/api/0/buckets/aw-watcher-window_desk/events"
        );
        Ok(())
    }

    #[test]
    fn test_parse_events_rejects_non_list() {
        assert!(matches!(
            parse_events("{\"message\": \"no such bucket\"}"),
            Err(SummaryError::Malformed(_))
        ));
        assert!(matches!(parse_events(""), Err(SummaryError::Malformed(_))));
    }

    #[test]
    fn test_parse_events_empty_list() -> Result<()> {
        assert!(parse_events("[]")?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_events_from_server() -> Result<()> {
        *TEST_LOGGING;
        let (address, handle) = serve_once("200 OK", EVENTS_BODY).await?;
        let source = ActivityWatchSource::new(&address, "desk", Duration::from_secs(5))?;

        let events = source.fetch_events().await?;

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].app(), Some("code"));
        let request = handle.await?;
        assert!(request.starts_with("GET /api/0/buckets/aw-watcher-window_desk/events "));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_events_malformed_body() -> Result<()> {
        *TEST_LOGGING;
        let (address, handle) = serve_once("200 OK", "<html>busy</html>").await?;
        let source = ActivityWatchSource::new(&address, "desk", Duration::from_secs(5))?;

        let result = source.fetch_events().await;

        assert!(matches!(result, Err(SummaryError::Malformed(_))));
        handle.await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_events_error_status() -> Result<()> {
        *TEST_LOGGING;
        let (address, handle) = serve_once("404 Not Found", "{\"message\": \"missing\"}").await?;
        let source = ActivityWatchSource::new(&address, "desk", Duration::from_secs(5))?;

        let result = source.fetch_events().await;

        assert!(matches!(result, Err(SummaryError::Status { status: 404, .. })));
        handle.await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_events_unreachable() -> Result<()> {
        *TEST_LOGGING;
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = format!("http://{}", listener.local_addr()?);
        drop(listener);
        let source = ActivityWatchSource::new(&address, "desk", Duration::from_secs(5))?;

        let result = source.fetch_events().await;

        assert!(matches!(result, Err(SummaryError::Unavailable(_))));
        assert_eq!(result.unwrap_err().exit_code(), 1);
        Ok(())
    }
}
