//! HeartRails Geo API Provider
//!
//! GeocodeProviderのHTTP実装（searchByPostal）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

use super::models::parse_search_response;
use crate::domain::entities::{LocationRecord, PostalCode};
use crate::domain::repositories::{GeocodeError, GeocodeProvider};

/// HeartRails Geo API client
pub struct HeartRailsGeocodeProvider {
    client: Client,
    base_url: Url,
}

impl HeartRailsGeocodeProvider {
    /// Create a provider with a bounded request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid geocode API URL: {}", base_url))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// `{base}?method=searchByPostal&postal={code}`
    pub fn request_url(&self, postal_code: &PostalCode) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("method", "searchByPostal")
            .append_pair("postal", postal_code.as_str());
        url
    }
}

#[async_trait]
impl GeocodeProvider for HeartRailsGeocodeProvider {
    async fn search(&self, postal_code: &PostalCode) -> Result<Vec<LocationRecord>, GeocodeError> {
        let url = self.request_url(postal_code);
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(GeocodeError::Transport(format!(
                "geocode API returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        parse_search_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a local port
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/api/json", addr)
    }

    fn code(raw: &str) -> PostalCode {
        PostalCode::parse(raw).unwrap()
    }

    #[test]
    fn test_request_url() {
        let provider = HeartRailsGeocodeProvider::new(
            "https://geoapi.heartrails.com/api/json",
            Duration::from_secs(5),
        )
        .unwrap();

        let url = provider.request_url(&code("1000001"));
        assert_eq!(
            url.as_str(),
            "https://geoapi.heartrails.com/api/json?method=searchByPostal&postal=1000001"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(HeartRailsGeocodeProvider::new("not a url", Duration::from_secs(5)).is_err());
    }

    #[tokio::test]
    async fn test_search_success() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"response":{"location":[{"prefecture":"東京都","city":"千代田区","town":"千代田","x":"139.753634","y":"35.684920","postal":"1000001"}]}}"#,
        )
        .await;
        let provider = HeartRailsGeocodeProvider::new(&url, Duration::from_secs(5)).unwrap();

        let records = provider.search(&code("1000001")).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].town, "千代田");
        assert_eq!(records[0].longitude, Some(139.753634));
    }

    #[tokio::test]
    async fn test_search_not_found_reply() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"response":{"error":"Postal code does not exist."}}"#,
        )
        .await;
        let provider = HeartRailsGeocodeProvider::new(&url, Duration::from_secs(5)).unwrap();

        let records = provider.search(&code("9999999")).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let url = serve_once("HTTP/1.1 200 OK", "not json").await;
        let provider = HeartRailsGeocodeProvider::new(&url, Duration::from_secs(5)).unwrap();

        let err = provider.search(&code("1000001")).await.unwrap_err();
        assert!(matches!(err, GeocodeError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable", "").await;
        let provider = HeartRailsGeocodeProvider::new(&url, Duration::from_secs(5)).unwrap();

        let err = provider.search(&code("1000001")).await.unwrap_err();
        assert!(matches!(err, GeocodeError::Transport(_)));
    }

    #[tokio::test]
    async fn test_search_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = HeartRailsGeocodeProvider::new(
            &format!("http://{}/api/json", addr),
            Duration::from_secs(5),
        )
        .unwrap();

        let err = provider.search(&code("1000001")).await.unwrap_err();
        assert!(matches!(err, GeocodeError::Transport(_)));
    }

    #[tokio::test]
    async fn test_search_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // 接続は受け付けるが応答しない
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let provider = HeartRailsGeocodeProvider::new(
            &format!("http://{}/api/json", addr),
            Duration::from_secs(1),
        )
        .unwrap();

        let started = std::time::Instant::now();
        let err = provider.search(&code("1000001")).await.unwrap_err();

        assert!(matches!(err, GeocodeError::Transport(_)));
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}
