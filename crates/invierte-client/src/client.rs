//! The projects API client.

use std::time::Duration;

use invierte_core::Project;
use tracing::debug;

use crate::error::{Error, Result};

/// Request timeout. No retries happen behind it; a slow server surfaces
/// as a transport error the caller can re-trigger.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the project-listing API.
///
/// Holds a pooled `reqwest::Client`; construct once and share. Both
/// operations perform a single GET and decode a JSON array of records.
///
/// # Example
///
/// ```rust,ignore
/// let client = ProjectsClient::new("http://localhost:8000/api/proyectos/")?;
/// let projects = client.list().await?;
/// let detail = client.detail("2345678").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProjectsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProjectsClient {
    /// Create a client for the given collection base URL.
    ///
    /// The detail endpoint is addressed by appending the investment code
    /// to the base URL, so a missing trailing slash is added here.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Fetch the full project listing.
    pub async fn list(&self) -> Result<Vec<Project>> {
        self.fetch(self.base_url.clone()).await
    }

    /// Fetch the detail records for one investment code.
    ///
    /// The response is an array: possibly a singleton, possibly empty.
    /// An empty array is an Ok result, not an error.
    pub async fn detail(&self, code: &str) -> Result<Vec<Project>> {
        self.fetch(self.detail_url(code)).await
    }

    fn detail_url(&self, code: &str) -> String {
        format!("{}{}", self.base_url, code)
    }

    async fn fetch(&self, url: String) -> Result<Vec<Project>> {
        debug!(%url, "fetching project records");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        let projects: Vec<Project> = response.json().await?;
        debug!(count = projects.len(), "decoded project records");
        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_adds_trailing_slash() {
        let client = ProjectsClient::new("http://localhost:8000/api/proyectos").unwrap();
        assert_eq!(client.base_url, "http://localhost:8000/api/proyectos/");
    }

    #[test]
    fn test_new_keeps_existing_slash() {
        let client = ProjectsClient::new("http://localhost:8000/api/proyectos/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8000/api/proyectos/");
    }

    #[test]
    fn test_detail_url_appends_code() {
        let client = ProjectsClient::new("http://localhost:8000/api/proyectos").unwrap();
        assert_eq!(
            client.detail_url("2345678"),
            "http://localhost:8000/api/proyectos/2345678"
        );
    }

    // ------------------------------------------------------------------------
    // Wire tests against a one-shot local server
    // ------------------------------------------------------------------------

    async fn one_shot_server(status_line: &'static str, body: &'static str) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        addr
    }

    #[tokio::test]
    async fn test_list_decodes_record_array() {
        let body = r#"[{"id":1,"codigo_unico_inversion":"100","situacion":"VIABLE"}]"#;
        let addr = one_shot_server("HTTP/1.1 200 OK", body).await;

        let client = ProjectsClient::new(format!("http://{addr}/api/proyectos/")).unwrap();
        let projects = client.list().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].situacion.as_deref(), Some("VIABLE"));
    }

    #[tokio::test]
    async fn test_empty_array_is_ok_not_error() {
        let addr = one_shot_server("HTTP/1.1 200 OK", "[]").await;

        let client = ProjectsClient::new(format!("http://{addr}/api/proyectos/")).unwrap();
        let projects = client.detail("9999").await.unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let addr = one_shot_server("HTTP/1.1 404 Not Found", "{}").await;

        let client = ProjectsClient::new(format!("http://{addr}/api/proyectos/")).unwrap();
        let err = client.list().await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 404, .. }));
        assert!(!err.is_retryable());
    }
}
