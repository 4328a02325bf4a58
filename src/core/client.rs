// src/core/client.rs

//! HTTP client for the two endpoints of the analysis service.

use crate::config::Settings;
use crate::core::error::ApiError;
use crate::core::models::{AnalysisResult, DashboardSnapshot};
use crate::core::upload::UploadForm;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};
use url::Url;

#[cfg(test)]
use mockall::automock;

const USER_AGENT: &str = concat!("privguard-console/", env!("CARGO_PKG_VERSION"));

pub const ANALYZE_ENDPOINT: &str = "analyze";
pub const DASHBOARD_ENDPOINT: &str = "dashboard-data";

/// The two calls the console makes. Kept behind a trait so the controllers can
/// be driven by a mock in tests.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PrivGuardApi: Send + Sync {
    /// `POST /analyze` with the form as a multipart body.
    async fn analyze(&self, form: &UploadForm) -> Result<AnalysisResult, ApiError>;

    /// `GET /dashboard-data`.
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: Url,
}

impl HttpApiClient {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, settings.server.clone()))
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        endpoint_url(&self.base_url, path)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::handle_response_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl PrivGuardApi for HttpApiClient {
    async fn analyze(&self, form: &UploadForm) -> Result<AnalysisResult, ApiError> {
        let url = self.endpoint(ANALYZE_ENDPOINT)?;
        info!(url = %url, file = %form.file.display(), fields = form.fields.len(), "Submitting document for analysis.");

        let body = form.to_multipart().await?;
        let response = self.client.post(url.clone()).multipart(body).send().await.map_err(|e| {
            error!(url = %url, error = %e, "Analysis request failed.");
            ApiError::from(e)
        })?;

        let result: AnalysisResult = Self::decode(response).await?;
        info!(findings = result.findings.len(), risk = %result.risk_level, "Analysis response received.");
        Ok(result)
    }

    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        let url = self.endpoint(DASHBOARD_ENDPOINT)?;
        debug!(url = %url, "Fetching dashboard snapshot.");

        let response = self.client.get(url).send().await?;
        let snapshot: DashboardSnapshot = Self::decode(response).await?;
        debug!(recent = snapshot.recent_scans.len(), "Dashboard snapshot received.");
        Ok(snapshot)
    }
}

/// Joins `path` onto `base`, treating `base` as a directory even without a
/// trailing slash, so `http://host/app` + `analyze` is `http://host/app/analyze`.
pub fn endpoint_url(base: &Url, path: &str) -> Result<Url, ApiError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_onto_root() {
        let base = Url::parse("http://127.0.0.1:5000").unwrap();
        assert_eq!(
            endpoint_url(&base, ANALYZE_ENDPOINT).unwrap().as_str(),
            "http://127.0.0.1:5000/analyze"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let base = Url::parse("https://privguard.example.com/api").unwrap();
        assert_eq!(
            endpoint_url(&base, "/dashboard-data").unwrap().as_str(),
            "https://privguard.example.com/api/dashboard-data"
        );

        let slashed = Url::parse("https://privguard.example.com/api/").unwrap();
        assert_eq!(
            endpoint_url(&slashed, DASHBOARD_ENDPOINT).unwrap().as_str(),
            "https://privguard.example.com/api/dashboard-data"
        );
    }

    use std::io::Write;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Serves a single HTTP exchange on an ephemeral port and hands back the
    /// raw request it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (Url::parse(&format!("http://{}", addr)).unwrap(), handle)
    }

    /// Reads headers, then the body by Content-Length (or up to the closing
    /// multipart boundary when the body is chunked).
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            let Some(header_end) = text.find("\r\n\r\n") else { continue };
            let content_length = text[..header_end].lines().find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            });
            let done = match content_length {
                Some(len) => buf.len() >= header_end + 4 + len,
                None => text.starts_with("GET ") || text.ends_with("0\r\n\r\n"),
            };
            if done {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn local_client(base: Url) -> HttpApiClient {
        let client = ClientBuilder::new().no_proxy().build().unwrap();
        HttpApiClient::with_client(client, base)
    }

    #[tokio::test]
    async fn analyze_posts_multipart_with_file_and_fields() {
        let mut file = tempfile::Builder::new().prefix("contract").suffix(".txt").tempfile().unwrap();
        write!(file, "Jane Doe, ID 12345678").unwrap();
        let file_name = file.path().file_name().unwrap().to_string_lossy().into_owned();
        let form = UploadForm::new(
            file.path(),
            vec![
                ("department".to_string(), "hr".to_string()),
                ("source".to_string(), "console".to_string()),
            ],
        );

        let (base, server) = serve_once(
            "200 OK",
            r#"{"findings":[{"type":"national_id","value":"12345678"}],"document_type":"Contract","risk_level":"High"}"#,
        )
        .await;
        let result = local_client(base).analyze(&form).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /analyze HTTP/1.1\r\n"), "{}", request);
        assert!(request.to_lowercase().contains("content-type: multipart/form-data; boundary="));
        assert!(request.contains(&format!("name=\"file\"; filename=\"{}\"", file_name)));
        assert!(request.contains("Content-Type: text/plain"));
        assert!(request.contains("Jane Doe, ID 12345678"));
        assert!(request.contains("name=\"department\"\r\n\r\nhr\r\n"));
        assert!(request.contains("name=\"source\"\r\n\r\nconsole\r\n"));
        assert_eq!(request.matches("POST ").count(), 1);

        assert_eq!(result.findings_count(), 1);
        assert_eq!(result.risk_level, "High");
    }

    #[tokio::test]
    async fn analyze_surfaces_server_error_message() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        let form = UploadForm::new(file.path(), Vec::new());

        let (base, server) = serve_once("400 Bad Request", r#"{"error":"Unsupported file type"}"#).await;
        let outcome = local_client(base).analyze(&form).await;
        server.await.unwrap();

        match outcome {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Unsupported file type");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_dashboard_gets_snapshot_under_base_path() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"documents_scanned":4.0,"sensitive_entities":9,"compliance_score":81,
                "risk_distribution":{"High":1,"Medium":2,"Low":1},
                "recent_scans":[{"file":"a.pdf","risk":"High","entities":"3","timestamp":"2026-10-18 09:00"}]}"#,
        )
        .await;
        let base = base.join("api").unwrap();
        let snapshot = local_client(base).fetch_dashboard().await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /api/dashboard-data HTTP/1.1\r\n"), "{}", request);
        assert_eq!(snapshot.documents_scanned, 4);
        assert_eq!(snapshot.recent_scans.len(), 1);
        assert_eq!(snapshot.recent_scans[0].entities_label(), "3");
    }
}
