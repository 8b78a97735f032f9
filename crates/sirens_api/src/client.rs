use crate::config::AlertConfig;
use crate::error::{AlertError, Result};
use crate::models::{Issue, IssueDetails, IssueEvent, Severity};
use crate::pacer::RequestPacer;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Async client for the alert-monitoring service. Holds a pooled HTTP
/// client plus a shared pacer so bursts of view refreshes don't hammer the
/// service.
#[derive(Clone)]
pub struct AlertClient {
    http: HttpClient,
    config: AlertConfig,
    pacer: RequestPacer,
}

impl AlertClient {
    pub fn new(config: AlertConfig) -> Result<Self> {
        let pacer = RequestPacer::new(config.cooldown);
        Self::new_with_pacer(config, pacer)
    }

    pub fn new_with_pacer(config: AlertConfig, pacer: RequestPacer) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self {
            http,
            config,
            pacer,
        })
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    pub fn pacer(&self) -> &RequestPacer {
        &self.pacer
    }

    /// Fetches the full issue collection for the list view.
    pub async fn list_issues(&self) -> Result<Vec<Issue>> {
        debug!("alert:list_issues");
        self.get("alert-monitering").await
    }

    /// Fetches one issue with stack trace and request context.
    pub async fn get_issue_details(&self, issue_id: &str) -> Result<IssueDetails> {
        debug!(issue_id, "alert:get_issue_details");
        let path = format!("alert-monitering/{}", issue_id);
        self.get(&path).await
    }

    /// Fetches the recorded occurrences of an issue.
    pub async fn get_issue_events(&self, issue_id: &str) -> Result<Vec<IssueEvent>> {
        debug!(issue_id, "alert:get_issue_events");
        let path = format!("event-monitering/issue/{}", issue_id);
        self.get(&path).await
    }

    /// Requests a severity change for an issue. The service only reports
    /// success or failure; callers are expected to re-fetch the issue.
    pub async fn update_severity(&self, issue_id: &str, severity: Severity) -> Result<()> {
        debug!(issue_id, severity = severity.as_str(), "alert:update_severity");
        let path = format!("alert-monitering/{}/update", issue_id);
        let payload = SeverityUpdateRequest { severity };
        self.send_expect_empty(Method::POST, &path, Some(&payload))
            .await
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send_with_body(Method::GET, path, Option::<&Value>::None)
            .await
    }

    pub async fn send_with_body<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.pacer.throttle().await;
        let url = self.url_for(path);
        let mut request = self.http.request(method, url);
        if let Some(payload) = body {
            request = request.json(payload);
        }
        let response = request.send().await?;
        Self::parse_json(response).await
    }

    pub async fn send_expect_empty<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.pacer.throttle().await;
        let url = self.url_for(path);
        let mut request = self.http.request(method, url);
        if let Some(payload) = body {
            request = request.json(payload);
        }
        let response = request.send().await?;
        Self::ensure_success(response).await
    }

    fn url_for(&self, path: &str) -> String {
        let mut base = self.config.api_root();
        base.push_str(path.trim_start_matches('/'));
        base
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(AlertError::from)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "alert service returned error response");
            Err(build_http_error(status, &body))
        }
    }

    async fn ensure_success(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "alert service rejected request");
            Err(build_http_error(status, &body))
        }
    }
}

fn build_http_client(config: &AlertConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| AlertError::Other(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| AlertError::Other(err.to_string()))
}

fn build_http_error(status: StatusCode, body: &str) -> AlertError {
    let code = extract_error_code(body);
    AlertError::http(status, code, body.to_string())
}

fn extract_error_code(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("code").and_then(|c| c.as_str()).map(|s| s.to_string()))
}

#[derive(Debug, Serialize)]
struct SeverityUpdateRequest {
    severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client_for(server: &mockito::ServerGuard) -> AlertClient {
        let config = AlertConfig::new(server.url()).with_cooldown(Duration::ZERO);
        AlertClient::new(config).expect("build client")
    }

    #[tokio::test]
    async fn list_issues_hits_collection_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/alert/v1/alert-monitering")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "issueId": "i-1",
                    "exceptionClass": "java.lang.IllegalStateException",
                    "exceptionMessage": "bad state",
                    "throwingClassName": "com.atlas.core.Engine",
                    "lastSeen": "2025-04-04T21:40:16Z",
                    "age": "0d 1h 0m",
                    "status": "open",
                    "counter": 7,
                    "severity": "MEDIUM"
                }]"#,
            )
            .create_async()
            .await;

        let issues = client_for(&server).list_issues().await.expect("list issues");
        mock.assert_async().await;
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_id, "i-1");
        assert_eq!(issues[0].severity, Severity::Medium);
    }

    #[tokio::test]
    async fn detail_fetch_decodes_flattened_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/alert/v1/alert-monitering/i-9")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "issueId": "i-9",
                    "exceptionClass": "jakarta.servlet.ServletException",
                    "exceptionMessage": "request processing failed",
                    "throwingClassName": "org.springframework.web.servlet.FrameworkServlet",
                    "exceptionLineNumber": 1022,
                    "lastSeen": "2025-04-04T21:40:16Z",
                    "age": "0d 0h 0m",
                    "status": "investigating",
                    "counter": 42,
                    "seriarity": "critical",
                    "stackTrace": ["frame one", "frame two"],
                    "traceId": null,
                    "extras": {},
                    "headers": {"host": "localhost:8080"}
                }"#,
            )
            .create_async()
            .await;

        let details = client_for(&server)
            .get_issue_details("i-9")
            .await
            .expect("fetch details");
        assert_eq!(details.issue.severity, Severity::High);
        assert_eq!(details.stack_trace.len(), 2);
        assert_eq!(details.headers.get("host").map(String::as_str), Some("localhost:8080"));
    }

    #[tokio::test]
    async fn events_fetch_uses_event_monitoring_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/alert/v1/event-monitering/issue/i-2")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "eventId": "e-1",
                    "issueId": "i-2",
                    "traceId": "t-1",
                    "occurrenceTimestamp": "2025-04-04T08:05:00Z"
                }]"#,
            )
            .create_async()
            .await;

        let events = client_for(&server)
            .get_issue_events("i-2")
            .await
            .expect("fetch events");
        mock.assert_async().await;
        assert_eq!(events[0].event_id, "e-1");
        assert_eq!(events[0].issue_id, "i-2");
    }

    #[tokio::test]
    async fn update_severity_posts_canonical_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/alert/v1/alert-monitering/i-3/update")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({"severity": "HIGH"})))
            .with_status(200)
            .create_async()
            .await;

        client_for(&server)
            .update_severity("i-3", Severity::High)
            .await
            .expect("update severity");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_error_maps_to_http_variant_with_code() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/alert/v1/alert-monitering")
            .with_status(500)
            .with_body(r#"{"code": "storage-down", "message": "unavailable"}"#)
            .create_async()
            .await;

        let err = client_for(&server).list_issues().await.expect_err("must fail");
        match err {
            AlertError::Http { status, code, .. } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(code.as_deref(), Some("storage-down"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(client_for(&server).list_issues().await.is_err());
    }
}
