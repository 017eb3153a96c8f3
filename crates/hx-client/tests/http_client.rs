//! Integration tests for the HTTP extraction client against a local stub server.

use hx_client::{ClientConfig, ExtractionClient, ExtractionError, HttpExtractionClient};
use hx_model::{DocumentFile, HeadingLevel, PDF_MEDIA_TYPE};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one HTTP request with a canned response.
///
/// Returns the base URL to point the client at and a handle resolving to the
/// raw request bytes the server received.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    (format!("http://{addr}"), handle)
}

/// Read request headers plus a `content-length` body.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf).into_owned()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn sample_pdf() -> DocumentFile {
    DocumentFile::new("report.pdf", PDF_MEDIA_TYPE, b"%PDF-1.4 fake".to_vec())
}

#[tokio::test]
async fn extract_posts_multipart_and_decodes_outline() {
    let body = r#"{"success":true,"filename":"report.pdf","title":"Report","outline":[{"level":"H1","text":"Introduction","page":1},{"level":"H2","text":"Background","page":2}],"processing_time":0.05,"total_headings":2}"#;
    let (base_url, server) = serve_once("200 OK", body).await;

    let client = HttpExtractionClient::new(ClientConfig::new(base_url)).unwrap();
    let result = client.extract(&sample_pdf()).await.unwrap();

    assert_eq!(result.title, "Report");
    assert_eq!(result.outline.len(), 2);
    assert_eq!(result.outline[1].level, HeadingLevel::H2);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/extract-headings HTTP/1.1"));
    assert!(request.to_lowercase().contains("multipart/form-data"));
    assert!(request.contains(r#"name="file""#));
    assert!(request.contains(r#"filename="report.pdf""#));
    assert!(request.contains("%PDF-1.4 fake"));
}

#[tokio::test]
async fn extract_surfaces_service_detail() {
    let (base_url, server) =
        serve_once("500 Internal Server Error", r#"{"detail":"Error processing PDF: broken xref"}"#)
            .await;

    let client = HttpExtractionClient::new(ClientConfig::new(base_url)).unwrap();
    let err = client.extract(&sample_pdf()).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), "Error processing PDF: broken xref");
    server.await.unwrap();
}

#[tokio::test]
async fn extract_without_detail_uses_fallback() {
    let (base_url, server) = serve_once("503 Service Unavailable", "{}").await;

    let client = HttpExtractionClient::new(ClientConfig::new(base_url)).unwrap();
    let err = client.extract(&sample_pdf()).await.unwrap_err();

    assert_eq!(err.user_message(), "Failed to process PDF");
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    // Bind then drop to get a port nobody is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpExtractionClient::new(ClientConfig::new(format!("http://{addr}"))).unwrap();
    let err = client.extract(&sample_pdf()).await.unwrap_err();

    assert!(matches!(err, ExtractionError::Network(_)));
    assert_eq!(err.user_message(), "Failed to process PDF");
}

#[tokio::test]
async fn health_reports_healthy_service() {
    let (base_url, server) = serve_once("200 OK", r#"{"status":"healthy"}"#).await;

    let client = HttpExtractionClient::new(ClientConfig::new(base_url)).unwrap();
    assert!(client.health().await.unwrap());

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/health HTTP/1.1"));
}

#[tokio::test]
async fn health_reports_unhealthy_on_error_status() {
    let (base_url, server) =
        serve_once("503 Service Unavailable", r#"{"detail":"starting"}"#).await;

    let client = HttpExtractionClient::new(ClientConfig::new(base_url)).unwrap();
    assert!(!client.health().await.unwrap());
    server.await.unwrap();
}

#[tokio::test]
async fn health_reports_unhealthy_on_degraded_status() {
    let (base_url, server) = serve_once("200 OK", r#"{"status":"degraded"}"#).await;

    let client = HttpExtractionClient::new(ClientConfig::new(base_url)).unwrap();
    assert!(!client.health().await.unwrap());
    server.await.unwrap();
}
