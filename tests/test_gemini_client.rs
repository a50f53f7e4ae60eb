use base64::Engine;
use base64::engine::general_purpose;
use learnpix::error::GenerateError;
use learnpix::gemini::{GeminiClient, ImageGenerator, ResponsePart};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves one canned HTTP response and hands back the raw request it got.
async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });

    (base, handle)
}

fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some((head, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };
    let length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    body.len() >= length
}

#[tokio::test]
async fn sends_prompt_and_decodes_parts() {
    let encoded = general_purpose::STANDARD.encode(b"pixels");
    let body = serde_json::json!({
        "candidates": [{
            "content": {"parts": [
                {"text": "Here you go"},
                {"inlineData": {"mimeType": "image/png", "data": encoded}}
            ]}
        }]
    })
    .to_string();
    let (base, server) = serve_once("200 OK", body).await;

    let client = GeminiClient::new("secret-key", "gemini-test-model", base);
    let parts = client.generate("a red bus").await.unwrap();

    assert_eq!(
        parts,
        vec![
            ResponsePart::Text("Here you go".to_string()),
            ResponsePart::Image {
                mime_type: Some("image/png".to_string()),
                data: b"pixels".to_vec(),
            }
        ]
    );

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /v1beta/models/gemini-test-model:generateContent "));
    assert!(request.to_ascii_lowercase().contains("x-goog-api-key: secret-key"));
    assert!(request.contains("\"text\":\"a red bus\""));
    assert!(request.contains("\"responseModalities\":[\"TEXT\",\"IMAGE\"]"));
    assert!(request.contains("\"aspectRatio\":\"1:1\""));
    assert!(request.contains("\"imageSize\":\"1K\""));
}

#[tokio::test]
async fn error_status_carries_body() {
    let body = "{\"error\":{\"code\":429,\"message\":\"Resource exhausted\"}}".to_string();
    let (base, server) = serve_once("429 Too Many Requests", body).await;

    let client = GeminiClient::new("key", "gemini-test-model", base);
    let err = client.generate("a lion").await.unwrap_err();
    server.await.unwrap();

    match err {
        GenerateError::Status { status, body } => {
            assert_eq!(status.as_u16(), 429);
            assert!(body.contains("Resource exhausted"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn garbage_body_is_a_parse_error() {
    let (base, server) = serve_once("200 OK", "<html>oops</html>".to_string()).await;

    let client = GeminiClient::new("key", "gemini-test-model", base);
    let err = client.generate("a lion").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, GenerateError::Parse(_)));
}
