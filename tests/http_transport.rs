//! Drives the reqwest transport against a throwaway local HTTP server

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use gastos::{
    ExpenseCreate, ExpenseStore, HttpMethod, HttpTransport, Operation, QueryParams, Transport,
    ApiRequest, NetworkResponse,
};

/// Accept one connection, answer it and hand back the raw request
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let raw = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        raw
    });
    (format!("http://{}/api", addr), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= pos + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

#[tokio::test]
async fn test_list_sends_query_and_updates_pagination() {
    let body = r#"{"data":[{"id":1,"description":"Pan","amount":1.5,"date":"2026-03-01","category":"comida"}],"total":13,"page":2,"limit":5,"totalPages":3}"#;
    let (base, server) = serve_once("200 OK", body).await;
    let store = ExpenseStore::new(HttpTransport::new(base));

    let params = QueryParams::default().page(2).limit(5).category("comida");
    store.fetch_expenses(&params).await.unwrap();

    let raw = server.await.unwrap();
    assert!(raw.starts_with("GET /api/expenses?page=2&limit=5&category=comida HTTP/1.1"));

    let pagination = store.pagination();
    assert_eq!((pagination.page, pagination.limit, pagination.total, pagination.total_pages), (2, 5, 13, 3));
    assert_eq!(store.expenses()[0].description, "Pan");
    assert!(!store.loading());
}

#[tokio::test]
async fn test_create_posts_json_body() {
    let body = r#"{"id":5,"description":"Taxi","amount":8.0,"date":"2026-03-02","category":"transporte"}"#;
    let (base, server) = serve_once("201 Created", body).await;
    let store = ExpenseStore::new(HttpTransport::new(base));

    let created = store
        .create_expense(&ExpenseCreate::new("Taxi", 8.0, "transporte"))
        .await
        .unwrap();
    assert_eq!(created.id, 5);
    assert_eq!(store.expenses()[0].id, 5);

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /api/expenses HTTP/1.1"));
    assert!(raw.to_lowercase().contains("content-type: application/json"));
    let (_, sent) = raw.split_once("\r\n\r\n").unwrap();
    let sent: serde_json::Value = serde_json::from_str(sent).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({ "description": "Taxi", "amount": 8.0, "category": "transporte" })
    );
}

#[tokio::test]
async fn test_not_found_is_reported() {
    let (base, server) = serve_once("404 Not Found", r#"{"message":"not found"}"#).await;
    let store = ExpenseStore::new(HttpTransport::new(base));

    let err = store.fetch_expense_by_id(9).await.unwrap_err();
    assert_eq!(err.operation, Operation::GetById);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message, "[GET] /expenses/9: 404 Not Found");
    assert_eq!(store.error(), Some(err.message));
    assert!(store.current_expense().is_none());
    assert!(!store.loading());

    let raw = server.await.unwrap();
    assert!(raw.starts_with("GET /api/expenses/9 HTTP/1.1"));
}

#[tokio::test]
async fn test_search_encodes_query() {
    let (base, server) = serve_once("200 OK", "[]").await;
    let transport = HttpTransport::new(base);

    let request = ApiRequest::get("/expenses/search")
        .with_query(vec![("query".to_string(), "café & té".to_string())]);
    let response = transport.execute(request).await;
    assert!(response.is_success());

    let raw = server.await.unwrap();
    assert!(raw.starts_with("GET /api/expenses/search?query=caf%C3%A9+%26+t%C3%A9 HTTP/1.1"));
}

#[tokio::test]
async fn test_delete_ignores_body() {
    let (base, server) = serve_once("200 OK", "").await;
    let transport = HttpTransport::new(base);

    let response = transport.execute(ApiRequest::delete("/expenses/7")).await;
    assert_eq!(response.status(), Some(200));

    let raw = server.await.unwrap();
    assert!(raw.starts_with("DELETE /api/expenses/7 HTTP/1.1"));
    assert_eq!(HttpMethod::DELETE.as_str(), "DELETE");
}

#[tokio::test]
async fn test_unreachable_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = ExpenseStore::new(HttpTransport::new(format!("http://{}/api", addr)));
    let err = store.delete_expense(1).await.unwrap_err();
    assert_eq!(err.status(), None);
    assert!(store.error().is_some());
    assert!(!store.loading());

    let found = store.search_expenses("comida").await;
    assert!(found.is_empty());
    assert!(matches!(
        HttpTransport::new(format!("http://{}/api", addr))
            .execute(ApiRequest::get("/expenses"))
            .await,
        NetworkResponse::Error { status: None, .. }
    ));
}
