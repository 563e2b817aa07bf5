use page_inspector::{ChatBackend, ChatClient, ChatEntry, ChatOptions, Inspector, InspectorError, PromptStyle,
                     StaticPage};
use std::{io::Read, net::TcpListener, sync::mpsc, thread, time::Duration};
use tiny_http::{Response, Server, StatusCode};

/// What the stub endpoint saw
struct Captured {
    method: String,
    authorization: Option<String>,
    body: serde_json::Value,
}

/// Serve a single request with a canned status and body
fn stub_endpoint(status: u16, body: &'static str) -> (String, mpsc::Receiver<Captured>) {
    let server = Server::http("127.0.0.1:0").expect("Failed to bind stub server");
    let port = server
        .server_addr()
        .to_ip()
        .expect("Stub server has no IP address")
        .port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok(mut request) = server.recv() else {
            return;
        };

        let mut raw = String::new();
        let _ = request.as_reader().read_to_string(&mut raw);

        let authorization = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("Authorization"))
            .map(|h| h.value.as_str().to_string());

        let _ = tx.send(Captured {
            method: request.method().to_string(),
            authorization,
            body: serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null),
        });

        let _ = request.respond(Response::from_string(body).with_status_code(StatusCode(status)));
    });

    (format!("http://127.0.0.1:{}/openai/v1/chat/completions", port), rx)
}

fn client(endpoint: &str) -> ChatClient {
    ChatClient::new(
        ChatOptions::new()
            .endpoint(endpoint)
            .api_key("test-key")
            .timeout(Duration::from_secs(10)),
    )
    .expect("Failed to build client")
}

const ANSWER: &str = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"North sold 120."}}]}"#;

#[test]
fn test_server_error_is_a_failure() {
    let (endpoint, _rx) = stub_endpoint(500, r#"{"error":{"message":"model overloaded"}}"#);

    let err = client(&endpoint).ask("context", "question").unwrap_err();
    match err {
        InspectorError::ChatStatus { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("model overloaded"));
        }
        other => panic!("Expected ChatStatus, got {:?}", other),
    }
}

#[test]
fn test_successful_answer_and_request_shape() {
    let (endpoint, rx) = stub_endpoint(200, ANSWER);
    let client = ChatClient::new(
        ChatOptions::new()
            .endpoint(&endpoint)
            .api_key("test-key")
            .model("test-model")
            .temperature(0.5),
    )
    .unwrap();

    let answer = client.ask("| Region | Units |", "Who sold most?").unwrap();
    assert_eq!(answer, "North sold 120.");

    let captured = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(captured.method, "POST");
    assert_eq!(captured.authorization.as_deref(), Some("Bearer test-key"));
    assert_eq!(captured.body["model"], "test-model");
    assert_eq!(captured.body["temperature"], 0.5);
    assert_eq!(captured.body["stream"], false);
    assert_eq!(captured.body["messages"][0]["role"], "system");
    assert_eq!(
        captured.body["messages"][0]["content"],
        "Answer ONLY from the webpage content below:\n| Region | Units |"
    );
    assert_eq!(captured.body["messages"][1]["role"], "user");
    assert_eq!(captured.body["messages"][1]["content"], "Who sold most?");
}

#[test]
fn test_split_roles_prompt() {
    let (endpoint, rx) = stub_endpoint(200, ANSWER);
    let client = ChatClient::new(
        ChatOptions::new()
            .endpoint(&endpoint)
            .api_key("test-key")
            .prompt_style(PromptStyle::SplitRoles),
    )
    .unwrap();

    client.ask("ctx", "q").unwrap();

    let captured = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(captured.body["messages"][1]["content"], "Context:\nctx\n\nQuestion:\nq");
    assert_eq!(captured.body["temperature"], 0.7);
}

#[test]
fn test_temperature_can_be_left_to_the_endpoint() {
    let (endpoint, rx) = stub_endpoint(200, ANSWER);
    let client = ChatClient::new(
        ChatOptions::new()
            .endpoint(&endpoint)
            .api_key("test-key")
            .without_temperature(),
    )
    .unwrap();

    client.ask("ctx", "q").unwrap();

    let captured = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(captured.body.get("temperature").is_none());
}

#[test]
fn test_success_without_answer_is_a_failure() {
    let (endpoint, _rx) = stub_endpoint(200, r#"{"choices":[]}"#);

    let err = client(&endpoint).ask("context", "question").unwrap_err();
    assert!(matches!(err, InspectorError::ChatResponse(_)));
}

#[test]
fn test_unreachable_endpoint_is_a_failure() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = client(&format!("http://127.0.0.1:{}/v1/chat/completions", port))
        .ask("context", "question")
        .unwrap_err();
    assert!(matches!(err, InspectorError::ChatRequest(_)));
}

#[test]
fn test_shell_shows_server_error_in_chat_log() {
    let (endpoint, _rx) = stub_endpoint(500, "internal error");
    let mut inspector = Inspector::new(
        Box::new(StaticPage::from_document("<p>Some page</p>")),
        Some(Box::new(client(&endpoint))),
    );
    inspector.load_url("https://page.test/").unwrap();

    let entry = inspector.submit_chat("What is here?").unwrap().clone();
    assert!(matches!(entry, ChatEntry::Error(ref msg) if msg.contains("500")));
    assert_eq!(inspector.chat_log().len(), 2);
    assert_eq!(
        inspector.chat_log().entries()[0],
        ChatEntry::Question("What is here?".to_string())
    );
}
