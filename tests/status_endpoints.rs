//! Status endpoint responses.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use demo_caller::config::ServiceConfig;
use demo_caller::http::HttpServer;
use demo_caller::lifecycle::Shutdown;

async fn get_json(config: ServiceConfig, uri: &str) -> (StatusCode, Value) {
    let router = HttpServer::new(Arc::new(config)).router();
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn scenario_config() -> ServiceConfig {
    ServiceConfig::from_lookup(|key| match key {
        "SERVICE_NAME" => Some("svcA".to_string()),
        "TARGETS" => Some("host1:9000,host2:9000".to_string()),
        "INTERVALS" => Some("2".to_string()),
        _ => None,
    })
    .unwrap()
}

#[tokio::test]
async fn test_health_reports_service_name() {
    let (status, body) = get_json(scenario_config(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "service": "svcA"}));
}

#[tokio::test]
async fn test_info_echoes_configuration() {
    let (status, body) = get_json(scenario_config(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "service": "svcA",
            "message": "Hello from svcA!",
            "targets": ["host1:9000", "host2:9000"],
            "intervals": [2]
        })
    );
}

#[tokio::test]
async fn test_info_keeps_empty_targets_and_order() {
    let mut config = ServiceConfig::default();
    config.targets = vec!["b:2".into(), "".into(), "a:1".into()];
    config.intervals = vec![30, 5];

    let (_, body) = get_json(config, "/").await;
    assert_eq!(body["targets"], json!(["b:2", "", "a:1"]));
    assert_eq!(body["intervals"], json!([30, 5]));
}

#[tokio::test]
async fn test_defaults_when_environment_is_empty() {
    let config = ServiceConfig::from_lookup(|_| None).unwrap();
    let (_, body) = get_json(config, "/").await;
    assert_eq!(
        body,
        json!({
            "service": "unknown",
            "message": "Hello from unknown!",
            "targets": [],
            "intervals": [60]
        })
    );
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, _) = get_json(ServiceConfig::default(), "/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_over_tcp_with_unreachable_targets() {
    let mut config = ServiceConfig::default();
    config.service_name = "lonely".to_string();
    config.targets = vec!["127.0.0.1:1".to_string()];
    config.intervals = vec![1];
    let config = Arc::new(config);

    let shutdown = Shutdown::new();
    let _pollers = demo_caller::PollerPool::from_config(&config).start(&shutdown);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config);
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();
    let res = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .expect("Server unreachable");
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["service"], "lonely");

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(2), server_task)
        .await
        .expect("Server should stop on shutdown")
        .unwrap()
        .unwrap();
}
