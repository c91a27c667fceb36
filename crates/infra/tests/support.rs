//! Shared fixtures for FauxAPI integration tests
#![allow(dead_code)]

use std::sync::Once;

use fauxapi_common::auth::TokenSigner;
use fauxapi_infra::api::ApiClient;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

pub const KEY: &str = "PFFAValidItem1";
pub const SECRET: &str = "0123456789012345678901234567890123456789";

/// Route client logs to the test harness; `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn signer() -> TokenSigner {
    TokenSigner::new(KEY, SECRET).expect("test credential is valid")
}

/// A successful envelope wrapping `data`
pub fn ok_envelope(action: &str, data: Value) -> Value {
    json!({
        "callid": "5e5a8c3e71c4d",
        "action": action,
        "message": "ok",
        "data": data
    })
}

/// Matches requests whose `fauxapi-auth` header validates for the signer.
pub struct SignedBy(pub TokenSigner);

impl Match for SignedBy {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("fauxapi-auth")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|token| self.0.validate_token(token))
    }
}

/// Start a device that answers `api_version` with `version`, or 404 when
/// `None`.
pub async fn start_device(version: Option<&str>) -> MockServer {
    init_tracing();
    let server = MockServer::start().await;

    let template = match version {
        Some(version) => ResponseTemplate::new(200)
            .set_body_json(ok_envelope("api_version", json!({ "version": version }))),
        None => ResponseTemplate::new(404),
    };
    Mock::given(method("GET"))
        .and(query_param("action", "api_version"))
        .respond_with(template)
        .mount(&server)
        .await;

    server
}

/// Connect to a local mock device, bypassing any proxy settings
pub async fn connect(server: &MockServer) -> ApiClient {
    ApiClient::builder()
        .base_url(server.uri())
        .signer(signer())
        .no_proxy(true)
        .connect()
        .await
        .expect("client should connect")
}

/// Query strings of every request for `action`, in arrival order
pub async fn queries_for(server: &MockServer, action: &str) -> Vec<String> {
    let marker = format!("action={action}");
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter_map(|request| request.url.query().map(str::to_string))
        .filter(|query| query.split('&').next() == Some(marker.as_str()))
        .collect()
}
